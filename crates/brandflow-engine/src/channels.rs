use brandflow_types::{AccountMode, Channel, GroupBy};
use serde::Serialize;
use tracing::debug;

/// Marketplace storefronts of the account
pub const STORES: [&str; 3] = ["Karaca Porcelain - US", "KARACA - UK", "KARACA - DE"];

/// Active sales channels; never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSelection {
    channels: Vec<Channel>,
}

impl Default for ChannelSelection {
    fn default() -> Self {
        Self {
            channels: vec![Channel::Amazon],
        }
    }
}

impl ChannelSelection {
    /// Empty input falls back to the default channel
    pub fn new(channels: Vec<Channel>) -> Self {
        let mut selection = Self::default();
        if !channels.is_empty() {
            selection.channels.clear();
            for channel in channels {
                if !selection.channels.contains(&channel) {
                    selection.channels.push(channel);
                }
            }
        }
        selection
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }

    /// Add or remove a channel. Removing the last one is refused.
    pub fn toggle(&mut self, channel: Channel) -> bool {
        match self.channels.iter().position(|c| *c == channel) {
            Some(_) if self.channels.len() == 1 => {
                debug!(?channel, "last channel kept");
                false
            }
            Some(idx) => {
                self.channels.remove(idx);
                true
            }
            None => {
                self.channels.push(channel);
                true
            }
        }
    }
}

/// Store picker with an implicit "all stores" state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreSelection {
    /// Empty means all stores
    picked: Vec<&'static str>,
}

impl StoreSelection {
    pub fn is_all(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn picked(&self) -> &[&'static str] {
        &self.picked
    }

    pub fn select_all(&mut self) {
        self.picked.clear();
    }

    /// Toggle a store by name. Deselecting the last picked store returns to
    /// "all". Unknown names are ignored.
    pub fn toggle(&mut self, store: &str) -> bool {
        let Some(name) = STORES.iter().copied().find(|s| *s == store) else {
            return false;
        };
        match self.picked.iter().position(|s| *s == name) {
            Some(idx) => {
                self.picked.remove(idx);
            }
            None => self.picked.push(name),
        }
        true
    }

    pub fn count(&self) -> usize {
        if self.is_all() {
            STORES.len()
        } else {
            self.picked.len()
        }
    }

    /// Button text: "All Stores", the single store, or "N Stores"
    pub fn label(&self) -> String {
        match self.picked.as_slice() {
            [] => "All Stores".to_string(),
            [only] => only.to_string(),
            many => format!("{} Stores", many.len()),
        }
    }

    pub fn count_label(&self) -> String {
        format!("({}/{})", self.count(), STORES.len())
    }
}

/// Grouping choices for the account mode; SKU grouping is seller-only
pub fn group_by_options(mode: AccountMode) -> Vec<GroupBy> {
    GroupBy::ALL
        .into_iter()
        .filter(|g| mode == AccountMode::Seller || *g != GroupBy::Sku)
        .collect()
}

/// Keep the grouping if the mode offers it, otherwise fall back to ASIN
pub fn clamp_group_by(mode: AccountMode, current: GroupBy) -> GroupBy {
    if group_by_options(mode).contains(&current) {
        current
    } else {
        GroupBy::Asin
    }
}
