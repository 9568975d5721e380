use brandflow_types::{
    DateOperator, Error, FilterType, FilterValue, MatchMode, NumberOperator, Result,
};

use super::FilterBar;

/// Draft editing. Every method is a no-op when no draft is open or when the
/// draft's type does not match the edit.
impl FilterBar {
    /// Options of the draft's multi filter that match the option search
    pub fn visible_options(&self) -> Vec<&'static str> {
        let Some(def) = self.draft.as_ref().and_then(|d| self.definition(&d.key)) else {
            return Vec::new();
        };
        if def.filter_type != FilterType::Multi {
            return Vec::new();
        }
        let needle = self.option_search.to_lowercase();
        def.options
            .iter()
            .copied()
            .filter(|opt| opt.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn toggle_option(&mut self, option: &str) {
        if let Some(FilterValue::Multi { values, .. }) = self.draft_value_mut() {
            match values.iter().position(|v| v == option) {
                Some(idx) => {
                    values.remove(idx);
                }
                None => values.push(option.to_string()),
            }
        }
    }

    /// Select every option of the filter, ignoring the option search
    pub fn select_all_options(&mut self) {
        let options = match self.draft.as_ref().and_then(|d| self.definition(&d.key)) {
            Some(def) => def.options,
            None => return,
        };
        if let Some(FilterValue::Multi { values, .. }) = self.draft_value_mut() {
            *values = options.iter().map(|o| o.to_string()).collect();
        }
    }

    pub fn clear_options(&mut self) {
        if let Some(FilterValue::Multi { values, .. }) = self.draft_value_mut() {
            values.clear();
        }
    }

    pub fn set_match(&mut self, mode: MatchMode) {
        if let Some(FilterValue::Multi { match_mode, .. }) = self.draft_value_mut() {
            *match_mode = mode;
        }
    }

    /// Change the operator from its phrase. `value2` survives only when the
    /// new operator is `between`.
    pub fn set_operator(&mut self, phrase: &str) -> Result<()> {
        match self.draft_value_mut() {
            Some(FilterValue::Number {
                operator, value2, ..
            }) => {
                let next: NumberOperator = phrase.parse()?;
                if !next.is_between() {
                    value2.clear();
                }
                *operator = next;
                Ok(())
            }
            Some(FilterValue::Date {
                operator, value2, ..
            }) => {
                let next: DateOperator = phrase.parse()?;
                if !next.is_between() {
                    value2.clear();
                }
                *operator = next;
                Ok(())
            }
            Some(_) => Err(Error::UnknownOperator(phrase.to_string())),
            None => Ok(()),
        }
    }

    pub fn set_value1(&mut self, input: impl Into<String>) {
        match self.draft_value_mut() {
            Some(FilterValue::Number { value1, .. })
            | Some(FilterValue::Date { value1, .. })
            | Some(FilterValue::Text { value1 }) => *value1 = input.into(),
            _ => {}
        }
    }

    pub fn set_value2(&mut self, input: impl Into<String>) {
        match self.draft_value_mut() {
            Some(FilterValue::Number { value2, .. }) | Some(FilterValue::Date { value2, .. }) => {
                *value2 = input.into()
            }
            _ => {}
        }
    }

    pub fn set_text(&mut self, input: impl Into<String>) {
        if let Some(FilterValue::Text { value1 }) = self.draft_value_mut() {
            *value1 = input.into();
        }
    }

    /// Match Any / Match All is offered for tag lists with two or more tags
    pub fn shows_match_controls(&self) -> bool {
        match &self.draft {
            Some(draft) => draft.key == "tagList" && draft.value.selected().len() >= 2,
            None => false,
        }
    }

    /// Preview line such as "Best Seller OR Discounted OR New Arrival OR +1 more..."
    pub fn match_preview(&self) -> Option<String> {
        if !self.shows_match_controls() {
            return None;
        }
        let draft = self.draft.as_ref()?;
        let FilterValue::Multi { values, match_mode } = &draft.value else {
            return None;
        };
        let sep = format!(" {} ", match_mode.connective());
        let mut parts: Vec<String> = values.iter().take(3).cloned().collect();
        if values.len() > 3 {
            parts.push(format!("+{} more...", values.len() - 3));
        }
        Some(parts.join(&sep))
    }

    fn draft_value_mut(&mut self) -> Option<&mut FilterValue> {
        self.draft.as_mut().map(|d| &mut d.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::AccountMode;

    fn editing(key: &str) -> FilterBar {
        let mut bar = FilterBar::with_applied(AccountMode::Seller, Vec::new());
        bar.open_add_filter();
        bar.select_filter(key);
        bar
    }

    #[test]
    fn option_search_is_case_insensitive() {
        let mut bar = editing("activePackageTypes");
        bar.set_option_search("AMAZON");
        assert_eq!(
            bar.visible_options(),
            vec!["Amazon - Advertising Managed", "Amazon - DSP", "Amazon - Full Service"]
        );
    }

    #[test]
    fn select_all_ignores_search() {
        let mut bar = editing("status");
        bar.set_option_search("act");
        bar.select_all_options();
        assert_eq!(bar.draft().unwrap().value.selected().len(), 3);
        bar.clear_options();
        assert!(bar.draft().unwrap().value.selected().is_empty());
    }

    #[test]
    fn toggle_option_adds_and_removes() {
        let mut bar = editing("tagList");
        bar.toggle_option("Best Seller");
        bar.toggle_option("Discounted");
        bar.toggle_option("Best Seller");
        assert_eq!(bar.draft().unwrap().value.selected(), ["Discounted"]);
    }

    #[test]
    fn operator_change_keeps_value2_only_for_between() {
        let mut bar = editing("price");
        bar.set_operator("between").unwrap();
        bar.set_value1("10");
        bar.set_value2("50");
        bar.set_operator("between").unwrap();
        assert_eq!(
            bar.draft().unwrap().value,
            FilterValue::number(NumberOperator::Between, "10", "50")
        );

        bar.set_operator("less than").unwrap();
        assert_eq!(
            bar.draft().unwrap().value,
            FilterValue::number(NumberOperator::LessThan, "10", "")
        );
    }

    #[test]
    fn operator_must_fit_filter_type() {
        let mut bar = editing("trialEndTime");
        assert!(bar.set_operator("greater than").is_err());
        bar.set_operator("after").unwrap();

        let mut text = editing("productName");
        assert!(text.set_operator("equals").is_err());
    }

    #[test]
    fn match_controls_need_two_tags() {
        let mut bar = editing("tagList");
        bar.toggle_option("Best Seller");
        assert!(!bar.shows_match_controls());
        bar.toggle_option("High Rated");
        assert!(bar.shows_match_controls());

        let mut status = editing("status");
        status.select_all_options();
        assert!(!status.shows_match_controls());
    }

    #[test]
    fn match_preview_joins_first_three() {
        let mut bar = editing("tagList");
        bar.select_all_options();
        assert_eq!(
            bar.match_preview().unwrap(),
            "Best Seller OR High Rated OR Discounted OR +1 more..."
        );
        bar.set_match(MatchMode::All);
        bar.toggle_option("New Arrival");
        assert_eq!(
            bar.match_preview().unwrap(),
            "Best Seller AND High Rated AND Discounted"
        );
    }
}
