//! Interactive dashboard.
//!
//! `DashboardApp` owns the engine's `AnalyticsState` plus the UI-only state
//! (focus, cursors, last status message). Every key press is one state
//! transition followed by a fresh `present_screen`; the widgets only read
//! the resulting `TuiScreenViewModel`.

use std::io;
use std::time::Duration;

use anyhow::Result;
use brandflow_engine::{AnalyticsState, PeriodPreset};
use brandflow_types::StoreScope;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use tracing::debug;

use crate::presentation::presenters::present_screen;
use crate::presentation::view_models::{Focus, StatusLevel, TuiScreenViewModel};
use crate::presentation::views::tui::{
    ChartView, ChipBarView, HeaderView, MetricCardsView, ProductTableView, StatusBarView,
};

const FALLBACK_WIDTH: u16 = 120;

pub struct DashboardApp {
    state: AnalyticsState,
    today: NaiveDate,

    /// UI State: region receiving cursor keys
    focus: Focus,
    metric_cursor: usize,
    row_cursor: usize,
    status: Option<(StatusLevel, String)>,
    width: u16,
    should_quit: bool,

    screen: TuiScreenViewModel,
}

impl DashboardApp {
    pub fn new(state: AnalyticsState, today: NaiveDate) -> Self {
        let screen = present_screen(&state, today, chip_row_width(FALLBACK_WIDTH), None);
        Self {
            state,
            today,
            focus: Focus::default(),
            metric_cursor: 0,
            row_cursor: 0,
            status: None,
            width: FALLBACK_WIDTH,
            should_quit: false,
            screen,
        }
    }

    pub fn state(&self) -> &AnalyticsState {
        &self.state
    }

    pub fn screen(&self) -> &TuiScreenViewModel {
        &self.screen
    }

    /// Set up the terminal, run until quit, restore the terminal
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.resize(terminal.size()?.width);
        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Resize(width, _) => self.resize(width),
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn resize(&mut self, width: u16) {
        self.width = width;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.screen = present_screen(
            &self.state,
            self.today,
            chip_row_width(self.width),
            self.status.clone(),
        );
        self.metric_cursor = clamp_cursor(self.metric_cursor, self.screen.cards.len());
        self.row_cursor = clamp_cursor(self.row_cursor, self.screen.table.rows.len());
    }

    fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status = Some((level, message.into()));
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
            }
            KeyCode::Char('m') => {
                self.state.cycle_mode();
                self.set_status(
                    StatusLevel::Info,
                    format!("Mode: {}", self.state.mode().label()),
                );
            }
            KeyCode::Char('f') => {
                self.state.chip_overflow_mut().toggle();
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
                self.move_cursor(-1);
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
                self.move_cursor(1);
            }
            KeyCode::Char(' ') => self.toggle_at_cursor(),
            KeyCode::Char('a') => {
                self.state.table_mut().toggle_all();
                let count = self.state.table().selected_ids().len();
                self.set_status(StatusLevel::Info, format!("{} product(s) selected", count));
            }
            KeyCode::Char('s') => {
                let scope = next_scope(self.state.table().scope());
                self.state.set_store_scope(scope);
                self.set_status(StatusLevel::Info, format!("Score scope: {}", scope));
            }
            KeyCode::Char('p') => {
                let preset = next_preset(self.state.period().preset());
                self.state.period_mut().select(preset);
                self.set_status(StatusLevel::Info, format!("Period: {}", preset));
            }
            _ => return,
        }

        debug!(code = ?key.code, "dashboard key handled");
        self.refresh();
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.focus {
            Focus::Metrics => (&mut self.metric_cursor, self.screen.cards.len()),
            Focus::Table => (&mut self.row_cursor, self.screen.table.rows.len()),
        };
        if len == 0 {
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn toggle_at_cursor(&mut self) {
        match self.focus {
            Focus::Metrics => {
                let Some(card) = self.screen.cards.get(self.metric_cursor) else {
                    return;
                };
                let (id, label) = (card.id.clone(), card.label.clone());
                self.state.metrics_mut().toggle_chart_visibility(&id);
                let shown = self.state.metrics().is_chart_visible(&id);
                self.set_status(
                    StatusLevel::Info,
                    format!("{} {}", label, if shown { "plotted" } else { "hidden" }),
                );
            }
            Focus::Table => {
                let Some(row) = self.screen.table.rows.get(self.row_cursor) else {
                    return;
                };
                let id = row.id;
                self.state.table_mut().toggle_product(id);
                let count = self.state.table().selected_ids().len();
                self.set_status(StatusLevel::Info, format!("{} product(s) selected", count));
            }
        }
    }

    fn render(&self, f: &mut Frame) {
        let screen = &self.screen;
        let chip_rows = if self.state.chip_overflow().expanded { 4 } else { 3 };

        let chunks = Layout::vertical([
            Constraint::Length(3),         // Header
            Constraint::Length(chip_rows), // Filter chips
            Constraint::Length(4),         // Metric cards
            Constraint::Length(10),        // Trend chart
            Constraint::Min(6),            // Product table
            Constraint::Length(3),         // Status bar
        ])
        .split(f.area());

        f.render_widget(HeaderView::new(&screen.header), chunks[0]);
        f.render_widget(ChipBarView::new(&screen.chips), chunks[1]);

        let metric_cursor = (self.focus == Focus::Metrics).then_some(self.metric_cursor);
        f.render_widget(MetricCardsView::new(&screen.cards, metric_cursor), chunks[2]);
        f.render_widget(ChartView::new(&screen.chart), chunks[3]);

        let row_cursor = (self.focus == Focus::Table).then_some(self.row_cursor);
        f.render_widget(ProductTableView::new(&screen.table, row_cursor), chunks[4]);

        f.render_widget(StatusBarView::new(&screen.status_bar, self.focus), chunks[5]);
    }
}

/// Width left for chips inside the bordered filter bar
fn chip_row_width(terminal_width: u16) -> u16 {
    terminal_width.saturating_sub(2)
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

fn next_scope(scope: StoreScope) -> StoreScope {
    match scope {
        StoreScope::Amazon => StoreScope::Shopify,
        StoreScope::Shopify => StoreScope::Both,
        StoreScope::Both => StoreScope::Amazon,
    }
}

fn next_preset(current: Option<PeriodPreset>) -> PeriodPreset {
    let all = PeriodPreset::ALL;
    match current.and_then(|p| all.iter().position(|a| *a == p)) {
        Some(idx) => all[(idx + 1) % all.len()],
        None => all[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::AccountMode;
    use crossterm::event::KeyModifiers;

    fn app() -> DashboardApp {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        DashboardApp::new(AnalyticsState::new(AccountMode::Seller), today)
    }

    fn press(app: &mut DashboardApp, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_mode_key_cycles_account_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.state().mode(), AccountMode::Vendor);
        assert_eq!(app.screen().header.mode, "Vendor");
        assert_eq!(app.screen().status_bar.message, "Mode: Vendor");
    }

    #[test]
    fn test_space_in_table_selects_row_under_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));

        let id = app.screen().table.rows[1].id;
        assert!(app.state().table().is_selected(id));
        assert_eq!(app.screen().status_bar.selected_products, 1);
    }

    #[test]
    fn test_space_on_card_toggles_chart_visibility() {
        let mut app = app();
        let id = app.screen().cards[0].id.clone();
        assert!(app.state().metrics().is_chart_visible(&id));

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.state().metrics().is_chart_visible(&id));
        assert!(!app.screen().cards[0].chart_visible);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.metric_cursor, 0);
        for _ in 0..20 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.metric_cursor, app.screen().cards.len() - 1);
    }

    #[test]
    fn test_store_and_period_keys_cycle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state().table().scope(), StoreScope::Amazon);
        assert_eq!(app.screen().table.score_label, "APS");

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.state().period().preset(), Some(PeriodPreset::Last90Days));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
