//! Application state management for the trip day planner
//!
//! This module holds the trip manager, tracks which pane has focus,
//! translates key events into state changes, and queues the network-backed
//! actions the main loop awaits between renders.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::error;

use crate::cli::StartupConfig;
use crate::data::{all_attractions, DaysClient};
use crate::day::PanelFactory;
use crate::trip::TripManager;

/// Application state enum representing the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while the trip's days are fetched
    Loading,
    /// Main itinerary view with day tabs, catalog, and current day
    Itinerary,
}

/// Which pane receives selection keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The attraction catalog on the left
    Catalog,
    /// The current day's itinerary on the right
    Day,
}

/// A network-backed action requested by a key press
///
/// Key handling is synchronous; the main loop takes the pending action and
/// awaits it between renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Create a new day at the end of the trip and display it
    AddDay,
    /// Delete the current day and display its neighbor
    DeleteCurrentDay,
}

/// Main application struct managing state and the trip collection
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// The trip's day collection and current-day pointer
    pub trip: TripManager<PanelFactory>,
    /// Which pane selection keys act on
    pub focus: Focus,
    /// Selected row in the attraction catalog
    pub catalog_index: usize,
    /// Selected row in the current day's attraction list
    pub day_index: usize,
    /// Calendar date of day 1, used for display only
    pub start_date: Option<NaiveDate>,
    /// Network action requested by the last key press, if any
    pub pending_action: Option<PendingAction>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
}

impl App {
    /// Creates a new App instance from the startup configuration
    pub fn new(config: StartupConfig) -> Self {
        let client = DaysClient::new(config.server);
        Self {
            state: AppState::Loading,
            trip: TripManager::new(client, PanelFactory),
            focus: Focus::Catalog,
            catalog_index: 0,
            day_index: 0,
            start_date: config.start_date,
            pending_action: None,
            should_quit: false,
            show_help: false,
        }
    }

    /// Fetch the trip's days and enter the itinerary view
    ///
    /// A failed load is reported to the log and leaves the collection
    /// empty; the itinerary view then shows a trip without days.
    pub async fn load_days(&mut self) {
        if let Err(err) = self.trip.load().await {
            error!(error = %err, "failed to load trip days");
        }
        self.state = AppState::Itinerary;
    }

    /// Take the queued network action, if any
    pub fn take_pending_action(&mut self) -> Option<PendingAction> {
        self.pending_action.take()
    }

    /// Run a network-backed action, logging and swallowing failures
    ///
    /// The collection only changes after the server confirms, so a failure
    /// leaves the view in its last-known-good state.
    pub async fn run_action(&mut self, action: PendingAction) {
        let result = match action {
            PendingAction::AddDay => self.trip.create_day().await,
            PendingAction::DeleteCurrentDay => self.trip.delete_current_day().await,
        };
        if let Err(err) = result {
            error!(error = %err, ?action, "day operation failed");
        }
        self.clamp_day_selection();
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q`: Quit the application
    /// - `?`: Toggle the help overlay (intercepts all keys while shown)
    /// - `Left`/`h`, `Right`/`l`: Switch to the previous/next day
    /// - `a`: Add a day to the end of the trip
    /// - `x`: Delete the current day
    /// - `Tab`: Toggle focus between catalog and day panes
    /// - `Up`/`k`, `Down`/`j`: Move the focused selection
    /// - `Enter` (catalog focused): Add selected attraction to current day
    /// - `r`/`Delete`/`Backspace` (day focused): Remove selected attraction
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Handle help overlay - intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {} // Ignore other keys when help is shown
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Itinerary => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    self.switch_day_prev();
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.switch_day_next();
                }
                KeyCode::Char('a') => {
                    self.pending_action = Some(PendingAction::AddDay);
                }
                KeyCode::Char('x') => {
                    self.pending_action = Some(PendingAction::DeleteCurrentDay);
                }
                KeyCode::Tab => {
                    self.toggle_focus();
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Enter => {
                    self.add_selected_attraction();
                }
                KeyCode::Char('r') | KeyCode::Delete | KeyCode::Backspace => {
                    self.remove_selected_attraction();
                }
                _ => {}
            },
        }
    }

    /// Switches the display to the previous day, wrapping at the front
    fn switch_day_prev(&mut self) {
        let count = self.trip.days().len();
        let Some(current) = self.trip.current_index() else {
            return;
        };
        if count == 0 {
            return;
        }
        let target = if current == 0 { count - 1 } else { current - 1 };
        self.trip.switch_to(target);
        self.day_index = 0;
    }

    /// Switches the display to the next day, wrapping at the end
    fn switch_day_next(&mut self) {
        let count = self.trip.days().len();
        let Some(current) = self.trip.current_index() else {
            return;
        };
        if count == 0 {
            return;
        }
        self.trip.switch_to((current + 1) % count);
        self.day_index = 0;
    }

    /// Toggles which pane selection keys act on
    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Catalog => Focus::Day,
            Focus::Day => Focus::Catalog,
        };
    }

    /// Moves the focused selection up, wrapping to the bottom if at the top
    fn move_selection_up(&mut self) {
        let (index, count) = match self.focus {
            Focus::Catalog => (&mut self.catalog_index, all_attractions().len()),
            Focus::Day => {
                let count = self
                    .trip
                    .current_day()
                    .map(|day| day.attractions().len())
                    .unwrap_or(0);
                (&mut self.day_index, count)
            }
        };
        if count == 0 {
            return;
        }
        if *index == 0 {
            *index = count - 1;
        } else {
            *index -= 1;
        }
    }

    /// Moves the focused selection down, wrapping to the top if at the bottom
    fn move_selection_down(&mut self) {
        let (index, count) = match self.focus {
            Focus::Catalog => (&mut self.catalog_index, all_attractions().len()),
            Focus::Day => {
                let count = self
                    .trip
                    .current_day()
                    .map(|day| day.attractions().len())
                    .unwrap_or(0);
                (&mut self.day_index, count)
            }
        };
        if count == 0 {
            return;
        }
        *index = (*index + 1) % count;
    }

    /// Adds the catalog selection to the current day
    fn add_selected_attraction(&mut self) {
        if self.focus != Focus::Catalog {
            return;
        }
        if let Some(attraction) = all_attractions().get(self.catalog_index) {
            self.trip.add_to_current(*attraction);
        }
    }

    /// Removes the day-pane selection from the current day
    fn remove_selected_attraction(&mut self) {
        if self.focus != Focus::Day {
            return;
        }
        let Some(attraction) = self
            .trip
            .current_day()
            .and_then(|day| day.attractions().get(self.day_index))
            .copied()
        else {
            return;
        };
        self.trip.remove_from_current(&attraction);
        self.clamp_day_selection();
    }

    /// Keeps the day-pane selection inside the current attraction list
    fn clamp_day_selection(&mut self) {
        let count = self
            .trip
            .current_day()
            .map(|day| day.attractions().len())
            .unwrap_or(0);
        if count == 0 {
            self.day_index = 0;
        } else if self.day_index >= count {
            self.day_index = count - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(StartupConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DayRecord;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// App pointed at a closed loopback port, already in the itinerary view
    fn itinerary_app() -> App {
        let mut app = App::new(StartupConfig {
            server: "http://127.0.0.1:9".to_string(),
            ..StartupConfig::default()
        });
        app.state = AppState::Itinerary;
        app
    }

    fn record(id: u64, number: u32) -> DayRecord {
        DayRecord { id, number }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let app = App::default();
        assert_eq!(app.state, AppState::Loading);
        assert_eq!(app.focus, Focus::Catalog);
        assert_eq!(app.catalog_index, 0);
        assert!(!app.should_quit);
        assert!(app.pending_action.is_none());
        assert!(app.trip.days().is_empty());
    }

    #[test]
    fn test_q_quits_from_loading() {
        let mut app = App::default();
        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_other_keys_ignored_during_loading() {
        let mut app = App::default();

        app.handle_key(key_event(KeyCode::Char('a')));
        assert!(app.pending_action.is_none());

        app.handle_key(key_event(KeyCode::Down));
        assert_eq!(app.catalog_index, 0);
    }

    #[test]
    fn test_q_and_esc_quit_from_itinerary() {
        let mut app = itinerary_app();
        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = itinerary_app();
        app.handle_key(key_event(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_toggles_and_intercepts() {
        let mut app = itinerary_app();

        app.handle_key(key_event(KeyCode::Char('?')));
        assert!(app.show_help);

        // Keys other than the close keys are swallowed
        app.handle_key(key_event(KeyCode::Char('a')));
        assert!(app.pending_action.is_none());
        assert!(app.show_help);

        app.handle_key(key_event(KeyCode::Esc));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_a_requests_add_day() {
        let mut app = itinerary_app();
        app.handle_key(key_event(KeyCode::Char('a')));
        assert_eq!(app.pending_action, Some(PendingAction::AddDay));
    }

    #[test]
    fn test_x_requests_delete_current_day() {
        let mut app = itinerary_app();
        app.handle_key(key_event(KeyCode::Char('x')));
        assert_eq!(app.pending_action, Some(PendingAction::DeleteCurrentDay));
    }

    #[test]
    fn test_take_pending_action_clears_it() {
        let mut app = itinerary_app();
        app.handle_key(key_event(KeyCode::Char('a')));

        assert_eq!(app.take_pending_action(), Some(PendingAction::AddDay));
        assert_eq!(app.take_pending_action(), None);
    }

    #[test]
    fn test_tab_toggles_focus() {
        let mut app = itinerary_app();
        assert_eq!(app.focus, Focus::Catalog);

        app.handle_key(key_event(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Day);

        app.handle_key(key_event(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Catalog);
    }

    #[test]
    fn test_catalog_navigation_wraps() {
        let mut app = itinerary_app();
        let count = all_attractions().len();

        app.handle_key(key_event(KeyCode::Up));
        assert_eq!(app.catalog_index, count - 1, "Should wrap to bottom");

        app.handle_key(key_event(KeyCode::Down));
        assert_eq!(app.catalog_index, 0, "Should wrap to top");

        app.handle_key(key_event(KeyCode::Char('j')));
        assert_eq!(app.catalog_index, 1);

        app.handle_key(key_event(KeyCode::Char('k')));
        assert_eq!(app.catalog_index, 0);
    }

    #[test]
    fn test_enter_adds_selected_attraction_to_current_day() {
        let mut app = itinerary_app();
        app.trip.add_day(record(1, 1));
        app.catalog_index = 2;

        app.handle_key(key_event(KeyCode::Enter));

        let day = app.trip.current_day().unwrap();
        assert_eq!(day.attractions().len(), 1);
        assert_eq!(day.attractions()[0].id, all_attractions()[2].id);
    }

    #[test]
    fn test_enter_with_day_focus_adds_nothing() {
        let mut app = itinerary_app();
        app.trip.add_day(record(1, 1));
        app.focus = Focus::Day;

        app.handle_key(key_event(KeyCode::Enter));

        assert!(app.trip.current_day().unwrap().attractions().is_empty());
    }

    #[test]
    fn test_r_removes_selected_attraction_from_current_day() {
        let mut app = itinerary_app();
        app.trip.add_day(record(1, 1));
        app.handle_key(key_event(KeyCode::Enter));
        assert_eq!(app.trip.current_day().unwrap().attractions().len(), 1);

        app.focus = Focus::Day;
        app.handle_key(key_event(KeyCode::Char('r')));

        assert!(app.trip.current_day().unwrap().attractions().is_empty());
        assert_eq!(app.day_index, 0);
    }

    #[test]
    fn test_remove_with_catalog_focus_removes_nothing() {
        let mut app = itinerary_app();
        app.trip.add_day(record(1, 1));
        app.handle_key(key_event(KeyCode::Enter));

        app.handle_key(key_event(KeyCode::Char('r')));

        assert_eq!(app.trip.current_day().unwrap().attractions().len(), 1);
    }

    #[test]
    fn test_left_right_switch_days_with_wrap() {
        let mut app = itinerary_app();
        app.trip.add_day(record(1, 1));
        app.trip.add_day(record(2, 2));
        app.trip.add_day(record(3, 3));
        assert_eq!(app.trip.current_index(), Some(2));

        app.handle_key(key_event(KeyCode::Right));
        assert_eq!(app.trip.current_index(), Some(0), "Should wrap to first day");

        app.handle_key(key_event(KeyCode::Left));
        assert_eq!(app.trip.current_index(), Some(2), "Should wrap to last day");

        app.handle_key(key_event(KeyCode::Char('h')));
        assert_eq!(app.trip.current_index(), Some(1));

        app.handle_key(key_event(KeyCode::Char('l')));
        assert_eq!(app.trip.current_index(), Some(2));
    }

    #[test]
    fn test_switching_days_resets_day_selection() {
        let mut app = itinerary_app();
        app.trip.add_day(record(1, 1));
        app.trip.add_day(record(2, 2));
        app.day_index = 3;

        app.handle_key(key_event(KeyCode::Left));

        assert_eq!(app.day_index, 0);
    }

    #[test]
    fn test_day_switch_keys_ignored_with_no_days() {
        let mut app = itinerary_app();

        app.handle_key(key_event(KeyCode::Left));
        app.handle_key(key_event(KeyCode::Right));

        assert_eq!(app.trip.current_index(), None);
    }

    #[tokio::test]
    async fn test_failed_action_leaves_collection_untouched() {
        let mut app = itinerary_app();
        app.trip.add_day(record(1, 1));

        // The server is unreachable; the failure is logged and swallowed
        app.run_action(PendingAction::AddDay).await;

        assert_eq!(app.trip.days().len(), 1);
        assert_eq!(app.trip.current_index(), Some(0));
    }

    #[tokio::test]
    async fn test_failed_load_still_enters_itinerary() {
        let mut app = App::new(StartupConfig {
            server: "http://127.0.0.1:9".to_string(),
            ..StartupConfig::default()
        });

        app.load_days().await;

        assert_eq!(app.state, AppState::Itinerary);
        assert!(app.trip.days().is_empty());
    }
}
