//! Day handles and the TUI-backed day panel
//!
//! The collection manager owns its days only through the `DayHandle`
//! capability and builds them through a `DayFactory`, which keeps display
//! concerns out of the collection logic. `DayPanel` is the concrete handle
//! the itinerary screen renders.

use crate::data::{Attraction, DayRecord};

/// Capability the collection manager holds for each day
///
/// Handles start out hidden with their removal affordance visible; the
/// manager alone decides which day is shown and how days are numbered.
pub trait DayHandle {
    /// Server-assigned stable identifier
    fn id(&self) -> u64;

    /// Current 1-based day number
    fn number(&self) -> u32;

    /// Reassign the day number after the collection is reordered
    fn set_number(&mut self, number: u32);

    /// Make this day the displayed one
    fn show(&mut self);

    /// Remove this day from display
    fn hide(&mut self);

    /// Hide the day's removal affordance once it leaves the collection
    fn hide_button(&mut self);

    /// Add an attraction to the day's itinerary
    fn add_attraction(&mut self, attraction: Attraction);

    /// Remove an attraction from the day's itinerary, matched by id
    fn remove_attraction(&mut self, attraction: &Attraction);
}

/// Builds day handles from server-provided day records
pub trait DayFactory {
    /// The handle type this factory produces
    type Handle: DayHandle;

    /// Create a handle for a server-provided day record
    fn create(&self, record: DayRecord) -> Self::Handle;
}

/// TUI-backed day state rendered by the itinerary screen
#[derive(Debug, Clone)]
pub struct DayPanel {
    id: u64,
    number: u32,
    visible: bool,
    remove_button: bool,
    attractions: Vec<Attraction>,
}

impl DayPanel {
    /// Create a hidden panel for a server day record
    pub fn from_record(record: DayRecord) -> Self {
        Self {
            id: record.id,
            number: record.number,
            visible: false,
            remove_button: true,
            attractions: Vec::new(),
        }
    }

    /// Whether this panel is currently displayed
    #[allow(dead_code)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the removal affordance is still shown
    pub fn has_remove_button(&self) -> bool {
        self.remove_button
    }

    /// Attractions on this day, in insertion order
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }
}

impl DayHandle for DayPanel {
    fn id(&self) -> u64 {
        self.id
    }

    fn number(&self) -> u32 {
        self.number
    }

    fn set_number(&mut self, number: u32) {
        self.number = number;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn hide_button(&mut self) {
        self.remove_button = false;
    }

    fn add_attraction(&mut self, attraction: Attraction) {
        self.attractions.push(attraction);
    }

    fn remove_attraction(&mut self, attraction: &Attraction) {
        self.attractions.retain(|a| a.id != attraction.id);
    }
}

/// Factory producing `DayPanel` handles
#[derive(Debug, Default, Clone, Copy)]
pub struct PanelFactory;

impl DayFactory for PanelFactory {
    type Handle = DayPanel;

    fn create(&self, record: DayRecord) -> DayPanel {
        DayPanel::from_record(record)
    }
}
