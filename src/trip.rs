//! Trip day collection management
//!
//! Owns the ordered collection of day handles and the pointer to the
//! currently displayed day, and mediates day creation and deletion against
//! the trip-planner server. Local state changes only after the server
//! confirms an operation, so the collection always matches what the server
//! has acknowledged.
//!
//! Two invariants hold whenever a mutating call returns:
//! - the handle at index `i` carries day number `i + 1` (1-based, gap-free),
//! - exactly one handle is shown when the collection is non-empty, and it
//!   is the one the current pointer names.

use thiserror::Error;
use tracing::warn;

use crate::data::{Attraction, DayRecord, DaysClient, DaysError};
use crate::day::{DayFactory, DayHandle};

/// Errors from collection operations
#[derive(Debug, Error)]
pub enum TripError {
    /// `load` was called on an already-populated collection
    #[error("trip days are already loaded")]
    AlreadyLoaded,

    /// The underlying day request failed
    #[error("day request failed: {0}")]
    Request(#[from] DaysError),
}

/// Manages the trip's ordered day collection and the displayed day
pub struct TripManager<F: DayFactory> {
    client: DaysClient,
    factory: F,
    days: Vec<F::Handle>,
    current: Option<usize>,
    loaded: bool,
}

impl<F: DayFactory> TripManager<F> {
    /// Create an empty manager talking to the given server
    pub fn new(client: DaysClient, factory: F) -> Self {
        Self {
            client,
            factory,
            days: Vec::new(),
            current: None,
            loaded: false,
        }
    }

    /// The day handles, in display order
    pub fn days(&self) -> &[F::Handle] {
        &self.days
    }

    /// Index of the currently displayed day, if any
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The currently displayed day handle, if any
    pub fn current_day(&self) -> Option<&F::Handle> {
        self.current.and_then(|index| self.days.get(index))
    }

    /// Whether the initial load has completed
    #[allow(dead_code)]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Populate the collection from the server
    ///
    /// This is the collection's sole populating call: invoking it on a
    /// manager that already holds days returns `TripError::AlreadyLoaded`
    /// without issuing a request. A failed load leaves the collection
    /// empty and may be retried.
    pub async fn load(&mut self) -> Result<(), TripError> {
        if self.loaded || !self.days.is_empty() {
            return Err(TripError::AlreadyLoaded);
        }
        let records = self.client.list_days().await?;
        self.apply_loaded(records);
        Ok(())
    }

    /// Apply a successful list response to the empty collection
    ///
    /// Appends a handle per record in server order; the first appended
    /// becomes current, and afterwards the display switches to day 1.
    fn apply_loaded(&mut self, records: Vec<DayRecord>) {
        self.loaded = true;
        for record in records {
            self.append(record);
        }
        if !self.days.is_empty() {
            self.switch_to(0);
        }
    }

    /// Ask the server for a new day at the end of the trip
    ///
    /// Sends the next sequential number as a hint; the server-confirmed
    /// record is appended and displayed. Nothing changes on failure.
    pub async fn create_day(&mut self) -> Result<(), TripError> {
        let number = (self.days.len() + 1) as u32;
        let record = self.client.create_day(number).await?;
        self.add_day(record);
        Ok(())
    }

    /// Append a server-confirmed day and switch the display to it
    ///
    /// The very first day has no previous current to hide; it is simply
    /// shown.
    pub fn add_day(&mut self, record: DayRecord) {
        self.append(record);
        self.switch_to(self.days.len() - 1);
    }

    /// Append a handle for `record` without changing the display
    fn append(&mut self, record: DayRecord) {
        let day = self.factory.create(record);
        self.days.push(day);
        if self.days.len() == 1 {
            self.current = Some(0);
        }
    }

    /// Delete the currently displayed day
    ///
    /// A trip must always keep at least one day: with fewer than two days,
    /// or no current day, this does nothing and no request is issued. On
    /// success the neighbor takes over (the day that moved into the freed
    /// index, or the new last day), every remaining handle is renumbered
    /// to its 1-based position, and the removed handle hides its removal
    /// affordance. Nothing changes on failure.
    pub async fn delete_current_day(&mut self) -> Result<(), TripError> {
        if self.days.len() < 2 {
            return Ok(());
        }
        let Some(index) = self.current else {
            return Ok(());
        };
        let id = self.days[index].id();
        self.client.delete_day(id).await?;
        self.apply_deleted(index);
        Ok(())
    }

    /// Apply a server-confirmed deletion of the day at `index`
    fn apply_deleted(&mut self, index: usize) {
        let mut removed = self.days.remove(index);
        let new_current = if index < self.days.len() {
            index
        } else {
            index - 1
        };
        for (i, day) in self.days.iter_mut().enumerate() {
            day.set_number((i + 1) as u32);
        }
        removed.hide();
        self.current = None;
        self.switch_to(new_current);
        removed.hide_button();
    }

    /// Switch the display to the day at `index`
    ///
    /// Hides the current day if one is set, then shows the target. Calling
    /// with the already-current index hides and re-shows it; out-of-range
    /// indices are ignored.
    pub fn switch_to(&mut self, index: usize) {
        if index >= self.days.len() {
            warn!(index, "switch_to past the end of the day collection");
            return;
        }
        if let Some(current) = self.current {
            if let Some(day) = self.days.get_mut(current) {
                day.hide();
            }
        }
        self.current = Some(index);
        self.days[index].show();
    }

    /// Add an attraction to the currently displayed day
    pub fn add_to_current(&mut self, attraction: Attraction) {
        match self.current_day_mut() {
            Some(day) => day.add_attraction(attraction),
            None => warn!("add_to_current with no current day"),
        }
    }

    /// Remove an attraction from the currently displayed day
    pub fn remove_from_current(&mut self, attraction: &Attraction) {
        match self.current_day_mut() {
            Some(day) => day.remove_attraction(attraction),
            None => warn!("remove_from_current with no current day"),
        }
    }

    fn current_day_mut(&mut self) -> Option<&mut F::Handle> {
        let index = self.current?;
        self.days.get_mut(index)
    }
}
