//! UI rendering module for the trip day planner
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod help_overlay;
pub mod itinerary;

pub use help_overlay::render as render_help_overlay;
pub use itinerary::render as render_itinerary;
