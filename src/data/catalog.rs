//! Static attraction catalog for New York City trips
//!
//! This module contains the static list of attractions users can place on a
//! day's itinerary: hotels, restaurants, and activities around NYC.

use super::{Attraction, AttractionKind};

/// Static array of all catalog attractions
///
/// Contains 12 attractions split across hotels, restaurants, and
/// activities. IDs are stable and unique within the catalog.
pub static ATTRACTIONS: [Attraction; 12] = [
    Attraction {
        id: 1,
        name: "The Plaza Hotel",
        kind: AttractionKind::Hotel,
    },
    Attraction {
        id: 2,
        name: "Hotel Chelsea",
        kind: AttractionKind::Hotel,
    },
    Attraction {
        id: 3,
        name: "The Bowery Hotel",
        kind: AttractionKind::Hotel,
    },
    Attraction {
        id: 4,
        name: "Pod 51 Hotel",
        kind: AttractionKind::Hotel,
    },
    Attraction {
        id: 5,
        name: "Katz's Delicatessen",
        kind: AttractionKind::Restaurant,
    },
    Attraction {
        id: 6,
        name: "Joe's Pizza",
        kind: AttractionKind::Restaurant,
    },
    Attraction {
        id: 7,
        name: "Gramercy Tavern",
        kind: AttractionKind::Restaurant,
    },
    Attraction {
        id: 8,
        name: "Russ & Daughters Cafe",
        kind: AttractionKind::Restaurant,
    },
    Attraction {
        id: 9,
        name: "Statue of Liberty Ferry",
        kind: AttractionKind::Activity,
    },
    Attraction {
        id: 10,
        name: "Central Park Bike Tour",
        kind: AttractionKind::Activity,
    },
    Attraction {
        id: 11,
        name: "The Metropolitan Museum of Art",
        kind: AttractionKind::Activity,
    },
    Attraction {
        id: 12,
        name: "Brooklyn Bridge Walk",
        kind: AttractionKind::Activity,
    },
];

/// Get an attraction by its catalog ID
///
/// # Arguments
///
/// * `id` - The unique identifier of the attraction within the catalog
///
/// # Returns
///
/// Returns `Some(&Attraction)` if found, `None` otherwise
///
/// # Example
///
/// ```
/// use tripday::data::catalog::get_attraction_by_id;
///
/// if let Some(attraction) = get_attraction_by_id(5) {
///     println!("Found: {}", attraction.name);
/// }
/// ```
#[allow(dead_code)]
pub fn get_attraction_by_id(id: u64) -> Option<&'static Attraction> {
    ATTRACTIONS.iter().find(|attraction| attraction.id == id)
}

/// Get all available attractions
///
/// # Returns
///
/// Returns a static slice containing the full catalog, in display order
pub fn all_attractions() -> &'static [Attraction] {
    &ATTRACTIONS
}
