//! Core data models for the trip day planner
//!
//! This module contains the data types shared throughout the application:
//! the wire-level day record exchanged with the trip-planner server and the
//! attraction payload handed to day panels.

pub mod catalog;
pub mod days;

#[allow(unused_imports)]
pub use catalog::{all_attractions, get_attraction_by_id};
pub use days::{DaysClient, DaysError};

use serde::{Deserialize, Serialize};

/// A day as the trip-planner server describes it
///
/// This is the minimum contract shared with the server: a stable `id`
/// assigned at creation time and the day's 1-based `number` within the
/// trip. Any extra fields the server includes are ignored on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Server-assigned stable identifier
    pub id: u64,
    /// 1-based position of the day within the trip
    pub number: u32,
}

/// An attraction that can be placed on a day's itinerary
///
/// The collection manager treats attractions as opaque values and passes
/// them through to the current day panel unchanged. Uses `&'static str` for
/// the name to allow static initialization of the catalog array.
///
/// Note: This struct only implements `Serialize` (not `Deserialize`) because
/// the static string reference cannot be safely deserialized. Use
/// `get_attraction_by_id` to look up attractions from stored IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attraction {
    /// Unique identifier within the catalog
    pub id: u64,
    /// Human-readable name
    pub name: &'static str,
    /// What kind of attraction this is
    pub kind: AttractionKind,
}

/// Categories of attractions offered by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttractionKind {
    /// A place to stay overnight
    Hotel,
    /// A place to eat
    Restaurant,
    /// Something to see or do
    Activity,
}

impl AttractionKind {
    /// Returns a human-readable display label for the kind.
    #[allow(dead_code)]
    pub fn label(&self) -> &'static str {
        match self {
            AttractionKind::Hotel => "Hotel",
            AttractionKind::Restaurant => "Restaurant",
            AttractionKind::Activity => "Activity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_record_deserializes_minimum_contract() {
        let record: DayRecord =
            serde_json::from_str(r#"{"id": 7, "number": 2}"#).expect("Failed to parse DayRecord");

        assert_eq!(record.id, 7);
        assert_eq!(record.number, 2);
    }

    #[test]
    fn test_day_record_ignores_extra_fields() {
        // Servers commonly send more than the minimum contract
        let json = r#"{"id": 3, "number": 1, "tripId": 12, "date": "2026-08-10"}"#;
        let record: DayRecord = serde_json::from_str(json).expect("Failed to parse DayRecord");

        assert_eq!(record.id, 3);
        assert_eq!(record.number, 1);
    }

    #[test]
    fn test_day_record_serialization_roundtrip() {
        let record = DayRecord { id: 42, number: 5 };

        let json = serde_json::to_string(&record).expect("Failed to serialize DayRecord");
        let deserialized: DayRecord =
            serde_json::from_str(&json).expect("Failed to deserialize DayRecord");

        assert_eq!(deserialized, record);
    }

    #[test]
    fn test_day_record_missing_field_is_error() {
        let result: Result<DayRecord, _> = serde_json::from_str(r#"{"id": 7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_attraction_creation() {
        let attraction = Attraction {
            id: 1,
            name: "Katz's Delicatessen",
            kind: AttractionKind::Restaurant,
        };

        assert_eq!(attraction.id, 1);
        assert_eq!(attraction.name, "Katz's Delicatessen");
        assert_eq!(attraction.kind, AttractionKind::Restaurant);
    }

    #[test]
    fn test_attraction_kind_variants() {
        let kinds = [
            AttractionKind::Hotel,
            AttractionKind::Restaurant,
            AttractionKind::Activity,
        ];

        // Verify all variants are distinct
        for (i, kind1) in kinds.iter().enumerate() {
            for (j, kind2) in kinds.iter().enumerate() {
                if i == j {
                    assert_eq!(kind1, kind2);
                } else {
                    assert_ne!(kind1, kind2);
                }
            }
        }
    }

    #[test]
    fn test_attraction_kind_labels() {
        assert_eq!(AttractionKind::Hotel.label(), "Hotel");
        assert_eq!(AttractionKind::Restaurant.label(), "Restaurant");
        assert_eq!(AttractionKind::Activity.label(), "Activity");
    }
}
