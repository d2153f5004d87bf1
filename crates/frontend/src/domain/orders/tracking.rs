//! Shipment tracking timeline, per (order, unit).
//!
//! Session-local by design: the store lives in a component signal and is
//! rebuilt from defaults on reload. Stage ownership stays with the admin
//! operating the dashboard; nothing here talks to the network.

use crate::shared::date_utils;
use std::collections::{BTreeMap, HashMap};

pub const FIRST_STAGE: u8 = 1;
pub const FINAL_STAGE: u8 = 8;

/// Each order tracks exactly two sub-units.
pub const UNITS_PER_ORDER: u8 = 2;

const STAGE_NAMES: [&str; FINAL_STAGE as usize] = [
    "Order Placed",
    "Payment Pending",
    "Order Confirm",
    "Order Approved",
    "Order in Market",
    "Order in Quarantine",
    "In Transit",
    "Order Delivered",
];

// Seed stamp for lazily created entries: every order starts its timeline
// at stage 1 with this placeholder rather than an empty history.
const SEED_DATE: &str = "01-01-2025";
const SEED_TIME: &str = "09:00:00";

pub fn stage_name(stage: u8) -> Option<&'static str> {
    if (FIRST_STAGE..=FINAL_STAGE).contains(&stage) {
        Some(STAGE_NAMES[(stage - 1) as usize])
    } else {
        None
    }
}

/// Label for the advance control, or `None` once the unit is delivered.
pub fn advance_label(current_stage: u8) -> Option<&'static str> {
    match current_stage {
        s if s >= FINAL_STAGE => None,
        s if s == FINAL_STAGE - 1 => Some("Confirm Delivery"),
        _ => Some("Advance to Next Stage"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingKey {
    pub order_id: String,
    pub unit: u8,
}

impl TrackingKey {
    pub fn new(order_id: &str, unit: u8) -> Self {
        Self {
            order_id: order_id.to_string(),
            unit,
        }
    }
}

/// When a stage was reached, as display strings (DD-MM-YYYY / HH:MM:SS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageStamp {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingEntry {
    pub current_stage: u8,
    /// Stamp per reached stage. Earlier rows are never removed.
    pub history: BTreeMap<u8, StageStamp>,
}

impl TrackingEntry {
    fn seeded() -> Self {
        let mut history = BTreeMap::new();
        history.insert(
            FIRST_STAGE,
            StageStamp {
                date: SEED_DATE.to_string(),
                time: SEED_TIME.to_string(),
            },
        );
        Self {
            current_stage: FIRST_STAGE,
            history,
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.current_stage >= FINAL_STAGE
    }
}

/// All tracking timelines of the current session.
#[derive(Debug, Clone, Default)]
pub struct TrackingStore {
    entries: HashMap<TrackingKey, TrackingEntry>,
}

impl TrackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the entry for a key, synthesizing the stage-1 default when it
    /// has never been touched. Pure read: the default is NOT committed to
    /// the store; only [`TrackingStore::advance`] writes.
    pub fn get_or_create(&self, order_id: &str, unit: u8) -> TrackingEntry {
        self.entries
            .get(&TrackingKey::new(order_id, unit))
            .cloned()
            .unwrap_or_else(TrackingEntry::seeded)
    }

    /// Set the current stage and stamp its history row with the local wall
    /// clock. Deliberately permissive: any target stage is accepted (manual
    /// correction by an operator); the UI only ever passes `current + 1`.
    pub fn advance(&mut self, order_id: &str, unit: u8, stage: u8) {
        let (date, time) = date_utils::now_stamp();
        self.advance_at(order_id, unit, stage, date, time);
    }

    fn advance_at(&mut self, order_id: &str, unit: u8, stage: u8, date: String, time: String) {
        let entry = self
            .entries
            .entry(TrackingKey::new(order_id, unit))
            .or_insert_with(TrackingEntry::seeded);
        entry.current_stage = stage;
        entry.history.insert(stage, StageStamp { date, time });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance_at(store: &mut TrackingStore, order: &str, unit: u8, stage: u8) {
        store.advance_at(
            order,
            unit,
            stage,
            "15-03-2025".to_string(),
            "14:30:00".to_string(),
        );
    }

    #[test]
    fn test_fresh_key_defaults_to_stage_one() {
        let store = TrackingStore::new();
        let entry = store.get_or_create("ORD-1", 1);
        assert_eq!(entry.current_stage, FIRST_STAGE);
        assert_eq!(entry.history.len(), 1);
        let stamp = &entry.history[&FIRST_STAGE];
        assert!(!stamp.date.is_empty());
        assert!(!stamp.time.is_empty());
    }

    #[test]
    fn test_read_does_not_commit() {
        let store = TrackingStore::new();
        let _ = store.get_or_create("ORD-1", 1);
        let _ = store.get_or_create("ORD-1", 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_advance_then_read_back() {
        let mut store = TrackingStore::new();
        store.advance("ORD-1", 1, 3);
        let entry = store.get_or_create("ORD-1", 1);
        assert_eq!(entry.current_stage, 3);
        let stamp = entry.history.get(&3).expect("history row for stage 3");
        assert!(!stamp.date.is_empty());
        assert!(!stamp.time.is_empty());
    }

    #[test]
    fn test_history_rows_are_retained() {
        let mut store = TrackingStore::new();
        advance_at(&mut store, "ORD-1", 1, 2);
        advance_at(&mut store, "ORD-1", 1, 3);
        advance_at(&mut store, "ORD-1", 1, 4);
        let entry = store.get_or_create("ORD-1", 1);
        assert_eq!(entry.current_stage, 4);
        // seed row for stage 1 plus one per advance
        assert_eq!(entry.history.len(), 4);
        assert!(entry.history.contains_key(&FIRST_STAGE));
    }

    #[test]
    fn test_units_track_independently() {
        let mut store = TrackingStore::new();
        advance_at(&mut store, "ORD-1", 1, 5);
        let untouched = store.get_or_create("ORD-1", 2);
        assert_eq!(untouched.current_stage, FIRST_STAGE);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_arbitrary_targets_are_accepted() {
        let mut store = TrackingStore::new();
        advance_at(&mut store, "ORD-1", 1, 6);
        advance_at(&mut store, "ORD-1", 1, 2); // regression
        let entry = store.get_or_create("ORD-1", 1);
        assert_eq!(entry.current_stage, 2);
        assert!(entry.history.contains_key(&6));
    }

    #[test]
    fn test_stage_names_and_bounds() {
        assert_eq!(stage_name(1), Some("Order Placed"));
        assert_eq!(stage_name(8), Some("Order Delivered"));
        assert_eq!(stage_name(0), None);
        assert_eq!(stage_name(9), None);
    }

    #[test]
    fn test_advance_labels() {
        assert_eq!(advance_label(1), Some("Advance to Next Stage"));
        assert_eq!(advance_label(7), Some("Confirm Delivery"));
        assert_eq!(advance_label(8), None);
    }

    #[test]
    fn test_delivered_is_terminal_for_ui() {
        let mut store = TrackingStore::new();
        advance_at(&mut store, "ORD-1", 2, FINAL_STAGE);
        assert!(store.get_or_create("ORD-1", 2).is_delivered());
    }
}
