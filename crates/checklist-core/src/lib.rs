//! Checklist Core - normalizes category records into a uniform item schema
//!
//! Category records arrive in one of several layouts selected by a mode tag.
//! Each is rewritten into the same shape: a `totalCount` and an `itemData`
//! list of `{ name, class_name, id }` entries.
//!
//! # Architecture
//!
//! ```text
//! JSON records + mode tag → Mode dispatch → Reshaper → enriched records
//!                                              ↓
//!                                           Hasher (Walkthrough ids only)
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces identical output
//! - **Order preserving**: `itemData` follows the source collection order
//! - **Stateless**: no shared state; safe to call from any thread

pub mod error;
pub mod hasher;
pub mod mode;
pub mod reshaper;

pub use error::{Error, Result};
pub use hasher::hash;
pub use mode::{IdStrategy, Mode};
pub use reshaper::{
    reshape, reshape_category, reshape_str, reshape_tagged, reshape_value, NormalizedEntry,
};

#[cfg(test)]
mod tests {
    use super::*;

    const WALKTHROUGH: &str = r#"[
        {"name": "Intro", "events": [{"text": "Start game"}, {"text": "Talk to the blacksmith"}]},
        {"name": "Castle", "events": [{"text": "Enter the castle"}, {"text": "Find the hidden key"}]}
    ]"#;

    #[test]
    fn test_determinism_100_iterations() {
        let first = reshape_str(WALKTHROUGH, "Walkthrough").unwrap();
        for i in 0..100 {
            let result = reshape_str(WALKTHROUGH, "Walkthrough").unwrap();
            assert_eq!(first, result, "Non-determinism at iteration {}", i);
        }
    }

    #[test]
    fn test_walkthrough_ids() {
        let out: serde_json::Value =
            serde_json::from_str(&reshape_str(WALKTHROUGH, "Walkthrough").unwrap()).unwrap();
        let ids: Vec<&str> = out
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|c| c["itemData"].as_array().unwrap())
            .map(|e| e["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["XX5ZDEDS", "XXIVVYP0", "XX6UDSZ3", "XXHWF0M9"]);
    }

    #[test]
    fn test_entry_serialization() {
        let entry = NormalizedEntry {
            name: "Sword".into(),
            class_name: "Weapons".into(),
            id: "Sword".into(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Sword","class_name":"Weapons","id":"Sword"}"#);
        let back: NormalizedEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
