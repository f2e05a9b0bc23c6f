//! Reshaper — rewrites category records into a uniform item list
//!
//! Each category gains two fields:
//!
//! - `totalCount`: length of the source collection
//! - `itemData`: one [`NormalizedEntry`] per source element, in source order
//!
//! Records are taken by value and returned enriched. Fields already on a
//! record are left alone (an existing `totalCount`/`itemData` is overwritten).
//! Unknown mode tags are not an error: the records come back untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::hasher;
use crate::mode::{IdStrategy, Mode};
use crate::{Error, Result};

pub const NAME_FIELD: &str = "name";
pub const EVENT_TEXT_FIELD: &str = "text";
pub const TOTAL_COUNT_FIELD: &str = "totalCount";
pub const ITEM_DATA_FIELD: &str = "itemData";

/// Uniform entry shape shared by every mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub name: String,
    /// Name of the owning category
    pub class_name: String,
    pub id: String,
}

impl NormalizedEntry {
    fn from_text(text: &str, class_name: &str, strategy: IdStrategy) -> Self {
        let id = match strategy {
            IdStrategy::Verbatim => text.to_string(),
            IdStrategy::Hashed => hasher::hash(text),
        };
        NormalizedEntry {
            name: text.to_string(),
            class_name: class_name.to_string(),
            id,
        }
    }
}

// ── Public API ─────────────────────────────────────────────

/// Reshape a JSON document given as text
///
/// # Errors
/// `Json` for invalid syntax, otherwise the errors of [`reshape_value`].
pub fn reshape_str(json: &str, tag: &str) -> Result<String> {
    let doc: Value = serde_json::from_str(json)?;
    let reshaped = reshape_value(doc, tag)?;
    Ok(serde_json::to_string(&reshaped)?)
}

/// Reshape a parsed document whose root is an array of categories
///
/// With an unknown tag the document is returned as-is, whatever its shape.
pub fn reshape_value(doc: Value, tag: &str) -> Result<Value> {
    let Some(mode) = Mode::from_tag(tag) else {
        debug!(tag, "unrecognized mode, passing records through");
        return Ok(doc);
    };
    match doc {
        Value::Array(categories) => Ok(Value::Array(reshape(categories, mode)?)),
        _ => Err(Error::NotAnArray),
    }
}

/// Reshape with a raw mode tag; unknown tags pass the records through
pub fn reshape_tagged(categories: Vec<Value>, tag: &str) -> Result<Vec<Value>> {
    match Mode::from_tag(tag) {
        Some(mode) => reshape(categories, mode),
        None => {
            debug!(tag, "unrecognized mode, passing records through");
            Ok(categories)
        }
    }
}

/// Reshape every category for `mode`
///
/// # Errors
/// The first malformed category aborts the batch.
pub fn reshape(categories: Vec<Value>, mode: Mode) -> Result<Vec<Value>> {
    debug!(mode = %mode, categories = categories.len(), "reshaping");
    categories
        .into_iter()
        .enumerate()
        .map(|(index, category)| reshape_at(category, mode, index))
        .collect()
}

/// Reshape a single category record
pub fn reshape_category(category: Value, mode: Mode) -> Result<Value> {
    reshape_at(category, mode, 0)
}

/// Build the normalized entries for one category's source collection
pub fn normalize_entries(
    category_name: &str,
    source: &[Value],
    mode: Mode,
) -> Result<Vec<NormalizedEntry>> {
    let strategy = mode.id_strategy();
    source
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let text = entry_text(value, mode).ok_or_else(|| Error::InvalidEntry {
                category: category_name.to_string(),
                field: mode.source_field(),
                index,
            })?;
            Ok(NormalizedEntry::from_text(text, category_name, strategy))
        })
        .collect()
}

// ── Internals ──────────────────────────────────────────────

fn reshape_at(category: Value, mode: Mode, index: usize) -> Result<Value> {
    let Value::Object(mut record) = category else {
        return Err(Error::NotAnObject { index });
    };

    let name = match record.get(NAME_FIELD) {
        Some(Value::String(name)) => name.clone(),
        _ => {
            return Err(Error::MissingField {
                category: format!("#{}", index),
                field: NAME_FIELD,
            })
        }
    };

    let field = mode.source_field();
    let source = record
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::MissingField {
            category: name.clone(),
            field,
        })?;
    let entries = normalize_entries(&name, source, mode)?;
    trace!(category = %name, count = entries.len(), "category reshaped");

    record.insert(TOTAL_COUNT_FIELD.to_string(), Value::from(entries.len()));
    record.insert(ITEM_DATA_FIELD.to_string(), serde_json::to_value(&entries)?);
    Ok(Value::Object(record))
}

/// Text of one source element: the string itself, or an event's `text`
fn entry_text(value: &Value, mode: Mode) -> Option<&str> {
    match mode {
        Mode::Items | Mode::Bosses => value.as_str(),
        Mode::Walkthrough => value.get(EVENT_TEXT_FIELD).and_then(Value::as_str),
    }
}
