use serde_json::Value;

use crate::error::{MatchError, Result};
use crate::options::SearchOptions;

/// A single request as delivered by a loosely typed host (editor RPC, the
/// CLI's pipe mode).
///
/// Both fields are required on the wire: an empty abbreviation is a valid
/// "browse everything" query and is distinct from an absent one, and hosts
/// that want default options must say `{}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub abbrev: String,
    pub options: SearchOptions,
}

impl Query {
    pub fn new(abbrev: impl Into<String>, options: SearchOptions) -> Self {
        Self {
            abbrev: abbrev.into(),
            options,
        }
    }

    /// Validate a raw JSON request before any matching work happens. A
    /// missing or non-string `abbrev` is rejected, as are missing or
    /// malformed `options`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let abbrev = value
            .get("abbrev")
            .and_then(Value::as_str)
            .ok_or(MatchError::MissingAbbrev)?;
        let options = value.get("options").ok_or(MatchError::MissingOptions)?;
        let options = SearchOptions::from_value(options)?;
        Ok(Self {
            abbrev: abbrev.to_string(),
            options,
        })
    }
}
