use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Options accepted by the ranked-selection pipeline.
///
/// `limit` caps the number of returned matches; `0` (the default) means
/// "return everything".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub limit: usize,
}

impl SearchOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Parse options delivered by a loosely typed host. The value must be a
    /// JSON object; `limit` must be a non-negative integer when present.
    /// Unrecognized keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(Into::into)
    }

    /// Number of entries to keep out of `available` matches: never negative,
    /// never beyond what is available, `limit == 0` keeps everything.
    pub(crate) fn effective_limit(&self, available: usize) -> usize {
        if self.limit == 0 || available < self.limit {
            available
        } else {
            self.limit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;
    use serde_json::json;

    #[test]
    fn absent_limit_means_unlimited() {
        let options = SearchOptions::from_value(&json!({})).unwrap();
        assert_eq!(options.limit, 0);
        assert_eq!(options.effective_limit(42), 42);
    }

    #[test]
    fn limit_clamps_to_available() {
        let options = SearchOptions::from_value(&json!({ "limit": 5 })).unwrap();
        assert_eq!(options.effective_limit(3), 3);
        assert_eq!(options.effective_limit(5), 5);
        assert_eq!(options.effective_limit(9), 5);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let options = SearchOptions::from_value(&json!({ "limit": 2, "sort": "score" })).unwrap();
        assert_eq!(options, SearchOptions::with_limit(2));
    }

    #[test]
    fn rejects_non_object_options() {
        for value in [json!(7), json!("limit"), json!([1, 2]), json!(null)] {
            let err = SearchOptions::from_value(&value).unwrap_err();
            assert!(matches!(err, MatchError::InvalidOptions(_)));
        }
    }

    #[test]
    fn rejects_negative_or_fractional_limit() {
        assert!(SearchOptions::from_value(&json!({ "limit": -1 })).is_err());
        assert!(SearchOptions::from_value(&json!({ "limit": 1.5 })).is_err());
        assert!(SearchOptions::from_value(&json!({ "limit": "3" })).is_err());
    }
}
