//! # pathpick-match
//!
//! Ranked abbreviation matching for interactive path pickers.
//!
//! ## Pipeline
//!
//! ```text
//! Scanner snapshot
//!     │
//!     ├──> Filter (abbreviation subsequence match, snapshot order kept)
//!     │      └─> Scored matches
//!     │
//!     ├──> Rank (score descending, lexicographic tie-break;
//!     │          skipped for the empty abbreviation)
//!     │
//!     └──> Clamp to limit, project to plain path strings
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pathpick_match::{Matcher, SearchOptions};
//!
//! let paths: Arc<[String]> = vec!["src/lib.rs".to_string(), "README.md".to_string()].into();
//! let mut matcher = Matcher::new(paths);
//! let hits = matcher.sorted_matches_for("lib", &SearchOptions::with_limit(10));
//! assert_eq!(hits, vec!["src/lib.rs"]);
//! ```

mod error;
mod matcher;
mod options;
mod query;
mod scorer;

pub use error::{MatchError, Result};
pub use matcher::{Matcher, PathMatch, Scanner};
pub use options::SearchOptions;
pub use query::Query;
pub use scorer::{NucleoScorer, Scorer};
