//! Output tokens — a lone accession or a compacted range.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputToken {
    Single(String),
    Range { first: String, last: String },
}

impl OutputToken {
    /// Token for the closed run `[start, end]`.
    pub fn closing(start: &str, end: &str) -> Self {
        if start == end {
            Self::Single(end.to_string())
        } else {
            Self::Range { first: start.to_string(), last: end.to_string() }
        }
    }

    pub fn first(&self) -> &str {
        match self {
            Self::Single(a) => a,
            Self::Range { first, .. } => first,
        }
    }

    pub fn last(&self) -> &str {
        match self {
            Self::Single(a) => a,
            Self::Range { last, .. } => last,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

impl fmt::Display for OutputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(a) => f.write_str(a),
            Self::Range { first, last } => write!(f, "{first}-{last}"),
        }
    }
}
