//! Sort clauses
//!
//! A [`SortOption`] is one field + direction pair. Requests carry an
//! ordered list of them; the first clause is the primary sort key and
//! later clauses break ties.
//!
//! Direction parsing is lenient: anything other than `"asc"` or `"desc"`
//! becomes ascending instead of failing the request.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Sort Direction
// ============================================================================

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

impl SortDirection {
    /// Wire token for this direction
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl From<&str> for SortDirection {
    fn from(token: &str) -> Self {
        match token {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }
}

impl From<String> for SortDirection {
    fn from(token: String) -> Self {
        Self::from(token.as_str())
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Sort Option
// ============================================================================

/// A single sort clause
///
/// The field name is not validated; its meaning belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOption {
    field: String,
    #[serde(default)]
    direction: SortDirection,
}

impl SortOption {
    /// Create a sort option. Never fails.
    ///
    /// ```
    /// use pagekit::{SortDirection, SortOption};
    ///
    /// let opt = SortOption::new("created_at", "bogus");
    /// assert_eq!(opt.direction(), SortDirection::Asc);
    /// ```
    pub fn new(field: impl Into<String>, direction: impl Into<SortDirection>) -> Self {
        Self {
            field: field.into(),
            direction: direction.into(),
        }
    }

    /// Ascending sort on `field`
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Descending sort on `field`
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Asc
    }
}
