//! Common types used across pagelinks

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Link Role
// ============================================================================

/// The role a rendered fragment plays in the pagination markup
///
/// ```text
/// << First < Prev  1 2 3  Next > Last >>
/// \_____/ \____/  ^ ^ ^  \____/ \_____/
///  first   prev   | | |   next    last
///                 | | +-- current (when 3 is the current page)
///                 +-+---- page
/// ```
///
/// `Outer` wraps everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkRole {
    First,
    Prev,
    Page,
    Current,
    Next,
    Last,
    Outer,
}

impl LinkRole {
    /// Every role, in rendering order
    pub const ALL: [LinkRole; 7] = [
        LinkRole::First,
        LinkRole::Prev,
        LinkRole::Page,
        LinkRole::Current,
        LinkRole::Next,
        LinkRole::Last,
        LinkRole::Outer,
    ];

    /// Template key for this role
    pub fn as_str(self) -> &'static str {
        match self {
            LinkRole::First => "first",
            LinkRole::Prev => "prev",
            LinkRole::Page => "page",
            LinkRole::Current => "current",
            LinkRole::Next => "next",
            LinkRole::Last => "last",
            LinkRole::Outer => "outer",
        }
    }
}

impl fmt::Display for LinkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LinkRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::unknown_role(s))
    }
}
