//! Alert audience enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The audience of a "new ticket" polling alert.
///
/// Each ticket carries one notified flag per audience; the flags are
/// independent, so a ticket can be alerted to the expert while still
/// pending for the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// The IT manager watching the triage queue.
    Manager,
    /// The expert watching their assignment queue.
    Expert,
}

impl Audience {
    /// Return the audience as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
