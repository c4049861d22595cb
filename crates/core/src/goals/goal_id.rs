//! Goal identifier generation and parsing.
//!
//! Identifiers are assigned by the storage layer at insert time and exposed to
//! clients as plain strings. They are UUIDv7 values, so their lexical order
//! follows creation order.
//!
//! ```
//! use savings_goals_core::goals::GoalId;
//!
//! let id = GoalId::generate();
//! let parsed: GoalId = id.to_string().parse().unwrap();
//! assert_eq!(id, parsed);
//!
//! assert!("not-an-id".parse::<GoalId>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Opaque, store-assigned goal identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(Uuid);

impl GoalId {
    /// Creates a fresh, time-ordered identifier.
    pub fn generate() -> Self {
        GoalId(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for GoalId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s)
            .map(GoalId)
            .map_err(|_| ValidationError::InvalidGoalId(s.to_string()))
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Hyphenated lowercase, the canonical stored form.
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for GoalId {
    fn from(uuid: Uuid) -> Self {
        GoalId(uuid)
    }
}
