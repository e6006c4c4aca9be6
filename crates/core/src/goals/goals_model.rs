//! Goals domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a goal staked with money.
///
/// `owner_id` and `stake` are immutable after creation; `completed` is the
/// only field mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub stake: Decimal,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new goal.
///
/// The owner is never part of the input; it always comes from the
/// authenticated context.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
    pub stake: Decimal,
}

impl NewGoal {
    /// Validates the new goal data.
    ///
    /// Runs before any storage call so malformed input never reaches
    /// the repository.
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal description cannot be empty".to_string(),
            )));
        }
        if self.stake <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal stake must be a positive amount".to_string(),
            )));
        }
        Ok(())
    }
}
