//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::profiles::ProfileDB;

/// Parses a stored stake string into a Decimal, falling back to zero on
/// corrupt data so a single bad row cannot take down a listing.
pub(crate) fn parse_stake(value_str: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e) => {
            log::error!("Failed to parse stake '{}': {}. Falling back to ZERO.", value_str, e);
            Decimal::ZERO
        }
    }
}

/// Database model for goals
#[derive(
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(ProfileDB, foreign_key = owner_id))]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub stake: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new goal
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub stake: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models
impl From<GoalDB> for stakeboard_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            owner_id: db.owner_id,
            description: db.description,
            stake: parse_stake(&db.stake),
            completed: db.completed,
            created_at: db.created_at,
        }
    }
}
