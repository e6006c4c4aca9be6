//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. They carry no
/// authoritative payload: consumers must re-query storage and recompute
/// derived state (summaries, leaderboard) rather than apply deltas.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Goals were created, completed/uncompleted, or deleted.
    GoalsChanged { owner_ids: Vec<String> },

    /// Profiles were registered or updated.
    ProfilesChanged { profile_ids: Vec<String> },
}

impl DomainEvent {
    /// Creates a GoalsChanged event.
    pub fn goals_changed(owner_ids: Vec<String>) -> Self {
        Self::GoalsChanged { owner_ids }
    }

    /// Creates a ProfilesChanged event.
    pub fn profiles_changed(profile_ids: Vec<String>) -> Self {
        Self::ProfilesChanged { profile_ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_event_serialization() {
        let event = DomainEvent::goals_changed(vec!["user-1".to_string()]);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("goals_changed"));

        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            DomainEvent::GoalsChanged { owner_ids } => {
                assert_eq!(owner_ids, vec!["user-1"]);
            }
            _ => panic!("Expected GoalsChanged"),
        }
    }
}
