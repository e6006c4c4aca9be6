//! Tests for the aggregation and ranking engine.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::goals::Goal;
use crate::leaderboard::{rank_users, summarize, toggle_completion_view};
use crate::profiles::Profile;

fn ts(seconds: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        + chrono::Duration::seconds(seconds as i64)
}

fn goal(id: &str, owner: &str, stake: Decimal, completed: bool) -> Goal {
    Goal {
        id: id.to_string(),
        owner_id: owner.to_string(),
        description: format!("goal {id}"),
        stake,
        completed,
        created_at: ts(0),
    }
}

fn profile(id: &str, name: &str) -> Profile {
    Profile {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        display_name: name.to_string(),
        created_at: ts(0),
    }
}

#[test]
fn summarize_empty_set_is_all_zero() {
    let summary = summarize(&[]);
    assert_eq!(summary.goal_count, 0);
    assert_eq!(summary.completed_count, 0);
    assert_eq!(summary.total_stake, Decimal::ZERO);
    assert_eq!(summary.potential_loss, Decimal::ZERO);
}

#[test]
fn summarize_splits_stake_by_completion() {
    let goals = vec![
        goal("g1", "u1", dec!(50), true),
        goal("g2", "u1", dec!(30), false),
    ];
    let summary = summarize(&goals);
    assert_eq!(summary.goal_count, 2);
    assert_eq!(summary.completed_count, 1);
    assert_eq!(summary.total_stake, dec!(80));
    assert_eq!(summary.potential_loss, dec!(30));
    assert_eq!(summary.completed_stake(), dec!(50));
}

#[test]
fn toggle_twice_restores_the_original_set() {
    let goals = vec![
        goal("g1", "u1", dec!(50), true),
        goal("g2", "u1", dec!(30), false),
    ];
    let once = toggle_completion_view(goals.clone(), "g2");
    assert!(once.iter().find(|g| g.id == "g2").unwrap().completed);
    assert!(once.iter().find(|g| g.id == "g1").unwrap().completed);

    let twice = toggle_completion_view(once, "g2");
    assert_eq!(twice, goals);
}

#[test]
fn toggle_with_unknown_id_changes_nothing() {
    let goals = vec![goal("g1", "u1", dec!(50), false)];
    assert_eq!(toggle_completion_view(goals.clone(), "nope"), goals);
}

#[test]
fn rank_orders_by_completed_count_first() {
    let goals = vec![
        goal("g1", "a", dec!(10), true),
        goal("g2", "a", dec!(10), true),
        goal("g3", "b", dec!(500), true),
    ];
    let profiles = vec![profile("a", "Alice"), profile("b", "Bob")];

    let board = rank_users(&goals, &profiles);
    assert_eq!(board[0].user_id, "a");
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[1].user_id, "b");
    assert_eq!(board[1].rank, 2);
}

#[test]
fn rank_breaks_completed_ties_by_total_stake() {
    // A: 3 completed, stake 100. B: 3 completed, stake 150. B ranks above A.
    let goals = vec![
        goal("a1", "a", dec!(40), true),
        goal("a2", "a", dec!(30), true),
        goal("a3", "a", dec!(30), true),
        goal("b1", "b", dec!(50), true),
        goal("b2", "b", dec!(50), true),
        goal("b3", "b", dec!(50), true),
    ];
    let profiles = vec![profile("a", "Alice"), profile("b", "Bob")];

    let board = rank_users(&goals, &profiles);
    assert_eq!(board[0].user_id, "b");
    assert_eq!(board[1].user_id, "a");
}

#[test]
fn rank_preserves_input_order_on_full_ties() {
    // A and C: 2 completed, stake 100 each. Input order decides.
    let goals = vec![
        goal("a1", "a", dec!(60), true),
        goal("a2", "a", dec!(40), true),
        goal("c1", "c", dec!(60), true),
        goal("c2", "c", dec!(40), true),
    ];
    let profiles = vec![profile("a", "Alice"), profile("c", "Carol")];

    let board = rank_users(&goals, &profiles);
    assert_eq!(board[0].user_id, "a");
    assert_eq!(board[1].user_id, "c");

    let reversed = vec![profile("c", "Carol"), profile("a", "Alice")];
    let board = rank_users(&goals, &reversed);
    assert_eq!(board[0].user_id, "c");
    assert_eq!(board[1].user_id, "a");
}

#[test]
fn rank_is_deterministic_across_runs() {
    let goals = vec![
        goal("g1", "a", dec!(25), true),
        goal("g2", "b", dec!(25), true),
        goal("g3", "c", dec!(25), false),
    ];
    let profiles = vec![
        profile("a", "Alice"),
        profile("b", "Bob"),
        profile("c", "Carol"),
    ];

    let first = rank_users(&goals, &profiles);
    let second = rank_users(&goals, &profiles);
    assert_eq!(first, second);
}

#[test]
fn rank_includes_profiles_without_goals() {
    let goals = vec![goal("g1", "a", dec!(10), true)];
    let profiles = vec![profile("a", "Alice"), profile("b", "Bob")];

    let board = rank_users(&goals, &profiles);
    assert_eq!(board.len(), 2);
    let bob = board.iter().find(|e| e.user_id == "b").unwrap();
    assert_eq!(bob.summary.goal_count, 0);
    assert_eq!(bob.summary.total_stake, Decimal::ZERO);
    assert_eq!(bob.rank, 2);
}

#[test]
fn rank_ignores_goals_without_a_profile() {
    let goals = vec![
        goal("g1", "a", dec!(10), true),
        goal("g2", "ghost", dec!(999), true),
    ];
    let profiles = vec![profile("a", "Alice")];

    let board = rank_users(&goals, &profiles);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].user_id, "a");
}

#[test]
fn rank_spec_scenario() {
    // u1: {50 completed, 30 open}, u2: {40 completed}. Both have one
    // completed goal, so total stake decides: u1 (80) before u2 (40).
    let goals = vec![
        goal("g1", "u1", dec!(50), true),
        goal("g2", "u1", dec!(30), false),
        goal("g3", "u2", dec!(40), true),
    ];
    let profiles = vec![profile("u1", "One"), profile("u2", "Two")];

    let u1 = summarize(&[goals[0].clone(), goals[1].clone()]);
    assert_eq!(u1.goal_count, 2);
    assert_eq!(u1.completed_count, 1);
    assert_eq!(u1.total_stake, dec!(80));
    assert_eq!(u1.potential_loss, dec!(30));

    let board = rank_users(&goals, &profiles);
    assert_eq!(board[0].user_id, "u1");
    assert_eq!(board[1].user_id, "u2");
}

// Strategy: small owner pool, cent-denominated stakes, arbitrary completion.
fn arb_goals() -> impl Strategy<Value = Vec<Goal>> {
    prop::collection::vec(
        (0..4u8, 1..1_000_000i64, any::<bool>()),
        0..32,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (owner, cents, completed))| Goal {
                id: format!("g{i}"),
                owner_id: format!("u{owner}"),
                description: format!("goal {i}"),
                stake: Decimal::new(cents, 2),
                completed,
                created_at: ts(i as u32),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_total_stake_splits_into_completed_and_at_risk(goals in arb_goals()) {
        let summary = summarize(&goals);
        prop_assert_eq!(
            summary.total_stake,
            summary.completed_stake() + summary.potential_loss
        );

        let completed: Decimal = goals.iter().filter(|g| g.completed).map(|g| g.stake).sum();
        let open: Decimal = goals.iter().filter(|g| !g.completed).map(|g| g.stake).sum();
        prop_assert_eq!(summary.completed_stake(), completed);
        prop_assert_eq!(summary.potential_loss, open);
    }

    #[test]
    fn prop_toggle_round_trips(goals in arb_goals(), index in 0..32usize) {
        let target = goals.get(index % goals.len().max(1)).map(|g| g.id.clone());
        if let Some(id) = target {
            let round_trip =
                toggle_completion_view(toggle_completion_view(goals.clone(), &id), &id);
            prop_assert_eq!(round_trip, goals);
        }
    }

    #[test]
    fn prop_ranks_are_dense_and_one_based(goals in arb_goals()) {
        let profiles: Vec<Profile> =
            (0..4).map(|i| profile(&format!("u{i}"), &format!("User {i}"))).collect();
        let board = rank_users(&goals, &profiles);
        prop_assert_eq!(board.len(), profiles.len());
        for (position, entry) in board.iter().enumerate() {
            prop_assert_eq!(entry.rank, position + 1);
        }
    }
}
