//! Saving tip and streak messages derived from a trend snapshot

use serde::{Deserialize, Serialize};

use crate::trends::TrendSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub tip: String,
    pub streak: String,
}

pub const TIP_OVER_BUDGET: &str =
    "You're over budget! Try cutting spending in your top category.";
pub const TIP_NEAR_BUDGET: &str =
    "You're close to hitting your weekly budget. Watch out!";
pub const TIP_UNDER_BUDGET: &str = "Nice! You're under budget this week.";

pub const STREAK_KEPT: &str = "Good job! You stayed under budget.";
pub const STREAK_BROKEN: &str = "Try again next week!";

/// Picks a tip by comparing spend against the budget, first match wins:
/// over budget, within 20% of it, or comfortably under. Both comparisons
/// are strict, so spending exactly the budget (or exactly 80% of it)
/// lands in the under-budget branch.
pub fn advise(snapshot: &TrendSnapshot) -> Advice {
    let spent = snapshot.weekly_total;
    let budget = snapshot.weekly_budget;

    let tip = if spent > budget {
        TIP_OVER_BUDGET
    } else if spent > budget * 0.8 {
        TIP_NEAR_BUDGET
    } else {
        TIP_UNDER_BUDGET
    };

    let streak = if spent <= budget {
        STREAK_KEPT
    } else {
        STREAK_BROKEN
    };

    Advice {
        tip: tip.to_string(),
        streak: streak.to_string(),
    }
}
