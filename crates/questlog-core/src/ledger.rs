//! Points, levels, and achievements.
//!
//! The ledger owns the aggregate score state. It observes the goal registry
//! read-only when evaluating achievement rules; it never records events
//! itself, so evaluating the rules twice in a row changes nothing.

use crate::registry::GoalRegistry;

const POINTS_PER_LEVEL: i64 = 1000;

const GOAL_GETTER: &str = "Goal Getter: Complete 5 goals";
const GOAL_GETTER_THRESHOLD: usize = 5;
const ETERNAL_CHAMPION: &str = "Eternal Champion: Record 10 eternal goal completions";
const ETERNAL_CHAMPION_THRESHOLD: u32 = 10;

/// Aggregate score state: total points, level, and earned achievements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressLedger {
    total_points: i64,
    level: u32,
    points_to_next_level: i64,
    achievements: Vec<String>,
}

impl Default for ProgressLedger {
    fn default() -> Self {
        Self {
            total_points: 0,
            level: 1,
            points_to_next_level: POINTS_PER_LEVEL,
            achievements: Vec::new(),
        }
    }
}

impl ProgressLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Used by the persistence codec to rebuild a ledger from stored values.
    pub(crate) fn restore(
        total_points: i64,
        level: u32,
        points_to_next_level: i64,
        achievements: Vec<String>,
    ) -> Self {
        Self {
            total_points,
            level,
            points_to_next_level,
            achievements,
        }
    }

    /// Total points; negative goals can push this below zero.
    pub fn total_points(&self) -> i64 {
        self.total_points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// The total-points threshold at which the next level is reached.
    pub fn points_to_next_level(&self) -> i64 {
        self.points_to_next_level
    }

    /// Earned achievements, in the order they were granted.
    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    /// Apply a points delta and process any level-ups it causes.
    ///
    /// Each threshold crossing raises the level by exactly one and grants a
    /// "Reached Level N" achievement, so one large delta can produce several
    /// level-ups in sequence. The level never goes down. Returns the
    /// achievements granted by this call.
    pub fn apply(&mut self, delta: i64) -> Vec<String> {
        self.total_points += delta;

        let mut granted = Vec::new();
        while self.total_points >= self.points_to_next_level {
            self.level += 1;
            self.points_to_next_level = i64::from(self.level) * POINTS_PER_LEVEL;
            let achievement = format!("Reached Level {}", self.level);
            tracing::info!(level = self.level, "level up");
            if self.grant(&achievement) {
                granted.push(achievement);
            }
        }
        granted
    }

    /// Evaluate the fixed achievement rules against the registry.
    ///
    /// Reads only the counters goals already recorded; mutates nothing but
    /// the achievement list. Returns the achievements newly granted.
    pub fn recompute_achievements(&mut self, registry: &GoalRegistry) -> Vec<String> {
        let mut granted = Vec::new();

        if registry.completed_count() >= GOAL_GETTER_THRESHOLD && self.grant(GOAL_GETTER) {
            granted.push(GOAL_GETTER.to_string());
        }

        if registry.eternal_completions_total() >= ETERNAL_CHAMPION_THRESHOLD
            && self.grant(ETERNAL_CHAMPION)
        {
            granted.push(ETERNAL_CHAMPION.to_string());
        }

        granted
    }

    /// Append an achievement unless already present. Returns whether it was
    /// newly granted.
    fn grant(&mut self, text: &str) -> bool {
        if self.achievements.iter().any(|a| a == text) {
            return false;
        }
        tracing::info!(achievement = text, "achievement unlocked");
        self.achievements.push(text.to_string());
        true
    }
}
