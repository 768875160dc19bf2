//! Composition root tying registry, ledger, and codec together.

use std::path::Path;

use crate::codec;
use crate::error::EngineError;
use crate::goal::Goal;
use crate::ledger::ProgressLedger;
use crate::registry::GoalRegistry;

/// What a single recorded event did, for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    /// Canonical name of the goal the event was recorded against.
    pub goal_name: String,
    /// Signed points applied to the ledger.
    pub points_delta: i64,
    /// How many levels this event crossed.
    pub levels_gained: u32,
    /// Achievements granted by this event: level achievements first, then
    /// rule-based ones, in grant order.
    pub new_achievements: Vec<String>,
}

/// Read-only view of the ledger for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub total_points: i64,
    pub level: u32,
    pub points_to_next_level: i64,
    pub achievements: Vec<String>,
}

/// Outcome of a load: either state came from the file, or the file was
/// missing and the engine started empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    FreshStart,
}

/// The goal-tracking engine. Owns all state; a CLI (or any other adapter)
/// drives it through the handful of operations below.
#[derive(Debug, Clone, Default)]
pub struct QuestEngine {
    registry: GoalRegistry,
    ledger: ProgressLedger,
}

impl QuestEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a goal; fails if the name collides case-insensitively.
    pub fn add_goal(&mut self, goal: Goal) -> Result<(), EngineError> {
        tracing::debug!(name = goal.name(), kind = goal.kind().name(), "adding goal");
        self.registry.add(goal)
    }

    /// Record one event for the named goal.
    ///
    /// Dispatches to the goal's scoring rule, applies the delta to the
    /// ledger, and re-evaluates achievements. On an unknown name the ledger
    /// and achievements are untouched.
    pub fn record_event(&mut self, name: &str) -> Result<EventSummary, EngineError> {
        let goal = self
            .registry
            .find_mut(name)
            .ok_or_else(|| EngineError::NotFound {
                name: name.to_string(),
            })?;
        let goal_name = goal.name().to_string();
        let points_delta = goal.record_event();

        let mut new_achievements = self.ledger.apply(points_delta);
        let levels_gained = new_achievements.len() as u32;
        new_achievements.extend(self.ledger.recompute_achievements(&self.registry));

        tracing::debug!(goal = %goal_name, points_delta, "event recorded");
        Ok(EventSummary {
            goal_name,
            points_delta,
            levels_gained,
            new_achievements,
        })
    }

    /// Goals in insertion order.
    pub fn goals(&self) -> impl Iterator<Item = &Goal> {
        self.registry.iter()
    }

    /// `(progress_label, details)` pairs for display, in insertion order.
    pub fn goal_summaries(&self) -> Vec<(String, String)> {
        self.registry
            .iter()
            .map(|g| (g.progress_label(), g.details()))
            .collect()
    }

    pub fn score(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            total_points: self.ledger.total_points(),
            level: self.ledger.level(),
            points_to_next_level: self.ledger.points_to_next_level(),
            achievements: self.ledger.achievements().to_vec(),
        }
    }

    /// Serialize the full engine state to `path` as JSON.
    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        let doc = codec::to_document(&self.registry, &self.ledger);
        let json = serde_json::to_string_pretty(&doc)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "state saved");
        Ok(())
    }

    /// Replace engine state with the contents of `path`.
    ///
    /// A missing file is not an error: the engine resets to empty and
    /// reports [`LoadOutcome::FreshStart`]. A present but unreadable or
    /// malformed file is an error, and the prior state is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome, EngineError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no save file, starting fresh");
            *self = Self::new();
            return Ok(LoadOutcome::FreshStart);
        }

        let content = std::fs::read_to_string(path)?;
        let doc: codec::SaveDocument = serde_json::from_str(&content)?;
        let (registry, ledger) = codec::from_document(doc)?;

        // Fully decoded: only now replace state.
        self.registry = registry;
        self.ledger = ledger;
        tracing::info!(path = %path.display(), goals = self.registry.len(), "state loaded");
        Ok(LoadOutcome::Loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_event_unknown_name_leaves_state_unchanged() {
        let mut engine = QuestEngine::new();
        engine.add_goal(Goal::simple("run", "", 50)).unwrap();

        let err = engine.record_event("swim").unwrap_err();
        assert!(matches!(err, EngineError::NotFound { name } if name == "swim"));
        let score = engine.score();
        assert_eq!(score.total_points, 0);
        assert!(score.achievements.is_empty());
        assert!(!engine.goals().next().unwrap().is_complete());
    }

    #[test]
    fn record_event_summary_includes_level_ups() {
        let mut engine = QuestEngine::new();
        engine.add_goal(Goal::simple("epic", "", 2500)).unwrap();

        let summary = engine.record_event("EPIC").unwrap();
        assert_eq!(summary.goal_name, "epic");
        assert_eq!(summary.points_delta, 2500);
        assert_eq!(summary.levels_gained, 2);
        assert_eq!(
            summary.new_achievements,
            ["Reached Level 2", "Reached Level 3"]
        );
        assert_eq!(engine.score().level, 3);
    }

    #[test]
    fn goal_getter_unlocks_through_engine() {
        let mut engine = QuestEngine::new();
        for i in 0..5 {
            engine.add_goal(Goal::simple(format!("g{i}"), "", 10)).unwrap();
        }
        for i in 0..4 {
            let summary = engine.record_event(&format!("g{i}")).unwrap();
            assert!(summary.new_achievements.is_empty());
        }
        let summary = engine.record_event("g4").unwrap();
        assert_eq!(summary.new_achievements, ["Goal Getter: Complete 5 goals"]);
    }

    #[test]
    fn duplicate_goal_rejected() {
        let mut engine = QuestEngine::new();
        engine.add_goal(Goal::simple("Run", "", 50)).unwrap();
        let err = engine.add_goal(Goal::negative("run", "", 5)).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateName { .. }));
        assert_eq!(engine.goals().count(), 1);
    }

    #[test]
    fn save_load_roundtrip_accrues_no_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quest.json");

        let mut engine = QuestEngine::new();
        engine.add_goal(Goal::eternal("pray", "", 100)).unwrap();
        engine
            .add_goal(Goal::checklist("temple", "", 50, 10, 500))
            .unwrap();
        for _ in 0..3 {
            engine.record_event("pray").unwrap();
        }
        engine.record_event("temple").unwrap();
        let before = engine.score();

        engine.save(&path).unwrap();

        let mut loaded = QuestEngine::new();
        assert_eq!(loaded.load(&path).unwrap(), LoadOutcome::Loaded);

        let after = loaded.score();
        assert_eq!(after, before);
        assert_eq!(loaded.goals().count(), 2);
        let pray = loaded.goals().find(|g| g.name() == "pray").unwrap();
        assert_eq!(pray.eternal_completions(), 3);
    }

    #[test]
    fn load_missing_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = QuestEngine::new();
        engine.add_goal(Goal::simple("old", "", 10)).unwrap();

        let outcome = engine.load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(outcome, LoadOutcome::FreshStart);
        assert_eq!(engine.goals().count(), 0);
        assert_eq!(engine.score().total_points, 0);
    }

    #[test]
    fn load_malformed_file_keeps_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut engine = QuestEngine::new();
        engine.add_goal(Goal::simple("keep", "", 10)).unwrap();
        engine.record_event("keep").unwrap();

        let err = engine.load(&path).unwrap_err();
        assert!(matches!(err, EngineError::Format(_)));
        assert_eq!(engine.goals().count(), 1);
        assert_eq!(engine.score().total_points, 10);
    }
}
