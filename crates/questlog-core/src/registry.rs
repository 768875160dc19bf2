//! Ordered, name-keyed collection of goals.

use crate::error::EngineError;
use crate::goal::Goal;

/// Insertion-ordered goal collection with case-insensitive name lookup.
///
/// Names are unique (case-insensitively); goals are never removed.
#[derive(Debug, Clone, Default)]
pub struct GoalRegistry {
    goals: Vec<Goal>,
}

impl GoalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a goal, rejecting case-insensitive name collisions.
    pub fn add(&mut self, goal: Goal) -> Result<(), EngineError> {
        if self.find(goal.name()).is_some() {
            return Err(EngineError::DuplicateName {
                name: goal.name().to_string(),
            });
        }
        self.goals.push(goal);
        Ok(())
    }

    /// Case-insensitive exact-match lookup.
    pub fn find(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.name().eq_ignore_ascii_case(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Goal> {
        self.goals
            .iter_mut()
            .find(|g| g.name().eq_ignore_ascii_case(name))
    }

    /// Goals in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Count of goals whose completion flag is set.
    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|g| g.is_complete()).count()
    }

    /// Sum of recorded events across all eternal goals.
    pub fn eternal_completions_total(&self) -> u32 {
        self.goals.iter().map(Goal::eternal_completions).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_find_case_insensitive() {
        let mut registry = GoalRegistry::new();
        registry.add(Goal::simple("Run", "jog daily", 50)).unwrap();
        assert!(registry.find("run").is_some());
        assert!(registry.find("RUN").is_some());
        assert!(registry.find("walk").is_none());
    }

    #[test]
    fn duplicate_name_rejected_and_registry_unchanged() {
        let mut registry = GoalRegistry::new();
        registry.add(Goal::simple("Run", "jog daily", 50)).unwrap();
        let err = registry.add(Goal::eternal("RUN", "other", 10)).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateName { name } if name == "RUN"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find("run").unwrap().points(), 50);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut registry = GoalRegistry::new();
        for name in ["c", "a", "b"] {
            registry.add(Goal::simple(name, "", 1)).unwrap();
        }
        let names: Vec<_> = registry.iter().map(Goal::name).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn eternal_completions_total_sums_only_eternals() {
        let mut registry = GoalRegistry::new();
        registry.add(Goal::eternal("e1", "", 10)).unwrap();
        registry.add(Goal::eternal("e2", "", 10)).unwrap();
        registry.add(Goal::checklist("c", "", 10, 5, 0)).unwrap();
        for _ in 0..3 {
            registry.find_mut("e1").unwrap().record_event();
        }
        registry.find_mut("e2").unwrap().record_event();
        registry.find_mut("c").unwrap().record_event();
        assert_eq!(registry.eternal_completions_total(), 4);
    }
}
