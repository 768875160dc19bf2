//! Goal variants and their event-recording rules.
//!
//! A [`Goal`] is a named, trackable unit of behavior. Recording an event for
//! it returns a signed points delta which the ledger applies; the goal itself
//! knows nothing about totals or levels, so each variant's scoring rule can
//! be tested in isolation.

use std::fmt;

/// Variant-specific state and scoring rule of a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalKind {
    /// Completes once, awards its points once.
    Simple,
    /// Never completes; awards its points on every event.
    Eternal { times_completed: u32 },
    /// Completes after `target_count` events, with a bonus on the last one.
    Checklist {
        times_completed: u32,
        target_count: u32,
        bonus_points: i64,
    },
    /// A bad habit: every event subtracts points, never completes.
    Negative,
    /// Accumulates steps toward a target; partial points per step, full
    /// points on the step that reaches the target.
    Progress {
        current_progress: u32,
        target_progress: u32,
        progress_points: i64,
    },
}

impl GoalKind {
    /// Fixed discriminant tag, used for display and persistence.
    pub fn name(&self) -> &'static str {
        match self {
            GoalKind::Simple => "Simple",
            GoalKind::Eternal { .. } => "Eternal",
            GoalKind::Checklist { .. } => "Checklist",
            GoalKind::Negative => "Negative",
            GoalKind::Progress { .. } => "Progress",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A trackable goal: common attributes plus variant-specific state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) points: i64,
    pub(crate) complete: bool,
    pub(crate) kind: GoalKind,
}

impl Goal {
    /// A one-time goal worth `points` on completion.
    pub fn simple(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Self::new(name, description, points, GoalKind::Simple)
    }

    /// A repeatable goal worth `points` on every event.
    pub fn eternal(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Self::new(
            name,
            description,
            points,
            GoalKind::Eternal { times_completed: 0 },
        )
    }

    /// A goal that completes after `target_count` events, paying `points`
    /// per event and `bonus_points` extra on the event that completes it.
    pub fn checklist(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
        target_count: u32,
        bonus_points: i64,
    ) -> Self {
        Self::new(
            name,
            description,
            points,
            GoalKind::Checklist {
                times_completed: 0,
                target_count,
                bonus_points,
            },
        )
    }

    /// A bad habit costing `points` on every event.
    pub fn negative(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Self::new(name, description, points, GoalKind::Negative)
    }

    /// A long-running goal: `progress_points` per step, `completion_points`
    /// on the step that reaches `target_progress`.
    pub fn progress(
        name: impl Into<String>,
        description: impl Into<String>,
        completion_points: i64,
        target_progress: u32,
        progress_points: i64,
    ) -> Self {
        Self::new(
            name,
            description,
            completion_points,
            GoalKind::Progress {
                current_progress: 0,
                target_progress,
                progress_points,
            },
        )
    }

    fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
        kind: GoalKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            points,
            complete: false,
            kind,
        }
    }

    /// Used by the persistence codec to reconstruct a goal with its stored
    /// counters set directly, without replaying events.
    pub(crate) fn restore(
        name: String,
        description: String,
        points: i64,
        complete: bool,
        kind: GoalKind,
    ) -> Self {
        Self {
            name,
            description,
            points,
            complete,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn kind(&self) -> &GoalKind {
        &self.kind
    }

    /// How many events this eternal goal has recorded; 0 for other variants.
    /// The ledger sums these for the "Eternal Champion" achievement instead
    /// of touching the goals.
    pub fn eternal_completions(&self) -> u32 {
        match self.kind {
            GoalKind::Eternal { times_completed } => times_completed,
            _ => 0,
        }
    }

    /// Record one event against this goal.
    ///
    /// Returns the signed points delta to apply to the ledger. Once a
    /// completable variant is complete, further events return 0 and change
    /// nothing.
    pub fn record_event(&mut self) -> i64 {
        match &mut self.kind {
            GoalKind::Simple => {
                if self.complete {
                    return 0;
                }
                self.complete = true;
                self.points
            }
            GoalKind::Eternal { times_completed } => {
                *times_completed += 1;
                self.points
            }
            GoalKind::Checklist {
                times_completed,
                target_count,
                bonus_points,
            } => {
                if self.complete {
                    return 0;
                }
                *times_completed += 1;
                if *times_completed >= *target_count {
                    self.complete = true;
                    self.points + *bonus_points
                } else {
                    self.points
                }
            }
            GoalKind::Negative => -self.points,
            GoalKind::Progress {
                current_progress,
                target_progress,
                progress_points,
            } => {
                if self.complete {
                    return 0;
                }
                *current_progress += 1;
                if *current_progress >= *target_progress {
                    self.complete = true;
                    self.points
                } else {
                    *progress_points
                }
            }
        }
    }

    /// Short status token for list output.
    pub fn progress_label(&self) -> String {
        match &self.kind {
            GoalKind::Simple => {
                if self.complete {
                    "[X]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            GoalKind::Eternal { .. } => "[∞]".to_string(),
            GoalKind::Checklist {
                times_completed,
                target_count,
                ..
            } => format!("{times_completed}/{target_count}"),
            GoalKind::Negative => "[!]".to_string(),
            GoalKind::Progress {
                current_progress,
                target_progress,
                ..
            } => format!("{current_progress}/{target_progress}"),
        }
    }

    /// One-line description of the goal and its scoring rule.
    pub fn details(&self) -> String {
        let base = format!("{} ({})", self.name, self.description);
        match &self.kind {
            GoalKind::Simple => format!("{base} - {} pts on completion", self.points),
            GoalKind::Eternal { times_completed } => format!(
                "{base} - {} pts per event, recorded {times_completed} times",
                self.points
            ),
            GoalKind::Checklist {
                target_count,
                bonus_points,
                ..
            } => format!(
                "{base} - {} pts per event, +{bonus_points} bonus at {target_count}",
                self.points
            ),
            GoalKind::Negative => format!("{base} - costs {} pts per event", self.points),
            GoalKind::Progress {
                target_progress,
                progress_points,
                ..
            } => format!(
                "{base} - {progress_points} pts per step, {} pts at {target_progress}",
                self.points
            ),
        }
    }
}
