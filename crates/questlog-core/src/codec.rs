//! Save-file schema and conversions.
//!
//! The save document is an explicit discriminated schema: one record shape
//! per goal variant, selected by a `type` tag. Decoding reconstructs counters
//! by direct assignment — it never replays `record_event`, which would
//! re-trigger scoring side effects and corrupt the totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::goal::{Goal, GoalKind};
use crate::ledger::ProgressLedger;
use crate::registry::GoalRegistry;

/// Top-level save document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDocument {
    pub goals: Vec<GoalRecord>,
    pub total_points: i64,
    pub level: u32,
    pub points_to_next_level: i64,
    pub achievements: Vec<String>,
    /// When the document was written. Informational only.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

/// Wire shape of a single goal, discriminated by the `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GoalRecord {
    #[serde(rename_all = "camelCase")]
    Simple {
        name: String,
        description: String,
        points: i64,
        is_complete: bool,
    },
    #[serde(rename_all = "camelCase")]
    Eternal {
        name: String,
        description: String,
        points: i64,
        is_complete: bool,
        times_completed: u32,
    },
    #[serde(rename_all = "camelCase")]
    Checklist {
        name: String,
        description: String,
        points: i64,
        is_complete: bool,
        times_completed: u32,
        target_count: u32,
        bonus_points: i64,
    },
    #[serde(rename_all = "camelCase")]
    Negative {
        name: String,
        description: String,
        points: i64,
        is_complete: bool,
    },
    #[serde(rename_all = "camelCase")]
    Progress {
        name: String,
        description: String,
        points: i64,
        is_complete: bool,
        current_progress: u32,
        target_progress: u32,
        progress_points: i64,
    },
}

impl From<&Goal> for GoalRecord {
    fn from(goal: &Goal) -> Self {
        let name = goal.name().to_string();
        let description = goal.description().to_string();
        let points = goal.points();
        let is_complete = goal.is_complete();

        match *goal.kind() {
            GoalKind::Simple => GoalRecord::Simple {
                name,
                description,
                points,
                is_complete,
            },
            GoalKind::Eternal { times_completed } => GoalRecord::Eternal {
                name,
                description,
                points,
                is_complete,
                times_completed,
            },
            GoalKind::Checklist {
                times_completed,
                target_count,
                bonus_points,
            } => GoalRecord::Checklist {
                name,
                description,
                points,
                is_complete,
                times_completed,
                target_count,
                bonus_points,
            },
            GoalKind::Negative => GoalRecord::Negative {
                name,
                description,
                points,
                is_complete,
            },
            GoalKind::Progress {
                current_progress,
                target_progress,
                progress_points,
            } => GoalRecord::Progress {
                name,
                description,
                points,
                is_complete,
                current_progress,
                target_progress,
                progress_points,
            },
        }
    }
}

impl From<GoalRecord> for Goal {
    fn from(record: GoalRecord) -> Self {
        match record {
            GoalRecord::Simple {
                name,
                description,
                points,
                is_complete,
            } => Goal::restore(name, description, points, is_complete, GoalKind::Simple),
            GoalRecord::Eternal {
                name,
                description,
                points,
                is_complete,
                times_completed,
            } => Goal::restore(
                name,
                description,
                points,
                is_complete,
                GoalKind::Eternal { times_completed },
            ),
            GoalRecord::Checklist {
                name,
                description,
                points,
                is_complete,
                times_completed,
                target_count,
                bonus_points,
            } => Goal::restore(
                name,
                description,
                points,
                is_complete,
                GoalKind::Checklist {
                    times_completed,
                    target_count,
                    bonus_points,
                },
            ),
            GoalRecord::Negative {
                name,
                description,
                points,
                is_complete,
            } => Goal::restore(name, description, points, is_complete, GoalKind::Negative),
            GoalRecord::Progress {
                name,
                description,
                points,
                is_complete,
                current_progress,
                target_progress,
                progress_points,
            } => Goal::restore(
                name,
                description,
                points,
                is_complete,
                GoalKind::Progress {
                    current_progress,
                    target_progress,
                    progress_points,
                },
            ),
        }
    }
}

/// Snapshot the registry and ledger into a save document.
pub fn to_document(registry: &GoalRegistry, ledger: &ProgressLedger) -> SaveDocument {
    SaveDocument {
        goals: registry.iter().map(GoalRecord::from).collect(),
        total_points: ledger.total_points(),
        level: ledger.level(),
        points_to_next_level: ledger.points_to_next_level(),
        achievements: ledger.achievements().to_vec(),
        saved_at: Some(Utc::now()),
    }
}

/// Rebuild registry and ledger from a save document.
///
/// A document with duplicate goal names is malformed.
pub fn from_document(
    doc: SaveDocument,
) -> Result<(GoalRegistry, ProgressLedger), serde_json::Error> {
    let mut registry = GoalRegistry::new();
    for record in doc.goals {
        let goal = Goal::from(record);
        let name = goal.name().to_string();
        if registry.add(goal).is_err() {
            return Err(serde::de::Error::custom(format!(
                "duplicate goal name '{name}' in save data"
            )));
        }
    }

    let ledger = ProgressLedger::restore(
        doc.total_points,
        doc.level,
        doc.points_to_next_level,
        doc.achievements,
    );
    Ok((registry, ledger))
}
