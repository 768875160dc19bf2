//! The `questlog add` command.

use std::path::Path;

use anyhow::{bail, Context, Result};

use questlog_core::{Goal, QuestEngine};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    save_file: &Path,
    kind: &str,
    name: String,
    description: String,
    points: i64,
    target: Option<u32>,
    bonus: Option<i64>,
    step_points: Option<i64>,
) -> Result<()> {
    let goal = match kind.to_lowercase().as_str() {
        "simple" => Goal::simple(name, description, points),
        "eternal" => Goal::eternal(name, description, points),
        "checklist" => {
            let target = target.context("checklist goals require --target")?;
            Goal::checklist(name, description, points, target, bonus.unwrap_or(0))
        }
        "negative" => Goal::negative(name, description, points),
        "progress" => {
            let target = target.context("progress goals require --target")?;
            let step_points = step_points.context("progress goals require --step-points")?;
            Goal::progress(name, description, points, target, step_points)
        }
        other => bail!(
            "unknown goal kind '{other}' (expected simple, eternal, checklist, negative, progress)"
        ),
    };

    let mut engine = QuestEngine::new();
    engine.load(save_file)?;

    let kind_name = goal.kind().name();
    let goal_name = goal.name().to_string();
    engine.add_goal(goal)?;
    engine.save(save_file)?;

    println!("Added {kind_name} goal '{goal_name}'.");
    Ok(())
}
