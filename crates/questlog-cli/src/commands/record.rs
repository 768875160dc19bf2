//! The `questlog record` command.

use std::path::Path;

use anyhow::Result;

use questlog_core::QuestEngine;

pub fn execute(save_file: &Path, name: &str) -> Result<()> {
    let mut engine = QuestEngine::new();
    engine.load(save_file)?;

    let summary = engine.record_event(name)?;
    engine.save(save_file)?;

    println!(
        "Event recorded for '{}': {} points.",
        summary.goal_name, summary.points_delta
    );
    if summary.levels_gained > 0 {
        println!("LEVEL UP! You are now Level {}.", engine.score().level);
    }
    for achievement in &summary.new_achievements {
        println!("Achievement unlocked: {achievement}");
    }
    Ok(())
}
