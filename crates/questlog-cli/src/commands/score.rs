//! The `questlog score` command.

use std::path::Path;

use anyhow::Result;

use questlog_core::QuestEngine;

pub fn execute(save_file: &Path) -> Result<()> {
    let mut engine = QuestEngine::new();
    engine.load(save_file)?;

    let score = engine.score();
    println!("Total points: {}", score.total_points);
    println!("Level: {}", score.level);
    println!(
        "Points to next level: {}",
        score.points_to_next_level - score.total_points
    );

    if !score.achievements.is_empty() {
        println!("\nAchievements:");
        for achievement in &score.achievements {
            println!("- {achievement}");
        }
    }
    Ok(())
}
