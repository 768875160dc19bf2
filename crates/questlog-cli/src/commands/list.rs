//! The `questlog list` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use questlog_core::QuestEngine;

pub fn execute(save_file: &Path) -> Result<()> {
    let mut engine = QuestEngine::new();
    engine.load(save_file)?;

    let summaries = engine.goal_summaries();
    if summaries.is_empty() {
        println!("No goals yet. Add one with `questlog add`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Progress", "Goal"]);
    for (progress, details) in &summaries {
        table.add_row(vec![Cell::new(progress), Cell::new(details)]);
    }

    println!("{table}");
    println!("{} goal(s)", summaries.len());
    Ok(())
}
