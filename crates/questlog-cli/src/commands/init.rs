//! The `questlog init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("questlog.toml").exists() {
        println!("questlog.toml already exists, skipping.");
    } else {
        std::fs::write("questlog.toml", SAMPLE_CONFIG)?;
        println!("Created questlog.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add a goal: questlog add --kind simple --name \"Run a marathon\" --points 1000");
    println!("  2. Record an event: questlog record --name \"Run a marathon\"");
    println!("  3. Check your score: questlog score");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# questlog configuration

# Where engine state is saved and loaded.
save_path = "questlog.json"
"#;
