//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("gradebook.toml");
    if path.exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit gradebook.toml to change precision or the default format");
    println!("  2. Run: gradebook report");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Decimal places used when printing averages.
decimal_places = 1

# Output format of `gradebook report`: text, table or json.
default_format = "text"

# Fixed threshold for the better-or-equal list. Defaults to the
# institution average when unset.
# threshold = "2.5"
"#;
