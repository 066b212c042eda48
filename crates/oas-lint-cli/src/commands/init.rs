//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# oas-lint configuration

# Fail when any violation reaches this severity: "error", "warning" or "info".
fail-on = "error"

# Each rule can be disabled or have its severity overridden.
# Rules run (and report) in this order.

[rules.operation-description]
enabled = true

[rules.property-name-case]
enabled = true

[rules.post-created-response]
enabled = true
# severity = "warning"

[rules.no-generic-id-parameter]
enabled = true

[rules.enum-upper-snake-case]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("oas-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created oas-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit oas-lint.toml to configure rules");
    println!("  2. Run: oas-lint check openapi.yaml");

    Ok(())
}
