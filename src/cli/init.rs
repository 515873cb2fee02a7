//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::info;

use questboard::config::Config;

/// Default configuration content for questboard init
pub const DEFAULT_CONFIG: &str = r#"# Questboard Configuration
# =======================
#
# Available options:
#   default_quest_xp - XP for a new quest when --xp is not given (default: 100)
#   level_xp_step    - XP between two profile levels (default: 1000)
#   notifications    - Print notifications emitted by actions (default: true)

[settings]
default_quest_xp = 100
level_xp_step = 1000
notifications = true
"#;

/// Write the default config file (to `path`, or ~/.questboard/config.toml)
pub fn init_command(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    info!("Created config file: {}", config_path.display());
    println!("Created {}", config_path.display());

    Ok(())
}
