use anyhow::Result;
use tracing::info;

use skeletonable_core::AppConfig;

pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
            return Ok(());
        }
        AppConfig::default().save_to(&path)?;
        info!(path = %path.display(), "wrote default config");
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let source = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("# {}{}\n", path.display(), source);
    print!("{}", config.to_toml()?);
    println!("\n# Log file: {}", config.log_path().display());
    Ok(())
}
