use anyhow::Result;
use barboard::{backend::create_backend, config::Config, logger::Logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        if path.exists() {
            eprintln!("❌ Configuration file already exists: {}", path.display());
            return Ok(());
        }
        return Config::generate_default_config(&path);
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    let backend = create_backend(&config.api)?;

    // Run the TUI application
    ui::run_app(&config, backend, logger).await?;

    Ok(())
}
