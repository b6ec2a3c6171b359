//! Media listing command

use anyhow::Result;
use tracing::info;

/// Print every image in the media folder
pub async fn list_command(config_loader: crate::config::CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    info!("Listing images in {}", config.media_dir.display());

    let library = super::open_library(&config)?;
    for file in library.files() {
        println!("{}", file.filename);
    }

    Ok(())
}
