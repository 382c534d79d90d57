//! Generate output files

use anyhow::Result;

use crate::binding::Warning;
use crate::generator::Generator;
use crate::ArtistPage;

/// Render the document and write the output files
pub fn run(site: &ArtistPage) -> Result<()> {
    let start = std::time::Instant::now();

    let output = site.render()?;
    log_warnings(&output.warnings);

    tracing::info!(
        "Rendered {} blocks for {:?} ({} warnings)",
        output.body.blocks.len(),
        output.model.artist.name,
        output.warnings.len()
    );

    Generator::new(site).generate(&output)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Log each binding warning with its dotted path
pub fn log_warnings(warnings: &[Warning]) {
    for warning in warnings {
        tracing::warn!("{}: {}", warning.path, warning.reason);
    }
}

/// Watch the document and config for changes and regenerate
pub async fn watch(site: &ArtistPage) -> Result<()> {
    tracing::info!("Watching for changes. Press Ctrl+C to stop.");
    crate::watcher::watch(site, run).await
}
