//! Report how the document binds without writing anything

use anyhow::Result;

use crate::binding::EmbedRequest;
use crate::ArtistPage;

/// Print the bound fields and every warning. With `strict`, any warning
/// is an error.
pub fn run(site: &ArtistPage, strict: bool) -> Result<()> {
    let output = site.render()?;
    let model = &output.model;

    println!("Artist: {}", model.artist.name);
    println!("Body: {} blocks", output.body.blocks.len());
    println!("Social links ({}):", model.social.len());
    for (platform, url) in &model.social {
        println!("  {} - {}", platform, url);
    }

    println!("Embeds:");
    println!("  youtube: {}", status(&model.embeds.youtube));
    println!("  spotify: {}", status(&model.embeds.spotify));
    println!("  tiktok: {}", status(&model.embeds.tiktok));
    println!("  concerts: {}", status(&model.embeds.concerts));

    println!("Warnings ({}):", output.warnings.len());
    for warning in &output.warnings {
        println!("  {} ({})", warning.path, warning.reason);
    }

    if strict && !output.warnings.is_empty() {
        anyhow::bail!(
            "{} field(s) fell back to defaults",
            output.warnings.len()
        );
    }

    Ok(())
}

fn status<P>(request: &EmbedRequest<P>) -> &'static str {
    match request {
        EmbedRequest::Available { .. } => "available",
        EmbedRequest::Unavailable { .. } => "unavailable",
        EmbedRequest::Disabled => "disabled",
    }
}
