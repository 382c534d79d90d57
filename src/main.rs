//! CLI entry point for artist-page

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "artist-page")]
#[command(author = "Yukang Chen")]
#[command(version)]
#[command(about = "Renders a single-page artist profile from one markdown document", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a config and a sample artist document
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Render the document and write the presentation model
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Report bindings and warnings without writing output
    Check {
        /// Exit with an error if any field fell back to a default
        #[arg(long)]
        strict: bool,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "artist_page=debug,info"
    } else {
        "artist_page=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing artist page in {:?}", target_dir);
            artist_page::commands::init::init_site(&target_dir)?;
            println!("Initialized artist page in {:?}", target_dir);
        }

        Commands::Generate { watch } => {
            let site = artist_page::ArtistPage::new(&base_dir)?;
            tracing::info!("Generating presentation model...");

            site.generate()?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                artist_page::commands::generate::watch(&site).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = artist_page::ArtistPage::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating presentation model...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            artist_page::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Check { strict } => {
            let site = artist_page::ArtistPage::new(&base_dir)?;
            artist_page::commands::check::run(&site, strict)?;
        }

        Commands::Clean => {
            let site = artist_page::ArtistPage::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("artist-page version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
