//! CLI entry point for cms-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cms-site")]
#[command(version = "0.1.0")]
#[command(about = "Render a CMS-backed marketing and blog site", long_about = None)]
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
    /// Fetch content and generate static files
    #[command(alias = "g")]
    Generate,

    /// Generate, then serve the site locally
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Clean the public folder
    Clean,

    /// List CMS content
    List {
        /// Type of content to list (post, page, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "cms_site=debug,info"
    } else {
        "cms_site=info"
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
        Commands::Generate => {
            let site = cms_site::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate().await?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            let site = cms_site::Site::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            site.generate().await?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            cms_site::server::start(&site, &ip, port).await?;
        }

        Commands::Clean => {
            let site = cms_site::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = cms_site::Site::new(&base_dir)?;
            cms_site::commands::list::run(&site, &r#type).await?;
        }

        Commands::Version => {
            println!("cms-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
