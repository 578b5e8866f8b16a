//! CLI entry point for planet-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "planet-blog")]
#[command(version)]
#[command(about = "A blog front-end over a remote markdown content API", long_about = None)]
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
    /// Write a default _config.yml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the blog server
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
    },

    /// Fetch a single post from the content API
    Post {
        /// Slug of the post
        slug: String,

        /// Print the sanitized HTML body instead of the post record
        #[arg(long)]
        html: bool,
    },

    /// List recent posts
    List,

    /// Render a local markdown file to sanitized HTML
    Render {
        /// Markdown file to render
        file: PathBuf,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "planet_blog=debug,info"
    } else {
        "planet_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
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
            tracing::info!("Initializing blog in {:?}", target_dir);
            planet_blog::commands::init::init_site(&target_dir)?;
            println!("Initialized blog config in {:?}", target_dir);
        }

        Commands::Server { port, ip, open } => {
            let blog = planet_blog::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            planet_blog::server::start(&blog, &ip, port, open).await?;
        }

        Commands::Post { slug, html } => {
            let blog = planet_blog::Blog::new(&base_dir)?;
            planet_blog::commands::post::run(&blog, &slug, html).await?;
        }

        Commands::List => {
            let blog = planet_blog::Blog::new(&base_dir)?;
            planet_blog::commands::list::run(&blog).await?;
        }

        Commands::Render { file } => {
            let blog = planet_blog::Blog::new(&base_dir)?;
            let path = if file.is_absolute() {
                file
            } else {
                base_dir.join(file)
            };
            planet_blog::commands::render::run(&blog, &path)?;
        }

        Commands::Version => {
            println!("planet-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
