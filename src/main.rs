//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::{self, OutputFormat};
use folio::session::ContactForm;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "A personal portfolio and blog", long_about = None)]
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
    /// List posts, optionally filtered
    List {
        /// Case-insensitive text matched against title and excerpt
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only posts carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List all tags with post counts
    Tags,

    /// Show a single post
    Show {
        /// Slug of the post
        slug: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Browse posts interactively
    Browse,

    /// Submit the contact form (nothing is sent)
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Generate, then serve the public folder
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

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let folio = folio::Folio::new(&base_dir)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::List {
            search,
            tag,
            format,
        } => {
            commands::list::run(&folio, &mut stdout, &search, tag.as_deref(), format)?;
        }

        Commands::Tags => commands::list::tags(&folio, &mut stdout)?,

        Commands::Show { slug, format } => {
            commands::show::run(&folio, &mut stdout, &slug, format)?;
        }

        Commands::Browse => {
            let stdin = std::io::stdin().lock();
            commands::browse::run(&folio, stdin, &mut stdout)?;
        }

        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                subject,
                message,
            };
            commands::contact::run(&folio, &mut stdout, form)?;
        }

        Commands::Generate => {
            tracing::info!("Generating static files...");
            folio.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            tracing::info!("Generating static files...");
            folio.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            drop(stdout);
            folio::server::start(&folio, &ip, port).await?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning public folder...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
