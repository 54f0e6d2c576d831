mod cmd;
mod output;
mod settings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "confignav",
    about = "Resolve route tags to deployment config pages and navigate there",
    version,
    propagate_version = true
)]
struct Cli {
    /// Settings file (default: nearest .confignav.yaml above the current directory)
    #[arg(long, global = true, env = "CONFIGNAV_CONFIG")]
    config: Option<PathBuf>,

    /// Origin prepended to resolved paths, e.g. http://cloud-lab:5000
    #[arg(long, global = true, env = "CONFIGNAV_BASE_URL")]
    base_url: Option<String>,

    /// Fail on unknown route tags instead of ignoring them
    #[arg(long, global = true)]
    strict: bool,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the URL for a route tag
    Resolve {
        /// Route tag ('' for the config page itself)
        tag: String,

        /// Config id (default: read from the configured environment variable)
        #[arg(long, short = 'i', allow_hyphen_values = true)]
        config_id: Option<String>,
    },

    /// Open the page for a route tag in the browser
    Open {
        /// Route tag ('' for the config page itself)
        tag: String,

        /// Config id (default: read from the configured environment variable)
        #[arg(long, short = 'i', allow_hyphen_values = true)]
        config_id: Option<String>,
    },

    /// List route tags and their URL templates
    Routes {
        /// Show concrete URLs for this config id instead of templates
        #[arg(long, short = 'i', allow_hyphen_values = true)]
        config_id: Option<String>,
    },

    /// Write a .confignav.yaml (or the --config path) from the given flags
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Run the HTTP redirect service
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "0")]
        port: u16,

        /// Open the route listing in the browser once listening
        #[arg(long)]
        open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Init { force } = cli.command {
        let target = cli
            .config
            .unwrap_or_else(|| PathBuf::from(confignav_core::config::CONFIG_FILE));
        if let Err(e) = cmd::init::run(&target, cli.base_url, cli.strict, force) {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
        return;
    }

    let result = settings::load(cli.config.as_deref(), cli.base_url, cli.strict).and_then(
        |config| match cli.command {
            Commands::Resolve { tag, config_id } => {
                cmd::resolve::run(&config, &tag, config_id, cli.json)
            }
            Commands::Open { tag, config_id } => cmd::open::run(&config, &tag, config_id, cli.json),
            Commands::Routes { config_id } => cmd::routes::run(&config, config_id, cli.json),
            Commands::Init { .. } => unreachable!("handled before settings are loaded"),
            Commands::Serve { bind, port, open } => cmd::serve::run(&config, &bind, port, open),
        },
    );

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
