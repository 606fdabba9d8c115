//! CLI entry point for the bike rental dashboard.
//!
//! Provides subcommands for rendering the dashboard page and for logging the
//! computed summaries.

use anyhow::Result;
use bikeshare_dashboard::analyzers::analyzer::Dashboard;
use bikeshare_dashboard::config::{DEFAULT_DATA_PATH, DEFAULT_LOG_FILE_PATH, DEFAULT_OUTPUT_PATH};
use bikeshare_dashboard::output::{print_json, print_pretty, write_page};
use bikeshare_dashboard::render::content::Profile;
use bikeshare_dashboard::render::render_page;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_dashboard")]
#[command(about = "Renders a bike rental analysis dashboard from a CSV dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dashboard to a standalone HTML page
    Render {
        /// Dataset CSV to read
        #[arg(short, long, env = "DASHBOARD_DATA", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// HTML file to write
        #[arg(short, long, env = "DASHBOARD_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Log the weather, temperature and hourly summaries
    Summary {
        /// Dataset CSV to read
        #[arg(short, long, env = "DASHBOARD_DATA", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Log as JSON instead of the debug format
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Overrides for the sidebar author card.
#[derive(Args)]
struct ProfileArgs {
    #[arg(long, env = "DASHBOARD_AUTHOR_NAME")]
    author_name: Option<String>,

    #[arg(long, env = "DASHBOARD_AUTHOR_EMAIL")]
    author_email: Option<String>,

    #[arg(long, env = "DASHBOARD_DICODING_ID")]
    dicoding_id: Option<String>,

    #[arg(long, env = "DASHBOARD_AVATAR_URL")]
    avatar_url: Option<String>,
}

impl ProfileArgs {
    fn into_profile(self) -> Profile {
        let defaults = Profile::default();
        Profile {
            name: self.author_name.unwrap_or(defaults.name),
            email: self.author_email.unwrap_or(defaults.email),
            dicoding_id: self.dicoding_id.unwrap_or(defaults.dicoding_id),
            avatar_url: self.avatar_url.unwrap_or(defaults.avatar_url),
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE_PATH.to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            data,
            output,
            profile,
        } => {
            let dashboard = Dashboard::analyze(&data)?;
            let html = render_page(&dashboard, &profile.into_profile());
            write_page(&output, &html)?;

            info!(output = %output.display(), "Dashboard rendered");
        }
        Commands::Summary { data, json } => {
            let dashboard = Dashboard::analyze(&data)?;
            if json {
                print_json(&dashboard)?;
            } else {
                print_pretty(&dashboard);
            }
        }
    }

    Ok(())
}
