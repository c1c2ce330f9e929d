// ABOUTME: Main entry point for the CF-Imgbed CLI application
// ABOUTME: Provides upload, configure, and documentation commands

use anyhow::Result;
use cfimgbed_sdk::{ImageItem, LogSink, Uploader};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use cfimgbed_cli::config::Config;
use cfimgbed_cli::constants::{env as env_vars, urls};
use cfimgbed_cli::images::load_image;
use cfimgbed_cli::notify::ConsoleNotifier;
use cfimgbed_cli::output::{JsonFormatter, OutputFormat, TableFormatter};
use cfimgbed_cli::prompt::{prompt_settings, write_settings};

#[derive(Parser)]
#[command(name = "cfimgbed")]
#[command(about = "Upload images to a CF-Imgbed deployment", long_about = None)]
#[command(version)]
struct Cli {
    /// Use a specific config file instead of the standard locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload images and print their URLs
    Upload {
        /// Image files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Remote directory, overriding the configured one
        #[arg(long)]
        directory: Option<String>,

        /// Request timeout in seconds (no timeout unless set)
        #[arg(long)]
        timeout: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Pretty print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },

    /// Interactively configure the API endpoint, key, and upload directory
    Configure,

    /// Show the resolved configuration
    Config,

    /// Show where to find project documentation
    Docs,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Determine if color should be used
    let use_color = !cli.no_color
        && env::var("NO_COLOR").is_err()
        && env::var("TERM").unwrap_or_default() != "dumb";

    match cli.command {
        Commands::Upload {
            files,
            directory,
            timeout,
            json,
            pretty,
        } => run_upload(&cli.config, files, directory, timeout, json, pretty, use_color).await,
        Commands::Configure => run_configure(&cli.config),
        Commands::Config => run_show_config(&cli.config),
        Commands::Docs => {
            println!(
                "{} uploader documentation:",
                cfimgbed_sdk::constants::identity::UPLOADER_NAME
            );
            println!("{}", urls::DOCS_URL);
            Ok(())
        }
    }
}

fn load_config(path: &Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load(),
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_upload(
    config_path: &Option<PathBuf>,
    files: Vec<PathBuf>,
    directory: Option<String>,
    timeout: Option<u64>,
    json: bool,
    pretty: bool,
    use_color: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let mut upload_config = config.upload_config();
    if let Some(directory) = directory {
        upload_config.upload_directory = Some(directory);
    }

    let images = files
        .iter()
        .map(|path| load_image(path))
        .collect::<Result<Vec<ImageItem>>>()?;
    let total = images.len();

    let mut uploader = Uploader::new(upload_config)
        .with_notifier(Arc::new(ConsoleNotifier::new(use_color)))
        .with_logger(Arc::new(LogSink));
    if let Some(seconds) = timeout {
        uploader = uploader.with_timeout(Duration::from_secs(seconds));
    }

    let progress = upload_progress(total);
    let result = uploader.upload(images).await;
    if let Some(progress) = progress {
        progress.finish_and_clear();
    }

    let uploaded = match result {
        Ok(uploaded) => uploaded,
        Err(err) => {
            if let Some(help) = err.help_text() {
                eprintln!("{help}");
            }
            return Err(err.into());
        }
    };

    let formatter: Box<dyn OutputFormat> = if json {
        Box::new(JsonFormatter::new(pretty))
    } else {
        Box::new(TableFormatter::new(use_color))
    };
    if !uploaded.is_empty() {
        println!("{}", formatter.format_uploads(&uploaded)?);
    }

    let failed = total - uploaded.len();
    if failed > 0 {
        eprintln!("{failed} of {total} uploads failed");
    }
    if uploaded.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// Spinner while the batch runs; uploads are sequential, so the bar only
/// conveys liveness, not per-image progress.
fn upload_progress(total: usize) -> Option<ProgressBar> {
    let show_progress = {
        use std::io::IsTerminal;
        std::io::stderr().is_terminal() && env::var(env_vars::QUIET).is_err()
    };
    if !show_progress {
        return None;
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("spinner template is valid"),
    );
    progress.set_message(format!(
        "Uploading {total} image{}...",
        if total == 1 { "" } else { "s" }
    ));
    progress.enable_steady_tick(Duration::from_millis(100));
    Some(progress)
}

fn run_configure(config_path: &Option<PathBuf>) -> Result<()> {
    let existing = load_config(config_path).unwrap_or_default();
    let settings = prompt_settings(existing.settings())?;

    let path = match config_path {
        Some(path) => path.clone(),
        None => Config::default_write_path()?,
    };
    write_settings(&path, settings)?;

    println!("Configuration written to {}", path.display());
    Ok(())
}

fn run_show_config(config_path: &Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let resolved = config.upload_config();

    println!(
        "api_endpoint: {}",
        resolved.api_endpoint.as_deref().unwrap_or("(not set)")
    );
    println!(
        "api_key: {}",
        if resolved.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
            "(set)"
        } else {
            "(not set)"
        }
    );
    println!(
        "upload_directory: {}",
        resolved.upload_directory.as_deref().unwrap_or("(not set)")
    );
    Ok(())
}
