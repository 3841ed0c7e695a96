mod interactive;
mod lookup;
mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use nobetci_core::{AppConfig, ConfigError, SearchForm, SearchSession, SearchState};
use tracing_subscriber::EnvFilter;

use crate::lookup::Lookup;

#[derive(Debug, Parser)]
#[command(name = "nobetci")]
#[command(about = "Find on-duty (nöbetçi) pharmacies in Türkiye")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one lookup and print the result cards
    Search {
        /// Province name or plate code (e.g. Ankara, 06); defaults to the configured province
        #[arg(long, short = 'p')]
        province: Option<String>,
        /// Optional district filter (e.g. Çankaya)
        #[arg(long, short = 'd', default_value = "")]
        district: String,
        /// Print the records as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Interactive form: pick a province, type a district, press Enter
    Interactive {
        /// Preselected province name or plate code
        #[arg(long, short = 'p')]
        province: Option<String>,
    },
    /// List the 81 provinces with their plate codes
    Provinces,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    run(cli.command, nobetci_core::load_app_config).await
}

/// Dispatches a parsed command.
///
/// Configuration is loaded only by the commands that need it, so
/// `provinces` keeps working with a broken environment.
async fn run<F>(command: Option<Commands>, load_config: F) -> anyhow::Result<ExitCode>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    match command {
        Some(Commands::Provinces) => {
            print!("{}", render::province_list());
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Search {
            province,
            district,
            json,
        }) => {
            let config = configure(load_config)?;
            let lookup = Lookup::from_config(&config)?;
            let province = province.unwrap_or_else(|| config.default_province.clone());
            run_search(&lookup, &province, &district, json).await
        }
        Some(Commands::Interactive { province }) => {
            let config = configure(load_config)?;
            let lookup = Lookup::from_config(&config)?;
            let province = province.unwrap_or_else(|| config.default_province.clone());
            interactive::run_interactive(lookup, &province).await?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            configure(load_config)?;
            println!("{}", render::banner(chrono::Local::now().naive_local()));
            println!("{}", render::render_view(&nobetci_core::render(&SearchState::Idle)));
            println!("run `nobetci --help` for commands");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Loads configuration and installs the stderr subscriber at its log level.
fn configure<F>(load_config: F) -> anyhow::Result<AppConfig>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    let config = load_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// One-shot lookup: submit once, wait for the answer, print it.
///
/// Exits non-zero when the search ends in an error state.
async fn run_search(
    lookup: &Lookup,
    province: &str,
    district: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let mut form = SearchForm::new(province)?;
    form.edit_district(district);

    let mut session = SearchSession::new();
    lookup.run_once(&mut session, form.submit()).await;
    let state = session.state();

    if json {
        if let SearchState::Success { results, .. } = state {
            println!("{}", serde_json::to_string_pretty(results)?);
            return Ok(ExitCode::SUCCESS);
        }
        eprintln!("{}", render::render_view(&nobetci_core::render(state)));
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", render::render_view(&nobetci_core::render(state)));
    println!("{}", render::footer(chrono::Local::now().naive_local()));

    if matches!(state, SearchState::Error { .. }) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
