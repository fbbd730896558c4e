mod api;
mod app;
mod bot;
mod champions;
mod config;
mod display;
mod error;
mod mastery;
mod region;
mod render;
mod stats;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use app::AppContext;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{display_error, display_failure, display_info, display_masteries, display_success};
use error::AppError;
use indicatif::ProgressBar;
use mastery::MasteryLookup;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Mastery Bot")]
#[command(about = "Discord bot showing League of Legends champion mastery", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the Discord bot (needs DISCORD_TOKEN)
    Bot,

    /// Look up a player from the terminal
    Lookup {
        /// Summoner name
        name: String,

        /// Region code, e.g. na, euw, kr
        region: String,

        /// Also write the mastery chart to this PNG file
        #[arg(long)]
        chart: Option<PathBuf>,
    },
}

fn init_logging(default_directives: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Bot => {
            init_logging("info,serenity=warn")?;
            let context = Arc::new(AppContext::new(Config::from_env()?));
            bot::start::start_bot(context)
                .await
                .context("Discord bot stopped")?;
        }
        Command::Lookup {
            name,
            region,
            chart,
        } => {
            init_logging("warn")?;
            let context = AppContext::new(Config::from_env()?);
            lookup(&context, &name, &region, chart).await?;
        }
    }

    Ok(())
}

async fn lookup(
    context: &AppContext,
    name: &str,
    region: &str,
    chart: Option<PathBuf>,
) -> Result<(), AppError> {
    display_info(&format!("Fetching champion mastery for {} in region {}", name, region));

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Talking to Riot...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let lookup = context.masteries.get_masteries(name, region).await;
    spinner.finish_and_clear();

    let masteries = match lookup? {
        MasteryLookup::Found(masteries) => masteries,
        MasteryLookup::Failed(reason) => {
            display_failure(reason);
            return Ok(());
        }
    };

    display_masteries(name, &masteries);

    if let Some(path) = chart {
        let png = render::chart::render_chart(name, &masteries.names(), &masteries.points())?;
        std::fs::write(&path, png)
            .map_err(|e| AppError::ChartError(format!("failed to write {}: {}", path.display(), e)))?;
        display_success(&format!("Chart saved to {}", path.display()));
    }

    Ok(())
}
