use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use awqat::{
    cli::{self, TerminalPrompter, TodayOptions},
    config, error, info,
    management::{ConfigStore, FileConfigStore},
    types::AppConfig,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default())
        .placeholder(AnsiColor::BrightBlue.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Re-run the setup wizard
    #[clap(long)]
    setup: bool,

    /// Reset all config and re-run setup
    #[clap(long)]
    reset: bool,

    /// Show the full week's prayer times
    #[clap(long)]
    week: bool,

    /// Output today's prayers as JSON
    #[clap(long)]
    json: bool,

    /// Show only the next prayer + countdown
    #[clap(long)]
    next: bool,

    /// Show your saved configuration
    #[clap(long)]
    info: bool,

    /// Override city for this run (not saved)
    #[clap(long)]
    city: Option<String>,

    /// Override country for this run (not saved)
    #[clap(long)]
    country: Option<String>,

    /// Print shell completions
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

async fn run_setup(store: &FileConfigStore) -> AppConfig {
    let mut prompter = TerminalPrompter::stdio();
    match cli::setup(store, &mut prompter).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            warning!("Setup cancelled.");
            std::process::exit(0);
        }
        Err(e) => error!("Setup failed. Err: {}", e),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let store = FileConfigStore::default();
    let today_options = TodayOptions {
        json: cli.json,
        next: cli.next,
        city: cli.city.clone(),
        country: cli.country.clone(),
    };

    if cli.reset {
        if let Err(e) = store.clear().await {
            error!("Cannot reset configuration. Err: {}", e);
        }
        info!("Cleared {}", store.path().display());
        let config = run_setup(&store).await;
        cli::today(&config, &TodayOptions::default()).await;
        return;
    }

    if cli.setup {
        let config = run_setup(&store).await;
        cli::today(&config, &TodayOptions::default()).await;
        return;
    }

    if cli.info {
        cli::info(&store).await;
        return;
    }

    let config = match store.load().await {
        Ok(Some(config)) => config,
        Ok(None) => {
            let config = run_setup(&store).await;
            cli::today(&config, &TodayOptions::default()).await;
            return;
        }
        Err(e) => error!("Cannot read configuration. Err: {}", e),
    };

    if cli.week {
        cli::week(&config, cli.city.as_deref(), cli.country.as_deref()).await;
        return;
    }

    cli::today(&config, &today_options).await;
}
