use appicons_core::{config::Config, converter::Locator};
use clap::Parser as _;
use cli::{Cli, Cmd};
use std::path::Path;

pub mod cli;
pub mod commands;

fn setup_logger(verbose: u8) -> eyre::Result<()> {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    Registry::default()
        .with(LevelFilter::from(level))
        .with(
            layer()
                .with_ansi(true)
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}

async fn load_config(args: &Cli, project_dir: &Path) -> eyre::Result<Config> {
    let config = match &args.config_file {
        Some(config_file) => Config::parse_file(config_file).await?,
        None => Config::for_project(project_dir).await?,
    };
    if let Some(config_file) = &config.config_file {
        tracing::info!("using configuration file {}", config_file.display());
    }
    Ok(config)
}

pub async fn main() -> eyre::Result<()> {
    let args = Cli::parse();
    setup_logger(args.verbose)?;

    let project_dir = match &args.project_dir {
        Some(project_dir) => project_dir.clone(),
        None => std::env::current_dir()?,
    };
    let config = load_config(&args, &project_dir).await?;
    let locator = Locator::with_override(
        args.inkscape_binary
            .clone()
            .or_else(|| config.inkscape_binary.clone()),
    );

    match args.subcommand.unwrap_or(Cmd::Generate(Default::default())) {
        Cmd::Generate(args) => commands::generate(&project_dir, &config, locator, args).await,
        Cmd::List(args) => commands::list(&config, args),
        Cmd::Locate => commands::locate(&locator),
        Cmd::Version => {
            println!("appicons {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
