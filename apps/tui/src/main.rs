mod app;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use color_eyre::Result;
use indie_sync::Showcase;
use indie_sync_tui::cli::CliArgs;
use indie_sync_tui::{headless, init_app_config, loader, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = match init_app_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}\n\n{}", CliArgs::help_text());
            std::process::exit(2);
        }
    };
    init_logging(&config);

    let loaded = loader::load_catalog(&config.data_path).await;

    if args.headless || args.json || !is_terminal() {
        let showcase = Showcase::boot(loaded, config.theme)?;
        let output = if args.json {
            headless::render_json(&showcase)?
        } else {
            headless::render_text(&showcase)
        };
        println!("{output}");
        return Ok(());
    }

    let mut app = App::from_load(loaded, config.theme);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup(true, true);

    result
}

fn init_logging(config: &AppConfig) {
    let level = if config.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
