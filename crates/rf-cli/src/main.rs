//! Terminal frontend for the Outbreak: Red Facility text adventure.

mod terminal;

use std::process;

use clap::Parser;
use log::{info, warn};
use rf_engine::{EngineConfig, EngineError, SceneDriver};

use terminal::TerminalPresenter;

#[derive(Parser)]
#[command(
    name = "outbreak",
    about = "Outbreak: Red Facility, a terminal escape story",
    long_about = "Outbreak: Red Facility, a terminal escape story.\n\n\
                  Choices are made with the arrow keys on a terminal, or one \
                  menu number per line when input is piped.\n\
                  Set RUST_LOG=debug to trace scene changes on stderr.",
    version
)]
struct Cli {}

fn run() -> Result<(), EngineError> {
    let config = EngineConfig::default();
    let mut ui = TerminalPresenter::new(config.clone());
    let playthrough = SceneDriver::new(&mut ui)
        .with_config(config)
        .run(rf_story::start())?;
    info!("visited {} scenes", playthrough.steps());
    Ok(())
}

fn main() {
    Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp_millis()
        .init();

    // Raw-mode reads see Ctrl+C as a key; everywhere else it arrives as SIGINT.
    if let Err(e) = ctrlc::set_handler(|| {
        terminal::restore();
        process::exit(1);
    }) {
        warn!("no interrupt handler: {e}");
    }

    match run() {
        Ok(()) => {}
        Err(EngineError::UserInterrupt) => process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}
