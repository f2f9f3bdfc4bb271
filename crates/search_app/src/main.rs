mod app;
mod config;
mod effects;
mod input;
mod logging;
mod render;

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use engine_logging::{engine_error, engine_info};
use search_core::{method_options, SearchSession};

use crate::app::App;
use crate::effects::EffectRunner;
use crate::input::parse_line;

fn main() -> anyhow::Result<()> {
    let path = config::config_path();
    let config = config::load(&path)?;
    logging::initialize(config.log_destination, config.level_filter());
    engine_info!(
        "Starting search client backend={} ranks={:?}",
        config.backend_url,
        config.svd_ranks
    );

    let runner = EffectRunner::new(config.executor_settings())?;
    let session = SearchSession::with_method(config.default_method.clone());
    let app = App::new(
        session,
        runner,
        method_options(&config.svd_ranks),
        io::stdout(),
    );

    let (input_tx, input_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if input_tx.send(parse_line(&line)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    engine_error!("Failed to read input: {}", err);
                    break;
                }
            }
        }
    });

    app.run(input_rx)?;
    Ok(())
}
