use std::io;
use std::process::ExitCode;

use lotto::console::{ConsoleInput, ConsoleOutput};
use lotto::DrawController;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut controller = DrawController::new(
        ConsoleInput::new(io::stdin().lock()),
        ConsoleOutput::new(io::stdout()),
        rand::thread_rng(),
    );

    match controller.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
