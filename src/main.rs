use clap::Parser;
use lifegame_lib::{report, Args};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    lifegame_core::init_logging();
    let args = Args::parse();

    let result = match args.resolve_config() {
        Ok(config) => lifegame_lib::run(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
