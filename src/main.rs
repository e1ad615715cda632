use signal_scheduler::batch::run_batch;
use signal_scheduler::config::Config;
use std::process;
use structopt::StructOpt;

#[tokio::main]
async fn main() {
    let config = Config::from_args();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_env("RUST_LOG")
        .init();

    let summary = run_batch(config).await;
    if !summary.all_succeeded() {
        eprintln!(
            "{} of {} files failed, see the log above",
            summary.failed(),
            summary.records.len()
        );
        process::exit(1);
    }
}
