use clap::Parser;
use notification_app::{
    app::{run, AppConfig},
    cli::Args,
};
use notification_core::notifications::JsonLinesSink;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let config = AppConfig::from_env().unwrap_or_default();
    let sink = JsonLinesSink::new(std::io::stdout());
    if let Err(err) = run(config, args, &sink) {
        eprintln!("Failed to emit notification: {err:#}");
        std::process::exit(1);
    }
}
