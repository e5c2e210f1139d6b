mod app;

fn main() {
    // Default to `info` so per-file progress is visible without RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = app::run() {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}
