use tracing_subscriber::EnvFilter;

// setup_tracing installs a JSON subscriber; RUST_LOG overrides the default info level.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        // logs go to stderr so stdout only carries command responses.
        .with_writer(std::io::stderr)
        .init();
}
