use speedrun_pbs_server::{api::Api, config_handler, LogResult};
use tracing::log;

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "info,tower_http=debug")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match config_handler::get_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("[CONFIG] {e:#}");
            std::process::exit(1);
        }
    };

    Api::serve(config).await
        .ok_log("[API] Server stopped");
}
