use school_killer::app;
use school_killer::config::AppConfig;
use tracing::warn;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // A broken config file should not keep the app from starting
    let config = AppConfig::load().unwrap_or_else(|err| {
        warn!(%err, "falling back to default configuration");
        AppConfig::default()
    });

    app::run(config)
}
