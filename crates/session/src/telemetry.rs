//! Logging setup
//!
//! Native builds log to stderr through `tracing-subscriber`, honouring
//! `RUST_LOG`. Browser builds write to the devtools console.

use anyhow::Result;

/// Install the global subscriber at `level` (`error`, `warn`, `info`, `debug`, `trace`)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("taskboard={level},taskboard_session={level},taskboard_http={level}").into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}

/// Install the global subscriber at `level`, writing to the browser console
#[cfg(target_arch = "wasm32")]
pub fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};
    use tracing_web::MakeWebConsoleWriter;

    let level: LevelFilter = level.parse()?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .try_init()?;

    Ok(())
}
