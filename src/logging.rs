use tracing_subscriber::{prelude::*, EnvFilter};

/// Wires `tracing` to stderr when `RUST_LOG` asks for it.
///
/// With `RUST_LOG` unset no subscriber is installed at all, keeping both
/// streams byte-for-byte silent for scripts that wrap the binary.
pub fn init() {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init()
        .ok();
}
