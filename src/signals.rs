use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Registers handlers that record delivery of a termination signal.
///
/// The returned flag flips to true on SIGINT or SIGTERM and is observed by
/// the wait loop on its next pass. If registration fails the default
/// disposition is left in place: the process still dies promptly on signal,
/// just with the OS-default status.
#[cfg(not(target_os = "windows"))]
pub fn install() -> Arc<AtomicBool> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::flag;

    let interrupted = Arc::new(AtomicBool::new(false));
    for sig in [SIGINT, SIGTERM] {
        if let Err(err) = flag::register(sig, Arc::clone(&interrupted)) {
            tracing::warn!("could not register handler for signal {}: {}", sig, err);
        }
    }

    interrupted
}

/// No handlers on Windows; ctrl-c keeps its default behavior.
#[cfg(target_os = "windows")]
pub fn install() -> Arc<AtomicBool> {
    Arc::new(AtomicBool::new(false))
}
