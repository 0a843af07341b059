use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Trace line on stderr, only with --debug
pub(crate) fn debug_log(message: impl AsRef<str>) {
    if debug_enabled() {
        eprintln!("[debug] {}", message.as_ref());
    }
}
