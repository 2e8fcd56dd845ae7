//! Process-wide quiet flag read by the prompt helpers.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Prompts need a person on stdin. Quiet or piped runs take the default answer.
pub fn can_prompt() -> bool {
    // SAFETY: isatty only inspects the descriptor
    !enabled() && unsafe { libc::isatty(libc::STDIN_FILENO) } == 1
}
