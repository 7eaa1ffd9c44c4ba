//! Bot trap and submission cooldown for the public feedback form.
//!
//! Both checks are advisory and client-side only. The store does not enforce
//! a cooldown, so clearing the client state resets it.

use crate::types::Timestamp;

/// Minimum time between two successful submissions from one client.
pub const SUBMIT_COOLDOWN_SECS: i64 = 30;

/// Returns `true` when the hidden honeypot field carries anything at all.
///
/// Humans never see the field; naive bots fill every input. Such
/// submissions are dropped silently: no error, no request.
pub fn is_automated(honeypot: &str) -> bool {
    !honeypot.is_empty()
}

/// Rejection produced while the cooldown window is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Please wait {remaining_secs} seconds before submitting again.")]
pub struct CooldownActive {
    /// Remaining wait, whole seconds rounded up. Always in `1..=30`.
    pub remaining_secs: u64,
}

/// Check whether a new attempt at `now` falls inside the cooldown window
/// opened by the last successful submission.
///
/// An attempt at exactly `last_submit + 30s` or later proceeds. A
/// `last_submit` in the future (clock moved backwards) reports the full
/// window rather than a longer wait.
pub fn check_cooldown(
    last_submit: Option<Timestamp>,
    now: Timestamp,
) -> Result<(), CooldownActive> {
    let Some(last) = last_submit else {
        return Ok(());
    };

    let window_ms = SUBMIT_COOLDOWN_SECS * 1000;
    let elapsed_ms = (now - last).num_milliseconds();
    if elapsed_ms >= window_ms {
        return Ok(());
    }

    let remaining_ms = (window_ms - elapsed_ms).min(window_ms);
    let remaining_secs = ((remaining_ms + 999) / 1000) as u64;
    Err(CooldownActive { remaining_secs })
}
