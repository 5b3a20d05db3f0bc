//! Runtime settings with environment fallbacks.

use std::env;
use std::time::Duration;

/// Delay between bot turns when nothing else is configured.
pub const DEFAULT_PACING: Duration = Duration::from_millis(450);

/// Bot pacing.
///
/// Reads `UNO_PACING_MS` (milliseconds) or defaults to [`DEFAULT_PACING`].
pub fn pacing() -> Duration {
    env::var("UNO_PACING_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_PACING)
}

/// Game seed from `UNO_SEED`, if set and valid.
pub fn seed() -> Option<u64> {
    env::var("UNO_SEED").ok().and_then(|v| v.parse::<u64>().ok())
}
