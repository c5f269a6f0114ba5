//! Platform-agnostic playback element trait
//!
//! Abstracts the thing that actually renders audio (a media element, a
//! decoder feeding an output device, a headless probe in tests).

use crate::error::Result;

/// Platform-agnostic playback element
///
/// The controller owns exactly one element and drives it: it loads a source,
/// starts and pauses it, and moves its position. Progress flows back through
/// [`PlaybackElement::current_time`], which the platform reports by calling
/// `PlaybackController::on_time_update`.
pub trait PlaybackElement: Send {
    /// Replace the current source
    ///
    /// `source` is the stored entry's encoded data (a `data:` URI).
    fn load(&mut self, source: &str);

    /// Start or resume playback of the loaded source
    ///
    /// # Returns
    /// * `Ok(())` - Playback started
    /// * `Err(PlaybackError::StartRejected)` - The source cannot be played (decode failure,
    ///   unsupported format, autoplay policy, ...)
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    /// Move the playback position (seconds)
    fn set_current_time(&mut self, seconds: f64);

    /// Current playback position (seconds)
    fn current_time(&self) -> f64;

    /// Length of the loaded source, once its metadata is known
    fn duration(&self) -> Option<f64>;

    /// Whether a seek is in flight
    ///
    /// Position reports are ignored while seeking so a stale time does not
    /// overwrite the requested one.
    fn is_seeking(&self) -> bool {
        false
    }
}
