//! Full-screen refresh hints for the display driver.

/// Direction hint for a whole-screen repaint.
///
/// The display task uses this to slide the outgoing frame out in the given
/// direction instead of redrawing in place. It is a hint: a driver that
/// cannot animate may repaint statically without affecting navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullRefreshDirection {
    /// Plain repaint, no slide.
    None,
    /// Slide upwards.
    Up,
    /// Slide downwards.
    Down,
    /// Slide to the left.
    Left,
    /// Slide to the right.
    Right,
    /// Animated variant of [`FullRefreshDirection::Left`].
    LeftAnim,
    /// Animated variant of [`FullRefreshDirection::Right`].
    RightAnim,
}

/// Sink for full-refresh hints emitted by the navigation core.
pub trait FullRefreshProvider {
    /// Request a directional whole-screen repaint for the next frame.
    fn set_full_refresh(&mut self, direction: FullRefreshDirection);
}
