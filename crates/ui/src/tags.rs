//! Screen identifiers.

/// Identifier for every navigable screen, plus the pseudo-destinations the
/// transition table may name.
///
/// `None`, `Previous` and `DefaultWatchFace` never identify a live screen:
/// the graph resolves them during a switch. The *current* tag of the graph
/// is always one of the concrete variants (or `None` while no screen is
/// alive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenTag {
    /// No screen / no transition (sentinel).
    None,
    /// Pseudo-destination: pop the back-stack.
    Previous,
    /// Pseudo-destination: resolve the user's default watch face through
    /// the settings store.
    DefaultWatchFace,
    /// Analog face with utility complications.
    UtilityWatchFace,
    /// Data-dense infographic face.
    InfographWatchFace,
    /// Binary-clock face.
    BinaryWatchFace,
    /// Over-the-air update progress.
    FirmwareUpdate,
    /// Validate-or-rollback prompt after an update.
    FirmwareValidation,
    /// Device and build information.
    SystemInfo,
    /// Settings menu.
    Settings,
    /// Backlight brightness selection.
    Brightness,
    /// Wake-up gesture selection.
    WakeUpMode,
    /// Daily steps goal adjustment.
    StepsGoal,
}

impl ScreenTag {
    /// Whether this tag names an actual screen rather than a sentinel or
    /// pseudo-destination.
    #[must_use]
    pub fn is_concrete(self) -> bool {
        !matches!(
            self,
            ScreenTag::None | ScreenTag::Previous | ScreenTag::DefaultWatchFace
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ScreenTag;

    #[test]
    fn test_sentinels_are_not_concrete() {
        assert!(!ScreenTag::None.is_concrete());
        assert!(!ScreenTag::Previous.is_concrete());
        assert!(!ScreenTag::DefaultWatchFace.is_concrete());
    }

    #[test]
    fn test_screens_are_concrete() {
        assert!(ScreenTag::UtilityWatchFace.is_concrete());
        assert!(ScreenTag::Settings.is_concrete());
        assert!(ScreenTag::StepsGoal.is_concrete());
    }
}
