//! BLE link status and firmware-transfer state.

/// State of an over-the-air firmware transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FirmwareUpdateState {
    /// No transfer in progress.
    Idle,
    /// Image blocks are being received.
    Running,
    /// The received image passed its integrity check.
    Validated,
    /// The transfer failed or the image was rejected.
    Error,
}

/// Read access to the BLE controller.
pub trait BleMonitor {
    /// Whether a central is currently connected.
    fn is_connected(&self) -> bool;

    /// State of the DFU transfer, if any.
    fn firmware_update_state(&self) -> FirmwareUpdateState;

    /// Transfer progress in percent, `0..=100`. Meaningful only while
    /// [`FirmwareUpdateState::Running`].
    fn firmware_update_progress(&self) -> u8;
}
