/// HID transport layer: opening the hidraw device and the feature-report
/// operations the exchange is built on.
use std::ffi::CString;

use hidapi::{HidApi, HidDevice, HidError};
use log::debug;
use thiserror::Error;

/// Errors raised while talking to the device.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The device path could not be passed to the OS (interior NUL byte).
    #[error("invalid device path: {0:?}")]
    InvalidPath(String),

    /// An open or feature-report request failed at the platform level.
    #[error("HID feature report I/O failed: {0}")]
    IoFailure(#[from] HidError),
}

/// The two feature-report operations the HT2000 protocol needs.
///
/// `hidapi::HidDevice` provides the real implementation; tests substitute a
/// mock so the exchange can run without hardware.
pub trait FeatureReportTransport {
    /// Send a feature report. The first byte of `data` is the report id.
    fn send_feature_report(&self, data: &[u8]) -> Result<(), HidError>;

    /// Read a feature report into `buf`. The first byte of `buf` selects the
    /// report id on input and still holds it on return. Returns the number of
    /// bytes placed in `buf`, including the report id byte.
    fn get_feature_report(&self, buf: &mut [u8]) -> Result<usize, HidError>;
}

impl FeatureReportTransport for HidDevice {
    fn send_feature_report(&self, data: &[u8]) -> Result<(), HidError> {
        HidDevice::send_feature_report(self, data)
    }

    fn get_feature_report(&self, buf: &mut [u8]) -> Result<usize, HidError> {
        HidDevice::get_feature_report(self, buf)
    }
}

/// Open the hidraw device at `path` for the readout.
///
/// The device is put in non-blocking mode, matching the original tool's
/// open flags; feature-report requests are unaffected by it. The returned
/// handle closes itself when dropped, on success and failure paths alike.
pub fn open_device(path: &str) -> Result<HidDevice, ExchangeError> {
    let api = HidApi::new()?;
    let c_path =
        CString::new(path).map_err(|_| ExchangeError::InvalidPath(path.to_string()))?;

    let device = api.open_path(&c_path)?;
    device.set_blocking_mode(false)?;
    debug!("Opened HID device at {}", path);

    Ok(device)
}
