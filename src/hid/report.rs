/// Decoding of the HT2000 feature report into measurement values.
use log::warn;
use thiserror::Error;

use crate::models::SensorSample;

// HT2000 protocol constants
pub const REPORT_ID: u8 = 0x05; // Feature report number used for request and response

/// Shortest response that contains all four measurement fields.
pub const MIN_REPORT_LEN: usize = 30;

// Reverse-engineered calibration value: the device counts seconds from its
// own epoch, this many seconds away from the Unix one.
const DEVICE_EPOCH_OFFSET: u32 = 2_004_450_700;

// Raw temperature counts are shifted up by 40.0 degrees on the wire.
const RAW_TEMPERATURE_OFFSET: f64 = 400.0;

/// Decode one raw feature report into a [`SensorSample`], or reject it.
///
/// Known layout of report 5 (all fields big-endian, offsets within the
/// returned buffer, report id byte at offset 0):
/// - Bytes 1-4: seconds since the device epoch (unsigned 32-bit)
/// - Bytes 7-8: temperature (unsigned 16-bit, offset 400, 0.1 degC resolution)
/// - Bytes 9-10: relative humidity (unsigned 16-bit, 0.1 % resolution)
/// - Bytes 24-25: CO2 concentration (unsigned 16-bit, 1 ppm resolution)
///
/// Offsets 0, 5-6, 11-23 and 26+ have no confirmed meaning and are left
/// alone. There is no checksum or magic to verify; a report that is long
/// enough always decodes.
///
/// The epoch correction is plain modular u32 subtraction. Raw counter values
/// below the offset wrap around instead of going negative, the same way the
/// device's own readout software behaves.
pub fn decode_report(report: &[u8]) -> Result<SensorSample, DecodeError> {
    if report.len() < MIN_REPORT_LEN {
        warn!(
            "Report too small: {} bytes, need at least {}",
            report.len(),
            MIN_REPORT_LEN
        );
        return Err(DecodeError::Truncated(report.len()));
    }

    let raw_seconds = u32::from_be_bytes([report[1], report[2], report[3], report[4]]);
    let epoch_seconds = raw_seconds.wrapping_sub(DEVICE_EPOCH_OFFSET);

    let temperature =
        (u16::from_be_bytes([report[7], report[8]]) as f64 - RAW_TEMPERATURE_OFFSET) / 10.0;
    let humidity = u16::from_be_bytes([report[9], report[10]]) as f64 / 10.0;
    let co2_ppm = u16::from_be_bytes([report[24], report[25]]) as f64;

    Ok(SensorSample {
        epoch_seconds,
        temperature,
        humidity,
        co2_ppm,
    })
}

/// Reasons a raw report cannot be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The device returned fewer bytes than the known layout covers.
    #[error("feature report too small: {0} bytes, need at least {}", MIN_REPORT_LEN)]
    Truncated(usize),
}
