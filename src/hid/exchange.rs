/// The set/get feature-report handshake that pulls one raw report out of
/// the logger.
use log::{debug, warn};

use crate::hid::report::REPORT_ID;
use crate::hid::transport::{ExchangeError, FeatureReportTransport};

/// Fixed "arm" command, sent verbatim ahead of every read. The trailing
/// bytes are opaque reverse-engineered values; the device will not populate
/// report 5 without them.
pub const TRIGGER_COMMAND: [u8; 4] = [REPORT_ID, 0xff, 0xff, 0xff];

/// Capacity of the get-feature-report buffer, report id byte included.
pub const RESPONSE_BUFFER_LEN: usize = 256;

/// Perform one set/get exchange and return the bytes the device sent back.
///
/// The set step is best-effort: some platform/firmware combinations reject
/// it yet still serve the subsequent get, so a failure there is only logged.
/// A failed get step is terminal. No retries either way.
pub fn trigger_and_fetch<D: FeatureReportTransport>(
    device: &D,
) -> Result<Vec<u8>, ExchangeError> {
    if let Err(e) = device.send_feature_report(&TRIGGER_COMMAND) {
        warn!("Set feature report failed, trying to read anyway: {}", e);
    }

    let mut buf = [0u8; RESPONSE_BUFFER_LEN];
    buf[0] = REPORT_ID;

    let received = device.get_feature_report(&mut buf)?;
    debug!("Received {} byte feature report", received);

    Ok(buf[..received.min(RESPONSE_BUFFER_LEN)].to_vec())
}
