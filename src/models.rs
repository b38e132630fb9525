/// One decoded measurement read from the logger.
///
/// `epoch_seconds` is already corrected from the device's internal counter
/// to Unix epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSample {
    pub epoch_seconds: u32,
    pub temperature: f64,
    pub humidity: f64,
    pub co2_ppm: f64,
}
