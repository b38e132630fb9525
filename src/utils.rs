/// Utility functions for output formatting
use time::{format_description, OffsetDateTime, UtcOffset};

use crate::models::SensorSample;

/// Format a decoded epoch as a human-readable local timestamp
///
/// Converts Unix epoch seconds to DD-MM-YYYY HH:MM:SS in the host's local
/// time zone. Falls back to UTC when the local offset cannot be determined,
/// and to the default string representation if formatting fails.
pub fn format_local_timestamp(epoch_seconds: u32) -> String {
    let utc = OffsetDateTime::from_unix_timestamp(i64::from(epoch_seconds))
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);
    let local = match UtcOffset::current_local_offset() {
        Ok(offset) => utc.to_offset(offset),
        Err(_) => utc,
    };

    let format = format_description::parse("[day]-[month]-[year] [hour]:[minute]:[second]")
        .expect("Failed to create format description");
    local.format(&format).unwrap_or_else(|_| local.to_string())
}

/// Render one sample as the readout's CSV line
///
/// Columns: epoch timestamp, human readable timestamp, temperature in
/// degrees celsius, relative humidity in percent, CO2 level in PPM.
pub fn format_sample(sample: &SensorSample) -> String {
    format!(
        "{}, {}, {:.6}, {:.6}, {:.6}",
        sample.epoch_seconds,
        format_local_timestamp(sample.epoch_seconds),
        sample.temperature,
        sample.humidity,
        sample.co2_ppm
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_line_has_five_comma_separated_columns() {
        let sample = SensorSample {
            epoch_seconds: 1_470_923_902,
            temperature: 25.7,
            humidity: 52.7,
            co2_ppm: 1309.0,
        };
        let line = format_sample(&sample);
        let columns: Vec<&str> = line.split(", ").collect();

        assert_eq!(columns.len(), 5);
        assert_eq!(columns[0], "1470923902");
        assert_eq!(columns[2], "25.700000");
        assert_eq!(columns[3], "52.700000");
        assert_eq!(columns[4], "1309.000000");
    }

    #[test]
    fn timestamp_column_is_a_full_calendar_datetime() {
        // The wall-clock digits depend on the host time zone; the shape does not.
        let formatted = format_local_timestamp(1_470_923_902);

        assert_eq!(formatted.len(), "11-08-2016 15:58:22".len());
        assert_eq!(&formatted[2..3], "-");
        assert_eq!(&formatted[5..6], "-");
        assert_eq!(&formatted[10..11], " ");
    }

    #[test]
    fn wrapped_epoch_still_formats() {
        // Underflowed device counters land far in the future but must not panic.
        let formatted = format_local_timestamp(2_290_516_596);

        assert!(!formatted.is_empty());
    }
}
