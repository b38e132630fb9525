use std::env;

const DEVICE_ENV_VAR: &str = "HT2000_DEVICE";

#[derive(Debug, Clone)]
pub struct DeviceConfig {
    pub device_path: String,
}

impl DeviceConfig {
    /// Resolve the hidraw device path for this run.
    ///
    /// The first positional argument wins; without one, the HT2000_DEVICE
    /// environment variable (also honored from a .env file) is consulted.
    /// Returns None when neither is present so the caller can show usage.
    pub fn from_args<I>(mut args: I) -> Option<Self>
    where
        I: Iterator<Item = String>,
    {
        let _program = args.next();

        let device_path = match args.next() {
            Some(path) => path,
            None => env::var(DEVICE_ENV_VAR).ok()?,
        };

        Some(DeviceConfig { device_path })
    }
}

pub fn print_usage() {
    println!("Usage: ht2000 path_to_hidraw_device");
    println!("Example: ht2000 /dev/hidraw0");
    println!();
    println!("The device path can also be set through the HT2000_DEVICE environment variable.");
    println!("Output example: 1470923902, 11-08-2016 15:58:22, 25.700000, 52.700000, 1309.000000");
    println!("Output columns: epoch timestamp, human readable timestamp, temperature in degrees celsius, relative humidity in percent, CO2 level in PPM");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> impl Iterator<Item = String> {
        items
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn takes_device_path_from_first_argument() {
        let config = DeviceConfig::from_args(args(&["ht2000", "/dev/hidraw3"])).unwrap();

        assert_eq!(config.device_path, "/dev/hidraw3");
    }

    #[test]
    fn missing_argument_without_env_yields_none() {
        env::remove_var(DEVICE_ENV_VAR);

        assert!(DeviceConfig::from_args(args(&["ht2000"])).is_none());
    }
}
