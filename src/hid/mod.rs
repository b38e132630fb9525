pub mod exchange;
pub mod report;
pub mod transport;

pub use exchange::trigger_and_fetch;
pub use report::decode_report;
pub use transport::open_device;
