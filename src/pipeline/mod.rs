//! Query pipeline and output handling.
//!
//! The pipeline walks a device inventory through platform detection,
//! vendor classification, interface fetch and normalization, resolving a
//! [`DeviceStatus`](crate::model::DeviceStatus) for every device.

mod batch;
mod output;
mod payload;
mod report_stage;
mod source;

pub use batch::{query_device, query_devices};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use payload::load_payload;
pub use report_stage::output_report;
pub use source::DeviceSource;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Everything succeeded
    pub const SUCCESS: i32 = 0;
    /// Some devices, pushes or verifications failed
    pub const FAILURES: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
