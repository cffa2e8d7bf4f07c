//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod parse_log;
pub mod report;

pub use manage_config::ConfigService;
pub use parse_log::ParseLogService;
pub use report::{ReportOptions, ReportService};
