use clap::Parser;
use std::path::PathBuf;

use crate::storage::DEFAULT_DATA_FILE;

/// Keeps the renderer's own info logs out of the way.
const DEFAULT_LOG_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Employee salary manager.
#[derive(Parser, Debug, Clone)]
#[command(name = "salary-desk", version, about)]
pub struct AppConfig {
    /// JSON file holding the employee list.
    #[arg(long, env = "EMPLOYEE_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// tracing filter directive, e.g. `debug` or `salary_desk=trace`.
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AppConfig::try_parse_from(["salary-desk"]).unwrap();
        if std::env::var_os("EMPLOYEE_DATA_FILE").is_none() {
            assert_eq!(cfg.data_file, PathBuf::from("employee_data.json"));
        }
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
        }
    }

    #[test]
    fn flags_override() {
        let cfg = AppConfig::try_parse_from([
            "salary-desk",
            "--data-file",
            "/tmp/staff.json",
            "--log-filter",
            "debug",
        ])
        .unwrap();
        assert_eq!(cfg.data_file, PathBuf::from("/tmp/staff.json"));
        assert_eq!(cfg.log_filter, "debug");
    }
}
