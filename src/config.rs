//! Startup settings.
//!
//! The dashboard takes no flags and reads no application environment
//! variables; these are the fixed values it runs with.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Dataset file read from the working directory.
pub const DATASET_FILE_NAME: &str = "spacex_launch_dash.csv";

/// Local address the page is served on.
pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8050);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DATASET_FILE_NAME),
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
        }
    }
}
