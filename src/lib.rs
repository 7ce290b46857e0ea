//! Launch records dashboard.
//!
//! Loads a launch table once, then serves a page whose site dropdown and
//! payload slider drive two charts: success counts ([`views::success_pie`])
//! and payload against outcome ([`views::payload_scatter`]).

pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod layout;
pub mod server;
pub mod state;
pub mod views;
