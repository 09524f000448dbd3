//! Camera TestGen Review Common Library
//!
//! CLIとWeb(WASM)で共有される型・APIクライアント・画面ごとの状態

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod prefs;
pub mod readiness;
pub mod scope;
pub mod types;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, Transport};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use i18n::Label;
pub use prefs::{Language, Preferences, Theme};
pub use readiness::ReadinessGate;
pub use scope::{MountScope, Ticket};
pub use types::{
    format_timestamp, ExportSummary, Feedback, FeedbackRequest, FeedbackStatus, RejectionReason,
    Screenshot, ScreenshotStatus,
};
pub use view::LoadState;
