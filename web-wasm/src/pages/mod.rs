//! ページコンポーネント

mod dashboard;
mod export;
mod feedback_log;
mod not_found;
mod review;

pub use dashboard::DashboardPage;
pub use export::ExportPage;
pub use feedback_log::FeedbackLogPage;
pub use not_found::NotFoundPage;
pub use review::ReviewPage;
