//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod error_banner;
pub mod toast;

pub use error_banner::ErrorBanner;
pub use toast::Toast;
