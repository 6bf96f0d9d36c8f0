//! # WayVR Dashboard
//!
//! Client-side rendered Leptos frontend for the WayVR desktop dashboard.
//!
//! ## Startup
//!
//! 1. Configuration is resolved once ([`config`]).
//! 2. Outside development builds the native context menu is suppressed
//!    ([`context_menu`]).
//! 3. When enabled, uncaught errors and unhandled rejections are forwarded
//!    to the global state ([`diagnostics`]).
//! 4. The root component is mounted into `#root` ([`bootstrap`], [`mount`]);
//!    it creates the page-lifetime [`Globals`] on first render.
//!
//! ```rust,no_run
//! use wayvr_dashboard::{Bootstrap, Config};
//!
//! let config = Config::load().unwrap_or_default();
//! Bootstrap::new(config).run().expect("dashboard failed to start");
//! ```

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod context_menu;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod mount;
pub mod pages;
pub mod state;

pub use bootstrap::Bootstrap;
pub use config::{Config, ConfigError, DiagnosticsConfig, LoggingConfig, RunMode};
pub use context_menu::{Cancelable, ContextMenuPolicy};
pub use diagnostics::{ErrorReport, ReportKind};
pub use error::{BootError, BootResult};
pub use state::{ErrorSink, Globals, GlobalsSlot};
