//! State Management
//!
//! Page-lifetime global state.

pub mod globals;

pub use globals::{ErrorSink, Globals, GlobalsSlot};
