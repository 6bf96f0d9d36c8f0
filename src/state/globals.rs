//! Global Application State
//!
//! The page-lifetime `Globals` container and the slot that lazily owns it.

use leptos::*;
use std::cell::OnceCell;
use std::rc::Rc;

/// How long a notice stays visible (ms)
const NOTICE_TIMEOUT_MS: u32 = 3000;

/// Anything that accepts serialized error reports
pub trait ErrorSink {
    fn report_error(&self, message: String);
}

/// Global application state shared with the dashboard
///
/// Clones share the same underlying instance.
#[derive(Clone)]
pub struct Globals {
    inner: Rc<GlobalsInner>,
}

struct GlobalsInner {
    /// Last error forwarded to the dashboard
    global_error: RwSignal<Option<String>>,
    /// Number of errors reported since startup
    error_count: RwSignal<u32>,
    /// Transient informational message
    notice: RwSignal<Option<String>>,
    /// Construction time (epoch ms)
    started_at: i64,
}

impl Globals {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(GlobalsInner {
                global_error: create_rw_signal(None),
                error_count: create_rw_signal(0),
                notice: create_rw_signal(None),
                started_at: chrono::Utc::now().timestamp_millis(),
            }),
        }
    }

    /// Whether both handles point at the same instance
    pub fn same_instance(&self, other: &Globals) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn global_error(&self) -> Option<String> {
        self.inner.global_error.get()
    }

    pub fn error_count(&self) -> u32 {
        self.inner.error_count.get()
    }

    pub fn notice(&self) -> Option<String> {
        self.inner.notice.get()
    }

    pub fn started_at(&self) -> i64 {
        self.inner.started_at
    }

    /// Replace the displayed error and bump the error counter
    pub fn set_global_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("Global error: {}", message);
        self.inner.global_error.set(Some(message));
        self.inner.error_count.update(|count| *count += 1);
    }

    pub fn clear_global_error(&self) {
        self.inner.global_error.set(None);
    }

    /// Show a notice (auto-clears after timeout)
    pub fn show_notice(&self, message: &str) {
        self.inner.notice.set(Some(message.to_string()));

        let notice_signal = self.inner.notice;
        gloo_timers::callback::Timeout::new(NOTICE_TIMEOUT_MS, move || {
            notice_signal.set(None);
        })
        .forget();
    }
}

impl Default for Globals {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorSink for Globals {
    fn report_error(&self, message: String) {
        self.set_global_error(message);
    }
}

/// Owner of the lazily created `Globals`
///
/// Injected into the root component; cloning the slot shares the cell, so
/// every clone observes the same instance once it exists. The signals are
/// created under the reactive owner current when the slot was made (the
/// runtime root at startup), not under the render that first asks for them.
#[derive(Clone)]
pub struct GlobalsSlot {
    cell: Rc<OnceCell<Globals>>,
    owner: Option<Owner>,
}

impl GlobalsSlot {
    pub fn new() -> Self {
        Self {
            cell: Rc::new(OnceCell::new()),
            owner: Owner::current(),
        }
    }

    /// The instance, if the root component has rendered at least once
    pub fn get(&self) -> Option<Globals> {
        self.cell.get().cloned()
    }

    /// Return the instance, constructing it on first call
    pub fn get_or_init(&self) -> Globals {
        self.cell
            .get_or_init(|| {
                tracing::debug!("Creating global state");
                match self.owner {
                    Some(owner) => with_owner(owner, Globals::new),
                    None => Globals::new(),
                }
            })
            .clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for GlobalsSlot {
    fn default() -> Self {
        Self::new()
    }
}
