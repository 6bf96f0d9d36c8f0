//! Diagnostic Hooks
//!
//! Optional window listeners that forward uncaught errors and unhandled
//! promise rejections to the global state as JSON reports. Only installed
//! when `diagnostics.enabled` is set.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, Event, PromiseRejectionEvent, Window};

use crate::config::DiagnosticsConfig;
use crate::error::{BootError, BootResult};
use crate::state::{ErrorSink, GlobalsSlot};

/// What produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Error,
    UnhandledRejection,
}

/// Serializable description of an uncaught failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub kind: ReportKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    pub timestamp: i64,
}

impl ErrorReport {
    fn new(kind: ReportKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            line: None,
            column: None,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ReportKind::Error, message)
    }

    pub fn rejection(reason: impl Into<String>) -> Self {
        Self::new(ReportKind::UnhandledRejection, reason)
    }

    /// Attach the script location; empty names and zero positions are dropped
    pub fn at(mut self, source: &str, line: u32, column: u32) -> Self {
        self.source = (!source.is_empty()).then(|| source.to_string());
        self.line = (line > 0).then_some(line);
        self.column = (column > 0).then_some(column);
        self
    }

    /// Build a report from a window `error` event
    ///
    /// Resource load failures arrive as plain events and only carry their type.
    pub fn from_event(event: &Event) -> Self {
        match event.dyn_ref::<ErrorEvent>() {
            Some(error) => {
                Self::error(error.message()).at(&error.filename(), error.lineno(), error.colno())
            }
            None => Self::error(format!("{} event", event.type_())),
        }
    }

    pub fn from_rejection(event: &PromiseRejectionEvent) -> Self {
        Self::rejection(describe_reason(&event.reason()))
    }

    pub fn to_json(&self) -> BootResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Render a rejection reason as text
pub fn describe_reason(reason: &JsValue) -> String {
    if let Some(text) = reason.as_string() {
        return text;
    }
    if let Some(error) = reason.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    js_sys::JSON::stringify(reason)
        .ok()
        .and_then(|json| json.as_string())
        .unwrap_or_else(|| format!("{:?}", reason))
}

/// Serialize `report` and hand it to `sink` once
pub fn forward_report<S: ErrorSink>(sink: &S, report: &ErrorReport) -> BootResult<()> {
    let json = report.to_json()?;
    sink.report_error(json);
    Ok(())
}

fn dispatch(slot: &GlobalsSlot, report: ErrorReport) {
    let Some(globals) = slot.get() else {
        tracing::warn!(
            "Dropping {:?} report before global state exists: {}",
            report.kind,
            report.message
        );
        return;
    };

    if let Err(e) = forward_report(&globals, &report) {
        tracing::error!("Failed to forward error report: {}", e);
    }
}

/// Register the window listeners; they live for the rest of the page
pub fn install(window: &Window, slot: &GlobalsSlot, config: &DiagnosticsConfig) -> BootResult<()> {
    let slot_clone = slot.clone();
    let on_error = Closure::wrap(Box::new(move |event: Event| {
        dispatch(&slot_clone, ErrorReport::from_event(&event));
    }) as Box<dyn FnMut(Event)>);
    window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .map_err(|e| BootError::Listener {
            event: "error",
            reason: format!("{:?}", e),
        })?;
    on_error.forget();

    if config.capture_rejections {
        let slot_clone = slot.clone();
        let on_rejection = Closure::wrap(Box::new(move |event: PromiseRejectionEvent| {
            dispatch(&slot_clone, ErrorReport::from_rejection(&event));
        }) as Box<dyn FnMut(PromiseRejectionEvent)>);
        window
            .add_event_listener_with_callback(
                "unhandledrejection",
                on_rejection.as_ref().unchecked_ref(),
            )
            .map_err(|e| BootError::Listener {
                event: "unhandledrejection",
                reason: format!("{:?}", e),
            })?;
        on_rejection.forget();
    }

    tracing::info!(
        "Diagnostic hooks installed (rejections: {})",
        config.capture_rejections
    );
    Ok(())
}
