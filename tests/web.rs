//! Browser tests for the bootstrap
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{
    Document, ErrorEvent, ErrorEventInit, Event, EventInit, HtmlElement, PromiseRejectionEvent,
    PromiseRejectionEventInit,
};

use wayvr_dashboard::app::Main;
use wayvr_dashboard::context_menu::{self, ContextMenuPolicy};
use wayvr_dashboard::diagnostics::{self, describe_reason};
use wayvr_dashboard::mount::{self, mount_target};
use wayvr_dashboard::{BootError, Bootstrap, Config, DiagnosticsConfig, GlobalsSlot, RunMode};

wasm_bindgen_test_configure!(run_in_browser);

fn page() -> Document {
    mount::document().unwrap()
}

fn add_root(id: &str) -> HtmlElement {
    let document = page();
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    document.body().unwrap().append_child(&root).unwrap();
    mount_target(&document, id).unwrap()
}

fn context_menu_event() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict("contextmenu", &init).unwrap()
}

fn rejection_event(reason: &str) -> PromiseRejectionEvent {
    // A settled promise keeps the browser from raising a real rejection
    let promise = js_sys::Promise::resolve(&JsValue::NULL);
    let init = PromiseRejectionEventInit::new(&promise);
    init.set_reason(&JsValue::from_str(reason));
    PromiseRejectionEvent::new("unhandledrejection", &init).unwrap()
}

fn test_config(mount_id: &str, mode: RunMode) -> Config {
    Config {
        mode,
        mount_id: mount_id.to_string(),
        diagnostics: DiagnosticsConfig {
            enabled: false,
            capture_rejections: false,
        },
        ..Config::default()
    }
}

#[wasm_bindgen_test]
fn mount_target_resolves_existing_element() {
    add_root("target-found");
    let target = mount_target(&page(), "target-found").unwrap();
    assert_eq!(target.id(), "target-found");
}

#[wasm_bindgen_test]
fn missing_mount_target_is_detected() {
    let err = mount_target(&page(), "no-such-root").unwrap_err();
    assert!(matches!(err, BootError::MountTargetMissing(id) if id == "no-such-root"));
}

#[wasm_bindgen_test]
fn svg_mount_target_is_rejected() {
    let document = page();
    let svg = document
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .unwrap();
    svg.set_id("svg-root");
    document.body().unwrap().append_child(&svg).unwrap();

    let err = mount_target(&document, "svg-root").unwrap_err();
    assert!(matches!(err, BootError::MountTargetNotHtml(_)));
}

#[wasm_bindgen_test]
fn bootstrap_fails_without_root() {
    let result = Bootstrap::new(test_config("absent-root", RunMode::Development)).run();
    assert!(matches!(result, Err(BootError::MountTargetMissing(_))));
}

#[wasm_bindgen_test]
fn bootstrap_mounts_dashboard_and_creates_globals() {
    let target = add_root("bootstrap-root");

    let slot = Bootstrap::new(test_config("bootstrap-root", RunMode::Development))
        .run()
        .unwrap();

    assert!(slot.is_initialized());
    assert!(target.child_element_count() > 0);

    let first = slot.get().unwrap();
    assert!(first.same_instance(&slot.get_or_init()));
}

#[wasm_bindgen_test]
fn suppressed_policy_prevents_context_menu() {
    let document = Document::new().unwrap();
    assert!(context_menu::install(&document, ContextMenuPolicy::Suppressed));

    for _ in 0..2 {
        let event = context_menu_event();
        document.dispatch_event(&event).unwrap();
        assert!(event.default_prevented());
    }
}

#[wasm_bindgen_test]
fn native_policy_keeps_context_menu() {
    let document = Document::new().unwrap();
    assert!(!context_menu::install(&document, ContextMenuPolicy::Native));

    let event = context_menu_event();
    document.dispatch_event(&event).unwrap();
    assert!(!event.default_prevented());
}

#[wasm_bindgen_test]
fn rejection_reasons_are_described() {
    assert_eq!(describe_reason(&JsValue::from_str("timeout")), "timeout");
    assert_eq!(describe_reason(&js_sys::Error::new("bad state").into()), "bad state");
    assert_eq!(describe_reason(&JsValue::from_f64(3.0)), "3");
}

#[wasm_bindgen_test]
fn error_event_is_forwarded_once() {
    let window = web_sys::window().unwrap();
    let slot = GlobalsSlot::new();
    let globals = slot.get_or_init();

    let config = DiagnosticsConfig {
        enabled: true,
        capture_rejections: true,
    };
    diagnostics::install(&window, &slot, &config).unwrap();

    let init = ErrorEventInit::new();
    init.set_message("boom");
    init.set_filename("app.js");
    init.set_lineno(4);
    let event = ErrorEvent::new_with_event_init_dict("error", &init).unwrap();
    window.dispatch_event(&event).unwrap();

    assert_eq!(globals.error_count(), 1);
    let report: serde_json::Value =
        serde_json::from_str(&globals.global_error().unwrap()).unwrap();
    assert_eq!(report["kind"], "error");
    assert_eq!(report["message"], "boom");
    assert_eq!(report["source"], "app.js");
    assert_eq!(report["line"], 4);
}

#[wasm_bindgen_test]
fn main_rendered_twice_shares_globals() {
    let first_target = add_root("main-first");
    let second_target = add_root("main-second");
    let globals_slot = GlobalsSlot::new();

    let slot_clone = globals_slot.clone();
    mount_to(first_target, move || view! { <Main globals_slot=slot_clone /> });
    let first = globals_slot.get().unwrap();

    let slot_clone = globals_slot.clone();
    mount_to(second_target, move || view! { <Main globals_slot=slot_clone /> });
    let second = globals_slot.get().unwrap();

    assert!(first.same_instance(&second));
}

#[wasm_bindgen_test]
fn rejection_event_is_forwarded_once() {
    let window = web_sys::window().unwrap();
    let slot = GlobalsSlot::new();
    let globals = slot.get_or_init();

    let config = DiagnosticsConfig {
        enabled: true,
        capture_rejections: true,
    };
    diagnostics::install(&window, &slot, &config).unwrap();

    window.dispatch_event(&rejection_event("socket closed")).unwrap();

    assert_eq!(globals.error_count(), 1);
    let report: serde_json::Value =
        serde_json::from_str(&globals.global_error().unwrap()).unwrap();
    assert_eq!(report["kind"], "unhandled_rejection");
    assert_eq!(report["message"], "socket closed");
}

#[wasm_bindgen_test]
fn rejections_ignored_when_capture_disabled() {
    let window = web_sys::window().unwrap();
    let slot = GlobalsSlot::new();
    let globals = slot.get_or_init();

    let config = DiagnosticsConfig {
        enabled: true,
        capture_rejections: false,
    };
    diagnostics::install(&window, &slot, &config).unwrap();

    window.dispatch_event(&rejection_event("ignored")).unwrap();
    assert_eq!(globals.error_count(), 0);
    assert_eq!(globals.global_error(), None);
}
