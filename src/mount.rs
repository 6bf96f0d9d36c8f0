//! Mount Target
//!
//! Locates the host page element the dashboard renders into.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::{BootError, BootResult};

/// The current page's document
pub fn document() -> BootResult<Document> {
    web_sys::window()
        .ok_or(BootError::NoWindow)?
        .document()
        .ok_or(BootError::NoDocument)
}

/// Look up the element with `id`; its absence is a fatal startup error
pub fn mount_target(document: &Document, id: &str) -> BootResult<HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BootError::MountTargetMissing(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BootError::MountTargetNotHtml(id.to_string()))
}
