//! Selection clearing and click-time payload resolution.

use clipbind_core::{CopyError, PayloadSource};
use web_sys::Element;

/// Literal payload attribute on a trigger element.
pub const TEXT_ATTR: &str = "data-clipboard-text";
/// Target-reference attribute on a trigger element (an id or `#id`).
pub const TARGET_ATTR: &str = "data-clipboard-target";

/// Deselect any highlighted text in the document. Copying leaves the source
/// text visually selected otherwise. No-op when there is no selection API.
pub fn clear_selection() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(selection)) = window.get_selection() {
        let _ = selection.remove_all_ranges();
    }
}

/// Resolve a trigger's payload from its attributes against the live
/// document. Called at click time, not bind time, so a target element
/// mutated after binding yields its current content.
pub fn resolve_payload(element: &Element) -> Result<String, CopyError> {
    let source = PayloadSource::from_attrs(
        element.get_attribute(TEXT_ATTR),
        element.get_attribute(TARGET_ATTR),
    )
    .ok_or_else(|| {
        CopyError::MissingPayload(format!(
            "trigger declares neither {TEXT_ATTR} nor {TARGET_ATTR}"
        ))
    })?;

    match source {
        PayloadSource::Literal(text) => Ok(text),
        PayloadSource::TargetId(id) => {
            let document = element
                .owner_document()
                .ok_or_else(|| CopyError::MissingPayload("trigger is not in a document".into()))?;
            let target = document
                .get_element_by_id(&id)
                .ok_or_else(|| CopyError::MissingPayload(format!("no element with id \"{id}\"")))?;
            Ok(target.text_content().unwrap_or_default())
        }
    }
}
