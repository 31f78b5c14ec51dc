//! The copy-button binder for server-rendered markup.
//!
//! `CopyBinder::bind` queries the document for trigger elements, attaches a
//! click listener to each, and returns a handle owning all of them. Dropping
//! the handle detaches the listeners and cancels any pending revert timer,
//! so tests can re-bind fresh markup without leaking handlers.

use std::cell::RefCell;
use std::rc::Rc;

use clipbind_core::{BinderConfig, Effect, Trigger};
use gloo_timers::callback::Timeout;
use leptos::logging::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, HtmlElement};

use crate::clipboard::{ClipboardWriter, NavigatorClipboard};
use crate::dom;

/// Marker attribute on already-bound elements. Makes re-binding over the
/// same markup idempotent: a marked element is skipped, never double-bound.
const BOUND_ATTR: &str = "data-clipbind-bound";

/// Handle to a set of bound copy triggers.
pub struct CopyBinder {
    triggers: Vec<BoundTrigger>,
}

impl CopyBinder {
    /// Bind every element matching `config.trigger_selector` to the copy
    /// behavior, using the platform clipboard. Call once the document is
    /// fully parsed. Zero matches is fine and yields an empty handle.
    pub fn bind(document: &Document, config: BinderConfig) -> Self {
        Self::with_writer(document, config, Rc::new(NavigatorClipboard))
    }

    /// Same as [`bind`](Self::bind), with an injected clipboard writer.
    pub fn with_writer(
        document: &Document,
        config: BinderConfig,
        writer: Rc<dyn ClipboardWriter>,
    ) -> Self {
        let config = Rc::new(config);
        let mut triggers = Vec::new();

        let nodes = match document.query_selector_all(&config.trigger_selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                warn!(
                    "[clipbind] invalid trigger selector {:?}: {err:?}",
                    config.trigger_selector
                );
                return Self { triggers };
            }
        };

        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            let Ok(element) = node.dyn_into::<HtmlElement>() else {
                continue;
            };
            if element.has_attribute(BOUND_ATTR) {
                continue;
            }
            triggers.push(BoundTrigger::attach(
                element,
                Rc::clone(&config),
                Rc::clone(&writer),
            ));
        }

        Self { triggers }
    }

    /// Number of triggers this handle bound.
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

/// One bound trigger: the element, its click listener, and the revert timer
/// currently pending for it (if any).
struct BoundTrigger {
    element: HtmlElement,
    listener: Closure<dyn FnMut()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl BoundTrigger {
    fn attach(element: HtmlElement, config: Rc<BinderConfig>, writer: Rc<dyn ClipboardWriter>) -> Self {
        // Restore whatever the element showed at bind time; fall back to the
        // configured idle label for an element rendered empty.
        let idle_label = match element.text_content() {
            Some(text) if !text.is_empty() => text,
            _ => config.idle_label.clone(),
        };

        let state = Rc::new(RefCell::new(Trigger::new()));
        let pending = Rc::new(RefCell::new(None::<Timeout>));

        let listener = {
            let element = element.clone();
            let state = Rc::clone(&state);
            let pending = Rc::clone(&pending);
            Closure::<dyn FnMut()>::new(move || {
                // Resolve at click time so later page mutations are respected.
                let payload = match dom::resolve_payload(&element) {
                    Ok(payload) => payload,
                    Err(err) => {
                        warn!("[clipbind] {err}");
                        return;
                    }
                };
                let write = writer.write_text(payload);
                let element = element.clone();
                let config = Rc::clone(&config);
                let idle_label = idle_label.clone();
                let state = Rc::clone(&state);
                let pending = Rc::clone(&pending);
                wasm_bindgen_futures::spawn_local(async move {
                    match write.await {
                        Ok(()) => {
                            let effects = state.borrow_mut().copy_succeeded(config.revert_delay());
                            apply_effects(effects, &element, &config, &idle_label, &state, &pending);
                        }
                        Err(err) => {
                            // Observed behavior: no user-facing failure feedback.
                            state.borrow_mut().copy_failed();
                            warn!("[clipbind] {err}");
                        }
                    }
                });
            })
        };

        let _ = element.set_attribute(BOUND_ATTR, "");
        if let Err(err) =
            element.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            warn!("[clipbind] failed to attach click listener: {err:?}");
        }

        Self {
            element,
            listener,
            pending,
        }
    }
}

impl Drop for BoundTrigger {
    fn drop(&mut self) {
        let _ = self.element.remove_event_listener_with_callback(
            "click",
            self.listener.as_ref().unchecked_ref(),
        );
        let _ = self.element.remove_attribute(BOUND_ATTR);
        // Dropping the handle cancels a still-pending revert.
        self.pending.borrow_mut().take();
    }
}

fn apply_effects(
    effects: Vec<Effect>,
    element: &HtmlElement,
    config: &Rc<BinderConfig>,
    idle_label: &str,
    state: &Rc<RefCell<Trigger>>,
    pending: &Rc<RefCell<Option<Timeout>>>,
) {
    for effect in effects {
        match effect {
            Effect::ShowConfirmation => element.set_text_content(Some(&config.confirm_label)),
            Effect::ClearSelection => dom::clear_selection(),
            Effect::ScheduleRevert { generation, delay } => {
                let element = element.clone();
                let idle_label = idle_label.to_string();
                let state = Rc::clone(state);
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                let timeout = Timeout::new(millis, move || {
                    // The machine ignores expirations superseded by a newer
                    // success, so a stale timer never restores early.
                    let effects = state.borrow_mut().revert_elapsed(generation);
                    if effects.contains(&Effect::RestoreLabel) {
                        element.set_text_content(Some(&idle_label));
                    }
                });
                // Replacing the handle drops, and thereby cancels, a
                // superseded timer.
                *pending.borrow_mut() = Some(timeout);
            }
            Effect::RestoreLabel => element.set_text_content(Some(idle_label)),
        }
    }
}
