use leptos::prelude::*;

/// A button that copies text to clipboard with visual feedback.
///
/// On a successful copy the label flips to "Copied!", the document's text
/// selection is cleared, and the original label is restored 2000 ms after
/// the most recent success. Clicking again while confirming supersedes the
/// earlier revert instead of stacking a second one. A rejected write keeps
/// the label untouched.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
    /// Button label (shown before copy and restored after the confirmation)
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let (label_text, set_label) = signal(label.clone());

    #[cfg(feature = "hydrate")]
    let on_click = {
        use std::cell::RefCell;
        use std::rc::Rc;

        use clipbind_core::config::{DEFAULT_CONFIRM_LABEL, DEFAULT_REVERT_DELAY_MS};
        use clipbind_core::{Effect, Trigger};
        use gloo_timers::callback::Timeout;

        use crate::clipboard::{ClipboardWriter, NavigatorClipboard};
        use crate::dom;

        let state = Rc::new(RefCell::new(Trigger::new()));
        let pending = Rc::new(RefCell::new(None::<Timeout>));

        move |_| {
            let text = text.clone();
            let label = label.clone();
            let state = Rc::clone(&state);
            let pending = Rc::clone(&pending);
            leptos::task::spawn_local(async move {
                match NavigatorClipboard.write_text(text).await {
                    Ok(()) => {
                        let delay = std::time::Duration::from_millis(DEFAULT_REVERT_DELAY_MS);
                        let effects = state.borrow_mut().copy_succeeded(delay);
                        for effect in effects {
                            match effect {
                                Effect::ShowConfirmation => {
                                    set_label.set(DEFAULT_CONFIRM_LABEL.to_string());
                                }
                                Effect::ClearSelection => dom::clear_selection(),
                                Effect::ScheduleRevert { generation, delay } => {
                                    let state = Rc::clone(&state);
                                    let label = label.clone();
                                    let millis =
                                        u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                                    let timeout = Timeout::new(millis, move || {
                                        let effects =
                                            state.borrow_mut().revert_elapsed(generation);
                                        if effects.contains(&Effect::RestoreLabel) {
                                            // The component may be gone by the
                                            // time the timer fires.
                                            let _ = set_label.try_set(label);
                                        }
                                    });
                                    *pending.borrow_mut() = Some(timeout);
                                }
                                Effect::RestoreLabel => set_label.set(label.clone()),
                            }
                        }
                    }
                    Err(err) => {
                        // No user-facing failure feedback; log and move on.
                        state.borrow_mut().copy_failed();
                        leptos::logging::warn!("[clipbind] {err}");
                    }
                }
            });
        }
    };

    // Handlers only run in the browser; SSR just renders the markup.
    #[cfg(not(feature = "hydrate"))]
    let on_click = move |_| {
        let _ = &text;
    };

    view! {
        <button type="button" class="copy-trigger" on:click=on_click>
            {label_text}
        </button>
    }
}
