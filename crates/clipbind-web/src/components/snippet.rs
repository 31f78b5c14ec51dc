use leptos::prelude::*;

use crate::components::CopyButton;

/// A code snippet block with its own copy button.
#[component]
pub fn Snippet(#[prop(into)] code: String) -> impl IntoView {
    view! {
        <div class="snippet">
            <pre>{code.clone()}</pre>
            <CopyButton text=code label="Copy" />
        </div>
    }
}
