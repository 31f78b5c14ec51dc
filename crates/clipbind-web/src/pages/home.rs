use leptos::prelude::*;

use crate::components::{CopyButton, Snippet};

#[component]
pub fn HomePage() -> impl IntoView {
    // Bind the server-rendered .copy-button triggers once the page is
    // hydrated. The handle owns the listeners for the page's lifetime;
    // parking it in client-only state keeps them attached.
    #[cfg(feature = "hydrate")]
    {
        use crate::binder::CopyBinder;
        use clipbind_core::BinderConfig;

        let binder = StoredValue::new_local(None::<CopyBinder>);
        Effect::new(move |_| {
            if binder.with_value(|b| b.is_some()) {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let bound = CopyBinder::bind(&document, BinderConfig::default());
            leptos::logging::log!("[clipbind] bound {} copy trigger(s)", bound.len());
            binder.set_value(Some(bound));
        });
    }

    view! {
        <main class="page">
            <header>
                <h1>"clipbind"</h1>
                <p class="tagline">"Copy-to-clipboard triggers for Leptos pages"</p>
            </header>

            <section id="component">
                <h2>"Component triggers"</h2>
                <p>
                    "Each " <code>"CopyButton"</code>
                    " owns its label state, so two buttons never share a confirmation."
                </p>
                <Snippet code="cargo leptos watch" />
                <Snippet code="cargo leptos build --release" />
            </section>

            <section id="markup">
                <h2>"Bound markup triggers"</h2>
                <p>
                    "These are plain server-rendered buttons picked up by the binder "
                    "after hydration. The first copies a referenced element's content, "
                    "the second a literal attribute value."
                </p>
                <pre id="install-snippet">"cargo add clipbind-core"</pre>
                <button type="button" class="copy-button" data-clipboard-target="#install-snippet">
                    "Copy"
                </button>
                <button type="button" class="copy-button" data-clipboard-text="hello">
                    "Copy"
                </button>
            </section>

            <section id="inline">
                <h2>"Inline trigger"</h2>
                <p>"A one-off button with its payload passed as a prop:"</p>
                <CopyButton text="https://example.com/clipbind" label="Copy link" />
            </section>
        </main>
    }
}
