//! Notes Editor
//!
//! Markdown notes with Write/Preview tabs.

use leptos::html::Textarea;
use leptos::prelude::*;

use crate::components::MarkdownToolbar;
use crate::markdown::parse_markdown;

#[component]
pub fn NotesEditor(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let (preview, set_preview) = signal(false);
    let textarea = NodeRef::<Textarea>::new();

    let rendered_html = move || parse_markdown(&value.get());

    view! {
        <section class="notes-editor">
            <div class="notes-tabs">
                <h3>"Notes"</h3>
                <button
                    type="button"
                    class="tab-btn"
                    class:active=move || !preview.get()
                    on:click=move |_| set_preview.set(false)
                >
                    "Write"
                </button>
                <button
                    type="button"
                    class="tab-btn"
                    class:active=move || preview.get()
                    on:click=move |_| set_preview.set(true)
                >
                    "Preview"
                </button>
            </div>

            // Hidden, not unmounted, while previewing
            <div class="notes-write" class:hidden=move || preview.get()>
                <MarkdownToolbar textarea=textarea on_change=on_change />
                <textarea
                    node_ref=textarea
                    class="notes-textarea"
                    placeholder="Write Markdown..."
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                ></textarea>
            </div>
            <Show when=move || preview.get()>
                <div class="notes-preview markdown-body" inner_html=rendered_html></div>
            </Show>
        </section>
    }
}
