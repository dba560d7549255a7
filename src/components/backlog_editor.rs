//! Backlog Items Editor
//!
//! Free-text list of backlog entries: add with Enter or the button, remove with ×.

use leptos::prelude::*;

#[component]
pub fn BacklogEditor(
    #[prop(into)] items: Signal<Vec<String>>,
    #[prop(into)] on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let add_item = move || {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        let mut list = items.get_untracked();
        list.push(text);
        on_change.run(list);
        set_draft.set(String::new());
    };

    let remove_item = move |index: usize| {
        let mut list = items.get_untracked();
        if index < list.len() {
            list.remove(index);
            on_change.run(list);
        }
    };

    view! {
        <section class="backlog-editor">
            <h3>"Backlog Items"</h3>
            <ul class="backlog-list">
                {move || items.get().into_iter().enumerate().map(|(index, item)| view! {
                    <li class="backlog-item">
                        <span>{item}</span>
                        <button type="button" class="remove-btn" on:click=move |_| remove_item(index)>"×"</button>
                    </li>
                }).collect_view()}
            </ul>
            <div class="backlog-add">
                <input
                    type="text"
                    placeholder="New backlog item"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add_item();
                        }
                    }
                />
                <button type="button" class="add-btn" on:click=move |_| add_item()>"Add"</button>
            </div>
        </section>
    }
}
