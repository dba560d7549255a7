//! Search Bar
//!
//! Filters board cards by name.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search features..."
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
            <Show when=move || !store.search().get().is_empty()>
                <button class="clear-btn" on:click=move |_| store.search().set(String::new())>"×"</button>
            </Show>
        </div>
    }
}
