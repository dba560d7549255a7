//! Column Config Dialog
//!
//! Picks the feature field the board columns are grouped by.

use leptos::prelude::*;

use crate::models::ColumnField;
use crate::store::{use_app_store, AppStateStoreFields};

/// Modal with a select over every groupable field
#[component]
pub fn ColumnConfig(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let store = use_app_store();

    let on_change = move |ev: web_sys::Event| {
        if let Some(field) = ColumnField::from_key(&event_target_value(&ev)) {
            web_sys::console::log_1(&format!("[BOARD] Grouping columns by {}", field.key()).into());
            store.column_field().set(field);
            set_open.set(false);
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| set_open.set(false)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog-header">
                        <h2>"Configure Board Columns"</h2>
                        <button class="close-btn" on:click=move |_| set_open.set(false)>"×"</button>
                    </div>
                    <label class="form-field">
                        <span>"Group columns by"</span>
                        <select on:change=on_change>
                            {ColumnField::ALL.into_iter().map(|field| {
                                let key = field.key();
                                view! {
                                    <option
                                        value=key
                                        prop:selected=move || store.column_field().get() == field
                                    >
                                        {field.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </label>
                </div>
            </div>
        </Show>
    }
}
