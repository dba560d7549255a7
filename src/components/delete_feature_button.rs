//! Delete Feature Button
//!
//! Two-step delete for the edit page: the first click asks about the named
//! feature, the second sends the DELETE.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_remove_feature, use_app_store};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Idle,
    Confirming,
    Deleting,
}

#[component]
pub fn DeleteFeatureButton(
    id: u32,
    #[prop(into)] name: String,
    /// Runs after the server confirmed the delete
    #[prop(into)] on_deleted: Callback<()>,
    #[prop(into)] on_error: Callback<String>,
) -> impl IntoView {
    let store = use_app_store();
    let (step, set_step) = signal(Step::Idle);

    let prompt = if name.trim().is_empty() {
        "Delete this feature?".to_string()
    } else {
        format!("Delete \"{}\"?", name)
    };

    let delete = move |_| {
        set_step.set(Step::Deleting);
        spawn_local(async move {
            match commands::delete_feature(id).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[FORM] Deleted feature {}", id).into());
                    store_remove_feature(&store, id);
                    on_deleted.run(());
                }
                Err(e) => {
                    set_step.set(Step::Idle);
                    on_error.run(e);
                }
            }
        });
    };

    move || match step.get() {
        Step::Idle => view! {
            <button type="button" class="delete-btn" on:click=move |_| set_step.set(Step::Confirming)>
                "Delete Feature"
            </button>
        }
        .into_any(),
        Step::Confirming => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button type="button" class="confirm-btn" on:click=delete>"Delete"</button>
                <button type="button" class="cancel-btn" on:click=move |_| set_step.set(Step::Idle)>"Keep"</button>
            </span>
        }
        .into_any(),
        Step::Deleting => view! { <span class="delete-confirm-text">"Deleting..."</span> }.into_any(),
    }
}
