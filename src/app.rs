//! Roadmap Frontend App
//!
//! Main application component: board page plus the create/edit pages.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use crate::commands;
use crate::components::{ColumnConfig, FeatureForm, KanbanBoard, SearchBar};
use crate::context::{use_app_context, AppContext, Page};
use crate::models::{board, Feature};
use crate::store::{
    store_patch_feature, store_set_error, store_set_features, store_update_feature, use_app_store,
    AppState, AppStateStoreFields,
};

/// How long the error banner stays up
const ERROR_DISMISS_MS: u32 = 6_000;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (page, set_page) = signal(Page::Board);
    let dnd = create_dnd_signals();

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new(set_reload_trigger, set_page);
    provide_context(ctx);
    provide_context(dnd);

    // Drop: patch locally, persist the new grouping value, then refetch
    bind_global_mouseup(dnd, move |card_id, column| {
        let field = store.column_field().get_untracked();
        let moved = store.features().with_untracked(|features| board::move_card(features, card_id, field, &column));
        match moved {
            Ok(Some(patch)) => {
                web_sys::console::log_1(&format!("[DND] Card {} -> {} '{}'", card_id, field.key(), column).into());
                store_patch_feature(&store, card_id, patch.clone());
                spawn_local(async move {
                    match commands::update_feature(card_id, &patch).await {
                        Ok(updated) => store_update_feature(&store, updated),
                        Err(e) => store_set_error(&store, Some(format!("Failed to move card: {}", e))),
                    }
                    ctx.reload();
                });
            }
            Ok(None) => {}
            Err(e) => store_set_error(&store, Some(e.to_string())),
        }
    });

    // Load features on mount and whenever reload is triggered
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading features, trigger={}", trigger).into());
        spawn_local(async move {
            match commands::list_features().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} features", loaded.len()).into());
                    store_set_features(&store, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load features: {}", e).into());
                    store.loading().set(false);
                    store_set_error(&store, Some(e));
                }
            }
        });
    });

    // Clear the banner unless a newer error replaced it meanwhile
    Effect::new(move |_| {
        if let Some(message) = store.error().get() {
            Timeout::new(ERROR_DISMISS_MS, move || {
                if store.error().get_untracked().as_deref() == Some(message.as_str()) {
                    store_set_error(&store, None);
                }
            })
            .forget();
        }
    });

    view! {
        <div class="app-layout">
            {move || match page.get() {
                Page::Board => view! { <BoardPage /> }.into_any(),
                Page::NewFeature => view! { <FeatureForm feature=None /> }.into_any(),
                Page::EditFeature(id) => view! { <EditFeaturePage id=id /> }.into_any(),
            }}
        </div>
    }
}

/// Header, toolbar and the kanban board
#[component]
fn BoardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (show_column_config, set_show_column_config) = signal(false);

    view! {
        <header class="app-header">
            <h1>"Product Roadmap"</h1>
            <div class="header-actions">
                <SearchBar />
                <button class="config-btn" on:click=move |_| set_show_column_config.set(true)>
                    {move || format!("Columns: {}", store.column_field().get().label())}
                </button>
                <button class="new-btn" on:click=move |_| ctx.open(Page::NewFeature)>"+ New Feature"</button>
            </div>
        </header>

        <Show when=move || store.error().get().is_some()>
            <div class="error-banner">
                <span>{move || store.error().get().unwrap_or_default()}</span>
                <button class="close-btn" on:click=move |_| store_set_error(&store, None)>"×"</button>
            </div>
        </Show>

        <Show
            when=move || !store.loading().get()
            fallback=|| view! { <div class="loading"><div class="spinner"></div></div> }
        >
            <KanbanBoard />
        </Show>

        <ColumnConfig open=show_column_config set_open=set_show_column_config />
    }
}

/// Fetches the feature fresh before showing the edit form
#[component]
fn EditFeaturePage(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    // None while loading; Some(None) when the feature no longer exists
    let (feature, set_feature) = signal(None::<Option<Feature>>);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_feature(id).await {
                Ok(found) => set_feature.set(Some(found)),
                Err(e) => {
                    store_set_error(&store, Some(e));
                    set_feature.set(Some(None));
                }
            }
        });
    });

    move || match feature.get() {
        None => view! { <div class="loading"><div class="spinner"></div></div> }.into_any(),
        Some(None) => view! {
            <div class="not-found">
                <p>"Feature not found"</p>
                <button class="back-btn" on:click=move |_| ctx.close()>"← Back to Board"</button>
            </div>
        }.into_any(),
        Some(Some(found)) => view! { <FeatureForm feature=Some(found) /> }.into_any(),
    }
}
