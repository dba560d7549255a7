//! Kanban Board
//!
//! Groups the (filtered) features into columns by the configured field.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::components::BoardColumn;
use crate::models::board;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_app_store();
    let dnd = expect_context::<DndSignals>();

    let columns = move || {
        let field = store.column_field().get();
        let search = store.search().get();
        store.features().with(|features| {
            let visible = board::filter_by_name(features, &search);
            board::group_by(&visible, field)
        })
    };

    view! {
        <div class="kanban-board">
            {move || {
                let columns = columns();
                if columns.is_empty() {
                    view! { <p class="empty-board">"No features to show"</p> }.into_any()
                } else {
                    columns.into_iter()
                        .map(|column| view! { <BoardColumn column=column dnd=dnd /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
