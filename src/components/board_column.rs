//! Board Column
//!
//! A column of cards sharing one value of the grouping field; also a drop target.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_column_mouseenter, make_on_mouseleave, DndSignals};

use crate::components::FeatureCard;
use crate::models::Column;

#[component]
pub fn BoardColumn(column: Column, dnd: DndSignals) -> impl IntoView {
    let Column { value, features } = column;

    let on_mouseenter = make_on_column_mouseenter(dnd, value.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let hover_value = value.clone();
    let column_class = move || {
        if dnd.is_drop_column(&hover_value) {
            "board-column drop-target"
        } else {
            "board-column"
        }
    };

    let title = if value.is_empty() { "(none)".to_string() } else { value };
    let count = features.len();

    view! {
        <div class=column_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <div class="board-column-header">
                <h2 class="board-column-title">{title}</h2>
                <span class="board-column-count">{count}</span>
            </div>
            <div class="board-column-cards">
                {features.into_iter()
                    .map(|feature| view! { <FeatureCard feature=feature dnd=dnd /> })
                    .collect_view()}
            </div>
        </div>
    }
}
