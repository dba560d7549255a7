//! Feature Card
//!
//! One draggable card on the board. Clicking opens the edit page.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::context::{use_app_context, Page};
use crate::models::{format_due, priority_class, Feature};

#[component]
pub fn FeatureCard(feature: Feature, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();
    let id = feature.id;
    let priority = feature.priority;
    let completion = feature.completion_percent();

    let on_mousedown = make_on_mousedown(dnd, id);

    // A drop ends with a click on the card; don't treat it as "open"
    let on_click = move |_| {
        if dnd.click_suppressed() {
            return;
        }
        ctx.open(Page::EditFeature(id));
    };

    let card_class = move || {
        let mut class = format!("feature-card {}", priority_class(priority));
        if dnd.is_dragging(id) {
            class.push_str(" dragging");
        }
        class
    };

    view! {
        <div class=card_class on:mousedown=on_mousedown on:click=on_click>
            <h3 class="feature-card-title">{feature.name.clone()}</h3>
            <div class="feature-card-meta">
                <p>"Due: " {format_due(&feature.estimated_completion)}</p>
                <p>"Priority: " <span class="priority-label">{priority.as_str()}</span></p>
                <div class="progress">
                    <div class="progress-bar" style=format!("width: {}%;", completion)></div>
                </div>
                <p class="completion-label">{format!("{}% complete", completion)}</p>
            </div>
        </div>
    }
}
