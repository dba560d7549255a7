//! Feature Form
//!
//! Create and edit page for a single feature. In edit mode every field is
//! sent back as a full PATCH; the card can also be deleted from here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{
    capitalized, enum_options, BacklogEditor, DeleteFeatureButton, MilestoneEditor, NotesEditor,
};
use crate::context::use_app_context;
use crate::models::{
    dates, today, EffortLevel, Feature, FeatureInput, FeaturePatch, Milestone, Priority, TShirtSize,
};

/// `feature: None` creates a new card
#[component]
pub fn FeatureForm(feature: Option<Feature>) -> impl IntoView {
    let ctx = use_app_context();

    let feature_id = feature.as_ref().map(|f| f.id);
    let initial = match &feature {
        Some(f) => f.to_input(),
        None => FeatureInput::draft(today()),
    };
    let (form, set_form) = signal(initial);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let title = match &feature {
        Some(f) => format!("Edit Feature: {}", f.name),
        None => "New Feature".to_string(),
    };
    let stored_name = feature.as_ref().map(|f| f.name.clone()).unwrap_or_default();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let input = form.get_untracked();
        if input.name.trim().is_empty() {
            set_error.set(Some("Name is required".to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = match feature_id {
                None => commands::create_feature(&input).await,
                Some(id) => commands::update_feature(id, &FeaturePatch::from(input)).await,
            };
            set_saving.set(false);
            match result {
                Ok(saved) => {
                    web_sys::console::log_1(&format!("[FORM] Saved feature {}", saved.id).into());
                    ctx.close();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[FORM] Save failed: {}", e).into());
                    set_error.set(Some(e));
                }
            }
        });
    };

    let text_input = move |get: fn(&FeatureInput) -> String, set: fn(&mut FeatureInput, String)| {
        view! {
            <input
                type="text"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <div class="feature-form-page">
            <div class="page-header">
                <button type="button" class="back-btn" on:click=move |_| ctx.close()>"← Back to Board"</button>
                <h1>{title}</h1>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <form class="feature-form" on:submit=on_submit>
                <div class="form-grid">
                    <label class="form-field">
                        <span>"Feature Name"</span>
                        {text_input(|f| f.name.clone(), |f, v| f.name = v)}
                    </label>
                    <label class="form-field">
                        <span>"Release"</span>
                        {text_input(|f| f.release.clone(), |f, v| f.release = v)}
                    </label>
                    <label class="form-field">
                        <span>"Priority"</span>
                        <select on:change=move |ev| {
                            if let Ok(priority) = event_target_value(&ev).parse::<Priority>() {
                                set_form.update(|f| f.priority = priority);
                            }
                        }>
                            {enum_options(Priority::ALL, move || Some(form.with(|f| f.priority)), capitalized)}
                        </select>
                    </label>
                    <label class="form-field">
                        <span>"Estimated Completion"</span>
                        <input
                            type="date"
                            prop:value=move || form.with(|f| dates::format_date(&f.estimated_completion))
                            on:change=move |ev| {
                                if let Some(date) = dates::parse_date(&event_target_value(&ev)) {
                                    set_form.update(|f| f.estimated_completion = date);
                                }
                            }
                        />
                    </label>
                    <label class="form-field">
                        <span>"T-Shirt Size"</span>
                        <select on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<TShirtSize>() {
                                set_form.update(|f| f.t_shirt_size = size);
                            }
                        }>
                            {enum_options(TShirtSize::ALL, move || Some(form.with(|f| f.t_shirt_size)), TShirtSize::label)}
                        </select>
                    </label>
                    <label class="form-field">
                        <span>"Effort Level"</span>
                        <select on:change=move |ev| {
                            if let Ok(effort) = event_target_value(&ev).parse::<EffortLevel>() {
                                set_form.update(|f| f.effort_level = effort);
                            }
                        }>
                            {enum_options(EffortLevel::ALL, move || Some(form.with(|f| f.effort_level)), capitalized)}
                        </select>
                    </label>
                </div>

                <label class="form-field">
                    <span>"Description"</span>
                    <textarea
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_form.update(|f| f.description = value);
                        }
                    ></textarea>
                </label>

                <BacklogEditor
                    items=Signal::derive(move || form.with(|f| f.backlog_items.clone()))
                    on_change=Callback::new(move |items: Vec<String>| set_form.update(|f| f.backlog_items = items))
                />

                <MilestoneEditor
                    milestones=Signal::derive(move || form.with(|f| f.milestones.clone()))
                    on_change=Callback::new(move |milestones: Vec<Milestone>| set_form.update(|f| f.milestones = milestones))
                />

                <NotesEditor
                    value=Signal::derive(move || form.with(|f| f.notes.clone()))
                    on_change=Callback::new(move |notes: String| set_form.update(|f| f.notes = notes))
                />

                <div class="form-actions">
                    {feature_id.map(|id| view! {
                        <DeleteFeatureButton
                            id=id
                            name=stored_name.clone()
                            on_deleted=Callback::new(move |_: ()| ctx.close())
                            on_error=Callback::new(move |e: String| set_error.set(Some(e)))
                        />
                    })}
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.close()>"Cancel"</button>
                    <button type="submit" class="save-btn" disabled=move || saving.get()>
                        {move || match (saving.get(), feature_id) {
                            (true, _) => "Saving...",
                            (false, Some(_)) => "Save Changes",
                            (false, None) => "Create Feature",
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
