//! Milestone Editor
//!
//! Milestone table for the feature form: type filter, description search,
//! sortable headers, and per-row editing. Rows keep their index in the
//! feature's list, so edits land on the right milestone whatever the view.

use leptos::prelude::*;

use crate::components::{capitalized, enum_options};
use crate::models::{
    completion_percent, dates, today, Milestone, MilestoneFilter, MilestoneQuery, MilestoneType,
    SortDirection, SortField,
};

#[component]
pub fn MilestoneEditor(
    #[prop(into)] milestones: Signal<Vec<Milestone>>,
    #[prop(into)] on_change: Callback<Vec<Milestone>>,
) -> impl IntoView {
    let (query, set_query) = signal(MilestoneQuery::default());

    let visible_rows = move || {
        query.with(|q| {
            milestones.with(|list| q.apply(list).into_iter().map(|(index, _)| index).collect::<Vec<_>>())
        })
    };

    let add_milestone = move |_| {
        let mut list = milestones.get_untracked();
        list.push(Milestone::new(today()));
        on_change.run(list);
    };

    let on_filter = move |ev: web_sys::Event| {
        if let Ok(filter) = event_target_value(&ev).parse::<MilestoneFilter>() {
            set_query.update(|q| q.filter = filter);
        }
    };

    let sort_header = move |field: SortField, title: &'static str| {
        let arrow = move || {
            query.with(|q| match (q.sort_field == field, q.direction) {
                (false, _) => "",
                (true, SortDirection::Asc) => " ▲",
                (true, SortDirection::Desc) => " ▼",
            })
        };
        view! {
            <th class="sortable" on:click=move |_| set_query.update(|q| q.toggle_sort(field))>
                {title}{arrow}
            </th>
        }
    };

    view! {
        <section class="milestone-editor">
            <div class="section-header">
                <h3>"Milestones"</h3>
                <span class="total-completion">
                    {move || format!("Total completion: {}%", milestones.with(|list| completion_percent(list)))}
                </span>
            </div>

            <div class="milestone-toolbar">
                <select on:change=on_filter>
                    <option
                        value=MilestoneFilter::All.as_str()
                        prop:selected=move || query.with(|q| q.filter == MilestoneFilter::All)
                    >
                        "All types"
                    </option>
                    {enum_options(
                        MilestoneType::ALL,
                        move || match query.with(|q| q.filter) {
                            MilestoneFilter::Only(kind) => Some(kind),
                            MilestoneFilter::All => None,
                        },
                        capitalized,
                    )}
                </select>
                <input
                    type="search"
                    placeholder="Search milestones..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| {
                        let search = event_target_value(&ev);
                        set_query.update(|q| q.search = search);
                    }
                />
                <button type="button" class="add-btn" on:click=add_milestone>"+ Add Milestone"</button>
            </div>

            <table class="milestone-table">
                <thead>
                    <tr>
                        <th>"Done"</th>
                        {sort_header(SortField::Description, "Description")}
                        {sort_header(SortField::Type, "Type")}
                        <th>"Progress"</th>
                        {sort_header(SortField::Date, "Date")}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible_rows
                        key=|index| *index
                        children=move |index| view! {
                            <MilestoneRow index=index milestones=milestones on_change=on_change />
                        }
                    />
                </tbody>
            </table>
            <Show when=move || milestones.with(|list| list.is_empty())>
                <p class="empty-hint">"No milestones yet"</p>
            </Show>
        </section>
    }
}

/// Editable row bound to `milestones[index]`
#[component]
fn MilestoneRow(
    index: usize,
    milestones: Signal<Vec<Milestone>>,
    on_change: Callback<Vec<Milestone>>,
) -> impl IntoView {
    let read = move |f: fn(&Milestone) -> String| {
        milestones.with(|list| list.get(index).map(f).unwrap_or_default())
    };

    let edit = move |apply: &dyn Fn(&mut Milestone)| {
        let mut list = milestones.get_untracked();
        if let Some(milestone) = list.get_mut(index) {
            apply(milestone);
            on_change.run(list);
        }
    };

    let remove = move |_| {
        let mut list = milestones.get_untracked();
        if index < list.len() {
            list.remove(index);
            on_change.run(list);
        }
    };

    let current_kind = move || {
        milestones.with(|list| list.get(index).map(|m| m.kind))
    };

    view! {
        <tr class="milestone-row">
            <td>
                <input
                    type="checkbox"
                    prop:checked=move || milestones.with(|list| list.get(index).is_some_and(|m| m.completed))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        edit(&|m| m.set_completed(checked));
                    }
                />
            </td>
            <td>
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || read(|m| m.description.clone())
                    on:input=move |ev| {
                        let description = event_target_value(&ev);
                        edit(&|m| m.description = description.clone());
                    }
                />
            </td>
            <td>
                <select on:change=move |ev| {
                    if let Ok(kind) = event_target_value(&ev).parse::<MilestoneType>() {
                        edit(&|m| m.kind = kind);
                    }
                }>
                    {enum_options(MilestoneType::ALL, current_kind, capitalized)}
                </select>
            </td>
            <td>
                <input
                    type="number"
                    min="0"
                    max="100"
                    class="percent-input"
                    prop:value=move || read(|m| m.percent_complete.to_string())
                    on:input=move |ev| {
                        let percent = event_target_value(&ev).trim().parse::<i64>().unwrap_or(0);
                        edit(&|m| m.set_percent(percent));
                    }
                />
                "%"
            </td>
            <td>
                <input
                    type="date"
                    prop:value=move || read(|m| dates::format_date(&m.date))
                    on:change=move |ev| {
                        if let Some(date) = dates::parse_date(&event_target_value(&ev)) {
                            edit(&|m| m.date = date);
                        }
                    }
                />
            </td>
            <td>
                <button type="button" class="remove-btn" on:click=remove>"×"</button>
            </td>
        </tr>
    }
}
