//! `<option>` lists for the closed value sets.

use leptos::prelude::*;
use std::fmt::Display;

/// One `<option>` per value, selecting whichever equals `selected()` (none if `None`).
///
/// Option values are the wire names; `label` formats the visible text.
pub fn enum_options<T, S>(values: &'static [T], selected: S, label: fn(&T) -> String) -> impl IntoView
where
    T: Copy + PartialEq + Display + Send + Sync + 'static,
    S: Fn() -> Option<T> + Copy + Send + Sync + 'static,
{
    values
        .iter()
        .map(move |value| {
            let value = *value;
            view! {
                <option value=value.to_string() prop:selected=move || selected() == Some(value)>
                    {label(&value)}
                </option>
            }
        })
        .collect_view()
}

/// "medium" -> "Medium"
pub fn capitalized<T: Display>(value: &T) -> String {
    let text = value.to_string();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MilestoneType, Priority};

    #[test]
    fn test_capitalized() {
        assert_eq!(capitalized(&Priority::Medium), "Medium");
        assert_eq!(capitalized(&MilestoneType::Deployment), "Deployment");
    }
}
