//! Markdown Toolbar
//!
//! Buttons that wrap the textarea selection in Markdown syntax.

use leptos::html::Textarea;
use leptos::prelude::*;

use crate::markdown::insert_markup;

/// (button label, title, before, after)
const ACTIONS: &[(&str, &str, &str, &str)] = &[
    ("H1", "Heading 1", "# ", ""),
    ("H2", "Heading 2", "## ", ""),
    ("H3", "Heading 3", "### ", ""),
    ("B", "Bold", "**", "**"),
    ("I", "Italic", "*", "*"),
    ("•", "Bullet list", "- ", ""),
    ("1.", "Numbered list", "1. ", ""),
    ("❝", "Quote", "> ", ""),
    ("<>", "Code", "`", "`"),
    ("🔗", "Link", "[", "](url)"),
];

#[component]
pub fn MarkdownToolbar(
    textarea: NodeRef<Textarea>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let apply = move |before: &'static str, after: &'static str| {
        let Some(el) = textarea.get() else { return };
        let text = el.value();
        let start = el.selection_start().ok().flatten().unwrap_or(0);
        let end = el.selection_end().ok().flatten().unwrap_or(start);

        let (updated, caret) = insert_markup(&text, start, end, before, after);
        el.set_value(&updated);
        on_change.run(updated);

        let _ = el.focus();
        let _ = el.set_selection_range(caret, caret);
    };

    view! {
        <div class="markdown-toolbar">
            {ACTIONS.iter().map(|&(label, title, before, after)| view! {
                <button
                    type="button"
                    class="toolbar-btn"
                    title=title
                    on:click=move |_| apply(before, after)
                >
                    {label}
                </button>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(title: &str) -> (&'static str, &'static str) {
        ACTIONS
            .iter()
            .find(|(_, t, _, _)| *t == title)
            .map(|&(_, _, before, after)| (before, after))
            .unwrap()
    }

    #[test]
    fn test_italic_uses_asterisks() {
        let (before, after) = action("Italic");
        let (text, _) = insert_markup("ship it", 5, 7, before, after);
        assert_eq!(text, "ship *it*");
    }

    #[test]
    fn test_bold_wraps_selection() {
        let (before, after) = action("Bold");
        assert_eq!(insert_markup("ship it", 0, 4, before, after).0, "**ship** it");
    }
}
