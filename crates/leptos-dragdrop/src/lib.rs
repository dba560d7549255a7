//! Leptos DragDrop Utilities
//!
//! Card-to-column drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are suppressed after a drop, so the drop doesn't also open the card
const CLICK_SUPPRESS_MS: u32 = 100;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Column key under the pointer while dragging
    pub drop_column_read: ReadSignal<Option<String>>,
    pub drop_column_write: WriteSignal<Option<String>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl DndSignals {
    /// Whether `card_id` is the card being dragged
    pub fn is_dragging(&self, card_id: u32) -> bool {
        self.dragging_id_read.get() == Some(card_id)
    }

    /// Whether a drag is hovering `column`
    pub fn is_drop_column(&self, column: &str) -> bool {
        self.dragging_id_read.get().is_some() && self.drop_column_read.get().as_deref() == Some(column)
    }

    /// True right after a drop; card click handlers should ignore the click
    pub fn click_suppressed(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_column_read, drop_column_write) = signal(None::<String>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_column_read,
        drop_column_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    let was_dragging = dnd.dragging_id_read.get_untracked().is_some();
    dnd.dragging_id_write.set(None);
    dnd.drop_column_write.set(None);
    dnd.pending_id_write.set(None);

    if was_dragging {
        dnd.drag_just_ended_write.set(true);
        let clear = dnd.drag_just_ended_write;
        gloo_timers::callback::Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
    }
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, card_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is a form control
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(card_id));
            dnd.start_write.set((ev.client_x(), ev.client_y()));
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start = dnd.start_read.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a column
pub fn make_on_column_mouseenter(dnd: DndSignals, column: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_column_write.set(Some(column.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_column_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// Call once for the lifetime of `dnd`; `on_drop(card_id, column)` fires
/// when a dragged card is released over a column.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, String) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_column = dnd.drop_column_read.get_untracked();

        end_drag(&dnd);

        // Only a real drag over a column is a drop; a plain click falls through
        if let (Some(dragged), Some(column)) = (dragging_id, drop_column) {
            on_drop(dragged, column);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_moves_are_clicks() {
        assert!(!exceeds_threshold((100, 100), (100, 100)));
        assert!(!exceeds_threshold((100, 100), (105, 95)));
    }

    #[test]
    fn test_large_moves_start_drag() {
        assert!(exceeds_threshold((100, 100), (106, 100)));
        assert!(exceeds_threshold((100, 100), (100, 80)));
    }
}
