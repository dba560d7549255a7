//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Which page is shown in place of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Board,
    NewFeature,
    EditFeature(u32),
}

/// App-wide navigation and refresh, provided via context.
///
/// `App` owns the read halves; children only write.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to reload features from the backend
    set_reload_trigger: WriteSignal<u32>,
    /// Current page
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(set_reload_trigger: WriteSignal<u32>, set_page: WriteSignal<Page>) -> Self {
        Self { set_reload_trigger, set_page }
    }

    /// Trigger a reload of features
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn open(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Back to the board, refreshing it
    pub fn close(&self) {
        self.set_page.set(Page::Board);
        self.reload();
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
