//! UI Components
//!
//! Board, card and form components.

mod enum_options;
mod search_bar;
mod column_config;
mod feature_card;
mod board_column;
mod kanban_board;
mod delete_feature_button;
mod backlog_editor;
mod milestone_editor;
mod markdown_toolbar;
mod notes_editor;
mod feature_form;

pub use enum_options::{capitalized, enum_options};
pub use search_bar::SearchBar;
pub use column_config::ColumnConfig;
pub use feature_card::FeatureCard;
pub use board_column::BoardColumn;
pub use kanban_board::KanbanBoard;
pub use delete_feature_button::DeleteFeatureButton;
pub use backlog_editor::BacklogEditor;
pub use milestone_editor::MilestoneEditor;
pub use markdown_toolbar::MarkdownToolbar;
pub use notes_editor::NotesEditor;
pub use feature_form::FeatureForm;
