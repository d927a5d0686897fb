//! UI Components
//!
//! Reusable Leptos components.

mod admin_prompt;
mod date_range;
mod delete_confirm_button;
mod field;
mod header;
mod modal;
mod pagination;
mod search_box;
mod sidebar;
mod toast_host;

pub use admin_prompt::RequireTenant;
pub use date_range::DateRangeFilter;
pub use delete_confirm_button::DeleteConfirmButton;
pub use field::{date_text, number_text, opt_text, some_text, time_text, Checkbox, Field, SelectField, TextArea};
pub use header::Header;
pub use modal::Modal;
pub use pagination::Pagination;
pub use search_box::SearchBox;
pub use sidebar::Sidebar;
pub use toast_host::ToastHost;
