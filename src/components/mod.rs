//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod confirm_dialog;
pub mod help_dialog;
pub mod layout;
pub mod screen;
pub mod sidebar;
pub mod table;
pub mod toast;

pub use confirm_dialog::{draw_confirm_dialog, handle_confirm_key};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use screen::{draw_main_screen, ScreenContext};
pub use sidebar::SidebarComponent;
pub use table::{PageInfo, PageTable};
pub use toast::draw_toasts;
