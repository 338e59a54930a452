//! Model layer - state that does not depend on the terminal
//!
//! - `toast` - Transient notifications and their lifecycle
//! - `modal` - Single-slot modal overlay
//! - `selection` - Cross-page row selection for batch actions
//! - `nav` - Sidebar navigation groups
//! - `row` - Row data and pagination
//! - `ui` - Presentation-only enums

pub mod modal;
pub mod nav;
pub mod row;
pub mod selection;
pub mod toast;
pub mod ui;

pub use modal::{ConfirmModal, Modal, ModalButton, ModalHost, ModalSlot};
pub use nav::{NavEntry, NavTree, Section};
pub use row::{BatchAction, Pager, Row, RowId, RowSet};
pub use selection::{MasterState, SelectionManager, SelectionView};
pub use toast::{NotificationSink, Severity, Toast, ToastId, ToastStack};
