//! Reusable building blocks shared by every page.

mod crud_table;
pub use crud_table::{Column, CrudTable, TableRow};

mod form_modal;
pub use form_modal::FormModal;

mod header;
pub use header::Header;

mod info_modal;
pub use info_modal::{InfoModal, Notice, NoticeKind};

mod modal;
pub use modal::Modal;

mod search_input;
pub use search_input::SearchInput;
