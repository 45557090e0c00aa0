//! Create/edit dialog components.
//!
//! Each dialog owns transient form state, validates synchronously before
//! invoking its callback, and keeps its inputs on mutation failure so the
//! user can retry without re-entering data. The parent closes the dialog
//! only after the gateway call succeeds.

mod complaint_dialog;
mod event_dialog;
mod grade_dialog;
mod material_dialog;
mod notice_dialog;
mod resolve_dialog;
mod user_dialog;
mod waiver_dialog;

pub use complaint_dialog::ComplaintDialog;
pub use event_dialog::EventDialog;
pub use grade_dialog::GradeDialog;
pub use material_dialog::MaterialDialog;
pub use notice_dialog::NoticeDialog;
pub use resolve_dialog::ResolveDialog;
pub use user_dialog::UserDialog;
pub use waiver_dialog::WaiverDialog;
