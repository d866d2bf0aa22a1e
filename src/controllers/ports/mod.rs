pub mod control_sync;
pub mod summary_presenter;
