//! This crate contains all shared UI for the workspace.

mod components;
pub use components::{FieldError, SelectField, TextField};

mod state;
pub use state::{use_app_state, AppState, StateProvider};

mod storage;
pub use storage::{make_slot, make_store};

mod record_form;
pub use record_form::RecordForm;
