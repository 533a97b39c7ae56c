//! Administrative API settings
//!
//! Form model, credential validation, and the submit flow for the
//! "API Settings" page. The host platform renders the form model and feeds
//! submitted values back through [`SettingsController::submit`].

mod controller;
mod form;
mod validator;

pub use controller::{FormError, FormPhase, SettingsController, SubmitOutcome};
pub use form::{FormField, SettingsForm, FORM_ID, RESERVED_FIELDS};
pub use validator::{CredentialValidator, ValidationError, ValidationOutcome};
