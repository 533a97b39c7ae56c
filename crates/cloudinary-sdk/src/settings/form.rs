//! Settings form model

use crate::credentials::{CredentialSet, API_KEY_KEY, API_SECRET_KEY, CLOUD_NAME_KEY};

/// Identifier of the settings form
pub const FORM_ID: &str = "cloudinary_sdk_settings";

/// Framework control fields that never reach persistence
pub const RESERVED_FIELDS: [&str; 5] = ["op", "submit", "form_id", "form_token", "form_build_id"];

/// A single editable form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field name, doubling as the storage key
    pub name: String,
    /// Display label
    pub title: String,
    /// Help text shown beneath the field
    pub description: String,
    /// Whether submission requires a non-empty value
    pub required: bool,
    /// Current value, pre-filled from the persisted settings
    pub value: String,
}

impl FormField {
    fn required_text(
        name: &str,
        title: &str,
        description: &str,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            required: true,
            value: value.into(),
        }
    }
}

/// The collapsible "API Settings" fieldset with its three credential fields
#[derive(Debug, Clone)]
pub struct SettingsForm {
    /// Form identifier
    pub id: &'static str,
    /// Fieldset title
    pub title: String,
    /// Fieldset description
    pub description: String,
    /// Whether the fieldset can be collapsed
    pub collapsible: bool,
    /// Editable fields, in display order
    pub fields: Vec<FormField>,
}

impl SettingsForm {
    /// Build the form pre-filled from a persisted credential set
    pub fn with_values(credentials: &CredentialSet) -> Self {
        Self {
            id: FORM_ID,
            title: "API Settings".to_string(),
            description: "In order to check the validity of the API, system will \
                          auto ping your Cloudinary account after change API settings."
                .to_string(),
            collapsible: true,
            fields: vec![
                FormField::required_text(
                    CLOUD_NAME_KEY,
                    "Cloud name",
                    "Cloud name of Cloudinary.",
                    &credentials.cloud_name,
                ),
                FormField::required_text(
                    API_KEY_KEY,
                    "API key",
                    "API key of Cloudinary.",
                    &credentials.api_key,
                ),
                FormField::required_text(
                    API_SECRET_KEY,
                    "API secret",
                    "API secret of Cloudinary.",
                    &credentials.api_secret,
                ),
            ],
        }
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
