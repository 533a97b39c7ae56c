//! Settings form controller

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use super::form::{SettingsForm, RESERVED_FIELDS};
use super::validator::{CredentialValidator, ValidationError};
use crate::credentials::{CredentialSet, API_KEY_KEY, API_SECRET_KEY, CLOUD_NAME_KEY};
use crate::logging::SharedLogger;
use crate::store::{CredentialStore, StoreResult};

/// Form lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Rendering current values; no submission in flight
    Display,
    /// A submission is being validated
    Validating,
    /// The last submission was persisted
    Persisted,
    /// The last submission was rejected
    Rejected,
}

/// A user-facing submission failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field was missing or empty
    #[error("{title} field is required.")]
    Required {
        /// Field name (storage key)
        field: String,
        /// Display label
        title: String,
    },

    /// Form-level failure from the live credential check, not bound to a
    /// specific field
    #[error("{0}")]
    Validation(String),
}

/// Result of a settings submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the credential store was updated
    Persisted,
    /// Submission was rejected; the store is untouched
    Rejected(Vec<FormError>),
}

/// Drives the "API Settings" form: render, validate, persist
///
/// Submitted values go through reserved-field filtering, key
/// normalization, required-field checks, and live validation before
/// anything reaches the credential store.
pub struct SettingsController {
    store: Arc<dyn CredentialStore>,
    validator: CredentialValidator,
    logger: SharedLogger,
    phase: RwLock<FormPhase>,
}

impl SettingsController {
    /// Create a controller over a credential store and validator
    pub fn new(
        store: Arc<dyn CredentialStore>,
        validator: CredentialValidator,
        logger: SharedLogger,
    ) -> Self {
        Self {
            store,
            validator,
            logger,
            phase: RwLock::new(FormPhase::Display),
        }
    }

    /// Current form phase
    pub fn phase(&self) -> FormPhase {
        *self.phase.read().unwrap()
    }

    fn set_phase(&self, phase: FormPhase) {
        *self.phase.write().unwrap() = phase;
    }

    /// Build the form model pre-filled from the persisted settings
    pub async fn render(&self) -> StoreResult<SettingsForm> {
        self.set_phase(FormPhase::Display);
        let credentials = self.store.load().await?;
        Ok(SettingsForm::with_values(&credentials))
    }

    /// Handle a form submission
    ///
    /// Validation failures come back as [`SubmitOutcome::Rejected`];
    /// persistence faults propagate as errors.
    pub async fn submit(&self, values: &HashMap<String, String>) -> StoreResult<SubmitOutcome> {
        self.set_phase(FormPhase::Validating);

        let candidate = self.collect_candidate(values);

        let mut errors = Vec::new();
        for (key, title, value) in [
            (CLOUD_NAME_KEY, "Cloud name", &candidate.cloud_name),
            (API_KEY_KEY, "API key", &candidate.api_key),
            (API_SECRET_KEY, "API secret", &candidate.api_secret),
        ] {
            if value.is_empty() {
                errors.push(FormError::Required {
                    field: key.to_string(),
                    title: title.to_string(),
                });
            }
        }
        if !errors.is_empty() {
            self.set_phase(FormPhase::Rejected);
            return Ok(SubmitOutcome::Rejected(errors));
        }

        match self.validator.validate(&candidate).await {
            Ok(_) => {}
            Err(ValidationError::Ping { message }) => {
                self.set_phase(FormPhase::Rejected);
                return Ok(SubmitOutcome::Rejected(vec![FormError::Validation(message)]));
            }
            Err(ValidationError::Store(e)) => return Err(e),
        }

        self.store.save(&candidate).await?;
        self.logger.info("Cloudinary API settings saved");
        self.set_phase(FormPhase::Persisted);
        Ok(SubmitOutcome::Persisted)
    }

    /// Extract the candidate credential set from raw submitted values
    ///
    /// Reserved control fields are dropped, field names are normalized
    /// (`.` becomes `_` for storage-key compatibility), and only the three
    /// recognized settings keys are kept; anything else is ignored with a
    /// warning.
    fn collect_candidate(&self, values: &HashMap<String, String>) -> CredentialSet {
        let mut candidate = CredentialSet::default();

        for (field, value) in values {
            if RESERVED_FIELDS.contains(&field.as_str()) {
                continue;
            }

            let key = field.replace('.', "_");
            match key.as_str() {
                CLOUD_NAME_KEY => candidate.cloud_name = value.clone(),
                API_KEY_KEY => candidate.api_key = value.clone(),
                API_SECRET_KEY => candidate.api_secret = value.clone(),
                _ => {
                    self.logger
                        .warn(&format!("Ignoring unrecognized settings field: {}", field));
                }
            }
        }

        candidate.trimmed()
    }
}

impl std::fmt::Debug for SettingsController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsController")
            .field("phase", &self.phase())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::form::FORM_ID;
    use crate::logging::NoOpLogger;
    use crate::sdk::{MockCloudinaryApi, SdkClientConfig};
    use crate::store::MemoryCredentialStore;

    struct Harness {
        controller: SettingsController,
        store: Arc<MemoryCredentialStore>,
        api: Arc<MockCloudinaryApi>,
    }

    fn harness(persisted: Option<&CredentialSet>, api: MockCloudinaryApi) -> Harness {
        let store = Arc::new(match persisted {
            Some(creds) => MemoryCredentialStore::with_credentials(creds),
            None => MemoryCredentialStore::new(),
        });
        let api = Arc::new(api);
        let logger: SharedLogger = Arc::new(NoOpLogger::new());
        let validator = CredentialValidator::new(
            store.clone(),
            SdkClientConfig::new(),
            api.clone(),
            logger.clone(),
        );
        Harness {
            controller: SettingsController::new(store.clone(), validator, logger),
            store,
            api,
        }
    }

    fn submission(cloud: &str, key: &str, secret: &str) -> HashMap<String, String> {
        let mut values = HashMap::new();
        values.insert(CLOUD_NAME_KEY.to_string(), cloud.to_string());
        values.insert(API_KEY_KEY.to_string(), key.to_string());
        values.insert(API_SECRET_KEY.to_string(), secret.to_string());
        // Framework control fields always ride along with a real submission
        values.insert("op".to_string(), "Save configuration".to_string());
        values.insert("form_id".to_string(), FORM_ID.to_string());
        values.insert("form_token".to_string(), "abc123".to_string());
        values
    }

    #[tokio::test]
    async fn test_render_prefills_persisted_values() {
        let persisted = CredentialSet::new("x", "k1", "s1");
        let h = harness(Some(&persisted), MockCloudinaryApi::ok());

        let form = h.controller.render().await.unwrap();
        assert_eq!(form.field(CLOUD_NAME_KEY).unwrap().value, "x");
        assert_eq!(h.controller.phase(), FormPhase::Display);
    }

    #[tokio::test]
    async fn test_identical_submission_persists_without_ping() {
        // Scenario A: identical values, zero network calls, store unchanged
        let persisted = CredentialSet::new("x", "k1", "s1");
        let h = harness(Some(&persisted), MockCloudinaryApi::ok());

        let outcome = h.controller.submit(&submission("x", "k1", "s1")).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Persisted);
        assert_eq!(h.api.calls(), 0);
        assert_eq!(h.store.load().await.unwrap(), persisted);
        assert_eq!(h.controller.phase(), FormPhase::Persisted);
    }

    #[tokio::test]
    async fn test_rejected_submission_leaves_store_unchanged() {
        // Scenario B: changed cloud name, vendor rejects the ping
        let persisted = CredentialSet::new("x", "k1", "s1");
        let h = harness(Some(&persisted), MockCloudinaryApi::failing("AuthError"));

        let outcome = h.controller.submit(&submission("y", "k1", "s1")).await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![FormError::Validation("AuthError".to_string())])
        );
        assert_eq!(h.store.load().await.unwrap(), persisted);
        assert_eq!(h.controller.phase(), FormPhase::Rejected);
    }

    #[tokio::test]
    async fn test_missing_required_field_skips_validator() {
        // Scenario C: empty secret fails the required check before any ping
        let persisted = CredentialSet::new("x", "k1", "s1");
        let h = harness(Some(&persisted), MockCloudinaryApi::ok());

        let outcome = h.controller.submit(&submission("x", "k1", "")).await.unwrap();
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(matches!(
                    &errors[0],
                    FormError::Required { field, .. } if field == API_SECRET_KEY
                ));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(h.api.calls(), 0, "validator must not run");
        assert_eq!(h.store.load().await.unwrap(), persisted);
    }

    #[tokio::test]
    async fn test_accepted_submission_updates_store() {
        let persisted = CredentialSet::new("x", "k1", "s1");
        let h = harness(Some(&persisted), MockCloudinaryApi::ok());

        let outcome = h.controller.submit(&submission("y", "k2", "s2")).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Persisted);
        assert_eq!(h.api.calls(), 1);
        assert_eq!(
            h.store.load().await.unwrap(),
            CredentialSet::new("y", "k2", "s2")
        );
    }

    #[tokio::test]
    async fn test_first_time_setup() {
        let h = harness(None, MockCloudinaryApi::ok());

        let outcome = h.controller.submit(&submission("demo", "key", "secret")).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Persisted);
        assert_eq!(
            h.store.load().await.unwrap(),
            CredentialSet::new("demo", "key", "secret")
        );
    }

    #[tokio::test]
    async fn test_submitted_values_are_trimmed_before_persist() {
        let h = harness(None, MockCloudinaryApi::ok());

        h.controller
            .submit(&submission(" demo ", "key\t", " secret"))
            .await
            .unwrap();
        assert_eq!(
            h.store.load().await.unwrap(),
            CredentialSet::new("demo", "key", "secret")
        );
    }

    #[tokio::test]
    async fn test_dotted_field_names_are_normalized() {
        let h = harness(None, MockCloudinaryApi::ok());

        let mut values = HashMap::new();
        values.insert("cloudinary.sdk.cloud.name".to_string(), "demo".to_string());
        values.insert("cloudinary.sdk.api.key".to_string(), "key".to_string());
        values.insert("cloudinary.sdk.api.secret".to_string(), "secret".to_string());

        let candidate = h.controller.collect_candidate(&values);
        assert_eq!(candidate, CredentialSet::new("demo", "key", "secret"));
    }

    #[tokio::test]
    async fn test_unrecognized_fields_are_ignored() {
        let h = harness(None, MockCloudinaryApi::ok());

        let mut values = submission("demo", "key", "secret");
        values.insert("unrelated_setting".to_string(), "1".to_string());

        let outcome = h.controller.submit(&values).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Persisted);
        assert!(h.store.get_sync("unrelated_setting").is_none());
    }

    #[tokio::test]
    async fn test_reserved_fields_are_ignored() {
        let h = harness(None, MockCloudinaryApi::ok());

        let outcome = h.controller.submit(&submission("demo", "key", "secret")).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Persisted);

        // None of the control fields leaked into the store
        for reserved in RESERVED_FIELDS {
            assert!(h.store.get_sync(reserved).is_none());
        }
    }
}
