//! Markup contract between server templates and page behaviors.
//!
//! # Design
//! - Defaults mirror the identifiers the Adocato templates render.
//! - Pages may override any subset through an inline JSON document; missing fields keep defaults.
//! - Validation rejects values that would make a behavior silently inert.

use serde::Deserialize;

use crate::core::error::ConfigError;

/// Id of the inline `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "adocato-config";
/// Delay before the notification container is removed.
pub const AUTO_DISMISS_MS: u32 = 5_000;
/// Toggle endpoint path. The misspelling is part of the server route.
pub const TOGGLE_ENDPOINT: &str = "/adocato/toogle-dark-mode/";

/// Element identifiers, selectors and timings the behaviors rely on.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageContract {
    /// File input watched by the preview widget.
    pub file_input_id: String,
    /// Element showing the selected file name.
    pub file_name_id: String,
    /// Id given to the preview node; at most one exists.
    pub preview_id: String,
    /// Selector for the ancestor the preview is appended to.
    pub field_selector: String,
    /// Button that requests a theme flip.
    pub toggle_id: String,
    /// Class toggled on `<body>` while dark mode is on.
    pub dark_mode_class: String,
    /// Endpoint flipping the server-side preference.
    pub toggle_endpoint: String,
    /// Wrapper holding every flash notification.
    pub messages_container_id: String,
    /// Selector matching a notification's dismiss control.
    pub dismiss_selector: String,
    /// Milliseconds between page-ready and container removal.
    pub auto_dismiss_ms: u32,
}

impl Default for PageContract {
    fn default() -> Self {
        Self {
            file_input_id: "id_foto".to_string(),
            file_name_id: "file-name".to_string(),
            preview_id: "foto-preview".to_string(),
            field_selector: ".field".to_string(),
            toggle_id: "dark-mode-toggle".to_string(),
            dark_mode_class: "dark-mode".to_string(),
            toggle_endpoint: TOGGLE_ENDPOINT.to_string(),
            messages_container_id: "messages-container".to_string(),
            dismiss_selector: ".notification > .delete".to_string(),
            auto_dismiss_ms: AUTO_DISMISS_MS,
        }
    }
}

impl PageContract {
    /// Parse a (possibly partial) JSON override document and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for unparsable documents or unknown fields and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let contract: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Json { source })?;
        contract.validate()?;
        Ok(contract)
    }

    /// Check that every identifier is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("file_input_id", &self.file_input_id),
            ("file_name_id", &self.file_name_id),
            ("preview_id", &self.preview_id),
            ("field_selector", &self.field_selector),
            ("toggle_id", &self.toggle_id),
            ("dark_mode_class", &self.dark_mode_class),
            ("toggle_endpoint", &self.toggle_endpoint),
            ("messages_container_id", &self.messages_container_id),
            ("dismiss_selector", &self.dismiss_selector),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidField {
                    field,
                    reason: "must not be empty",
                });
            }
        }
        if self.dark_mode_class.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidField {
                field: "dark_mode_class",
                reason: "must be a single class name",
            });
        }
        if !(self.toggle_endpoint.starts_with('/') || self.toggle_endpoint.starts_with("http")) {
            return Err(ConfigError::InvalidField {
                field: "toggle_endpoint",
                reason: "must be a path or an absolute url",
            });
        }
        if self.auto_dismiss_ms == 0 {
            return Err(ConfigError::InvalidField {
                field: "auto_dismiss_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}
