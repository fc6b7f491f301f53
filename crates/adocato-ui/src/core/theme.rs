//! Dark-mode preference mirrored from the server.
//!
//! # Design
//! - The server owns the preference; the page only mirrors the last response it received.
//! - Responses are validated; anything but `{ "dark_mode": bool }` leaves the page untouched.
//! - Overlapping requests are not sequenced, so the last response to arrive wins.

use std::rc::Rc;

use serde::Deserialize;

use crate::core::contract::PageContract;
use crate::core::dom::Dom;
use crate::core::error::{UiError, UiResult};
use crate::i18n::UiLabels;

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Map the server's boolean flag to a mode.
    #[must_use]
    pub const fn from_dark_flag(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }
}

/// Body returned by the toggle endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ToggleResponse {
    /// Preference after the server flipped it.
    pub dark_mode: bool,
}

impl ToggleResponse {
    /// Parse and validate a response body.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MalformedResponse`] for invalid JSON, a missing `dark_mode`
    /// field or a non-boolean value.
    pub fn parse(body: &str) -> UiResult<Self> {
        serde_json::from_str(body).map_err(|source| UiError::MalformedResponse { source })
    }

    /// Mode the page should display.
    #[must_use]
    pub const fn mode(self) -> ThemeMode {
        ThemeMode::from_dark_flag(self.dark_mode)
    }
}

/// Toggle behavior bound to the theme button.
pub struct DarkModeToggle<D: Dom> {
    dom: Rc<D>,
    contract: Rc<PageContract>,
    labels: Rc<UiLabels>,
    button: D::Node,
}

impl<D: Dom> DarkModeToggle<D> {
    /// Resolve the toggle button named by the contract.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the button is not in the document.
    pub fn new(dom: Rc<D>, contract: Rc<PageContract>, labels: Rc<UiLabels>) -> UiResult<Self> {
        let button = dom
            .element_by_id(&contract.toggle_id)
            .ok_or_else(|| UiError::MissingElement {
                id: contract.toggle_id.clone(),
            })?;
        Ok(Self {
            dom,
            contract,
            labels,
            button,
        })
    }

    /// Handle of the toggle button.
    #[must_use]
    pub const fn button(&self) -> &D::Node {
        &self.button
    }

    /// Endpoint that flips the preference.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.contract.toggle_endpoint
    }

    /// Mirror `mode` into the body class and the button label.
    ///
    /// The label offers the opposite theme.
    ///
    /// # Errors
    ///
    /// Returns the DOM error raised while updating the body class; the label is not touched.
    pub fn apply(&self, mode: ThemeMode) -> UiResult<()> {
        let (enabled, label) = match mode {
            ThemeMode::Dark => (true, &self.labels.to_light),
            ThemeMode::Light => (false, &self.labels.to_dark),
        };
        self.dom.set_body_class(&self.contract.dark_mode_class, enabled)?;
        self.dom.set_text(&self.button, label);
        Ok(())
    }

    /// Apply the outcome of a toggle round trip.
    ///
    /// # Errors
    ///
    /// Propagates the transport error, [`UiError::MalformedResponse`], or the DOM error
    /// from [`Self::apply`]; the page is left unchanged in each case.
    pub fn complete(&self, outcome: UiResult<String>) -> UiResult<ThemeMode> {
        let mode = ToggleResponse::parse(&outcome?)?.mode();
        self.apply(mode)?;
        Ok(mode)
    }
}
