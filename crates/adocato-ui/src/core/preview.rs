//! Upload preview for the cat photo field.
//!
//! # Design
//! - A change event first updates the filename display; decoding happens afterwards.
//! - Rendering removes the previous preview before inserting, so at most one exists.
//! - Clearing the picker resets the filename only; a stale preview stays in place.

use std::rc::Rc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::core::contract::PageContract;
use crate::core::dom::{Dom, PreviewNode};
use crate::core::error::{UiError, UiResult};
use crate::i18n::UiLabels;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode file contents as a `data:` URI the way `FileReader.readAsDataURL` does.
#[must_use]
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Preview behavior bound to one file input.
pub struct PreviewWidget<D: Dom> {
    dom: Rc<D>,
    contract: Rc<PageContract>,
    labels: Rc<UiLabels>,
    input: D::Node,
}

impl<D: Dom> PreviewWidget<D> {
    /// Resolve the file input named by the contract.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the input is not in the document.
    pub fn new(dom: Rc<D>, contract: Rc<PageContract>, labels: Rc<UiLabels>) -> UiResult<Self> {
        let input = dom
            .element_by_id(&contract.file_input_id)
            .ok_or_else(|| UiError::MissingElement {
                id: contract.file_input_id.clone(),
            })?;
        Ok(Self {
            dom,
            contract,
            labels,
            input,
        })
    }

    /// Handle of the watched input.
    #[must_use]
    pub const fn input(&self) -> &D::Node {
        &self.input
    }

    /// Reflect a change event in the filename display.
    ///
    /// Returns `true` when a file was chosen and should be decoded for preview.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the filename element is absent; no
    /// decode should start in that case.
    pub fn select(&self, file_name: Option<&str>) -> UiResult<bool> {
        let display = self
            .dom
            .element_by_id(&self.contract.file_name_id)
            .ok_or_else(|| UiError::MissingElement {
                id: self.contract.file_name_id.clone(),
            })?;
        match file_name {
            Some(name) => {
                self.dom.set_text(&display, name);
                Ok(true)
            }
            None => {
                self.dom.set_text(&display, &self.labels.no_file);
                Ok(false)
            }
        }
    }

    /// Replace any existing preview with one showing `data_url`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingAncestor`] when the input sits outside a field container,
    /// or the DOM error raised while building the preview. The previous preview is already
    /// removed at that point.
    pub fn render(&self, data_url: &str) -> UiResult<()> {
        if let Some(existing) = self.dom.element_by_id(&self.contract.preview_id) {
            self.dom.remove(&existing);
        }
        let field = self
            .dom
            .closest(&self.input, &self.contract.field_selector)
            .ok_or_else(|| UiError::MissingAncestor {
                selector: self.contract.field_selector.clone(),
            })?;
        let preview = PreviewNode {
            id: self.contract.preview_id.clone(),
            caption: self.labels.preview_caption.clone(),
            src: data_url.to_string(),
            alt: self.labels.preview_alt.clone(),
        };
        self.dom.append_preview(&field, &preview)
    }
}
