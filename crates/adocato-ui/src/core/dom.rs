//! Minimal document surface the behaviors are written against.
//!
//! # Design
//! - Behaviors receive a `Dom` handle instead of reaching for globals, so each one can run
//!   against the browser document or an in-memory fixture.
//! - Methods take `&self`; the browser DOM is interior-mutable and fixtures follow suit.

use crate::core::error::UiResult;

/// Operations on a document, keyed by an implementation-defined node handle.
pub trait Dom {
    /// Handle to an element in the document.
    type Node: Clone;

    /// Look up an attached element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Immediate parent element, if any.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// Replace the text content of `node`.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Apply `display: none` to `node`.
    ///
    /// # Errors
    ///
    /// Returns an error when the browser rejects the style change.
    fn hide(&self, node: &Self::Node) -> UiResult<()>;

    /// Detach `node` from the document.
    fn remove(&self, node: &Self::Node);

    /// Build `preview` and append it as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error when the implementation cannot create the subtree.
    fn append_preview(&self, parent: &Self::Node, preview: &PreviewNode) -> UiResult<()>;

    /// Add or remove `class` on the document body.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is missing or rejects the class change.
    fn set_body_class(&self, class: &str, enabled: bool) -> UiResult<()>;
}

/// Description of the thumbnail subtree inserted after a file selection.
///
/// Rendered as
/// `div#{id}.mt-2 > (p.help{caption}, figure.image.is-96x96 > img.is-rounded[src][alt])`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewNode {
    /// Id of the wrapper element.
    pub id: String,
    /// Help text shown above the thumbnail.
    pub caption: String,
    /// Image source, a data URI.
    pub src: String,
    /// Alternative text for the image.
    pub alt: String,
}

impl PreviewNode {
    /// Class list of the wrapper element.
    pub const WRAPPER_CLASS: &'static str = "mt-2";
    /// Class list of the caption paragraph.
    pub const CAPTION_CLASS: &'static str = "help";
    /// Class list of the figure element.
    pub const FIGURE_CLASS: &'static str = "image is-96x96";
    /// Class list of the image element.
    pub const IMAGE_CLASS: &'static str = "is-rounded";
}
