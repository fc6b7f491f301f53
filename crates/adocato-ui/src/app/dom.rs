//! Browser-backed [`Dom`] implementation.

use crate::core::dom::{Dom, PreviewNode};
use crate::core::error::{UiError, UiResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Live document wrapper.
pub(crate) struct WebDom {
    document: Document,
}

impl WebDom {
    pub(crate) const fn new(document: Document) -> Self {
        Self { document }
    }

    pub(crate) const fn document(&self) -> &Document {
        &self.document
    }

    fn create(&self, tag: &str, class: &str) -> UiResult<Element> {
        let element = self
            .document
            .create_element(tag)
            .map_err(|err| dom_error("create_element", &err))?;
        element.set_class_name(class);
        Ok(element)
    }
}

fn dom_error(operation: &'static str, err: &JsValue) -> UiError {
    UiError::Dom {
        operation,
        detail: format!("{err:?}"),
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector).ok().flatten()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn hide(&self, node: &Element) -> UiResult<()> {
        let Some(html) = node.dyn_ref::<HtmlElement>() else {
            return Err(UiError::Dom {
                operation: "hide",
                detail: "element has no style declaration".to_string(),
            });
        };
        html.style()
            .set_property("display", "none")
            .map_err(|err| dom_error("hide", &err))
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn append_preview(&self, parent: &Element, preview: &PreviewNode) -> UiResult<()> {
        let wrapper = self.create("div", PreviewNode::WRAPPER_CLASS)?;
        wrapper.set_id(&preview.id);

        let caption = self.create("p", PreviewNode::CAPTION_CLASS)?;
        caption.set_text_content(Some(&preview.caption));

        let figure = self.create("figure", PreviewNode::FIGURE_CLASS)?;
        let image = self.create("img", PreviewNode::IMAGE_CLASS)?;
        image
            .set_attribute("src", &preview.src)
            .map_err(|err| dom_error("set_attribute", &err))?;
        image
            .set_attribute("alt", &preview.alt)
            .map_err(|err| dom_error("set_attribute", &err))?;

        figure
            .append_child(&image)
            .map_err(|err| dom_error("append_child", &err))?;
        wrapper
            .append_child(&caption)
            .map_err(|err| dom_error("append_child", &err))?;
        wrapper
            .append_child(&figure)
            .map_err(|err| dom_error("append_child", &err))?;
        parent
            .append_child(&wrapper)
            .map_err(|err| dom_error("append_child", &err))?;
        Ok(())
    }

    fn set_body_class(&self, class: &str, enabled: bool) -> UiResult<()> {
        let body = self.document.body().ok_or_else(|| UiError::MissingElement {
            id: "body".to_string(),
        })?;
        let classes = body.class_list();
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        result.map_err(|err| dom_error("set_body_class", &err))
    }
}
