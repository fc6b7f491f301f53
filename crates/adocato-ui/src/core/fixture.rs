//! In-memory document used by host tests.
//!
//! Supports the selector subset the page contract uses: tags, `.class`, `#id`,
//! compounds of those and the `>` child combinator.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::dom::{Dom, PreviewNode};
use crate::core::error::{UiError, UiResult};
use crate::core::flash::Scheduler;

pub(crate) type NodeId = usize;

#[derive(Debug)]
struct FixtureNode {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    attrs: Vec<(String, String)>,
    hidden: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed element tree rooted at `<body>`.
#[derive(Debug)]
pub(crate) struct FixtureDom {
    nodes: RefCell<Vec<FixtureNode>>,
    body: NodeId,
    body_classes: RefCell<Vec<String>>,
    styles_failing: Cell<bool>,
}

impl Default for FixtureDom {
    fn default() -> Self {
        let body = FixtureNode {
            tag: "body".to_string(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            attrs: Vec::new(),
            hidden: false,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: RefCell::new(vec![body]),
            body: 0,
            body_classes: RefCell::new(Vec::new()),
            styles_failing: Cell::new(false),
        }
    }
}

impl FixtureDom {
    pub(crate) const fn body(&self) -> NodeId {
        self.body
    }

    /// Create an element and append it to `parent`.
    pub(crate) fn element(
        &self,
        parent: NodeId,
        tag: &str,
        id: Option<&str>,
        classes: &[&str],
    ) -> NodeId {
        let node = self.create(tag, id, classes);
        self.append(parent, node);
        node
    }

    /// Create an element outside the document.
    pub(crate) fn detached(&self, tag: &str, classes: &[&str]) -> NodeId {
        self.create(tag, None, classes)
    }

    fn create(&self, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FixtureNode {
            tag: tag.to_string(),
            id: id.map(ToString::to_string),
            classes: classes.iter().map(ToString::to_string).collect(),
            text: String::new(),
            attrs: Vec::new(),
            hidden: false,
            parent: None,
            children: Vec::new(),
        });
        nodes.len() - 1
    }

    fn append(&self, parent: NodeId, child: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[child].parent = Some(parent);
        nodes[parent].children.push(child);
    }

    fn set_attr(&self, node: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node]
            .attrs
            .push((name.to_string(), value.to_string()));
    }

    pub(crate) fn is_attached(&self, node: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.body {
                return true;
            }
            current = nodes[id].parent;
        }
        false
    }

    pub(crate) fn count_id(&self, id: &str) -> usize {
        let len = self.nodes.borrow().len();
        (0..len)
            .filter(|node| {
                self.nodes.borrow()[*node].id.as_deref() == Some(id) && self.is_attached(*node)
            })
            .count()
    }

    pub(crate) fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].text.clone()
    }

    pub(crate) fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node]
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    pub(crate) fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes.borrow()[node]
            .classes
            .iter()
            .any(|value| value == class)
    }

    pub(crate) fn is_hidden(&self, node: NodeId) -> bool {
        self.nodes.borrow()[node].hidden
    }

    pub(crate) fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node].children.clone()
    }

    /// Depth-first search for the first descendant with `tag`.
    pub(crate) fn descendant_by_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        for child in self.children(node) {
            if self.nodes.borrow()[child].tag == tag {
                return Some(child);
            }
            if let Some(found) = self.descendant_by_tag(child, tag) {
                return Some(found);
            }
        }
        None
    }

    /// Make `hide` and `set_body_class` fail like a browser rejecting the change.
    pub(crate) fn set_styles_failing(&self, failing: bool) {
        self.styles_failing.set(failing);
    }

    fn check_styles(&self, operation: &'static str) -> UiResult<()> {
        if self.styles_failing.get() {
            return Err(UiError::Dom {
                operation,
                detail: "rejected by fixture".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn body_has_class(&self, class: &str) -> bool {
        self.body_classes.borrow().iter().any(|value| value == class)
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(node);
        for part in selector.split('>').map(str::trim).rev() {
            let Some(id) = current else {
                return false;
            };
            if !matches_simple(&nodes[id], part) {
                return false;
            }
            current = nodes[id].parent;
        }
        true
    }
}

fn matches_simple(node: &FixtureNode, simple: &str) -> bool {
    let tag_end = simple.find(['.', '#']).unwrap_or(simple.len());
    let tag = &simple[..tag_end];
    if !tag.is_empty() && tag != node.tag {
        return false;
    }
    let mut rest = &simple[tag_end..];
    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['.', '#']).unwrap_or(body.len());
        let name = &body[..end];
        let matched = if marker == '.' {
            node.classes.iter().any(|class| class == name)
        } else {
            node.id.as_deref() == Some(name)
        };
        if !matched {
            return false;
        }
        rest = &body[end..];
    }
    true
}

impl Dom for FixtureDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let len = self.nodes.borrow().len();
        (0..len).find(|node| {
            self.nodes.borrow()[*node].id.as_deref() == Some(id) && self.is_attached(*node)
        })
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.borrow()[*node].parent
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let mut current = Some(*node);
        while let Some(id) = current {
            if self.matches(id, selector) {
                return Some(id);
            }
            current = self.parent(&id);
        }
        None
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(&mut nodes[*node].children);
        for child in children {
            nodes[child].parent = None;
        }
        nodes[*node].text = text.to_string();
    }

    fn hide(&self, node: &NodeId) -> UiResult<()> {
        self.check_styles("hide")?;
        self.nodes.borrow_mut()[*node].hidden = true;
        Ok(())
    }

    fn remove(&self, node: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[*node].parent.take() {
            nodes[parent].children.retain(|child| child != node);
        }
    }

    fn append_preview(&self, parent: &NodeId, preview: &PreviewNode) -> UiResult<()> {
        let wrapper = self.create(
            "div",
            Some(&preview.id),
            &PreviewNode::WRAPPER_CLASS.split(' ').collect::<Vec<_>>(),
        );
        let caption = self.element(
            wrapper,
            "p",
            None,
            &PreviewNode::CAPTION_CLASS.split(' ').collect::<Vec<_>>(),
        );
        self.set_text(&caption, &preview.caption);
        let figure = self.element(
            wrapper,
            "figure",
            None,
            &PreviewNode::FIGURE_CLASS.split(' ').collect::<Vec<_>>(),
        );
        let image = self.element(
            figure,
            "img",
            None,
            &PreviewNode::IMAGE_CLASS.split(' ').collect::<Vec<_>>(),
        );
        self.set_attr(image, "src", &preview.src);
        self.set_attr(image, "alt", &preview.alt);
        self.append(*parent, wrapper);
        Ok(())
    }

    fn set_body_class(&self, class: &str, enabled: bool) -> UiResult<()> {
        self.check_styles("set_body_class")?;
        let mut classes = self.body_classes.borrow_mut();
        classes.retain(|value| value != class);
        if enabled {
            classes.push(class.to_string());
        }
        Ok(())
    }
}

/// Handles into a page rendered with the default contract.
pub(crate) struct FixturePage {
    pub(crate) dom: Rc<FixtureDom>,
    pub(crate) input: NodeId,
    pub(crate) file_name: NodeId,
    pub(crate) field: NodeId,
    pub(crate) toggle: NodeId,
    pub(crate) container: NodeId,
    pub(crate) notifications: Vec<NodeId>,
    pub(crate) controls: Vec<NodeId>,
}

impl FixturePage {
    /// Upload form, theme toggle and a container holding `notifications` banners.
    pub(crate) fn adocato(notifications: usize) -> Self {
        let dom = Rc::new(FixtureDom::default());
        let body = dom.body();

        let toggle = dom.element(body, "button", Some("dark-mode-toggle"), &["button"]);
        dom.set_text(&toggle, "Modo Escuro");

        let container = dom.element(body, "div", Some("messages-container"), &[]);
        let mut banners = Vec::with_capacity(notifications);
        let mut controls = Vec::with_capacity(notifications);
        for _ in 0..notifications {
            let banner = dom.element(container, "div", None, &["notification", "is-success"]);
            controls.push(dom.element(banner, "button", None, &["delete"]));
            banners.push(banner);
        }

        let form = dom.element(body, "form", None, &[]);
        let field = dom.element(form, "div", None, &["field"]);
        let control = dom.element(field, "div", None, &["file", "has-name"]);
        let input = dom.element(control, "input", Some("id_foto"), &["file-input"]);
        let file_name = dom.element(control, "span", Some("file-name"), &["file-name"]);
        dom.set_text(&file_name, "Nenhum arquivo selecionado");

        Self {
            dom,
            input,
            file_name,
            field,
            toggle,
            container,
            notifications: banners,
            controls,
        }
    }
}

/// Scheduler whose clock only moves when a test advances it.
#[derive(Default)]
pub(crate) struct ManualScheduler {
    now: Cell<u32>,
    fired: Cell<usize>,
    pending: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    /// Move the clock forward and run every task that came due.
    pub(crate) fn advance(&self, ms: u32) {
        self.now.set(self.now.get() + ms);
        let now = self.now.get();
        let due: Vec<_> = {
            let mut pending = self.pending.borrow_mut();
            let (due, waiting): (Vec<_>, Vec<_>) =
                pending.drain(..).partition(|(deadline, _)| *deadline <= now);
            *pending = waiting;
            due
        };
        for (_, task) in due {
            task();
            self.fired.set(self.fired.get() + 1);
        }
    }

    pub(crate) fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub(crate) fn fired(&self) -> usize {
        self.fired.get()
    }
}

impl Scheduler for ManualScheduler {
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let deadline = self.now.get() + delay_ms;
        self.pending.borrow_mut().push((deadline, task));
    }
}
