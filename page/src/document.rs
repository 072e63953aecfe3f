use std::sync::Arc;

use derive_more::From;
use log::debug;
use parking_lot::Mutex;

use crate::{Element, ElementId, IdGenerator, Selector};

/// The registry of all elements animation and drag targets resolve against.
///
/// Elements are registered in creation order and never released; selector
/// lookup returns matches in that order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Arc<Mutex<InnerDocument>>,
}

#[derive(Debug, Default)]
struct InnerDocument {
    ids: IdGenerator,
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn create_element(&self, tag: &str) -> Element {
        let mut inner = self.inner.lock();
        let element = Element::new(inner.ids.acquire(), tag);
        inner.elements.push(element.clone());
        element
    }

    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.inner.lock().elements.get(usize::from(id)).cloned()
    }

    /// All registered elements, in creation order.
    pub fn elements(&self) -> Vec<Element> {
        self.inner.lock().elements.clone()
    }

    /// Resolves a selector string against all registered elements.
    ///
    /// An unparsable selector matches nothing.
    pub fn select(&self, selector: &str) -> Vec<Element> {
        let Some(selector) = Selector::parse(selector) else {
            debug!("unsupported selector `{selector}` matches nothing");
            return Vec::new();
        };
        self.inner
            .lock()
            .elements
            .iter()
            .filter(|element| selector.matches(element))
            .cloned()
            .collect()
    }

    /// Resolves a target to the set of elements it addresses.
    pub fn resolve(&self, target: &Target) -> Vec<Element> {
        match target {
            Target::Selector(selector) => self.select(selector),
            Target::Element(element) => vec![element.clone()],
        }
    }
}

/// What to animate or drag: a selector string resolved against the whole
/// document, or one already-resolved element.
#[derive(Debug, Clone, From)]
pub enum Target {
    Selector(String),
    Element(Element),
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.into())
    }
}

impl From<&Element> for Target {
    fn from(element: &Element) -> Self {
        Target::Element(element.clone())
    }
}
