use std::{fmt, sync::Arc};

use parking_lot::Mutex;

use crate::{ElementId, Style, StyleDeclaration};

/// A shared handle to one element of a document.
///
/// Handles are cheap to clone and compare by element identity. The style is
/// mutated through `&self`, because animation steps and drag sessions hold
/// their own clones of the handle.
#[derive(Debug, Clone)]
pub struct Element {
    inner: Arc<InnerElement>,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id.eq(&other.inner.id)
    }
}

impl Eq for Element {}

impl Element {
    pub(crate) fn new(id: ElementId, tag: &str) -> Self {
        Self {
            inner: InnerElement {
                id,
                tag: tag.into(),
                state: Default::default(),
            }
            .into(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.inner.id
    }

    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    /// Sets the `id` attribute, for `#id` selectors.
    pub fn with_id(self, id_attribute: &str) -> Self {
        self.inner.state.lock().id_attribute = Some(id_attribute.into());
        self
    }

    /// Adds a class, for `.class` selectors.
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn add_class(&self, class: &str) {
        let mut state = self.inner.state.lock();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.into());
        }
    }

    pub fn id_attribute(&self) -> Option<String> {
        self.inner.state.lock().id_attribute.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.state.lock().classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.state.lock().classes.clone()
    }

    /// A snapshot of the current inline style.
    pub fn style(&self) -> Style {
        self.inner.state.lock().style.clone()
    }

    pub fn update_style(&self, f: impl FnOnce(&mut Style)) {
        f(&mut self.inner.state.lock().style)
    }

    /// Assigns a set of declarations to the inline style.
    ///
    /// Each declaration replaces the property it addresses and leaves the
    /// others alone.
    pub fn assign_style(&self, declarations: impl IntoIterator<Item = StyleDeclaration>) {
        self.inner.state.lock().style.assign(declarations)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.tag)?;
        let state = self.inner.state.lock();
        if let Some(id) = &state.id_attribute {
            write!(f, "#{id}")?;
        }
        for class in &state.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct InnerElement {
    id: ElementId,
    tag: String,
    state: Mutex<ElementState>,
}

#[derive(Debug, Default)]
struct ElementState {
    id_attribute: Option<String>,
    classes: Vec<String>,
    style: Style,
}
