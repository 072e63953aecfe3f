use derive_more::Deref;

/// Identifies an element within its document.
///
/// Ids start at 0 and are assigned in creation order. Elements are never
/// released (the page model has no teardown path), so there is no need to
/// recycle them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deref)]
pub struct ElementId(u32);

#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    next_id: u32,
}

impl IdGenerator {
    pub fn acquire(&mut self) -> ElementId {
        let this_id = self.next_id;
        self.next_id += 1;
        ElementId(this_id)
    }
}

impl From<ElementId> for usize {
    fn from(value: ElementId) -> Self {
        *value as _
    }
}
