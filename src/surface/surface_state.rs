//! Element tree and mutation records

use ratatui::layout::Rect;

/// Fixed identifier of a surface element
pub type ElementId = &'static str;

/// A node on the surface
///
/// `rect` is `None` until the element has been laid out by a paint pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub text: String,
    pub rect: Option<Rect>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            text: String::new(),
            rect: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first lookup, including this element
    pub fn find(&self, id: ElementId) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    fn count(&self, id: ElementId) -> usize {
        let own = usize::from(self.id == id);
        own + self.children.iter().map(|c| c.count(id)).sum::<usize>()
    }
}

/// Structural change to the root list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Added(ElementId),
    Removed(ElementId),
}

impl Mutation {
    pub fn target(&self) -> ElementId {
        match self {
            Mutation::Added(id) | Mutation::Removed(id) => id,
        }
    }
}

/// Root list of floating elements plus the pending mutation records
///
/// Only inserting or removing a root element is structural. Text and
/// geometry updates are not recorded.
#[derive(Debug, Default)]
pub struct Surface {
    roots: Vec<Element>,
    mutations: Vec<Mutation>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a root element (rendered above earlier roots)
    pub fn insert(&mut self, element: Element) {
        self.mutations.push(Mutation::Added(element.id));
        self.roots.push(element);
    }

    /// Detach the root element with the given id
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.roots.iter().position(|e| e.id == id)?;
        self.mutations.push(Mutation::Removed(id));
        Some(self.roots.remove(index))
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.roots.iter_mut().find_map(|root| root.find_mut(id))
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Number of elements carrying `id` anywhere in the tree
    pub fn count(&self, id: ElementId) -> usize {
        self.roots.iter().map(|root| root.count(id)).sum()
    }

    /// Replace an element's text, returns false if the element is absent
    pub fn set_text(&mut self, id: ElementId, text: &str) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                if element.text != text {
                    element.text.clear();
                    element.text.push_str(text);
                }
                true
            }
            None => false,
        }
    }

    pub fn set_rect(&mut self, id: ElementId, rect: Rect) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.rect = Some(rect);
                true
            }
            None => false,
        }
    }

    /// Forget an element's geometry so it no longer takes hits
    pub fn clear_rect(&mut self, id: ElementId) {
        if let Some(element) = self.get_mut(id) {
            element.rect = None;
        }
    }

    pub fn roots(&self) -> &[Element] {
        &self.roots
    }

    /// Drain the mutation records accumulated since the last call
    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.mutations)
    }

    pub fn has_pending_mutations(&self) -> bool {
        !self.mutations.is_empty()
    }
}
