//! Read-only traversal over an entity tree.

use crate::model::{Attribute, Component, Entity};

/// Callbacks for a depth-first walk. Attributes of an entity are visited
/// before its children.
pub trait Visitor {
    /// Called on entering an entity. Returning `false` skips its
    /// attributes and children; `end_visit_entity` still runs.
    fn visit_entity(&mut self, _entity: &Entity) -> bool {
        true
    }

    fn visit_attribute(&mut self, _attribute: &Attribute) {}

    fn end_visit_entity(&mut self, _entity: &Entity) {}
}

impl Entity {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        if visitor.visit_entity(self) {
            for attribute in self.attributes() {
                visitor.visit_attribute(attribute);
            }
            for child in self.children() {
                child.accept(visitor);
            }
        }
        visitor.end_visit_entity(self);
    }

    /// Every component of the subtree in visiting order
    pub fn components(&self) -> Vec<Component<'_>> {
        let mut out = Vec::new();
        collect_components(self, &mut out);
        out
    }
}

fn collect_components<'a>(entity: &'a Entity, out: &mut Vec<Component<'a>>) {
    out.push(Component::Entity(entity));
    out.extend(entity.attributes().iter().map(Component::Attribute));
    for child in entity.children() {
        collect_components(child, out);
    }
}

/// Counts the components of a tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Census {
    pub entities: usize,
    pub attributes: usize,
    /// Entities carrying non-empty nested text
    pub text_nodes: usize,
    pub max_depth: usize,
    depth: usize,
}

impl Census {
    pub fn of(entity: &Entity) -> Self {
        let mut census = Self::default();
        entity.accept(&mut census);
        census
    }
}

impl Visitor for Census {
    fn visit_entity(&mut self, entity: &Entity) -> bool {
        self.entities += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        if entity.visible_text().is_some() {
            self.text_nodes += 1;
        }
        true
    }

    fn visit_attribute(&mut self, _attribute: &Attribute) {
        self.attributes += 1;
    }

    fn end_visit_entity(&mut self, _entity: &Entity) {
        self.depth = self.depth.saturating_sub(1);
    }
}
