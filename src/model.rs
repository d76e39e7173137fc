//! Entity tree data model.
//!
//! An [`Entity`] exclusively owns its attributes and children. There is no
//! stored parent pointer; use [`crate::query::parent_of`] when a node's
//! parent is needed.

mod attribute;
mod entity;

pub use self::{attribute::Attribute, entity::Entity};

/// Borrowed view over either kind of tree component
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component<'a> {
    Entity(&'a Entity),
    Attribute(&'a Attribute),
}

impl<'a> Component<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Entity(entity) => entity.name(),
            Self::Attribute(attribute) => attribute.name(),
        }
    }
}

/// Names must be non-empty and free of spaces to render as valid tags.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(' ')
}
