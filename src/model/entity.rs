use super::{is_valid_name, Attribute};

/// A named tree node with ordered attributes, ordered children and
/// optional nested text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Entity>,
    nested_text: Option<String>,
}

impl Entity {
    /// Creates a root entity with no attributes, children or text
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            nested_text: None,
        }
    }

    /// Creates a leaf entity carrying nested text
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut entity = Self::new(name);
        entity.set_nested_text(text);
        entity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the entity. Empty names and names with spaces are ignored.
    pub fn rename(&mut self, name: impl Into<String>) {
        let name = name.into();
        if is_valid_name(&name) {
            self.name = name;
        }
    }

    // Attributes

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut [Attribute] {
        &mut self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Appends an attribute unless the name is invalid or already present.
    /// Returns whether the attribute was added.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if !is_valid_name(&name) || self.has_attribute(&name) {
            return false;
        }
        self.attributes.push(Attribute::new(name, value));
        true
    }

    /// Removes the first attribute with the given name
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        let index = self.attributes.iter().position(|a| a.name() == name)?;
        Some(self.attributes.remove(index))
    }

    /// Renames `old_name` unless another attribute already uses `new_name`
    pub fn rename_attribute(&mut self, old_name: &str, new_name: &str) {
        if old_name == new_name || self.has_attribute(new_name) {
            return;
        }
        for attribute in self.attributes.iter_mut().filter(|a| a.name() == old_name) {
            attribute.set_name(new_name);
        }
    }

    pub fn alter_attribute(&mut self, name: &str, value: &str) {
        for attribute in self.attributes.iter_mut().filter(|a| a.name() == name) {
            attribute.set_value(value);
        }
    }

    /// Replaces the attribute list wholesale, keeping the given order
    pub fn set_attributes(&mut self, attributes: Vec<Attribute>) {
        self.attributes = attributes;
    }

    pub fn take_attributes(&mut self) -> Vec<Attribute> {
        std::mem::take(&mut self.attributes)
    }

    // Children

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Appends `child` after the existing children and returns `self`, so
    /// several children can be chained onto one parent
    pub fn add_child(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn last_child(&self) -> Option<&Self> {
        self.children.last()
    }

    pub fn remove_child(&mut self, index: usize) -> Option<Self> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Keeps only the children for which `keep` returns true
    pub fn retain_children<F>(&mut self, keep: F)
    where
        F: FnMut(&Self) -> bool,
    {
        self.children.retain(keep);
    }

    /// Replaces the child list wholesale, keeping the given order
    pub fn set_children(&mut self, children: Vec<Self>) {
        self.children = children;
    }

    pub fn take_children(&mut self) -> Vec<Self> {
        std::mem::take(&mut self.children)
    }

    /// Sets `name` to `value` on every direct child that carries it
    pub fn alter_child_attributes(&mut self, name: &str, value: &str) {
        for child in &mut self.children {
            child.alter_attribute(name, value);
        }
    }

    // Nested text

    pub fn nested_text(&self) -> Option<&str> {
        self.nested_text.as_deref()
    }

    /// Text worth rendering: present and non-empty
    pub(crate) fn visible_text(&self) -> Option<&str> {
        self.nested_text().filter(|text| !text.is_empty())
    }

    pub fn set_nested_text(&mut self, text: impl Into<String>) {
        self.nested_text = Some(text.into());
    }

    pub fn clear_nested_text(&mut self) {
        self.nested_text = None;
    }
}
