//! Whole-tree batch edits keyed by entity and attribute names.
//!
//! Every operation walks the full subtree of the entity it is given.
//! Requests with an empty argument, or a space in a name that would end up
//! in the tree, leave the tree untouched and return normally.

use crate::model::{is_valid_name, Entity};
use tracing::{debug, instrument};

/// Adds `attr_name="value"` to every entity named `entity_name` that does
/// not already carry an attribute of that name.
#[instrument(level = "debug", skip(root), fields(root = root.name()))]
pub fn add_attribute_everywhere(
    root: &mut Entity,
    entity_name: &str,
    attr_name: &str,
    value: &str,
) {
    if entity_name.is_empty() || value.is_empty() || !is_valid_name(attr_name) {
        debug!("Ignoring invalid request");
        return;
    }
    add_attribute(root, entity_name, attr_name, value);
}

fn add_attribute(entity: &mut Entity, entity_name: &str, attr_name: &str, value: &str) {
    if entity.name() == entity_name {
        entity.add_attribute(attr_name, value);
    }
    for child in entity.children_mut() {
        add_attribute(child, entity_name, attr_name, value);
    }
}

/// Renames every entity named `old_name` to `new_name`
#[instrument(level = "debug", skip(root), fields(root = root.name()))]
pub fn rename_entities_everywhere(root: &mut Entity, old_name: &str, new_name: &str) {
    if old_name.is_empty() || !is_valid_name(new_name) {
        debug!("Ignoring invalid request");
        return;
    }
    rename_entities(root, old_name, new_name);
}

fn rename_entities(entity: &mut Entity, old_name: &str, new_name: &str) {
    if entity.name() == old_name {
        entity.rename(new_name);
    }
    for child in entity.children_mut() {
        rename_entities(child, old_name, new_name);
    }
}

/// Removes every descendant named `name` together with its subtree. The
/// entity passed in is never removed itself.
#[instrument(level = "debug", skip(root), fields(root = root.name()))]
pub fn remove_entities_everywhere(root: &mut Entity, name: &str) {
    if name.is_empty() {
        debug!("Ignoring invalid request");
        return;
    }
    remove_entities(root, name);
}

fn remove_entities(entity: &mut Entity, name: &str) {
    // Matches are dropped after the walk, never during it
    for child in entity.children_mut().iter_mut().filter(|c| c.name() != name) {
        remove_entities(child, name);
    }
    entity.retain_children(|c| c.name() != name);
}

/// Renames every attribute named `old_name`, on any entity, to `new_name`
#[instrument(level = "debug", skip(root), fields(root = root.name()))]
pub fn rename_attributes_everywhere(root: &mut Entity, old_name: &str, new_name: &str) {
    if old_name.is_empty() || !is_valid_name(new_name) {
        debug!("Ignoring invalid request");
        return;
    }
    rename_attributes(root, old_name, new_name);
}

fn rename_attributes(entity: &mut Entity, old_name: &str, new_name: &str) {
    entity.rename_attribute(old_name, new_name);
    for child in entity.children_mut() {
        rename_attributes(child, old_name, new_name);
    }
}

/// Removes `attr_name` from every entity named `entity_name`
#[instrument(level = "debug", skip(root), fields(root = root.name()))]
pub fn remove_attributes_everywhere(root: &mut Entity, entity_name: &str, attr_name: &str) {
    if entity_name.is_empty() || attr_name.is_empty() {
        debug!("Ignoring invalid request");
        return;
    }
    remove_attributes(root, entity_name, attr_name);
}

fn remove_attributes(entity: &mut Entity, entity_name: &str, attr_name: &str) {
    if entity.name() == entity_name {
        entity.remove_attribute(attr_name);
    }
    for child in entity.children_mut() {
        remove_attributes(child, entity_name, attr_name);
    }
}

/// Sets `attr_name` to `new_value` on every entity named `entity_name` that
/// carries it
#[instrument(level = "debug", skip(root), fields(root = root.name()))]
pub fn alter_attributes_everywhere(
    root: &mut Entity,
    entity_name: &str,
    attr_name: &str,
    new_value: &str,
) {
    if entity_name.is_empty() || attr_name.is_empty() || new_value.is_empty() {
        debug!("Ignoring invalid request");
        return;
    }
    alter_attributes(root, entity_name, attr_name, new_value);
}

fn alter_attributes(entity: &mut Entity, entity_name: &str, attr_name: &str, new_value: &str) {
    if entity.name() == entity_name {
        entity.alter_attribute(attr_name, new_value);
    }
    for child in entity.children_mut() {
        alter_attributes(child, entity_name, attr_name, new_value);
    }
}

/// Appends an empty child named `new_child_name` under every entity named
/// `parent_entity_name`. Freshly added children are not searched again.
#[instrument(level = "debug", skip(root), fields(root = root.name()))]
pub fn add_child_everywhere(root: &mut Entity, new_child_name: &str, parent_entity_name: &str) {
    if parent_entity_name.is_empty() || !is_valid_name(new_child_name) {
        debug!("Ignoring invalid request");
        return;
    }
    add_child(root, new_child_name, parent_entity_name);
}

fn add_child(entity: &mut Entity, new_child_name: &str, parent_entity_name: &str) {
    let existing = entity.children().len();
    if entity.name() == parent_entity_name {
        entity.add_child(Entity::new(new_child_name));
    }
    for child in entity.children_mut().iter_mut().take(existing) {
        add_child(child, new_child_name, parent_entity_name);
    }
}
