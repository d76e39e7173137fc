//! Entity builder.
//!
//! Turns a plain record into an entity tree by walking its declared fields
//! in order:
//! - entity fields become children (lists expand element by element, inside
//!   a wrapper entity unless the wrapper is hidden)
//! - attribute fields become attributes of the current entity, optionally
//!   passed through a string adapter first
//! - unmarked fields are skipped
//!
//! A whole-entity adapter declared on the record runs last.

mod adapter;
mod record;

pub use self::{
    adapter::{Adapter, AdapterFactory, Transform},
    record::{Field, RecordShape, Role, ToXmlText, Value, XmlRecord},
};

use crate::{
    error::{Result, ShapeError, XmlError},
    model::Entity,
};
use tracing::{debug, instrument, trace};

/// Text used for absent scalars
const ABSENT_TEXT: &str = "null";

/// Builds entity trees from plain records
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityBuilder;

impl EntityBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds a root entity from `value`, which must be a record
    #[instrument(skip_all)]
    pub fn build(&self, value: &Value<'_>) -> Result<Entity> {
        let record = as_record(value)?;
        let entity = self.build_record(record)?;
        debug!(
            entity = entity.name(),
            children = entity.children().len(),
            attributes = entity.attributes().len(),
            "Entity built"
        );
        Ok(entity)
    }

    /// Builds `value` and appends it to `parent`, returning the new child.
    ///
    /// Non-hidden list fields of `value` still get their own wrapper entity
    /// here; only hidden lists splice their elements into the owner.
    pub fn build_into<'p>(
        &self,
        value: &Value<'_>,
        parent: &'p mut Entity,
    ) -> Result<&'p Entity> {
        let record = as_record(value)?;
        let entity = self.build_record(record)?;
        let parent: &'p Entity = parent.add_child(entity);
        Ok(parent.last_child().unwrap_or(parent))
    }

    fn build_record(&self, record: &dyn XmlRecord) -> Result<Entity> {
        let shape = record.describe();
        let name = shape
            .entity_name
            .clone()
            .unwrap_or_else(|| record.type_name().to_string());
        trace!(entity = %name, fields = shape.fields.len(), "Building record");

        let mut entity = Entity::new(name);
        for field in &shape.fields {
            self.apply_field(field, &mut entity)?;
        }

        match shape.adapter {
            Some(factory) => {
                let instance = factory();
                adapter::apply_entity(instance.as_ref(), entity)
                    .map_err(|e| e.with_context(format!("record '{}'", record.type_name())))
            }
            None => Ok(entity),
        }
    }

    fn apply_field(&self, field: &Field<'_>, entity: &mut Entity) -> Result<()> {
        match field.role {
            Role::Entity { hide_wrapper } => self.apply_entity_field(field, hide_wrapper, entity),
            Role::Attribute { adapter } => {
                let text = match &field.value {
                    Value::Text(text) => text.clone().unwrap_or_else(|| ABSENT_TEXT.to_string()),
                    other => {
                        return Err(XmlError::from(ShapeError::NonScalarAttribute {
                            field: field.name.clone(),
                            found: other.kind_name(),
                        }))
                    }
                };
                let text = match adapter {
                    Some(factory) => {
                        let instance = factory();
                        adapter::apply_text(instance.as_ref(), text)
                            .map_err(|e| e.with_context(format!("attribute '{}'", field.name)))?
                    }
                    None => text,
                };
                entity.add_attribute(field.name.as_str(), text);
                Ok(())
            }
            Role::Ignored => Ok(()),
        }
    }

    fn apply_entity_field(
        &self,
        field: &Field<'_>,
        hide_wrapper: bool,
        entity: &mut Entity,
    ) -> Result<()> {
        match &field.value {
            Value::List(items) if hide_wrapper => self.build_items(field, items, entity)?,
            Value::List(items) => {
                let mut wrapper = Entity::new(field.name.as_str());
                self.build_items(field, items, &mut wrapper)?;
                entity.add_child(wrapper);
            }
            Value::Text(text) => {
                let text = text.as_deref().unwrap_or(ABSENT_TEXT);
                entity.add_child(Entity::with_text(field.name.as_str(), text));
            }
            Value::Record(_) => {
                self.build_into(&field.value, entity)?;
            }
        }
        Ok(())
    }

    fn build_items(
        &self,
        field: &Field<'_>,
        items: &[Value<'_>],
        target: &mut Entity,
    ) -> Result<()> {
        for item in items {
            self.build_into(item, target)
                .map_err(|e| e.with_context(format!("list field '{}'", field.name)))?;
        }
        Ok(())
    }
}

fn as_record<'v>(value: &'v Value<'_>) -> Result<&'v dyn XmlRecord> {
    match value {
        Value::Record(record) => Ok(*record),
        other => Err(ShapeError::NotARecord {
            found: other.kind_name(),
        }
        .into()),
    }
}
