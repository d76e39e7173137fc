//! xmlforge: entity trees from plain records, rendered as XML
//!
//! This crate provides functionality to:
//! - Build a labeled entity tree from records that declare their XML shape
//! - Pretty print entity trees as tab-indented XML
//! - Select entities with slash-separated name paths
//! - Rename, add, remove and alter entities and attributes tree-wide
//!
//! # Examples
//! ```
//! use xmlforge::{generate_xml, Field, RecordShape, Value, XmlRecord};
//!
//! struct Course {
//!     code: String,
//!     name: String,
//! }
//!
//! impl XmlRecord for Course {
//!     fn describe(&self) -> RecordShape<'_> {
//!         RecordShape::new()
//!             .entity_name("course")
//!             .field(Field::attribute("code", Value::text(&self.code)))
//!             .field(Field::entity("name", Value::text(&self.name)))
//!     }
//! }
//!
//! fn example() -> xmlforge::Result<()> {
//!     let course = Course { code: "M4310".into(), name: "Compilers".into() };
//!     let xml = generate_xml(&Value::record(&course))?;
//!     assert!(xml.ends_with("<course code=\"M4310\">\n\t<name>Compilers</name>\n</course>"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use tracing::{debug, instrument};

pub mod builder;
pub mod error;
pub mod formatter;
pub mod model;
pub mod mutate;
pub mod query;
pub mod test_utils;
pub mod visitor;

// Re-exports
pub use builder::{
    Adapter, AdapterFactory, EntityBuilder, Field, RecordShape, Role, ToXmlText, Transform, Value,
    XmlRecord,
};
pub use error::{
    AdapterContractError, FormatError, Result, ShapeError, XmlError, XmlErrorKind,
};
pub use formatter::{FormatConfig, Formatter, Indent, XmlFormatter};
pub use model::{Attribute, Component, Entity};
pub use mutate::{
    add_attribute_everywhere, add_child_everywhere, alter_attributes_everywhere,
    remove_attributes_everywhere, remove_entities_everywhere, rename_attributes_everywhere,
    rename_entities_everywhere,
};
pub use query::{parent_of, query};
pub use visitor::{Census, Visitor};

/// Builds the entity tree for `value`.
///
/// Fails with a shape error when `value` is not a record, or with an
/// adapter contract error when an adapter exposes a transform of the wrong
/// kind.
pub fn build_entity(value: &Value<'_>) -> Result<Entity> {
    EntityBuilder::new().build(value)
}

/// Builds the entity tree for a record
pub fn build_record<R: XmlRecord>(record: &R) -> Result<Entity> {
    build_entity(&Value::record(record))
}

/// Renders `entity` as XML with the declaration line and tab indentation
pub fn pretty_print(entity: &Entity) -> String {
    XmlFormatter.format(entity, &FormatConfig::default())
}

/// Renders `entity` at indentation `depth` without the declaration line
pub fn render(entity: &Entity, depth: usize) -> String {
    XmlFormatter::render(entity, depth, &FormatConfig::default())
}

/// Builds and pretty prints `value` in one step
#[instrument(skip_all)]
pub fn generate_xml(value: &Value<'_>) -> Result<String> {
    let entity = build_entity(value)?;
    let xml = pretty_print(&entity);
    debug!(bytes = xml.len(), "XML generated");
    Ok(xml)
}
