//! Adapter contract: user-supplied transforms run by the builder.

use std::fmt;
use tracing::trace;

use crate::{
    error::{AdapterContractError, Result, TransformKind},
    model::Entity,
};

/// Constructs a fresh adapter instance each time it is needed
pub type AdapterFactory = fn() -> Box<dyn Adapter>;

/// A unit of transforms applied in declaration order.
///
/// String adapters are attached to attribute fields and must expose only
/// [`Transform::text`] steps. Whole-entity adapters are attached to record
/// types and must expose only [`Transform::entity`] steps.
pub trait Adapter {
    fn name(&self) -> &str;

    fn transforms(&self) -> Vec<Transform>;
}

type TextOp = Box<dyn Fn(String) -> String>;
type EntityOp = Box<dyn Fn(Entity) -> Entity>;

/// One named operation exposed by an adapter
pub enum Transform {
    Text { name: String, op: TextOp },
    Entity { name: String, op: EntityOp },
}

impl Transform {
    pub fn text<F>(name: impl Into<String>, op: F) -> Self
    where
        F: Fn(String) -> String + 'static,
    {
        Self::Text {
            name: name.into(),
            op: Box::new(op),
        }
    }

    pub fn entity<F>(name: impl Into<String>, op: F) -> Self
    where
        F: Fn(Entity) -> Entity + 'static,
    {
        Self::Entity {
            name: name.into(),
            op: Box::new(op),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::Entity { name, .. } => name,
        }
    }

    pub fn kind(&self) -> TransformKind {
        match self {
            Self::Text { .. } => TransformKind::Text,
            Self::Entity { .. } => TransformKind::Entity,
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transform({} : {})", self.name(), self.kind())
    }
}

fn contract_error(
    adapter: &dyn Adapter,
    transform: &Transform,
    expected: TransformKind,
) -> AdapterContractError {
    AdapterContractError {
        adapter: adapter.name().to_string(),
        transform: transform.name().to_string(),
        expected,
        found: transform.kind(),
    }
}

/// Threads `text` through every transform of a string adapter
pub(crate) fn apply_text(adapter: &dyn Adapter, text: String) -> Result<String> {
    let mut text = text;
    for transform in adapter.transforms() {
        match &transform {
            Transform::Text { op, .. } => {
                trace!(
                    adapter = adapter.name(),
                    transform = transform.name(),
                    "applying text transform"
                );
                text = op(text);
            }
            Transform::Entity { .. } => {
                return Err(contract_error(adapter, &transform, TransformKind::Text).into());
            }
        }
    }
    Ok(text)
}

/// Threads `entity` through every transform of a whole-entity adapter
pub(crate) fn apply_entity(adapter: &dyn Adapter, entity: Entity) -> Result<Entity> {
    let mut entity = entity;
    for transform in adapter.transforms() {
        match &transform {
            Transform::Entity { op, .. } => {
                trace!(
                    adapter = adapter.name(),
                    transform = transform.name(),
                    "applying entity transform"
                );
                entity = op(entity);
            }
            Transform::Text { .. } => {
                return Err(contract_error(adapter, &transform, TransformKind::Entity).into());
            }
        }
    }
    Ok(entity)
}
