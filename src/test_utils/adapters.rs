use crate::{
    builder::{Adapter, Transform},
    model::{Attribute, Entity},
};

/// Appends a percent sign to attribute text
#[derive(Debug, Default)]
pub struct AddPercentage;

impl Adapter for AddPercentage {
    fn name(&self) -> &str {
        "AddPercentage"
    }

    fn transforms(&self) -> Vec<Transform> {
        vec![Transform::text("add_percentage", |text| format!("{}%", text))]
    }
}

/// Puts a course unit's children and attributes in publication order.
/// Anything not listed is dropped.
#[derive(Debug, Default)]
pub struct CourseUnitOrder;

const CHILD_ORDER: [&str; 3] = ["ects", "nome", "componente"];
const ATTRIBUTE_ORDER: [&str; 1] = ["codigo"];

impl CourseUnitOrder {
    fn sort(mut entity: Entity) -> Entity {
        let mut children = entity.take_children();
        let mut sorted_children = Vec::with_capacity(children.len());
        for name in CHILD_ORDER {
            let (matching, rest): (Vec<Entity>, Vec<Entity>) =
                children.into_iter().partition(|c| c.name() == name);
            sorted_children.extend(matching);
            children = rest;
        }

        let mut attributes = entity.take_attributes();
        let mut sorted_attributes = Vec::with_capacity(attributes.len());
        for name in ATTRIBUTE_ORDER {
            let (matching, rest): (Vec<Attribute>, Vec<Attribute>) =
                attributes.into_iter().partition(|a| a.name() == name);
            sorted_attributes.extend(matching);
            attributes = rest;
        }

        entity.set_children(sorted_children);
        entity.set_attributes(sorted_attributes);
        entity
    }
}

impl Adapter for CourseUnitOrder {
    fn name(&self) -> &str {
        "CourseUnitOrder"
    }

    fn transforms(&self) -> Vec<Transform> {
        vec![Transform::entity("sort", Self::sort)]
    }
}
