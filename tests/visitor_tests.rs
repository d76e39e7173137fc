#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use xmlforge::{test_utils::*, Attribute, Census, Component, Visitor};

#[test]
fn test_census_of_sample_plan() {
    let root = build_record(&sample_plan()).unwrap();
    let census = Census::of(&root);
    assert_eq!(census.entities, 12);
    assert_eq!(census.attributes, 12);
    assert_eq!(census.text_nodes, 4);
    assert_eq!(census.max_depth, 3);
}

#[test]
fn test_census_of_single_entity() {
    let census = Census::of(&Entity::new("raiz"));
    assert_eq!(census.entities, 1);
    assert_eq!(census.attributes, 0);
    assert_eq!(census.text_nodes, 0);
    assert_eq!(census.max_depth, 1);
}

#[test]
fn test_components_in_visiting_order() {
    let root = build_record(&sample_course_unit()).unwrap();
    let names: Vec<&str> = root.components().iter().map(Component::name).collect();
    assert_eq!(
        names,
        vec![
            "FUC",
            "codigo",
            "ects",
            "nome",
            "componente",
            "nome",
            "peso",
            "componente",
            "nome",
            "peso",
        ]
    );
    assert!(matches!(root.components()[1], Component::Attribute(_)));
}

#[derive(Default)]
struct SkipComponents {
    seen: Vec<String>,
    closed: usize,
}

impl Visitor for SkipComponents {
    fn visit_entity(&mut self, entity: &Entity) -> bool {
        self.seen.push(entity.name().to_string());
        entity.name() != "componente"
    }

    fn visit_attribute(&mut self, attribute: &Attribute) {
        self.seen.push(format!("@{}", attribute.name()));
    }

    fn end_visit_entity(&mut self, _entity: &Entity) {
        self.closed += 1;
    }
}

#[test]
fn test_visitor_can_skip_subtrees() {
    let root = build_record(&sample_course_unit()).unwrap();
    let mut visitor = SkipComponents::default();
    root.accept(&mut visitor);
    assert_eq!(
        visitor.seen,
        vec!["FUC", "@codigo", "ects", "nome", "componente", "componente"]
    );
    assert_eq!(visitor.closed, 5);
}
