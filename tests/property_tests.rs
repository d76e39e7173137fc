#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::collection::vec;
use proptest::prelude::*;
use xmlforge::{mutate::*, test_utils::*, Census};

// A few names so that generated paths and edits actually hit something
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("c".to_string()),
        "[d-f][a-z0-9]{0,4}",
    ]
}

fn leaf_strategy() -> impl Strategy<Value = Entity> {
    (
        name_strategy(),
        vec((name_strategy(), "[a-zA-Z0-9%]{1,6}"), 0..3),
        prop::option::of("[a-z ]{0,8}"),
    )
        .prop_map(|(name, attrs, text)| {
            let mut entity = match text {
                Some(text) => Entity::with_text(name, text),
                None => Entity::new(name),
            };
            for (k, v) in attrs {
                entity.add_attribute(k, v);
            }
            entity
        })
}

fn tree_strategy() -> impl Strategy<Value = Entity> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        (leaf_strategy(), vec(inner, 0..4)).prop_map(|(mut entity, children)| {
            for child in children {
                entity.add_child(child);
            }
            entity
        })
    })
}

fn count_named(entity: &Entity, name: &str) -> usize {
    let own = usize::from(entity.name() == name);
    own + entity
        .children()
        .iter()
        .map(|c| count_named(c, name))
        .sum::<usize>()
}

proptest! {
    #[test]
    fn test_add_attribute_is_idempotent(mut root in tree_strategy(), name in name_strategy()) {
        add_attribute_everywhere(&mut root, &name, "extra", "1");
        let once = pretty_print(&root);
        add_attribute_everywhere(&mut root, &name, "extra", "1");
        prop_assert_eq!(pretty_print(&root), once);
    }

    #[test]
    fn test_empty_arguments_change_nothing(mut root in tree_strategy(), name in name_strategy()) {
        let before = pretty_print(&root);
        add_attribute_everywhere(&mut root, &name, "extra", "");
        add_attribute_everywhere(&mut root, "", "extra", "1");
        rename_entities_everywhere(&mut root, &name, "");
        remove_entities_everywhere(&mut root, "");
        rename_attributes_everywhere(&mut root, "", "x");
        remove_attributes_everywhere(&mut root, &name, "");
        alter_attributes_everywhere(&mut root, &name, "x", "");
        add_child_everywhere(&mut root, "", &name);
        add_child_everywhere(&mut root, "x y", &name);
        prop_assert_eq!(pretty_print(&root), before);
    }

    #[test]
    fn test_empty_path_yields_start(root in tree_strategy()) {
        let results = query(&root, "");
        prop_assert_eq!(results.len(), 1);
        prop_assert!(std::ptr::eq(results[0], &root));
    }

    #[test]
    fn test_single_segment_matches_own_name(root in tree_strategy(), name in name_strategy()) {
        let expected = usize::from(root.name() == name);
        prop_assert_eq!(query(&root, &name).len(), expected);
    }

    #[test]
    fn test_remove_leaves_no_descendant(mut root in tree_strategy(), name in name_strategy()) {
        remove_entities_everywhere(&mut root, &name);
        let own = usize::from(root.name() == name);
        prop_assert_eq!(count_named(&root, &name), own);
    }

    #[test]
    fn test_add_child_grows_by_parent_count(
        mut root in tree_strategy(),
        parent in name_strategy(),
        child in name_strategy(),
    ) {
        let before = Census::of(&root).entities;
        let parents = count_named(&root, &parent);
        add_child_everywhere(&mut root, &child, &parent);
        prop_assert_eq!(Census::of(&root).entities, before + parents);
    }

    #[test]
    fn test_rename_then_query(mut root in tree_strategy(), name in name_strategy()) {
        let original = root.name().to_string();
        rename_entities_everywhere(&mut root, &original, "renamed");
        prop_assert_eq!(root.name(), "renamed");
        prop_assert_eq!(query(&root, "renamed").len(), 1);
        prop_assert!(query(&root, &name).is_empty());
    }
}
