//! Slash-separated name paths over an entity tree.
//!
//! A path is matched anchored at the entity it is applied to:
//! - `""` yields the entity itself
//! - `"N"` yields the entity itself when its name is `N`
//! - `"N/M/..."` descends into every direct child named `M` and matches
//!   `"M/..."` there; the leading segment is not compared against the
//!   starting entity
//!
//! Results come back in document order, depth-first and left to right.

use crate::model::Entity;
use tracing::{instrument, trace};

pub const PATH_SEPARATOR: char = '/';

#[instrument(level = "debug", skip(entity), fields(entity = entity.name()))]
pub fn query<'a>(entity: &'a Entity, path: &str) -> Vec<&'a Entity> {
    if path.is_empty() {
        return vec![entity];
    }

    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    let mut matches = Vec::new();
    collect_matches(entity, &segments, &mut matches);
    trace!(count = matches.len(), "Query finished");
    matches
}

fn collect_matches<'a>(entity: &'a Entity, segments: &[&str], matches: &mut Vec<&'a Entity>) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };

    match rest.first() {
        None => {
            if entity.name() == *first {
                matches.push(entity);
            }
        }
        Some(next) => {
            for child in entity.children().iter().filter(|c| c.name() == *next) {
                collect_matches(child, rest, matches);
            }
        }
    }
}

/// Finds the entity owning `target` within the tree rooted at `root`.
///
/// Matching is by identity, not by name. Returns `None` for the root itself
/// and for entities outside the tree.
pub fn parent_of<'a>(root: &'a Entity, target: &Entity) -> Option<&'a Entity> {
    if root.children().iter().any(|c| std::ptr::eq(c, target)) {
        return Some(root);
    }
    root.children().iter().find_map(|c| parent_of(c, target))
}
