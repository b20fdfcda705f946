//! Unit tests for manager chain resolution.

use crate::tests::{SampleOrg, chain_ids, test_node};
use crate::{ChainResolver, HierarchyError, NodeIndex};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_leaf_when_resolving_chain_then_nearest_manager_first() {
    // Given
    let org = SampleOrg::new();
    let nodes = org.nodes();
    let index = NodeIndex::build(&nodes);

    // When
    let chain = ChainResolver::new(&index).chain(org.a.id).unwrap();

    // Then: [M, Root] with levels 1, 2
    assert_eq!(chain_ids(&chain), vec![org.m.id, org.root.id]);
    assert_that!(chain[0].level, eq(1));
    assert_that!(chain[1].level, eq(2));
}

#[test]
fn given_root_when_resolving_chain_then_empty() {
    // Given
    let org = SampleOrg::new();
    let nodes = org.nodes();
    let index = NodeIndex::build(&nodes);

    // When
    let chain = ChainResolver::new(&index).chain(org.root.id).unwrap();

    // Then
    assert!(chain.is_empty());
}

#[test]
fn given_unknown_node_when_resolving_chain_then_node_not_found() {
    // Given
    let nodes = SampleOrg::new().nodes();
    let index = NodeIndex::build(&nodes);

    // When
    let result = ChainResolver::new(&index).chain(Uuid::new_v4());

    // Then
    assert!(matches!(result, Err(HierarchyError::NodeNotFound { .. })));
}

#[test]
fn given_missing_manager_when_resolving_chain_then_chain_stops() {
    // Given: A -> Ghost (absent)
    let a = test_node("A", Some(Uuid::new_v4()));
    let nodes = vec![a.clone()];
    let index = NodeIndex::build(&nodes);

    // When
    let chain = ChainResolver::new(&index).chain(a.id).unwrap();

    // Then
    assert!(chain.is_empty());
}

#[test]
fn given_corrupt_cycle_when_resolving_chain_then_unexpected_cycle() {
    // Given: Leaf -> X -> Y -> X
    let mut x = test_node("X", None);
    let y = test_node("Y", Some(x.id));
    x.parent_id = Some(y.id);
    let leaf = test_node("Leaf", Some(x.id));
    let nodes = vec![x, y, leaf.clone()];
    let index = NodeIndex::build(&nodes);

    // When: must terminate
    let result = ChainResolver::new(&index).chain(leaf.id);

    // Then
    assert!(matches!(result, Err(HierarchyError::UnexpectedCycle { .. })));
}
