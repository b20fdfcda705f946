use crate::tests::test_node;
use crate::{AssignOutcome, CoreError, NodeRole, TreeNode};

use std::str::FromStr;

use googletest::prelude::*;
use uuid::Uuid;

// =========================================================================
// NodeRole
// =========================================================================

#[test]
fn given_known_role_strings_when_parsed_then_round_trip() {
    for role in [
        NodeRole::Admin,
        NodeRole::Support,
        NodeRole::Manager,
        NodeRole::Agent,
        NodeRole::User,
    ] {
        assert_that!(NodeRole::from_str(role.as_str()).unwrap(), eq(role));
    }
}

#[test]
fn given_unknown_role_when_parsed_then_invalid_node_role() {
    // When
    let result = NodeRole::from_str("overlord");

    // Then
    assert!(matches!(result, Err(CoreError::InvalidNodeRole { .. })));
}

// =========================================================================
// TreeNode
// =========================================================================

#[test]
fn given_nested_tree_when_flattened_then_depths_relative_to_self() {
    // Given: top -> mid -> leaf, built at depth 3 inside a larger tree
    let top = test_node("Top", None);
    let mid = test_node("Mid", Some(top.id));
    let leaf = test_node("Leaf", Some(mid.id));
    let mut mid_tree = TreeNode::new(mid.clone(), 4);
    mid_tree.children.push(TreeNode::new(leaf.clone(), 5));
    let mut tree = TreeNode::new(top.clone(), 3);
    tree.children.push(mid_tree);

    // When
    let flat = tree.flatten();

    // Then
    let depths: Vec<usize> = flat.iter().map(|m| m.depth).collect();
    assert_eq!(depths, vec![0, 1, 2]);
    assert_that!(tree.max_depth(), eq(2));
    assert_eq!(tree.descendant_ids(), vec![mid.id, leaf.id]);
    assert!(tree.contains(leaf.id));
    assert!(!tree.contains(Uuid::new_v4()));
}

// =========================================================================
// AssignOutcome
// =========================================================================

#[test]
fn given_single_report_when_building_outcome_then_singular_message() {
    // When
    let outcome = AssignOutcome::new(Uuid::new_v4(), None, Uuid::new_v4(), 1);

    // Then
    assert!(outcome.preserved_subtree);
    assert_eq!(
        outcome.message,
        "Manager assigned; 1 direct report moved with their manager"
    );
}
