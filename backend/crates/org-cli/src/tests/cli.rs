use crate::{Cli, Commands};

use clap::Parser;
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_forest_with_pretty_when_parsing_then_flags_are_global() {
    // When
    let cli = Cli::try_parse_from(["orgtree", "forest", "--pretty"]).unwrap();

    // Then
    assert_eq!(cli.command, Commands::Forest);
    assert_that!(cli.pretty, eq(true));
    assert_that!(cli.actor, none());
}

#[test]
fn given_assign_with_actor_when_parsing_then_ids_are_uuids() {
    // Given
    let (node, manager, actor) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

    // When
    let cli = Cli::try_parse_from([
        "orgtree".to_string(),
        "--actor".to_string(),
        actor.to_string(),
        "assign".to_string(),
        node.to_string(),
        manager.to_string(),
    ])
    .unwrap();

    // Then
    assert_eq!(
        cli.command,
        Commands::Assign {
            node_id: node,
            manager_id: manager
        }
    );
    assert_that!(cli.actor, some(eq(actor)));
}

#[test]
fn given_bulk_assign_when_parsing_then_collects_every_id() {
    // Given
    let manager = Uuid::new_v4();
    let ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

    // When
    let mut args = vec![
        "orgtree".to_string(),
        "bulk-assign".to_string(),
        "--manager-id".to_string(),
        manager.to_string(),
    ];
    args.extend(ids.iter().map(Uuid::to_string));
    let cli = Cli::try_parse_from(args).unwrap();

    // Then
    assert_eq!(
        cli.command,
        Commands::BulkAssign {
            manager_id: manager,
            node_ids: ids.to_vec()
        }
    );
}

#[test]
fn given_bulk_remove_without_ids_when_parsing_then_error() {
    // When
    let result = Cli::try_parse_from(["orgtree", "bulk-remove"]);

    // Then
    assert!(result.is_err());
}

#[test]
fn given_malformed_uuid_when_parsing_then_error() {
    // When
    let result = Cli::try_parse_from(["orgtree", "chain", "not-a-uuid"]);

    // Then
    assert!(result.is_err());
}
