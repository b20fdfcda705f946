use crate::tests::org_service;
use crate::{CliError, Commands, execute, resolve_actor};

use org_core::HierarchyError;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_admin_actor_when_resolving_then_may_mutate() {
    // Given
    let (org, service) = org_service();

    // When
    let admin = resolve_actor(&service, org.admin.id).await.unwrap();
    let manager = resolve_actor(&service, org.lead.id).await.unwrap();
    let stranger = resolve_actor(&service, Uuid::new_v4()).await.unwrap();

    // Then
    assert_that!(admin.may_mutate, eq(true));
    assert_that!(manager.may_mutate, eq(false));
    assert_that!(stranger.may_mutate, eq(false));
}

#[tokio::test]
async fn given_forest_command_when_executing_then_prints_both_roots() {
    // Given
    let (org, service) = org_service();

    // When
    let value = execute(&service, None, Commands::Forest).await.unwrap();

    // Then
    let roots = value.as_array().unwrap();
    assert_that!(roots.len(), eq(2));
    let admin_id = org.admin.id.to_string();
    let admin_tree = roots
        .iter()
        .find(|tree| tree["node"]["id"].as_str() == Some(admin_id.as_str()))
        .unwrap();
    assert_that!(admin_tree["children"].as_array().map(Vec::len), some(eq(1)));
}

#[tokio::test]
async fn given_chain_command_when_executing_then_managers_nearest_first() {
    // Given
    let (org, service) = org_service();

    // When
    let value = execute(&service, None, Commands::Chain { id: org.report.id })
        .await
        .unwrap();

    // Then
    let chain = value.as_array().unwrap();
    assert_that!(chain.len(), eq(2));
    assert_eq!(chain[0]["node"]["id"], org.lead.id.to_string());
    assert_eq!(chain[0]["level"], 1);
    assert_eq!(chain[1]["node"]["id"], org.admin.id.to_string());
}

#[tokio::test]
async fn given_mutation_without_actor_when_executing_then_actor_required() {
    // Given
    let (org, service) = org_service();

    // When
    let result = execute(
        &service,
        None,
        Commands::RemoveManager {
            node_id: org.report.id,
        },
    )
    .await;

    // Then
    assert!(matches!(
        result,
        Err(CliError::ActorRequired {
            command: "remove-manager"
        })
    ));
}

#[tokio::test]
async fn given_non_admin_actor_when_assigning_then_unauthorized() {
    // Given
    let (org, service) = org_service();

    // When
    let result = execute(
        &service,
        Some(org.lead.id),
        Commands::Assign {
            node_id: org.report.id,
            manager_id: org.outsider.id,
        },
    )
    .await;

    // Then
    assert!(matches!(
        result,
        Err(CliError::Hierarchy(HierarchyError::Unauthorized { .. }))
    ));
}

#[tokio::test]
async fn given_admin_when_moving_tree_then_outcome_reports_moved_reports() {
    // Given
    let (org, service) = org_service();

    // When
    let value = execute(
        &service,
        Some(org.admin.id),
        Commands::MoveTree {
            manager_id: org.lead.id,
            new_manager_id: org.outsider.id,
        },
    )
    .await
    .unwrap();

    // Then
    assert_eq!(value["preserved_subtree"], true);
    assert_eq!(value["direct_reports_moved"], 1);
    let chain = service.get_chain(org.report.id).await.unwrap();
    assert_that!(chain.last().map(|e| e.node.id), some(eq(org.outsider.id)));
}

#[tokio::test]
async fn given_cycle_when_validating_then_refusal_is_reported_not_raised() {
    // Given
    let (org, service) = org_service();

    // When
    let value = execute(
        &service,
        None,
        Commands::Validate {
            node_id: org.admin.id,
            manager_id: org.report.id,
        },
    )
    .await
    .unwrap();

    // Then
    assert_eq!(value["allowed"], false);
    assert_eq!(value["code"], "CYCLE_DETECTED");
}

#[tokio::test]
async fn given_admin_when_bulk_removing_then_counts_real_transitions() {
    // Given
    let (org, service) = org_service();

    // When
    let value = execute(
        &service,
        Some(org.admin.id),
        Commands::BulkRemove {
            node_ids: vec![org.lead.id, org.outsider.id, Uuid::new_v4()],
        },
    )
    .await
    .unwrap();

    // Then
    assert_eq!(value["total"], 3);
    assert_eq!(value["updated_count"], 1);
    assert_that!(value["not_found"].as_array().map(Vec::len), some(eq(1)));
}
