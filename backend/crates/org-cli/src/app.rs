use crate::{Cli, CliError, Commands, Result as CliResult, logger};

use org_config::Config;
use org_core::{
    Actor, EngineOptions, HierarchyError, HierarchyService, NodeRole, NodeStore, WorkItemSource,
};
use org_db::{LeadWorkItemSource, PoolSettings, SqliteNodeStore};

use std::sync::Arc;

use log::{debug, warn};
use serde_json::{Value, json, to_value};
use uuid::Uuid;

/// Load config, open the database and execute one command.
pub async fn run(cli: Cli) -> CliResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let settings = PoolSettings {
        max_connections: config.database.max_connections,
        busy_timeout: config.database.busy_timeout(),
        acquire_timeout: config.database.acquire_timeout(),
    };
    let pool = org_db::connect(&config.database_path()?, &settings).await?;

    let service = HierarchyService::new(
        Arc::new(SqliteNodeStore::new(pool.clone())),
        Arc::new(LeadWorkItemSource::new(pool.clone())),
        EngineOptions {
            max_bulk_size: config.hierarchy.max_bulk_size,
        },
    );

    let result = execute(&service, cli.actor, cli.command).await;
    pool.close().await;
    result
}

/// Run a parsed command against `service` and render its result as JSON.
pub async fn execute<S, W>(
    service: &HierarchyService<S, W>,
    actor_id: Option<Uuid>,
    command: Commands,
) -> CliResult<Value>
where
    S: NodeStore + ?Sized,
    W: WorkItemSource + ?Sized,
{
    debug!("Executing {:?}", command);

    let value = match command {
        Commands::Forest => to_value(service.get_forest().await?)?,
        Commands::Subtree { id } => to_value(service.get_subtree(id).await?)?,
        Commands::Team { id } => to_value(service.get_team_members(id).await?)?,
        Commands::Chain { id } => to_value(service.get_chain(id).await?)?,
        Commands::Stats { id } => to_value(service.get_stats(id).await?)?,
        Commands::Validate {
            node_id,
            manager_id,
        } => to_value(service.validate_assignment(node_id, manager_id).await?)?,
        Commands::Assign {
            node_id,
            manager_id,
        } => {
            let actor = require_actor(service, actor_id, "assign").await?;
            to_value(service.assign(node_id, manager_id, &actor).await?)?
        }
        Commands::MoveTree {
            manager_id,
            new_manager_id,
        } => {
            let actor = require_actor(service, actor_id, "move-tree").await?;
            to_value(service.move_tree(manager_id, new_manager_id, &actor).await?)?
        }
        Commands::RemoveManager { node_id } => {
            let actor = require_actor(service, actor_id, "remove-manager").await?;
            let changed = service.remove_parent(node_id, &actor).await?;
            json!({ "node_id": node_id, "changed": changed })
        }
        Commands::BulkAssign {
            manager_id,
            node_ids,
        } => {
            let actor = require_actor(service, actor_id, "bulk-assign").await?;
            to_value(service.bulk_assign(&node_ids, manager_id, &actor).await?)?
        }
        Commands::BulkRemove { node_ids } => {
            let actor = require_actor(service, actor_id, "bulk-remove").await?;
            to_value(service.bulk_remove_parent(&node_ids, &actor).await?)?
        }
    };

    Ok(value)
}

/// Only admins may change the hierarchy. Unknown users and other roles get
/// an actor the engine will refuse.
pub async fn resolve_actor<S, W>(
    service: &HierarchyService<S, W>,
    actor_id: Uuid,
) -> CliResult<Actor>
where
    S: NodeStore + ?Sized,
    W: WorkItemSource + ?Sized,
{
    match service.get_node(actor_id).await {
        Ok(node) if node.role == NodeRole::Admin => Ok(Actor::authorized(actor_id)),
        Ok(node) => {
            warn!(
                "User {} has role {}; hierarchy changes require admin",
                actor_id, node.role
            );
            Ok(Actor::unauthorized(actor_id))
        }
        Err(HierarchyError::NodeNotFound { .. }) => {
            warn!("Actor {} is not a known user", actor_id);
            Ok(Actor::unauthorized(actor_id))
        }
        Err(e) => Err(e.into()),
    }
}

async fn require_actor<S, W>(
    service: &HierarchyService<S, W>,
    actor_id: Option<Uuid>,
    command: &'static str,
) -> CliResult<Actor>
where
    S: NodeStore + ?Sized,
    W: WorkItemSource + ?Sized,
{
    let actor_id = actor_id.ok_or(CliError::ActorRequired { command })?;
    resolve_actor(service, actor_id).await
}
