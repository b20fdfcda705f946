//! Property tests: random assignment sequences keep the forest acyclic and
//! partitioned, whatever mix of legal and illegal requests is thrown at it.

use crate::tests::{chain_ids, memory_service, test_node};
use crate::{Actor, Node};

use proptest::prelude::*;
use uuid::Uuid;

const NODE_COUNT: usize = 8;

fn run<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn flat_nodes() -> Vec<Node> {
    (0..NODE_COUNT)
        .map(|i| test_node(&format!("N{i}"), None))
        .collect()
}

proptest! {
    #[test]
    fn given_random_assignments_when_applied_then_no_node_is_its_own_ancestor(
        moves in prop::collection::vec((0..NODE_COUNT, 0..NODE_COUNT), 1..40)
    ) {
        let nodes = flat_nodes();
        let ids: Vec<Uuid> = nodes.iter().map(|n| n.id).collect();
        let (service, _, _) = memory_service(nodes);
        let actor = Actor::authorized(Uuid::new_v4());

        let chains = run(async {
            for (node, parent) in &moves {
                let _ = service.assign(ids[*node], ids[*parent], &actor).await;
            }
            let mut chains = Vec::new();
            for id in &ids {
                chains.push((*id, service.get_chain(*id).await.unwrap()));
            }
            chains
        });

        for (id, chain) in chains {
            prop_assert!(!chain_ids(&chain).contains(&id));
        }
    }

    #[test]
    fn given_random_assignments_when_building_forest_then_every_node_exactly_once(
        moves in prop::collection::vec((0..NODE_COUNT, 0..NODE_COUNT), 1..40)
    ) {
        let nodes = flat_nodes();
        let ids: Vec<Uuid> = nodes.iter().map(|n| n.id).collect();
        let (service, _, _) = memory_service(nodes);
        let actor = Actor::authorized(Uuid::new_v4());

        let forest = run(async {
            for (node, parent) in &moves {
                let _ = service.assign(ids[*node], ids[*parent], &actor).await;
            }
            service.get_forest().await.unwrap()
        });

        let mut seen: Vec<Uuid> = forest
            .iter()
            .flat_map(|tree| tree.iter().map(|t| t.id()))
            .collect();
        seen.sort();
        let mut expected = ids.clone();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }
}
