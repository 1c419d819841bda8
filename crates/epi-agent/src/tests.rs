//! Unit tests for the agent registry.

use epi_core::{AgentId, HealthStatus, Tile};

use crate::AgentStoreBuilder;

#[test]
fn fresh_store_defaults() {
    let (store, rngs) = AgentStoreBuilder::new(5, 1).build();
    assert_eq!(store.count, 5);
    assert_eq!(rngs.len(), 5);
    for agent in store.agent_ids() {
        assert_eq!(store.status[agent.index()], HealthStatus::Susceptible);
        assert!(store.at_home[agent.index()]);
        assert!(store.is_stationary(agent));
        assert!(!store.has_immunity[agent.index()]);
    }
    assert_eq!(store.infected_count(), 0);
}

#[test]
fn homes_set_both_home_and_current_tile() {
    let homes = vec![Tile::new(2, 3), Tile::new(8, 1), Tile::new(4, 4)];
    let (store, _) = AgentStoreBuilder::new(3, 1).homes(homes.clone()).build();
    assert_eq!(store.home_tile, homes);
    assert_eq!(store.current_tile, homes);
}

#[test]
#[should_panic(expected = "homes length")]
fn wrong_homes_length_panics() {
    AgentStoreBuilder::new(3, 1).homes(vec![Tile::new(0, 0)]).build();
}

#[test]
fn infected_count_tracks_status() {
    let (mut store, _) = AgentStoreBuilder::new(4, 1).build();
    store.status[1] = HealthStatus::Infected;
    store.status[3] = HealthStatus::Infected;
    assert_eq!(store.infected_count(), 2);
}

#[test]
fn rngs_are_independent_per_agent() {
    let (_, mut rngs) = AgentStoreBuilder::new(2, 7).build();
    let a: u64 = rngs.get_mut(AgentId(0)).random();
    let b: u64 = rngs.get_mut(AgentId(1)).random();
    assert_ne!(a, b);
}

#[test]
fn empty_store() {
    let (store, rngs) = AgentStoreBuilder::new(0, 1).build();
    assert!(store.is_empty());
    assert!(rngs.is_empty());
}
