//! Unit tests for movers, providers, and the mobility engine.

use epi_core::{AgentId, AgentRng, Tick, Tile};

use crate::{
    DestinationProvider, GridMover, MobilityEngine, MobilityError, Mover, UniformDestinations,
};

// ── GridMover ─────────────────────────────────────────────────────────────────

#[test]
fn travel_time_scales_with_distance() {
    let mover = GridMover;
    // 10 tiles at 10 tiles/s = 1 second = 1000 ticks.
    let t = mover.travel_ticks(Tile::new(0, 0), Tile::new(10, 0), 10.0);
    assert_eq!(t, 1_000);
    // Diagonal counts once per step.
    let d = mover.travel_ticks(Tile::new(0, 0), Tile::new(5, 5), 10.0);
    assert_eq!(d, 500);
}

#[test]
fn zero_distance_still_takes_one_tick() {
    let mover = GridMover;
    let t = Tile::new(3, 3);
    assert_eq!(mover.travel_ticks(t, t, 10.0), 1);
}

// ── UniformDestinations ───────────────────────────────────────────────────────

#[test]
fn destinations_stay_in_bounds() {
    let provider = UniformDestinations::new(12, 9);
    let mut rng = AgentRng::new(42, AgentId(0));
    for _ in 0..1_000 {
        let tile = provider.random_tile(&mut rng).unwrap();
        assert!(tile.x < 12 && tile.y < 9, "out of bounds: {tile}");
    }
}

#[test]
fn destinations_are_deterministic_per_seed() {
    let provider = UniformDestinations::new(20, 20);
    let mut a = AgentRng::new(7, AgentId(3));
    let mut b = AgentRng::new(7, AgentId(3));
    for _ in 0..50 {
        assert_eq!(
            provider.random_tile(&mut a).unwrap(),
            provider.random_tile(&mut b).unwrap()
        );
    }
}

// ── MobilityEngine ────────────────────────────────────────────────────────────

#[test]
fn begin_travel_returns_arrival_tick() {
    let mut engine = MobilityEngine::new(GridMover, 1);
    engine.place(AgentId(0), Tile::new(0, 0), Tick::ZERO);
    let arrival = engine
        .begin_travel(AgentId(0), Tile::new(4, 0), 10.0, Tick(100))
        .unwrap();
    assert_eq!(arrival, Tick(500)); // 4 tiles * 100 ticks/tile
    assert!(engine.in_transit(AgentId(0)));
}

#[test]
fn double_travel_is_rejected() {
    let mut engine = MobilityEngine::new(GridMover, 1);
    engine.place(AgentId(0), Tile::new(0, 0), Tick::ZERO);
    engine
        .begin_travel(AgentId(0), Tile::new(4, 0), 10.0, Tick(0))
        .unwrap();
    let err = engine
        .begin_travel(AgentId(0), Tile::new(2, 0), 10.0, Tick(1))
        .unwrap_err();
    assert!(matches!(err, MobilityError::AlreadyInTransit(a) if a == AgentId(0)));
}

#[test]
fn movement_state_records_trip_instants() {
    let mut engine = MobilityEngine::new(GridMover, 1);
    engine.place(AgentId(0), Tile::new(0, 0), Tick::ZERO);
    let arrival = engine
        .begin_travel(AgentId(0), Tile::new(4, 0), 10.0, Tick(100))
        .unwrap();

    // In transit: the state pins down when the trip began and when it ends.
    let state = &engine.states[0];
    assert_eq!(state.departure_tick, Tick(100));
    assert_eq!(state.arrival_tick, arrival);
    assert!(state.arrival_tick > state.departure_tick);

    // Stationary again: both instants collapse to the arrival time.
    engine.arrive(AgentId(0), arrival);
    let state = &engine.states[0];
    assert_eq!(state.departure_tick, arrival);
    assert_eq!(state.arrival_tick, arrival);
}

#[test]
fn arrive_reports_from_and_to() {
    let mut engine = MobilityEngine::new(GridMover, 1);
    engine.place(AgentId(0), Tile::new(2, 2), Tick::ZERO);
    let arrival = engine
        .begin_travel(AgentId(0), Tile::new(6, 2), 10.0, Tick(0))
        .unwrap();
    let (from, to) = engine.arrive(AgentId(0), arrival);
    assert_eq!(from, Tile::new(2, 2));
    assert_eq!(to, Tile::new(6, 2));
    assert!(!engine.in_transit(AgentId(0)));
    // The agent can travel again after arriving.
    assert!(engine.begin_travel(AgentId(0), Tile::new(0, 0), 10.0, arrival).is_ok());
}
