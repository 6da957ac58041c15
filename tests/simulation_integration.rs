//! Integration tests for the host-side session driver and utilities

use std::path::PathBuf;

use life_grid::core::SimulationConfig;
use life_grid::graph::Graph;
use life_grid::montecarlo::estimate_pi;
use life_grid::simulation::{run_session, RunSummary, SeedKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn pattern_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/patterns/glider.txt")
}

#[test]
fn test_bundled_pattern_session() {
    let config = SimulationConfig {
        pattern_path: Some(pattern_path()),
        generations: 4,
        step_delay_ms: 0,
        seed: Some(99),
        ..SimulationConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    let mut frames = Vec::new();
    let summary = run_session(&config, &mut rng, |frame| {
        frames.push((frame.seed_kind, frame.text.to_string()));
    });

    let file_phase = &summary.phases[0];
    assert_eq!(file_phase.seed_kind, SeedKind::FromFile);
    assert_eq!(file_phase.dimension, 30);
    assert_eq!(file_phase.rows_zero_filled, 0);
    // Gliders are population-stable while away from the edge
    assert_eq!(file_phase.initial_population, 5);
    assert_eq!(file_phase.final_population, 5);

    assert_eq!(summary.phases[1].seed_kind, SeedKind::Random);
    assert_eq!(frames.len(), 10);
    for (_, text) in &frames {
        assert_eq!(text.lines().count(), 30);
    }
}

#[test]
fn test_bundled_config_parses() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/life.toml");
    let config = SimulationConfig::load(&path).unwrap();
    assert_eq!(config.dimension, 30);
    assert!(config.pattern_path.is_some());
}

#[test]
fn test_summary_json_round_trip() {
    let config = SimulationConfig {
        dimension: 8,
        generations: 1,
        step_delay_ms: 0,
        ..SimulationConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let summary = run_session(&config, &mut rng, |_| {});

    let json = summary.to_json().unwrap();
    let parsed: RunSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.phases, summary.phases);
}

#[test]
fn test_pi_estimate_is_reproducible() {
    let a = estimate_pi(10_000, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
    let b = estimate_pi(10_000, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
    assert_eq!(a, b);
    assert!((a - std::f64::consts::PI).abs() < 0.1);
}

#[test]
fn test_graph_with_string_labels() {
    let mut g: Graph<String> = Graph::new();
    g.add_edge("madrid".into(), "toledo".into());
    g.add_edge("toledo".into(), "cuenca".into());
    g.add_edge("cuenca".into(), "valencia".into());
    g.add_vertex("sevilla".into());

    assert_eq!(
        g.one_path(&"madrid".into(), &"valencia".into()),
        Some(vec![
            "madrid".to_string(),
            "toledo".to_string(),
            "cuenca".to_string(),
            "valencia".to_string()
        ])
    );
    assert_eq!(g.one_path(&"madrid".into(), &"sevilla".into()), None);
    assert!(g.adjacents(&"sevilla".to_string()).unwrap().is_empty());
}
