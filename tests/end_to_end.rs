use sirs_small_world::{
    run_simulation,
    small_world::{count_defects, RewireMode},
    PolicyKind, RecordingBoundary, SeedingPolicy, SimulationConfig,
};

fn reference_config() -> SimulationConfig {
    SimulationConfig {
        system_size: 500,
        degree: 10,
        rewire_prob: 0.05,
        policy: PolicyKind::Probabilistic,
        steps: 2000,
        seeding: SeedingPolicy::Fraction(0.02),
        boundary: RecordingBoundary::PreStep,
        ..SimulationConfig::default()
    }
}

#[test]
fn reference_run() {
    let config = reference_config();
    let output = run_simulation(&config).unwrap();

    assert_eq!(output.series.len(), 2000);
    assert_eq!(output.series[0].t, 0);
    assert_eq!(output.series[0].i, 10);
    assert_eq!(output.series[0].r, 0);
    for (t, point) in output.series.iter().enumerate() {
        assert_eq!(point.t, t);
        assert_eq!(point.s + point.i + point.r, 500);
        let frac_sum = point.s_frac + point.i_frac + point.r_frac;
        assert!((frac_sum - 1.0).abs() < 1e-12);
    }

    assert_eq!(output.graph.nodes.len(), 500);
    assert_eq!(output.graph.edges.len(), 500 * 10 / 2);
    assert_eq!(count_defects(&output.graph.edges), (0, 0));
    assert_eq!(output.connected, output.component_count == 1);
}

#[test]
fn same_seeds_same_run() {
    let mut config = reference_config();
    config.steps = 300;
    let a = run_simulation(&config).unwrap();
    let b = run_simulation(&config).unwrap();
    assert_eq!(a, b);

    config.sir_seed += 1;
    let c = run_simulation(&config).unwrap();
    assert_eq!(a.graph, c.graph);
}

#[test]
fn json_shape() {
    let mut config = reference_config();
    config.system_size = 40;
    config.degree = 4;
    config.steps = 5;
    let output = run_simulation(&config).unwrap();
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["graph"]["nodes"].as_array().unwrap().len(), 40);
    assert_eq!(json["graph"]["nodes"][3]["id"], 3);
    let edge = &json["graph"]["edges"][0];
    assert!(edge.get("source").is_some());
    assert!(edge.get("target").is_some());

    let point = &json["series"][0];
    for key in ["t", "S", "I", "R", "SFrac", "IFrac", "RFrac"] {
        assert!(point.get(key).is_some(), "missing {key}");
    }
    assert!(point.get("states").is_none());
}

#[test]
fn fixed_duration_run() {
    let config = SimulationConfig {
        system_size: 200,
        degree: 6,
        rewire_prob: 0.2,
        policy: PolicyKind::FixedDuration,
        steps: 100,
        seeding: SeedingPolicy::Count(5),
        boundary: RecordingBoundary::PreStep,
        ..SimulationConfig::default()
    };
    let output = run_simulation(&config).unwrap();
    assert_eq!(output.series.len(), 100);
    assert_eq!(output.series[0].i, 5);
    // nobody recovers before the infection period has passed
    for point in &output.series[..3] {
        assert_eq!(point.r, 0);
    }
    assert!(output.series.iter().all(|p| p.s + p.i + p.r == 200));
}

#[test]
fn config_round_trips_through_json() {
    let config = reference_config();
    let text = serde_json::to_string(&config).unwrap();
    let back: SimulationConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn isolated_nodes_are_reported_as_disconnected() {
    let config = SimulationConfig {
        system_size: 30,
        degree: 0,
        rewire_prob: 0.0,
        steps: 20,
        seeding: SeedingPolicy::Count(3),
        ..SimulationConfig::default()
    };
    let output = run_simulation(&config).unwrap();
    assert!(!output.connected);
    assert_eq!(output.component_count, 30);
    assert!(output.graph.edges.is_empty());
    // nobody can be infected without contacts
    assert!(output.series.iter().all(|p| p.i <= 3 && p.s + p.i + p.r == 30));
}

#[test]
fn naive_defects_reach_the_output() {
    let mut self_loops = 0;
    let mut duplicates = 0;
    for graph_seed in 0..40 {
        let config = SimulationConfig {
            system_size: 6,
            degree: 2,
            rewire_prob: 1.0,
            rewire_mode: RewireMode::Naive,
            steps: 10,
            seeding: SeedingPolicy::Count(1),
            graph_seed,
            ..SimulationConfig::default()
        };
        let output = run_simulation(&config).unwrap();
        assert_eq!(output.graph.edges.len(), 6);
        assert_eq!(
            (output.rewire.self_loops, output.rewire.duplicates),
            count_defects(&output.graph.edges)
        );
        assert_eq!(output.connected, output.component_count == 1);
        self_loops += output.rewire.self_loops;
        duplicates += output.rewire.duplicates;
    }
    assert!(self_loops > 0);
    assert!(duplicates > 0);
}
