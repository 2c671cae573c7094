use {
    crate::{
        config::SimulationConfig,
        error::Result,
        sir_model::*,
        small_world::{GraphExport, RewireStats},
    },
    serde::{Deserialize, Serialize},
    tracing::info,
};

/// What a run hands to exporters and renderers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationOutput {
    pub graph: GraphExport,
    pub series: Vec<TimeSeriesPoint>,
    pub rewire: RewireStats,
    pub component_count: usize,
    /// False when the network fell apart into several components. The
    /// dynamics are still computed but should be read with care.
    pub connected: bool,
}

/// Validates `config`, generates the contact network and seeds the initial
/// infection.
pub fn build_simulation(config: &SimulationConfig) -> Result<SirsSimulation> {
    config.validate()?;
    let rule = config.transition_policy()?;
    let seeding = config.initial_infection()?;
    let opt = SWOptions::from_config(config)?;
    let model = SWModel::try_from(opt)?;
    Ok(SirsSimulation::from_base(model, rule, seeding, config.sir_seed))
}

/// Runs `config.steps` ticks and collects everything a caller may want to
/// export.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationOutput> {
    let mut sim = build_simulation(config)?;
    let mut recorder =
        TimeSeriesRecorder::with_capacity(config.system_size, config.snapshots, config.steps);
    sim.run(config.steps, config.boundary, &mut recorder);

    let counts = sim.counts();
    info!(
        steps = config.steps,
        rewire_prob = config.rewire_prob,
        policy = %config.policy,
        s = counts.s,
        i = counts.i,
        r = counts.r,
        "simulation finished"
    );

    Ok(SimulationOutput {
        graph: sim.graph().export(),
        series: recorder.into_points(),
        rewire: sim.rewire_stats(),
        component_count: sim.component_count(),
        connected: sim.is_connected(),
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            config::{PolicyKind, SeedingPolicy},
            error::SirsError,
        },
    };

    #[test]
    fn invalid_config_fails_before_running() {
        let mut config = SimulationConfig::default();
        config.policy = PolicyKind::FixedDuration;
        config.params.infection_period = None;
        assert!(matches!(
            run_simulation(&config),
            Err(SirsError::MissingParameter { .. })
        ));
    }

    #[test]
    fn small_fixed_duration_run() {
        let config = SimulationConfig {
            system_size: 60,
            degree: 4,
            rewire_prob: 0.1,
            policy: PolicyKind::FixedDuration,
            steps: 40,
            seeding: SeedingPolicy::Fraction(0.1),
            snapshots: true,
            ..SimulationConfig::default()
        };
        let output = run_simulation(&config).unwrap();
        assert_eq!(output.series.len(), 40);
        assert_eq!(output.graph.edges.len(), 120);
        assert_eq!(output.rewire.self_loops, 0);
        assert_eq!(output.connected, output.component_count == 1);
        for point in &output.series {
            assert_eq!(point.counts().total(), 60);
            assert_eq!(point.states.as_ref().map(Vec::len), Some(60));
        }
    }
}
