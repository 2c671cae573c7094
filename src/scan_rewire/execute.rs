use {
    super::parser::*,
    crate::DriverResult,
    indicatif::ParallelProgressIterator,
    rand::{Rng, SeedableRng},
    rand_pcg::Pcg64,
    rayon::prelude::*,
    serde_json::Value,
    sirs_small_world::{
        build_simulation, json_parsing::write_json, misc_types::ONE,
        sir_model::TimeSeriesRecorder, stats_methods::*, SimulationConfig, SirsError,
    },
    std::{
        io::{self, BufWriter, Write},
        num::*,
    },
    tracing::info,
};

/// Aggregate over all samples of one grid point.
#[derive(Clone, Debug)]
pub struct ScanRow {
    pub rewire_prob: f64,
    /// mean over samples of the time averaged infected fraction
    pub mean_infected: f64,
    /// variance of the time averaged infected fraction between samples
    pub sample_variance: f64,
    /// mean over samples of the variance in time
    pub mean_time_variance: f64,
    pub mean_components: f64,
    pub mean_skipped: f64,
    pub disconnected: usize,
}

pub fn run_scan(
    param: ScanRewireParams,
    json: Value,
    num_threads: Option<NonZeroUsize>,
) -> DriverResult {
    param.validate()?;
    let range = param.rewire_range.get_range();

    let mut graph_rng = Pcg64::seed_from_u64(param.base.graph_seed);
    let mut sir_rng = Pcg64::seed_from_u64(param.base.sir_seed);

    // seeds are drawn before going parallel, the output must not depend on
    // the number of threads
    let jobs: Vec<(f64, Vec<(u64, u64)>)> = range
        .iter()
        .map(|rewire_prob| {
            let seeds = (0..param.samples.get())
                .map(|_| (graph_rng.gen::<u64>(), sir_rng.gen::<u64>()))
                .collect();
            (rewire_prob, seeds)
        })
        .collect();

    let k = num_threads.unwrap_or(ONE);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(k.get()).build()?;

    info!(
        points = jobs.len(),
        samples = param.samples.get(),
        threads = k.get(),
        "scanning rewiring probability"
    );
    let bar = crate::indication_bar(jobs.len() as u64);

    let rows = pool.install(|| {
        jobs.par_iter()
            .progress_with(bar)
            .map(|(rewire_prob, seeds)| scan_point(&param, *rewire_prob, seeds))
            .collect::<Result<Vec<_>, SirsError>>()
    })?;

    let stdout = io::stdout();
    let mut buf = BufWriter::new(stdout.lock());
    write_rows(&mut buf, &json, &rows)?;
    buf.flush()?;
    Ok(())
}

pub fn scan_point(
    param: &ScanRewireParams,
    rewire_prob: f64,
    seeds: &[(u64, u64)],
) -> Result<ScanRow, SirsError> {
    let mut means = Vec::with_capacity(seeds.len());
    let mut time_variances = Vec::with_capacity(seeds.len());
    let mut components = 0;
    let mut skipped = 0;
    let mut disconnected = 0;

    for &(graph_seed, sir_seed) in seeds {
        let config = SimulationConfig {
            rewire_prob,
            graph_seed,
            sir_seed,
            snapshots: false,
            ..param.base.clone()
        };
        let mut model = build_simulation(&config)?;
        let mut recorder =
            TimeSeriesRecorder::with_capacity(config.system_size, false, config.steps);
        model.run(config.steps, config.boundary, &mut recorder);

        if let Some(var) = MyVariance::infected_after_burn_in(recorder.points(), param.burn_in) {
            means.push(var.mean());
            time_variances.push(var.variance());
        }
        components += model.component_count();
        skipped += model.rewire_stats().skipped;
        if !model.is_connected() {
            disconnected += 1;
        }
    }

    let samples = seeds.len() as f64;
    let mean_infected = calc_average(&means);
    Ok(ScanRow {
        rewire_prob,
        mean_infected,
        sample_variance: calc_variance(&means, mean_infected),
        mean_time_variance: calc_average(&time_variances),
        mean_components: components as f64 / samples,
        mean_skipped: skipped as f64 / samples,
        disconnected,
    })
}

pub fn write_rows<W: Write>(mut writer: W, json: &Value, rows: &[ScanRow]) -> io::Result<()> {
    write_json(&mut writer, json)?;
    writeln!(
        writer,
        "#rewire_prob mean_infected sample_variance mean_time_variance mean_components mean_skipped disconnected"
    )?;
    for row in rows {
        writeln!(
            writer,
            "{} {:E} {:E} {:E} {} {} {}",
            row.rewire_prob,
            row.mean_infected,
            row.sample_variance,
            row.mean_time_variance,
            row.mean_components,
            row.mean_skipped,
            row.disconnected
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, sirs_small_world::misc_types::F64RangeBuilder};

    fn small_param() -> ScanRewireParams {
        let mut param = ScanRewireParams::default();
        param.base.system_size = 60;
        param.base.degree = 4;
        param.base.steps = 50;
        param.burn_in = 10;
        param.samples = NonZeroUsize::new(2).unwrap();
        param.rewire_range = F64RangeBuilder {
            start: 0.0,
            end: 0.5,
            steps: NonZeroUsize::new(2).unwrap(),
        };
        param
    }

    #[test]
    fn scan_point_is_reproducible() {
        let param = small_param();
        let seeds = [(1, 2), (3, 4)];
        let a = scan_point(&param, 0.2, &seeds).unwrap();
        let b = scan_point(&param, 0.2, &seeds).unwrap();
        assert_eq!(a.mean_infected, b.mean_infected);
        assert_eq!(a.sample_variance, b.sample_variance);
        assert!((0.0..=1.0).contains(&a.mean_infected));
        assert!(a.mean_components >= 1.0);
    }

    #[test]
    fn lattice_never_skips() {
        let param = small_param();
        let row = scan_point(&param, 0.0, &[(9, 9)]).unwrap();
        assert_eq!(row.mean_skipped, 0.0);
        assert_eq!(row.mean_components, 1.0);
        assert_eq!(row.disconnected, 0);
    }

    #[test]
    fn rows_are_written_below_the_header() {
        let row = ScanRow {
            rewire_prob: 0.5,
            mean_infected: 0.25,
            sample_variance: 0.0,
            mean_time_variance: 0.5,
            mean_components: 1.0,
            mean_skipped: 0.0,
            disconnected: 0,
        };
        let mut buf = Vec::new();
        write_rows(&mut buf, &serde_json::json!({"x": 1}), &[row]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "#{\"x\":1}");
        assert!(lines[1].starts_with("#rewire_prob"));
        assert_eq!(lines[2], "0.5 2.5E-1 0E0 5E-1 1 0 0");
    }
}
