use {
    crate::DriverResult,
    sirs_small_world::{run_simulation, SimulationConfig},
    std::io::{self, BufWriter, Write},
    tracing::warn,
};

pub fn run_time_series(param: &SimulationConfig, pretty: bool, with_graph: bool) -> DriverResult {
    let mut output = run_simulation(param)?;
    if !output.connected {
        warn!(
            components = output.component_count,
            "results come from a disconnected network"
        );
    }
    if !with_graph {
        output.graph.nodes.clear();
        output.graph.edges.clear();
    }

    let stdout = io::stdout();
    let mut buf = BufWriter::new(stdout.lock());
    if pretty {
        serde_json::to_writer_pretty(&mut buf, &output)?;
    } else {
        serde_json::to_writer(&mut buf, &output)?;
    }
    writeln!(buf)?;
    buf.flush()?;
    Ok(())
}
