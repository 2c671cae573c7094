use {
    crate::DriverResult,
    serde_json::Value,
    sirs_small_world::SimulationConfig,
    std::error::Error,
    structopt::StructOpt,
};

/// Run one simulation and print the network and the time series as json
#[derive(Debug, StructOpt, Clone)]
pub struct TimeSeries {
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Indent the json output
    #[structopt(long)]
    pretty: bool,

    /// Leave the network out of the output
    #[structopt(long)]
    no_graph: bool,
}

impl TimeSeries {
    pub fn parse(&self) -> Result<(SimulationConfig, Value), Box<dyn Error>> {
        crate::parse(self.json.as_ref())
    }

    pub fn execute(&self) -> DriverResult {
        let (param, _json) = self.parse()?;
        super::execute::run_time_series(&param, self.pretty, !self.no_graph)
    }
}
