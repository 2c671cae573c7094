use {
    indicatif::*,
    serde::{de::DeserializeOwned, Serialize},
    serde_json::Value,
    sirs_small_world::json_parsing::{example_json, parse_file},
    std::{error::Error, process, time::Instant},
    structopt::StructOpt,
    tracing::{error, info},
    tracing_subscriber::EnvFilter,
};

pub mod scan_rewire;
pub mod time_series;

pub type DriverResult = Result<(), Box<dyn Error>>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let start_time = Instant::now();
    let opt = CmdOption::from_args();
    let res = match opt {
        CmdOption::TimeSeries(o) => o.execute(),
        CmdOption::ScanRewire(o) => o.execute(),
    };
    if let Err(e) = res {
        error!("{e}");
        process::exit(1);
    }
    info!("Execution took {}", humantime::format_duration(start_time.elapsed()));
}

/// Reads the parameter file. Without a file the default parameters are
/// printed as an example and the program ends.
pub fn parse<T>(file: Option<&String>) -> Result<(T, Value), Box<dyn Error>>
where
    T: Default + Serialize + DeserializeOwned,
{
    match file {
        Some(path) => Ok(parse_file(path)?),
        None => {
            println!("{}", example_json::<T>()?);
            info!("no json given, printed an example instead");
            process::exit(0)
        }
    }
}

pub fn indication_bar(len: u64) -> ProgressBar {
    // for indication on when it is finished
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar().template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"),
    );
    bar
}

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "SIRS simulations on Watts-Strogatz small world networks")]
pub enum CmdOption {
    TimeSeries(time_series::TimeSeries),
    ScanRewire(scan_rewire::ScanRewire),
}
