//all the methods of calculating averages and variances etc.

use crate::sir_model::TimeSeriesPoint;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MyVariance {
    pub mean: f64,
    pub var: f64,
}

impl MyVariance {
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.var
    }

    pub fn from_slice(slice: &[f64]) -> Self {
        let mean = calc_average(slice);
        let var = calc_variance(slice, mean);
        Self { mean, var }
    }

    /// Infected fraction statistics of a series, ignoring the first
    /// `burn_in` points. `None` if nothing is left.
    pub fn infected_after_burn_in(series: &[TimeSeriesPoint], burn_in: usize) -> Option<Self> {
        let tail: Vec<f64> = series.get(burn_in..)?.iter().map(|p| p.i_frac).collect();
        if tail.is_empty() {
            None
        } else {
            Some(Self::from_slice(&tail))
        }
    }
}

/// Mean of `slice`, NaN for an empty slice.
pub fn calc_average(slice: &[f64]) -> f64 {
    slice.iter().sum::<f64>() / slice.len() as f64
}

pub fn calc_variance(slice: &[f64], average: f64) -> f64 {
    let mut var_sum = 0.0;
    for &val in slice {
        let dif = average - val;
        var_sum += dif * dif;
    }
    var_sum / slice.len() as f64
}
