#[derive(Clone, Debug, PartialEq)]
pub struct GridRangeF64 {
    start: f64,
    end: f64,
    steps: usize,
}

impl GridRangeF64 {
    pub fn new(start: f64, end: f64, steps: usize) -> Self {
        Self { start, end, steps }
    }

    pub fn len(&self) -> usize {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    /// Grid points from start to end. With a single step only `start` is
    /// produced.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let delta = if self.steps > 1 {
            (self.end - self.start) / (self.steps - 1) as f64
        } else {
            0.0
        };
        (0..self.steps).map(move |i| {
            if i + 1 == self.steps && self.steps > 1 {
                self.end
            } else {
                self.start + delta * i as f64
            }
        })
    }
}
