// Per-tick readings and the per-run state the sampler accumulates

/// One successful tick: requested (target) and actual (measured) core voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub requested: f64,
    pub actual: f64,
}

/// Running min/max of the actual voltage. Starts at +inf/-inf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningExtremes {
    pub min_actual: f64,
    pub max_actual: f64,
}

impl Default for RunningExtremes {
    fn default() -> Self {
        Self {
            min_actual: f64::INFINITY,
            max_actual: f64::NEG_INFINITY,
        }
    }
}

impl RunningExtremes {
    pub fn update(&mut self, actual: f64) {
        if actual < self.min_actual {
            self.min_actual = actual;
        }
        if actual > self.max_actual {
            self.max_actual = actual;
        }
    }

    /// False until the first sample arrives.
    pub fn is_set(&self) -> bool {
        self.min_actual.is_finite() && self.max_actual.is_finite()
    }
}

/// Append-only record of one run: requested and actual values paired by index, plus extremes.
/// Owned by the sampler while collecting, then handed to the analyzer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    requested: Vec<f64>,
    actual: Vec<f64>,
    extremes: RunningExtremes,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.requested.push(sample.requested);
        self.actual.push(sample.actual);
        self.extremes.update(sample.actual);
    }

    pub fn requested(&self) -> &[f64] {
        &self.requested
    }

    pub fn actual(&self) -> &[f64] {
        &self.actual
    }

    pub fn extremes(&self) -> RunningExtremes {
        self.extremes
    }

    pub fn len(&self) -> usize {
        self.requested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requested.is_empty() || self.actual.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.requested
            .iter()
            .zip(&self.actual)
            .map(|(&requested, &actual)| Sample { requested, actual })
    }
}

impl FromIterator<Sample> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut series = SampleSeries::new();
        for sample in iter {
            series.push(sample);
        }
        series
    }
}
