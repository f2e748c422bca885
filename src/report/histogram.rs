//! Strength distribution summaries

use serde::{Deserialize, Serialize};

/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 10;

/// Half-open bin `[lower, upper)`; the last bin also includes 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram of tie strengths over [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    buckets: Vec<Bucket>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width buckets. `bins` below 1 is treated as 1.
    pub fn from_strengths(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let width = 1.0 / bins as f64;

        let mut buckets: Vec<Bucket> = (0..bins)
            .map(|i| Bucket {
                lower: i as f64 * width,
                upper: if i + 1 == bins { 1.0 } else { (i + 1) as f64 * width },
                count: 0,
            })
            .collect();

        for &value in values {
            let clamped = value.clamp(0.0, 1.0);
            let idx = ((clamped * bins as f64) as usize).min(bins - 1);
            buckets[idx].count += 1;
        }

        Self { buckets }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Total number of binned values
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Largest bucket count
    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Bar length for `count` on a log scale, `width` characters at `max_count`.
    pub fn log_bar(&self, count: usize, width: usize) -> usize {
        let max = self.max_count();
        if count == 0 || max == 0 {
            return 0;
        }
        let scaled = (count as f64).ln_1p() / (max as f64).ln_1p();
        ((scaled * width as f64).round() as usize).max(1)
    }
}

/// Basic statistics over a strength collection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StrengthSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Values exactly 0.0 (no shared collaborators)
    pub zero_count: usize,
}

impl StrengthSummary {
    pub fn from_strengths(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let sum: f64 = values.iter().sum();
        Self {
            count: values.len(),
            mean: sum / values.len() as f64,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            zero_count: values.iter().filter(|&&v| v == 0.0).count(),
        }
    }
}
