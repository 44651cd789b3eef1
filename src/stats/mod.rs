// src/stats/mod.rs

use serde::Serialize;

/// Min/max/mean/median of one indicator across a cross-section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl Summary {
    /// `None` on empty input.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let n = sorted.len();
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };
        Some(Self {
            min: sorted[0],
            max: sorted[n - 1],
            mean: sorted.iter().sum::<f64>() / n as f64,
            median,
        })
    }

    /// Min-max rescale of `value` onto this summary's range.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

/// Ordinary least-squares line through (xs, ys). `None` with fewer than two
/// points or when x has no variance.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let sxx: f64 = xs.iter().map(|x| (x - mean_x) * (x - mean_x)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub midpoint: f64,
    pub count: usize,
}

/// Fixed-width histogram with edges `lo, lo+width, ...` strictly below `hi`.
/// Bins are half-open except the last, which also takes values equal to its
/// upper edge. Values outside the edge range are ignored.
pub fn histogram(values: &[f64], lo: f64, hi: f64, width: f64) -> Vec<Bin> {
    let mut edges = Vec::new();
    let mut edge = lo;
    while edge < hi {
        edges.push(edge);
        edge += width;
    }
    if edges.len() < 2 {
        return Vec::new();
    }
    let nbins = edges.len() - 1;
    let last_edge = edges[nbins];

    let mut counts = vec![0usize; nbins];
    for &v in values {
        if v < lo || v > last_edge {
            continue;
        }
        let mut i = ((v - lo) / width) as usize;
        if i >= nbins {
            i = nbins - 1;
        }
        counts[i] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            midpoint: (edges[i] + edges[i + 1]) / 2.0,
            count,
        })
        .collect()
}
