//! Descriptive statistics behind the distribution charts
//!
//! - Equal-width histogram binning
//! - Tukey box summaries (linear-interpolated quartiles, 1.5 IQR whiskers)
//! - Gaussian kernel density outlines for violins

use std::f64::consts::PI;

/// Number of points sampled along a violin outline
pub const VIOLIN_RESOLUTION: usize = 64;

/// One histogram bin covering `[start, end)`, the last bin closed on the right
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Bin `values` into `bins` equal-width bins spanning their min and max
///
/// Returns no bins for empty input or a zero bin count. When every value is
/// identical a single bin of width 1 centred on that value is returned.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if max <= min {
        return vec![HistogramBin {
            start: min - 0.5,
            end: min + 0.5,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &v in values {
        let mut idx = (((v - min) / width).floor() as usize).min(bins - 1);
        // The division can land one bin off near an edge; settle on the real edges
        while idx + 1 < bins && v >= out[idx + 1].start {
            idx += 1;
        }
        while idx > 0 && v < out[idx].start {
            idx -= 1;
        }
        out[idx].count += 1;
    }

    out
}

/// Quantile of already sorted values by linear interpolation
///
/// `q` is clamped to `[0, 1]`. Returns `None` for empty input.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Five-number summary plus outliers for a box plot
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    /// Series name, when the box belongs to a colored group
    pub name: Option<String>,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    /// Values beyond 1.5 IQR from the box
    pub outliers: Vec<f64>,
    pub count: usize,
}

impl BoxSummary {
    /// Summarise `values`; `None` for empty input
    pub fn from_values(name: Option<String>, values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;

        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside = || sorted.iter().copied().filter(|v| *v >= low_fence && *v <= high_fence);
        let lower_whisker = inside().next().unwrap_or(q1);
        let upper_whisker = inside().last().unwrap_or(q3);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            name,
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
            count: sorted.len(),
        })
    }
}

/// Kernel bandwidth by Silverman's rule of thumb
///
/// Falls back to a small positive bandwidth when the spread is zero so a
/// single-valued group still renders as a narrow bump.
pub fn silverman_bandwidth(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 1.0;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let std_dev = if n > 1 {
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
    } else {
        0.0
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let iqr = match (quantile_sorted(&sorted, 0.25), quantile_sorted(&sorted, 0.75)) {
        (Some(q1), Some(q3)) => q3 - q1,
        _ => 0.0,
    };

    let spread = match (std_dev > 0.0, iqr > 0.0) {
        (true, true) => std_dev.min(iqr / 1.34),
        (true, false) => std_dev,
        (false, true) => iqr / 1.34,
        (false, false) => 0.0,
    };

    let h = 0.9 * spread * (n as f64).powf(-0.2);
    if h > 0.0 {
        h
    } else {
        (mean.abs() * 0.05).max(0.1)
    }
}

/// Gaussian KDE sampled at `resolution` points over `[min - 2h, max + 2h]`
///
/// Returns `(value, density)` pairs with density scaled so its peak is 1.
pub fn density_outline(values: &[f64], resolution: usize) -> Vec<[f64; 2]> {
    if values.is_empty() || resolution < 2 {
        return Vec::new();
    }

    let h = silverman_bandwidth(values);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min) - 2.0 * h;
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max) + 2.0 * h;
    let step = (max - min) / (resolution - 1) as f64;
    let norm = 1.0 / (values.len() as f64 * h * (2.0 * PI).sqrt());

    let mut outline: Vec<[f64; 2]> = (0..resolution)
        .map(|i| {
            let x = min + step * i as f64;
            let density = values
                .iter()
                .map(|v| {
                    let z = (x - v) / h;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            [x, density]
        })
        .collect();

    let peak = outline.iter().map(|p| p[1]).fold(0.0, f64::max);
    if peak > 0.0 {
        for point in &mut outline {
            point[1] /= peak;
        }
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_sum_to_len() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 * 0.37).collect();
        let bins = histogram(&values, 50);
        assert_eq!(bins.len(), 50);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
    }

    #[test]
    fn test_histogram_max_lands_in_last_bin() {
        let bins = histogram(&[0.0, 5.0, 10.0], 10);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[5].count, 1);
        assert_eq!(bins[9].count, 1);
        assert!((bins[9].end - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_values_stay_within_bin_edges() {
        let values: Vec<f64> = (0..=50).map(|i| i as f64 * 0.1).collect();
        let bins = histogram(&values, 50);

        for (i, bin) in bins.iter().enumerate() {
            let last = i + 1 == bins.len();
            let inside = values
                .iter()
                .filter(|v| **v >= bin.start && (**v < bin.end || (last && **v <= bin.end)))
                .count();
            assert_eq!(bin.count, inside, "bin {i} [{}, {})", bin.start, bin.end);
        }

        // Every edge value opens its own bin, the max closes the last one
        assert!(bins[..49].iter().all(|b| b.count == 1));
        assert_eq!(bins[49].count, 2);
    }

    #[test]
    fn test_histogram_degenerate() {
        assert!(histogram(&[], 50).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());

        let bins = histogram(&[3.0, 3.0, 3.0], 50);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
        assert!((bins[0].center() - 3.0).abs() < 1e-12);
        assert!((bins[0].width() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_quantiles() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&sorted, 0.5), Some(3.0));
        assert_eq!(quantile_sorted(&sorted, 0.25), Some(2.0));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(5.0));
        assert_eq!(quantile_sorted(&[1.0, 2.0], 0.5), Some(1.5));
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    #[test]
    fn test_box_summary_with_outlier() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let summary = BoxSummary::from_values(None, &values).unwrap();
        assert!(summary.q1 <= summary.median && summary.median <= summary.q3);
        assert_eq!(summary.outliers, vec![100.0]);
        assert_eq!(summary.upper_whisker, 5.0);
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.count, 6);
    }

    #[test]
    fn test_box_summary_single_value() {
        let summary = BoxSummary::from_values(Some("USA".into()), &[7.5]).unwrap();
        assert_eq!(summary.median, 7.5);
        assert_eq!(summary.q1, summary.q3);
        assert!(summary.outliers.is_empty());
        assert!(BoxSummary::from_values(None, &[]).is_none());
    }

    #[test]
    fn test_bandwidth_positive() {
        assert!(silverman_bandwidth(&[1.0, 2.0, 3.0, 4.0]) > 0.0);
        assert!(silverman_bandwidth(&[5.0]) > 0.0);
        assert!(silverman_bandwidth(&[0.0, 0.0]) > 0.0);
    }

    #[test]
    fn test_density_outline_peak_is_one() {
        let outline = density_outline(&[1.0, 1.2, 1.1, 3.0], VIOLIN_RESOLUTION);
        assert_eq!(outline.len(), VIOLIN_RESOLUTION);
        let peak = outline.iter().map(|p| p[1]).fold(0.0, f64::max);
        assert!((peak - 1.0).abs() < 1e-9);
        // Outline is sampled in increasing value order
        assert!(outline.windows(2).all(|w| w[0][0] < w[1][0]));
        assert!(density_outline(&[], VIOLIN_RESOLUTION).is_empty());
    }
}
