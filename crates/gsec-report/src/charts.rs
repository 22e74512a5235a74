//! Numeric primitives behind the ASCII charts.

use std::collections::BTreeMap;

/// Width cap (columns) for the monthly amount and count charts.
pub const MONTHLY_CHART_WIDTH: usize = 50;
/// Width cap (columns) for the coupon-rate histogram, narrower than the
/// monthly charts.
pub const HISTOGRAM_WIDTH: usize = 40;
/// Width of one coupon-rate histogram bucket, in percentage points.
pub const RATE_BUCKET_SIZE: f64 = 0.25;

/// Build a proportional bar: `floor(value / max_value * width_cap)` filled
/// columns, clamped to the cap.
pub fn bar(value: f64, max_value: f64, width_cap: usize) -> String {
    let length = ((value / max_value) * width_cap as f64) as usize;
    "█".repeat(length.min(width_cap))
}

/// The scale denominator for a series: its maximum, or 1 when the series is
/// empty or all-zero so the division in [`bar`] stays defined.
pub fn series_max(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values.into_iter().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Group rates into fixed-width buckets keyed by bucket index.
///
/// The index is the value rounded to the nearest multiple of `bucket_size`
/// (7.10 at size 0.25 lands in bucket 28, labeled 7.00). Integer keys keep
/// the map ordered without comparing floats.
pub fn rate_buckets(rates: &[f64], bucket_size: f64) -> BTreeMap<i64, u64> {
    let mut buckets: BTreeMap<i64, u64> = BTreeMap::new();
    for rate in rates {
        let index = (rate / bucket_size).round() as i64;
        *buckets.entry(index).or_insert(0) += 1;
    }
    buckets
}

/// The value a bucket index represents, used as the histogram row label.
pub fn bucket_label(index: i64, bucket_size: f64) -> f64 {
    index as f64 * bucket_size
}

// ── Tests ─────────────────────────────────────────────────────────────────────
