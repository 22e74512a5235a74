//! Aggregation of auction records into a statistics summary.

use std::collections::BTreeMap;

use gsec_core::models::SecurityRecord;

// ── StatsSummary ──────────────────────────────────────────────────────────────

/// Everything the reporter needs, derived from one pass over the records.
///
/// The grouping maps are `BTreeMap`s keyed by `"YYYY-MM"` / `"YYYY"` / type
/// label, so iteration order is the sorted order the report sections require.
#[derive(Debug, Clone, Default)]
pub struct StatsSummary {
    /// Number of records that loaded successfully.
    pub total_count: usize,
    /// Number of candidate files found, parsed or not.
    pub total_file_count: usize,
    /// Record count per `"YYYY-MM"` key; dateless records are absent here.
    pub count_by_month: BTreeMap<String, u64>,
    /// Summed issuance (₹ crore) per `"YYYY-MM"` key.
    pub amount_by_month: BTreeMap<String, f64>,
    /// Record count per security-type label (`"Unknown"` for absent types).
    pub count_by_type: BTreeMap<String, u64>,
    /// Summed issuance across all records, dated or not.
    pub total_amount: f64,
    /// Coupon rates in input encounter order; zero-valued rates are absent.
    pub coupon_rates: Vec<f64>,
    /// Auction yields in input encounter order; zero-valued yields are absent.
    pub yields: Vec<f64>,
    /// Records grouped by `"YYYY"` key, for per-year recomputation.
    pub records_by_year: BTreeMap<String, Vec<SecurityRecord>>,
}

// ── AuctionAggregator ─────────────────────────────────────────────────────────

/// Stateless helper that folds records into a [`StatsSummary`].
pub struct AuctionAggregator;

impl AuctionAggregator {
    /// Build the summary in a single pass. Never fails: missing fields
    /// default (amount → 0) or are omitted (date groupings, rate/yield
    /// series), and empty input degrades to an all-zero summary.
    ///
    /// A coupon rate or yield of exactly 0 is treated as absent. A real
    /// zero-coupon security therefore never reaches `coupon_rates`; callers
    /// relying on the series must replicate this check.
    pub fn summarize(records: &[SecurityRecord], file_count: usize) -> StatsSummary {
        let mut summary = StatsSummary {
            total_count: records.len(),
            total_file_count: file_count,
            ..StatsSummary::default()
        };

        for record in records {
            if let Some(month) = record.month_key() {
                *summary.count_by_month.entry(month.clone()).or_insert(0) += 1;
                *summary.amount_by_month.entry(month).or_insert(0.0) += record.amount();
            }
            if let Some(year) = record.year_key() {
                summary
                    .records_by_year
                    .entry(year)
                    .or_default()
                    .push(record.clone());
            }

            *summary
                .count_by_type
                .entry(record.type_label().to_string())
                .or_insert(0) += 1;

            summary.total_amount += record.amount();

            if let Some(rate) = record.coupon_rate.filter(|r| *r != 0.0) {
                summary.coupon_rates.push(rate);
            }
            if let Some(yld) = record.yield_at_auction.filter(|y| *y != 0.0) {
                summary.yields.push(yld);
            }
        }

        summary
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
