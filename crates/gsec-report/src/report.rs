//! The fixed multi-section text report.
//!
//! Section order is part of the output contract: overview, by-type, monthly,
//! coupon-rate stats, yield stats, by-year, bar charts, histogram. Sections
//! whose underlying series is empty render headers only; the coupon, yield
//! and histogram sections are skipped entirely when their series is empty.

use gsec_core::formatting::{format_crore, format_number};
use gsec_core::models::SecurityRecord;
use gsec_core::stats;
use gsec_data::aggregator::StatsSummary;

use crate::charts::{
    bar, bucket_label, rate_buckets, series_max, HISTOGRAM_WIDTH, MONTHLY_CHART_WIDTH,
    RATE_BUCKET_SIZE,
};

const RULE_WIDTH: usize = 80;

/// Render the complete report: statistics sections, chart sections, footer.
pub fn render_report(summary: &StatsSummary) -> String {
    let mut out = String::new();
    out.push_str(&render_statistics(summary));
    out.push_str(&render_charts(summary));
    out.push_str(&banner("Analysis complete!"));
    out
}

/// Sections 1-6: overview through the by-year breakdown.
pub fn render_statistics(summary: &StatsSummary) -> String {
    let mut out = banner("GOVERNMENT SECURITIES DATA ANALYSIS");
    out.push('\n');

    out.push_str(&overview(summary));
    out.push_str(&by_type(summary));
    out.push_str(&monthly(summary));
    out.push_str(&series_stats("COUPON RATES", &summary.coupon_rates, 2));
    out.push_str(&series_stats("YIELDS AT AUCTION", &summary.yields, 4));
    out.push_str(&by_year(summary));

    out
}

/// Sections 7-8: bar charts and the coupon-rate histogram.
pub fn render_charts(summary: &StatsSummary) -> String {
    let mut out = banner("VISUALIZATIONS");
    out.push('\n');

    out.push_str(&amount_chart(summary));
    out.push_str(&count_chart(summary));
    out.push_str(&rate_histogram(summary));

    out
}

// ── Statistics sections ───────────────────────────────────────────────────────

fn overview(summary: &StatsSummary) -> String {
    let mut out = String::from("OVERVIEW\n");
    out.push_str(&format!("  Total JSON files: {}\n", summary.total_file_count));
    out.push_str(&format!("  Total securities: {}\n", summary.total_count));
    out.push_str(&format!(
        "  Total amount issued: {}\n\n",
        format_crore(summary.total_amount)
    ));
    out
}

fn by_type(summary: &StatsSummary) -> String {
    let mut out = String::from("BY SECURITY TYPE\n");
    for (sec_type, count) in &summary.count_by_type {
        out.push_str(&format!("  {}: {}\n", sec_type, count));
    }
    out.push('\n');
    out
}

fn monthly(summary: &StatsSummary) -> String {
    let mut out = String::from("MONTHLY BREAKDOWN\n");
    for (month, count) in &summary.count_by_month {
        let amount = summary.amount_by_month.get(month).copied().unwrap_or(0.0);
        out.push_str(&format!(
            "  {}: {} securities, {}\n",
            month,
            count,
            format_crore(amount)
        ));
    }
    out.push('\n');
    out
}

/// Min/max/mean/median block for one series; empty series renders nothing.
fn series_stats(title: &str, values: &[f64], decimals: usize) -> String {
    let Some(stats) = stats::describe(values) else {
        return String::new();
    };
    format!(
        "{title}\n  Min: {min:.prec$}%\n  Max: {max:.prec$}%\n  Avg: {mean:.prec$}%\n  Median: {median:.prec$}%\n\n",
        min = stats.min,
        max = stats.max,
        mean = stats.mean,
        median = stats.median,
        prec = decimals,
    )
}

fn by_year(summary: &StatsSummary) -> String {
    let mut out = String::from("BY YEAR\n");
    for (year, records) in &summary.records_by_year {
        // Recomputed from the grouped records, independent of the running
        // totals accumulated during aggregation.
        let amount: f64 = records.iter().map(SecurityRecord::amount).sum();
        out.push_str(&format!(
            "  {}: {} securities, {}\n",
            year,
            records.len(),
            format_crore(amount)
        ));
    }
    out.push('\n');
    out
}

// ── Chart sections ────────────────────────────────────────────────────────────

fn amount_chart(summary: &StatsSummary) -> String {
    let mut out = String::from("MONTHLY ISSUANCE VOLUMES (₹ crore)\n\n");
    let max_amount = series_max(summary.amount_by_month.values().copied());
    for (month, amount) in &summary.amount_by_month {
        out.push_str(&format!(
            "  {}  {} ₹{:>8}\n",
            month,
            bar(*amount, max_amount, MONTHLY_CHART_WIDTH),
            format_number(*amount, 0)
        ));
    }
    out.push('\n');
    out
}

fn count_chart(summary: &StatsSummary) -> String {
    let mut out = String::from("MONTHLY SECURITY COUNT\n\n");
    let max_count = series_max(summary.count_by_month.values().map(|c| *c as f64));
    for (month, count) in &summary.count_by_month {
        out.push_str(&format!(
            "  {}  {} {:>3}\n",
            month,
            bar(*count as f64, max_count, MONTHLY_CHART_WIDTH),
            count
        ));
    }
    out.push('\n');
    out
}

/// Coupon-rate histogram; skipped entirely when the series is empty.
fn rate_histogram(summary: &StatsSummary) -> String {
    if summary.coupon_rates.is_empty() {
        return String::new();
    }

    let mut out = String::from("COUPON RATE DISTRIBUTION\n\n");
    let buckets = rate_buckets(&summary.coupon_rates, RATE_BUCKET_SIZE);
    let max_bucket = series_max(buckets.values().map(|c| *c as f64));
    for (index, count) in &buckets {
        out.push_str(&format!(
            "  {:>5.2}%  {} ({})\n",
            bucket_label(*index, RATE_BUCKET_SIZE),
            bar(*count as f64, max_bucket, HISTOGRAM_WIDTH),
            count
        ));
    }
    out.push('\n');
    out
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
