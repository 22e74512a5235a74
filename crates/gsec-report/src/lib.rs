//! Report rendering for the G-Sec auction analyzer.
//!
//! Turns a [`gsec_data::aggregator::StatsSummary`] into the fixed
//! multi-section text report, including the ASCII bar charts and the
//! coupon-rate histogram. Rendering is pure: the only product is a `String`
//! the caller prints, so tests can diff the output directly.

pub mod charts;
pub mod report;

pub use report::render_report;
