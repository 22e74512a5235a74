use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One government securities auction, as stored in a single JSON file.
///
/// Every field is optional in the wire format; the accessor methods apply
/// the documented defaults so downstream code never branches on `None`:
///
/// * a missing [`security_type`](Self::security_type) reads as `"Unknown"`,
/// * a missing [`amount_issued_crore`](Self::amount_issued_crore) reads as 0,
/// * a missing [`auction_date`](Self::auction_date) keeps the record out of
///   all date-keyed groupings while it still counts toward type and total
///   aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityRecord {
    /// Calendar date of the auction. Absent, null, empty or unparseable
    /// date strings all deserialize to `None`.
    #[serde(default, deserialize_with = "lenient_date")]
    pub auction_date: Option<NaiveDate>,
    /// Free-text category label, e.g. `"T-Bill"` or `"Bond"`.
    #[serde(default)]
    pub security_type: Option<String>,
    /// Amount issued, in ₹ crore.
    #[serde(default)]
    pub amount_issued_crore: Option<f64>,
    /// Coupon rate in percent.
    #[serde(default)]
    pub coupon_rate: Option<f64>,
    /// Cut-off yield at auction in percent.
    #[serde(default)]
    pub yield_at_auction: Option<f64>,
}

impl SecurityRecord {
    /// The category label, defaulting to `"Unknown"` when absent.
    pub fn type_label(&self) -> &str {
        self.security_type.as_deref().unwrap_or("Unknown")
    }

    /// The issued amount in ₹ crore, defaulting to 0 when absent.
    pub fn amount(&self) -> f64 {
        self.amount_issued_crore.unwrap_or(0.0)
    }

    /// Grouping key `"YYYY-MM"`, or `None` for records without a date.
    pub fn month_key(&self) -> Option<String> {
        self.auction_date.map(|d| d.format("%Y-%m").to_string())
    }

    /// Grouping key `"YYYY"`, or `None` for records without a date.
    pub fn year_key(&self) -> Option<String> {
        self.auction_date.map(|d| d.format("%Y").to_string())
    }
}

/// Deserialize an auction date, treating every malformed shape as absent.
///
/// The upstream files are hand-assembled; a null, an empty string or a
/// non-date string must degrade to `None` rather than reject the record.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SecurityRecord {
        serde_json::from_str(json).expect("record should parse")
    }

    // ── Deserialization ───────────────────────────────────────────────────────

    #[test]
    fn test_full_record_parses() {
        let rec = parse(
            r#"{
                "auction_date": "2025-08-05",
                "security_type": "T-Bill",
                "amount_issued_crore": 1000.0,
                "coupon_rate": 7.10,
                "yield_at_auction": 6.8899
            }"#,
        );
        assert_eq!(rec.auction_date, NaiveDate::from_ymd_opt(2025, 8, 5));
        assert_eq!(rec.security_type.as_deref(), Some("T-Bill"));
        assert_eq!(rec.amount_issued_crore, Some(1000.0));
        assert_eq!(rec.coupon_rate, Some(7.10));
        assert_eq!(rec.yield_at_auction, Some(6.8899));
    }

    #[test]
    fn test_empty_record_parses_with_all_fields_absent() {
        let rec = parse("{}");
        assert!(rec.auction_date.is_none());
        assert!(rec.security_type.is_none());
        assert!(rec.amount_issued_crore.is_none());
        assert!(rec.coupon_rate.is_none());
        assert!(rec.yield_at_auction.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let rec = parse(r#"{"auction_date": "2025-08-05", "tenor": "91 days"}"#);
        assert!(rec.auction_date.is_some());
    }

    #[test]
    fn test_null_date_is_none() {
        let rec = parse(r#"{"auction_date": null}"#);
        assert!(rec.auction_date.is_none());
    }

    #[test]
    fn test_empty_string_date_is_none() {
        let rec = parse(r#"{"auction_date": ""}"#);
        assert!(rec.auction_date.is_none());
    }

    #[test]
    fn test_garbage_date_is_none_but_record_survives() {
        let rec = parse(r#"{"auction_date": "next tuesday", "security_type": "Bond"}"#);
        assert!(rec.auction_date.is_none());
        assert_eq!(rec.type_label(), "Bond");
    }

    #[test]
    fn test_non_string_date_is_none() {
        let rec = parse(r#"{"auction_date": 20250805}"#);
        assert!(rec.auction_date.is_none());
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    #[test]
    fn test_type_label_defaults_to_unknown() {
        let rec = parse("{}");
        assert_eq!(rec.type_label(), "Unknown");
    }

    #[test]
    fn test_amount_defaults_to_zero() {
        let rec = parse("{}");
        assert_eq!(rec.amount(), 0.0);
    }

    #[test]
    fn test_month_and_year_keys() {
        let rec = parse(r#"{"auction_date": "2025-08-05"}"#);
        assert_eq!(rec.month_key().as_deref(), Some("2025-08"));
        assert_eq!(rec.year_key().as_deref(), Some("2025"));
    }

    #[test]
    fn test_keys_absent_without_date() {
        let rec = parse("{}");
        assert!(rec.month_key().is_none());
        assert!(rec.year_key().is_none());
    }
}
