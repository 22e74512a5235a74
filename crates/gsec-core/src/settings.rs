use clap::Parser;
use std::path::PathBuf;

// ── AnalyzerSettings ───────────────────────────────────────────────────────────

/// Offline statistics over downloaded auction records
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gsec-analyze",
    about = "Summarize government securities auction records as a text report",
    version
)]
pub struct AnalyzerSettings {
    /// Directory containing one JSON record per auction
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Logging level
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

// ── ScraperSettings ────────────────────────────────────────────────────────────

/// Press-release listing fetcher for the regulator's portal
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gsec-scrape",
    about = "List the portal's press releases for one year/month",
    version
)]
pub struct ScraperSettings {
    /// Calendar year to query, e.g. 2025
    pub year: u16,

    /// Month within the year (1-12)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Logging level
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── AnalyzerSettings ──────────────────────────────────────────────────────

    #[test]
    fn test_analyzer_defaults_with_zero_arguments() {
        let settings = AnalyzerSettings::try_parse_from(["gsec-analyze"]).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_analyzer_data_dir_override() {
        let settings =
            AnalyzerSettings::try_parse_from(["gsec-analyze", "--data-dir", "/tmp/records"])
                .unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/records"));
    }

    #[test]
    fn test_analyzer_rejects_unknown_log_level() {
        assert!(AnalyzerSettings::try_parse_from(["gsec-analyze", "--log-level", "loud"]).is_err());
    }

    // ── ScraperSettings ───────────────────────────────────────────────────────

    #[test]
    fn test_scraper_parses_year_and_month() {
        let settings = ScraperSettings::try_parse_from(["gsec-scrape", "2025", "8"]).unwrap();
        assert_eq!(settings.year, 2025);
        assert_eq!(settings.month, 8);
    }

    #[test]
    fn test_scraper_missing_arguments_is_usage_error() {
        assert!(ScraperSettings::try_parse_from(["gsec-scrape"]).is_err());
        assert!(ScraperSettings::try_parse_from(["gsec-scrape", "2025"]).is_err());
    }

    #[test]
    fn test_scraper_rejects_out_of_range_month() {
        assert!(ScraperSettings::try_parse_from(["gsec-scrape", "2025", "13"]).is_err());
        assert!(ScraperSettings::try_parse_from(["gsec-scrape", "2025", "0"]).is_err());
    }
}
