use anyhow::Result;
use clap::Parser;
use gsec_cli::bootstrap;
use gsec_core::settings::ScraperSettings;
use gsec_scraper::PortalSession;

fn main() -> Result<()> {
    let settings = ScraperSettings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    println!(
        "Fetching press releases for {}-{:02}...\n",
        settings.year, settings.month
    );

    // Any fetch or token failure propagates out of main: there is nothing to
    // salvage from a broken exchange with the portal.
    let session = PortalSession::new()?;
    let releases = session.press_releases(settings.year, settings.month)?;

    println!("Found {} press releases:\n", releases.len());
    println!("{}", "=".repeat(100));

    for (i, release) in releases.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, release.date, release.title);
        println!("   {}\n", release.link);
    }

    Ok(())
}
