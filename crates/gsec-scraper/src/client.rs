//! The two-phase portal session: token fetch, then form submission.

use reqwest::blocking::Client;
use reqwest::header::REFERER;
use tracing::{debug, info};

use crate::error::ScrapeError;
use crate::parse::{self, FormTokens, PressRelease};

/// The portal's press-release listing page.
pub const PORTAL_URL: &str = "https://rbi.org.in/Scripts/BS_PressreleaseDisplay.aspx";

/// A stateful browsing session against the portal.
///
/// The listing form only accepts submissions that replay the anti-forgery
/// tokens from a prior page load together with that load's session cookie,
/// so the session owns a cookie jar and exposes the exchange as explicit
/// phases: [`fetch_tokens`](Self::fetch_tokens) then
/// [`submit`](Self::submit).
pub struct PortalSession {
    client: Client,
}

impl PortalSession {
    /// Build a session with a cookie store.
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client })
    }

    /// Phase one: load the form page and extract its hidden fields.
    pub fn fetch_tokens(&self) -> Result<FormTokens, ScrapeError> {
        debug!("Fetching form tokens from {}", PORTAL_URL);

        let response = self.client.get(PORTAL_URL).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: PORTAL_URL.to_string(),
                status,
            });
        }

        let body = response.text()?;
        parse::extract_tokens(&body)
    }

    /// Phase two: replay the tokens with the year/month filter applied and
    /// return the response body.
    pub fn submit(
        &self,
        tokens: &FormTokens,
        year: u16,
        month: u32,
    ) -> Result<String, ScrapeError> {
        debug!("Submitting listing form for {}-{:02}", year, month);

        let form = [
            ("__EVENTTARGET", String::new()),
            ("__EVENTARGUMENT", String::new()),
            ("__VIEWSTATE", tokens.viewstate.clone()),
            ("__VIEWSTATEGENERATOR", tokens.viewstate_generator.clone()),
            ("__EVENTVALIDATION", tokens.event_validation.clone()),
            ("hdnYear", year.to_string()),
            ("hdnMonth", month.to_string()),
            ("UsrFontCntr$txtSearch", String::new()),
            ("UsrFontCntr$btn", String::new()),
        ];

        let response = self
            .client
            .post(PORTAL_URL)
            .header(REFERER, PORTAL_URL)
            .form(&form)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: PORTAL_URL.to_string(),
                status,
            });
        }

        Ok(response.text()?)
    }

    /// Fetch and parse the complete listing for one year/month.
    pub fn press_releases(
        &self,
        year: u16,
        month: u32,
    ) -> Result<Vec<PressRelease>, ScrapeError> {
        let tokens = self.fetch_tokens()?;
        let body = self.submit(&tokens, year, month)?;
        let releases = parse::extract_releases(&body);

        info!(
            "Parsed {} press releases for {}-{:02}",
            releases.len(),
            year,
            month
        );
        Ok(releases)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
