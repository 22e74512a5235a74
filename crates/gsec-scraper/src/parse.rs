//! Extraction of form tokens and press-release rows from portal HTML.
//!
//! The pages are machine-generated with a flat, predictable shape (hidden
//! `<input>` fields, result rows as `<tr>`/`<td>` pairs), so extraction is
//! regex-based rather than a full DOM parse.

use regex::Regex;

use crate::error::ScrapeError;

/// Origin prepended to root-relative links in the results table.
const PORTAL_ORIGIN: &str = "https://rbi.org.in";

/// The session-scoped anti-forgery fields the portal's form round-trips.
#[derive(Debug, Clone)]
pub struct FormTokens {
    pub viewstate: String,
    pub viewstate_generator: String,
    pub event_validation: String,
}

/// One row of the press-release listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressRelease {
    pub date: String,
    pub title: String,
    pub link: String,
}

/// Extract the three hidden form fields from the portal's form page.
///
/// A missing field is fatal: the portal rejects submissions without the
/// complete token set.
pub fn extract_tokens(html: &str) -> Result<FormTokens, ScrapeError> {
    Ok(FormTokens {
        viewstate: hidden_field(html, "__VIEWSTATE")?,
        viewstate_generator: hidden_field(html, "__VIEWSTATEGENERATOR")?,
        event_validation: hidden_field(html, "__EVENTVALIDATION")?,
    })
}

/// Extract the press-release rows from a results page.
///
/// A row qualifies when it has at least two cells, a non-empty date cell,
/// a non-empty title and a link; anything else (header rows, spacers,
/// navigation chrome) is skipped. Root-relative links are absolutized
/// against the portal origin.
pub fn extract_releases(html: &str) -> Vec<PressRelease> {
    let row_re = Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").expect("regex is valid");
    let cell_re = Regex::new(r"(?is)<td[^>]*>(.*?)</td>").expect("regex is valid");
    let link_re =
        Regex::new(r#"(?is)<a[^>]*\bhref\s*=\s*["']([^"']*)["']"#).expect("regex is valid");

    let mut releases = Vec::new();

    for row in row_re.captures_iter(html) {
        let Some(row_html) = row.get(1).map(|m| m.as_str()) else {
            continue;
        };

        let cells: Vec<&str> = cell_re
            .captures_iter(row_html)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        if cells.len() < 2 {
            continue;
        }

        let date = clean_text(cells[0]);
        let title_cell = cells[1];
        let title = clean_text(title_cell);

        let Some(link) = link_re
            .captures(title_cell)
            .and_then(|c| c.get(1).map(|m| m.as_str().to_string()))
        else {
            continue;
        };

        if date.is_empty() || title.is_empty() {
            continue;
        }

        releases.push(PressRelease {
            date,
            title,
            link: absolutize(&link),
        });
    }

    releases
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Pull the `value` attribute of the named hidden input.
fn hidden_field(html: &str, name: &str) -> Result<String, ScrapeError> {
    let pattern = format!(r#"name="{}"[^>]*\bvalue="([^"]*)""#, regex::escape(name));
    let re = Regex::new(&pattern).expect("regex is valid");
    re.captures(html)
        .map(|cap| cap[1].to_string())
        .ok_or_else(|| ScrapeError::TokenMissing(name.to_string()))
}

/// Strip tags, decode the common entities and collapse whitespace.
fn clean_text(fragment: &str) -> String {
    let tag_re = Regex::new(r"(?s)<[^>]*>").expect("regex is valid");
    let stripped = tag_re.replace_all(fragment, " ");
    let decoded = decode_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the entities the portal actually emits.
///
/// `&amp;` is decoded last so escaped entity text (e.g. `&amp;nbsp;`)
/// survives as its literal form.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Absolutize root-relative links against the portal origin.
fn absolutize(link: &str) -> String {
    if link.starts_with('/') {
        format!("{}{}", PORTAL_ORIGIN, link)
    } else {
        link.to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const FORM_PAGE: &str = r#"
        <html><body>
        <form method="post" action="./BS_PressreleaseDisplay.aspx">
        <input type="hidden" name="__VIEWSTATE" id="__VIEWSTATE" value="dDwxMjM0NTY3ODk=" />
        <input type="hidden" name="__VIEWSTATEGENERATOR" id="__VIEWSTATEGENERATOR" value="CA0B0334" />
        <input type="hidden" name="__EVENTVALIDATION" id="__EVENTVALIDATION" value="/wEWAgL+1234" />
        </form>
        </body></html>
    "#;

    // ── extract_tokens ────────────────────────────────────────────────────────

    #[test]
    fn test_extract_tokens_from_form_page() {
        let tokens = extract_tokens(FORM_PAGE).unwrap();
        assert_eq!(tokens.viewstate, "dDwxMjM0NTY3ODk=");
        assert_eq!(tokens.viewstate_generator, "CA0B0334");
        assert_eq!(tokens.event_validation, "/wEWAgL+1234");
    }

    #[test]
    fn test_extract_tokens_missing_field_names_it() {
        let html = r#"<input type="hidden" name="__VIEWSTATE" value="x" />"#;
        let err = extract_tokens(html).unwrap_err();
        match err {
            ScrapeError::TokenMissing(name) => assert_eq!(name, "__VIEWSTATEGENERATOR"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_viewstate_does_not_match_generator_field() {
        // Order swapped so a too-loose prefix match would grab the wrong value.
        let html = r#"
            <input name="__VIEWSTATEGENERATOR" value="GEN" />
            <input name="__VIEWSTATE" value="STATE" />
            <input name="__EVENTVALIDATION" value="EV" />
        "#;
        let tokens = extract_tokens(html).unwrap();
        assert_eq!(tokens.viewstate, "STATE");
        assert_eq!(tokens.viewstate_generator, "GEN");
    }

    // ── extract_releases ──────────────────────────────────────────────────────

    #[test]
    fn test_extract_releases_basic_rows() {
        let html = r#"
            <table>
            <tr><td>Aug 05, 2025</td><td><a href="/Scripts/PR1.aspx">Auction Result: T-Bills</a></td></tr>
            <tr><td>Aug 20, 2025</td><td><a href="https://rbi.org.in/Scripts/PR2.aspx">G-Sec Auction</a></td></tr>
            </table>
        "#;
        let releases = extract_releases(html);

        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].date, "Aug 05, 2025");
        assert_eq!(releases[0].title, "Auction Result: T-Bills");
        assert_eq!(releases[0].link, "https://rbi.org.in/Scripts/PR1.aspx");
        assert_eq!(releases[1].link, "https://rbi.org.in/Scripts/PR2.aspx");
    }

    #[test]
    fn test_extract_releases_skips_rows_without_links() {
        let html = r#"
            <tr><td>Aug 2025</td><td>Archive heading, no anchor</td></tr>
            <tr><td>Aug 05, 2025</td><td><a href="/pr.aspx">Real row</a></td></tr>
        "#;
        let releases = extract_releases(html);
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].title, "Real row");
    }

    #[test]
    fn test_extract_releases_skips_short_rows() {
        let html = r#"
            <tr><td colspan="2">Spacer</td></tr>
            <tr><td>Aug 05, 2025</td><td><a href="/pr.aspx">Kept</a></td></tr>
        "#;
        assert_eq!(extract_releases(html).len(), 1);
    }

    #[test]
    fn test_extract_releases_skips_rows_with_empty_date() {
        let html = r#"<tr><td>&nbsp;</td><td><a href="/pr.aspx">Undated</a></td></tr>"#;
        assert!(extract_releases(html).is_empty());
    }

    #[test]
    fn test_extract_releases_decodes_entities_in_title() {
        let html =
            r#"<tr><td>Aug 05, 2025</td><td><a href="/pr.aspx">T-Bills &amp; Bonds</a></td></tr>"#;
        let releases = extract_releases(html);
        assert_eq!(releases[0].title, "T-Bills & Bonds");
    }

    #[test]
    fn test_extract_releases_strips_nested_tags_from_title() {
        let html = r#"
            <tr><td><span>Aug 05, 2025</span></td>
            <td><a href="/pr.aspx"><b>Bold</b> title</a></td></tr>
        "#;
        let releases = extract_releases(html);
        assert_eq!(releases[0].title, "Bold title");
    }

    #[test]
    fn test_extract_releases_keeps_absolute_links_untouched() {
        let html = r#"<tr><td>Aug 05, 2025</td><td><a href="https://other.example/x">T</a></td></tr>"#;
        let releases = extract_releases(html);
        assert_eq!(releases[0].link, "https://other.example/x");
    }

    #[test]
    fn test_extract_releases_empty_page() {
        assert!(extract_releases("<html><body></body></html>").is_empty());
    }

    // ── clean_text / decode_entities ──────────────────────────────────────────

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  a\n\t b  <br/>   c "), "a b c");
    }

    #[test]
    fn test_decode_entities_escaped_ampersand_stays_literal() {
        assert_eq!(decode_entities("&amp;nbsp;"), "&nbsp;");
    }
}
