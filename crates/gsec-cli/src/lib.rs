//! Binary entry points for the G-Sec auction tools.
//!
//! Hosts the shared logging bootstrap; the two binaries (`gsec-analyze`,
//! `gsec-scrape`) live under `src/bin/`.

pub mod bootstrap;
