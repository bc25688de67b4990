// src/specs/mod.rs
//! # Document "specs" module
//!
//! Hosts the **format-specific parsing specifications** for the upstream
//! error-code documents. Each spec focuses on a single document format and
//! encodes *where the ground truth lives on the page* and *how to extract it
//! strictly*.
//!
//! ## What lives here
//! - **Pure parsing** of one fetched document into a one-version [`Catalog`].
//! - **URL construction** for a given release (the two formats live on
//!   different hosts and encode the version differently).
//! - **Strict shape validation** using `core::html` helpers and token
//!   scanning; anything off-shape is an error, never a skip, because a
//!   surprise means the upstream format drifted and a human needs to look.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and **merging** (`runner::fetch_errors`).
//! - **Output rendering** (`gen`) and file rewriting (`file`).
//!
//! ## Conventions & invariants
//! - Case-insensitive tag detection; local scanning within known blocks.
//! - Class codes are 2 chars, error codes 5 chars; both are checked here.
//! - Entries without a public symbolic name are dropped silently — that is
//!   the one tolerated irregularity, everything else aborts.
//!
//! Specs should be testable **offline** against captured fixtures.

pub mod sgml;
pub mod txt;

use std::error::Error;

use crate::catalog::Catalog;
use crate::params::Params;
use crate::version::{TXT_FORMAT_SINCE, Version};

/// One upstream document format: knows where the page for a release lives
/// and how to read it into a one-version catalog.
pub trait PageSpec {
    /// Short tag for logs and tests.
    fn name(&self) -> &'static str;

    /// (host, request path) for this release's document.
    fn url(&self, params: &Params, version: Version) -> (String, String);

    /// Parse a fetched document. The formats are fully known; any
    /// unrecognized shape is an error, not a skip.
    fn parse(&self, doc: &str) -> Result<Catalog, Box<dyn Error>>;
}

/// Select the parsing strategy for a release: the errcodes.txt catalog
/// exists from 9.1 on, older releases only have the HTML appendix.
pub fn spec_for(version: Version) -> &'static dyn PageSpec {
    if version < TXT_FORMAT_SINCE {
        &sgml::SgmlSpec
    } else {
        &txt::TxtSpec
    }
}
