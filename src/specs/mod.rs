// src/specs/mod.rs
//! Page-specific scraping specification for the LMS.
//!
//! This module encodes *where the ground truth lives in the HTML* of the
//! people page and *how to extract it robustly*: case-insensitive tag
//! blocks, tolerant per-row extraction, no full-document regexes. It
//! depends on exactly one fixed, undocumented page layout (see
//! `config::consts`); there is no abstraction for other layouts.
//!
//! Per-row failures are silent skips; a bad row never aborts the batch.
//! Caching, persistence and UI live in higher layers. Specs should be
//! testable offline against captured fixtures.

pub mod people;
