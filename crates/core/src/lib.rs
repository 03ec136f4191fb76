//! Core library for pokestats
//!
//! This crate implements the **Functional Core** of the pokestats application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`pokestats_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pokestats`**: HTTP fetching, concurrent loading and the CLI (the Imperative Shell)
//!
//! Every function here is deterministic and can be tested with fixture data,
//! no network or mocking required. The shell fetches raw records, hands them to
//! [`pokemon::normalize_pokemon`], and feeds the resulting collection to
//! [`report::build_report`].
//!
//! # Module Organization
//!
//! - [`pokemon`]: API shapes and the record normalizer
//! - [`aggregate`]: Aggregate views (filter, statistics, search, checks, ranking)
//! - [`collation`]: Locale-aware name ordering
//! - [`config`]: Report configuration and invocation parameter resolution
//! - [`report`]: The fixed battery of aggregations and its report lines
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use pokestats_core::config::ReportConfig;
//! use pokestats_core::pokemon::normalize_pokemon;
//! use pokestats_core::report::build_report;
//!
//! let pokemon = vec![normalize_pokemon(&raw_record)?];
//! let report = build_report(&pokemon, &ReportConfig::default());
//!
//! for line in report.lines() {
//!     println!("{line}");
//! }
//! ```

pub mod aggregate;
pub mod collation;
pub mod config;
pub mod pokemon;
pub mod report;
