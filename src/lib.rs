//! Maritime Anomaly Dashboard
//!
//! This crate serves a single-page dashboard for coastal security: sample
//! AIS-derived anomalies drawn on a satellite map and listed in a table,
//! alongside the latest maritime-security headlines from a news feed.

pub mod anomaly;
pub mod config;
pub mod map;
pub mod news;
pub mod routes;
