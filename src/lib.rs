// src/lib.rs

//! articled: article ingest server and archive reader.
//!
//! Articles submitted over HTTP are de-duplicated by source URL and
//! persisted one-per-file in a self-describing text format; the same
//! format is parsed back for offline analysis and CSV export.

pub mod analysis;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod server;
pub mod storage;
