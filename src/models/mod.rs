// src/models/mod.rs

//! Domain models for the article server.

mod article;

// Re-export all public types
pub use article::{Article, count_words};
