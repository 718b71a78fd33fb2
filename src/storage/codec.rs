//! Text codec for stored article files.
//!
//! Each article is stored as one self-describing text file: a banner
//! block naming the record type, a `Key: value` header block, the body
//! between explicit CONTENT / END OF ARTICLE sentinels, in this layout:
//!
//! ```text
//! ================================================================================
//! ARTICLE
//! ================================================================================
//!
//! URL: <source url>
//! Title: <title>
//! Author: <author>
//! Date: <publish date>
//! Received: <RFC 3339 timestamp>
//! Word Count: <integer>
//!
//! ================================================================================
//! CONTENT
//! ================================================================================
//!
//! <body text, verbatim>
//!
//! ================================================================================
//! END OF ARTICLE
//! ================================================================================
//! ```
//!
//! Decoding is lenient about scalar fields (a missing or unparsable
//! header value defaults to empty/zero) but strict about structure: a
//! file without both content sentinels cannot be attributed a body and
//! fails with [`AppError::Format`].

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::Article;

/// Banner line separating record sections.
const BANNER: &str =
    "================================================================================";

/// Record type label in the opening banner block.
const TYPE_LABEL: &str = "ARTICLE";

const CONTENT_LABEL: &str = "CONTENT";
const END_LABEL: &str = "END OF ARTICLE";

/// Encode an article into the stored text format.
pub fn encode(article: &Article) -> String {
    let mut out = String::with_capacity(article.content.len() + 512);

    let _ = writeln!(out, "{BANNER}\n{TYPE_LABEL}\n{BANNER}\n");
    let _ = writeln!(out, "URL: {}", header_safe(&article.source_url));
    let _ = writeln!(out, "Title: {}", header_safe(&article.title));
    let _ = writeln!(out, "Author: {}", header_safe(&article.author));
    let _ = writeln!(out, "Date: {}", header_safe(&article.publish_date));
    let _ = writeln!(out, "Received: {}", article.received.to_rfc3339());
    let _ = writeln!(out, "Word Count: {}", article.word_count);
    let _ = writeln!(out, "\n{BANNER}\n{CONTENT_LABEL}\n{BANNER}\n");
    let _ = writeln!(out, "{}\n", article.content);
    let _ = writeln!(out, "{BANNER}\n{END_LABEL}\n{BANNER}");

    out
}

/// Decode an article from the stored text format.
///
/// Missing header fields default (empty string, zero, Unix epoch);
/// missing content sentinels are a hard [`AppError::Format`] error.
pub fn decode(text: &str) -> Result<Article> {
    let content_marker = format!("{BANNER}\n{CONTENT_LABEL}\n{BANNER}\n");
    let start = text
        .find(&content_marker)
        .ok_or_else(|| AppError::format("missing CONTENT section delimiter"))?;

    let body_start = start + content_marker.len();

    // The real end sentinel is the last one in the file, so body text
    // that happens to contain a banner cannot truncate the record.
    let end_marker = format!("{BANNER}\n{END_LABEL}");
    let end = text[body_start..]
        .rfind(&end_marker)
        .map(|idx| body_start + idx)
        .ok_or_else(|| AppError::format("missing END OF ARTICLE sentinel"))?;

    let header = &text[..start];
    let content = text[body_start..end].trim().to_string();

    let received = header_field(header, "Received:")
        .and_then(|v| DateTime::parse_from_rfc3339(&v).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH);

    let word_count = header_field(header, "Word Count:")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    Ok(Article {
        source_url: header_field(header, "URL:").unwrap_or_default(),
        title: header_field(header, "Title:").unwrap_or_default(),
        author: header_field(header, "Author:").unwrap_or_default(),
        publish_date: header_field(header, "Date:").unwrap_or_default(),
        received,
        word_count,
        content,
    })
}

/// Extract the source URL from a stored file without a full decode.
///
/// Used for index rebuilding, where only the `URL:` header line matters.
pub fn header_url(text: &str) -> Option<String> {
    header_field(text, "URL:")
}

/// Find the first header line with the given key prefix.
fn header_field(header: &str, key: &str) -> Option<String> {
    header
        .lines()
        .find_map(|line| line.strip_prefix(key))
        .map(|value| value.trim().to_string())
}

/// Header values must stay on one line so they cannot fake another
/// header entry or a banner.
fn header_safe(value: &str) -> String {
    if value.contains(['\r', '\n']) {
        value.replace(['\r', '\n'], " ")
    } else {
        value.to_string()
    }
}
