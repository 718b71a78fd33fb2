//! CSV export of scanned articles.

use std::path::Path;

use crate::analysis::ArticleCollection;
use crate::error::Result;

/// Write one CSV row per article.
///
/// Columns: `Title, Author, Date, Category, WordCount, SentenceCount,
/// AvgWordsPerSentence` (average to two decimals). Quoting, including
/// doubling of embedded quotes, is handled by the writer.
pub fn export_csv(collection: &ArticleCollection, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "Title",
        "Author",
        "Date",
        "Category",
        "WordCount",
        "SentenceCount",
        "AvgWordsPerSentence",
    ])?;

    for article in collection.articles() {
        writer.write_record([
            article.title.as_str(),
            article.author.as_str(),
            article.publish_date.as_str(),
            &article.category(),
            &article.word_count.to_string(),
            &article.sentence_count().to_string(),
            &format!("{:.2}", article.avg_words_per_sentence()),
        ])?;
    }

    writer.flush()?;
    log::info!(
        "Exported {} articles to {}",
        collection.total(),
        path.display()
    );

    Ok(())
}
