//! Data types for movie records, stored documents, and search results.

use serde::{Deserialize, Serialize};

/// Placeholder stored in place of a missing title.
pub const NO_TITLE: &str = "No Title";

/// Placeholder stored in place of a missing plot.
pub const NO_PLOT: &str = "No Plot";

/// A single row of the movie dataset.
///
/// Deserializes from tabular sources with `Title` and `Plot` columns.
/// Either field may be absent; the indexer substitutes the [`NO_TITLE`]
/// and [`NO_PLOT`] placeholders before embedding, so stored text is
/// never empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    /// The movie title, if present in the source row.
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// The plot summary, if present in the source row.
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
}

impl MovieRecord {
    /// Create a record from a title and plot.
    pub fn new(title: impl Into<String>, plot: impl Into<String>) -> Self {
        Self { title: Some(title.into()), plot: Some(plot.into()) }
    }

    /// The title text, or the [`NO_TITLE`] placeholder if missing or blank.
    pub fn title_or_placeholder(&self) -> String {
        match &self.title {
            Some(t) if !t.trim().is_empty() => t.clone(),
            _ => NO_TITLE.to_string(),
        }
    }

    /// The plot text, or the [`NO_PLOT`] placeholder if missing or blank.
    pub fn plot_or_placeholder(&self) -> String {
        match &self.plot {
            Some(p) if !p.trim().is_empty() => p.clone(),
            _ => NO_PLOT.to_string(),
        }
    }
}

/// Which record field a stored document came from.
///
/// Titles and plots share one undifferentiated candidate pool in the
/// store; the source field is carried on the document itself and no
/// cross-reference between a record's title and plot is persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceField {
    /// The document text is a movie title.
    Title,
    /// The document text is a plot summary.
    Plot,
}

/// A stored entry: text plus its vector embedding.
///
/// Immutable once upserted; replaced only by a later upsert with the
/// same id. The id is unique within the store and never empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document.
    pub id: String,
    /// The text content (a title or a plot, never empty).
    pub text: String,
    /// The vector embedding for this document's text.
    pub embedding: Vec<f32>,
    /// Whether this document holds a title or a plot.
    pub source_field: SourceField,
}

/// A retrieved document's text paired with a relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The retrieved document text.
    pub text: String,
    /// The similarity score (higher is more relevant).
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_substitute_missing_fields() {
        let record = MovieRecord { title: None, plot: None };
        assert_eq!(record.title_or_placeholder(), NO_TITLE);
        assert_eq!(record.plot_or_placeholder(), NO_PLOT);
    }

    #[test]
    fn placeholders_substitute_blank_fields() {
        let record = MovieRecord { title: Some("   ".into()), plot: Some(String::new()) };
        assert_eq!(record.title_or_placeholder(), NO_TITLE);
        assert_eq!(record.plot_or_placeholder(), NO_PLOT);
    }

    #[test]
    fn present_fields_pass_through() {
        let record = MovieRecord::new("The Great Escape", "POWs tunnel out of a camp.");
        assert_eq!(record.title_or_placeholder(), "The Great Escape");
        assert_eq!(record.plot_or_placeholder(), "POWs tunnel out of a camp.");
    }

    #[test]
    fn record_deserializes_from_tabular_column_names() {
        let record: MovieRecord =
            serde_json::from_str(r#"{"Title": "Metropolis", "Plot": "A futuristic city."}"#)
                .unwrap();
        assert_eq!(record.title.as_deref(), Some("Metropolis"));
        assert_eq!(record.plot.as_deref(), Some("A futuristic city."));
    }
}
