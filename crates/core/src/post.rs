//! The lost & found listing model.
//!
//! Posts come from the cloud store as partial documents, so every text field
//! is optional and deserialization tolerates missing keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single lost or found listing.
///
/// Read-only from the perspective of the search pipeline: matching never
/// mutates a post, and absent text fields are treated as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Document id assigned by the cloud store
    pub id: String,
    /// Listing title
    #[serde(default)]
    pub title: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// User-supplied tags, in the order they were entered
    #[serde(default)]
    pub tags: Vec<String>,
    /// Where the item was lost or found
    #[serde(default)]
    pub location: Option<String>,
    /// Display name of the posting user
    #[serde(default)]
    pub author: Option<String>,
    /// Whether the item has been returned to its owner
    #[serde(default)]
    pub resolved: bool,
    /// Engagement count (views + replies)
    #[serde(default)]
    pub engagement: u32,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Creates a post with only an id and title set.
    ///
    /// Handy for tests and tools that do not care about the full document.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            description: None,
            tags: Vec::new(),
            location: None,
            author: None,
            resolved: false,
            engagement: 0,
            created_at: Utc::now(),
        }
    }

    /// Sets the description, builder-style.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tags, builder-style.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the location, builder-style.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
