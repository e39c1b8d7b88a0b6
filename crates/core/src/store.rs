//! The read-only post-store collaborator seam.
//!
//! The real implementation lives in the app's cloud sync layer. Tools in this
//! workspace only ever need a snapshot of all posts, so the trait is a single
//! synchronous accessor.

use crate::{Post, Result};

/// Read-only access to the full post collection.
///
/// Implementations must return a snapshot: the caller treats the returned
/// vector as immutable for the duration of one operation and never writes
/// back through this trait.
pub trait PostStore {
    /// Returns every post currently in the store.
    fn all_posts(&self) -> Result<Vec<Post>>;
}

/// In-memory store backed by a plain vector.
///
/// Used by tests and benchmarks; also handy for offline tooling that loads a
/// JSON dump of the production collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostStore {
    posts: Vec<Post>,
}

impl InMemoryPostStore {
    /// Creates a store over the given posts.
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Loads a store from a JSON array of post documents.
    pub fn from_json(json: &str) -> Result<Self> {
        let posts: Vec<Post> = serde_json::from_str(json)?;
        Ok(Self { posts })
    }

    /// Number of posts in the store.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns true if the store holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostStore for InMemoryPostStore {
    fn all_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }
}
