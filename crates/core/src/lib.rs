//! Core domain model for Foundly.
//!
//! This crate provides:
//! - The `Post` listing model shared by every tool
//! - The read-only `PostStore` collaborator trait
//! - An in-memory store for tests and benchmarks
//!
//! # Example
//!
//! ```
//! use foundly_core::{InMemoryPostStore, Post, PostStore};
//!
//! let store = InMemoryPostStore::new(vec![
//!     Post::new("p1", "Lost black umbrella"),
//!     Post::new("p2", "Found silver keychain"),
//! ]);
//!
//! let posts = store.all_posts().unwrap();
//! assert_eq!(posts.len(), 2);
//! ```

mod error;
mod post;
mod store;

pub use error::{CoreError, Result};
pub use post::Post;
pub use store::{InMemoryPostStore, PostStore};
