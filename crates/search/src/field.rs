//! Searchable post fields and their priorities.

use foundly_core::Post;

/// The post fields that participate in matching, highest priority first.
///
/// An enum rather than field-name strings, so dispatch and weighting cannot
/// drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    /// Listing title
    Title,
    /// User-supplied tags
    Tags,
    /// Free-text description
    Description,
    /// Where the item was lost or found
    Location,
}

impl SearchField {
    /// All searchable fields in priority order.
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Tags,
        SearchField::Description,
        SearchField::Location,
    ];

    /// Score multiplier for matches in this field.
    ///
    /// Highest-priority field gets the field count, descending by one per
    /// position: title 4, tags 3, description 2, location 1.
    #[inline]
    pub fn weight(self) -> u32 {
        match self {
            SearchField::Title => 4,
            SearchField::Tags => 3,
            SearchField::Description => 2,
            SearchField::Location => 1,
        }
    }

    /// Extracts this field's text from a post, lower-cased.
    ///
    /// Tags are joined with single spaces; absent fields become the empty
    /// string, never a panic.
    pub fn extract(self, post: &Post) -> String {
        let text = match self {
            SearchField::Title => post.title.clone().unwrap_or_default(),
            SearchField::Tags => post.tags.join(" "),
            SearchField::Description => post.description.clone().unwrap_or_default(),
            SearchField::Location => post.location.clone().unwrap_or_default(),
        };
        text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_descend_from_field_count() {
        let total = SearchField::ALL.len() as u32;
        for (index, field) in SearchField::ALL.iter().enumerate() {
            assert_eq!(field.weight(), total - index as u32);
        }
    }

    #[test]
    fn test_extract_lowercases() {
        let post = Post::new("p1", "Blue MacBook");
        assert_eq!(SearchField::Title.extract(&post), "blue macbook");
    }

    #[test]
    fn test_extract_joins_tags() {
        let post = Post::new("p1", "x").with_tags(["Electronics", "Laptop"]);
        assert_eq!(SearchField::Tags.extract(&post), "electronics laptop");
    }

    #[test]
    fn test_absent_fields_are_empty() {
        let post = Post::new("p1", "x");
        assert_eq!(SearchField::Description.extract(&post), "");
        assert_eq!(SearchField::Location.extract(&post), "");
    }
}
