//! Static term-equivalence graph for query expansion.
//!
//! Lost & found posts and the queries against them rarely use the same word
//! for the same thing ("phone" vs "cellphone", "bag" vs "backpack"). The
//! graph links such terms symmetrically so the preprocessor can widen a query
//! without guessing.

use std::collections::{HashMap, HashSet};

/// Curated equivalence clusters for lost & found vocabulary.
///
/// Every pair within a cluster becomes a symmetric edge. Clusters are kept
/// disjoint: expansion is one hop, never a transitive walk.
const CLUSTERS: &[&[&str]] = &[
    &["laptop", "macbook", "computer", "pc", "notebook"],
    &["phone", "cellphone", "smartphone", "mobile", "iphone"],
    &["bag", "backpack", "rucksack", "knapsack"],
    &["wallet", "purse", "billfold"],
    &["keys", "key", "keychain"],
    &["glasses", "spectacles", "eyeglasses", "sunglasses"],
    &["headphones", "earbuds", "earphones", "airpods"],
    &["jacket", "coat", "hoodie"],
    &["book", "textbook", "novel"],
    &["bottle", "flask", "thermos"],
    &["umbrella", "brolly"],
    &["watch", "smartwatch"],
    &["card", "id", "identification"],
    &["charger", "cable", "adapter"],
];

/// Symmetric synonym graph with O(1) neighbor lookup.
///
/// Built once, immutable afterward; shared reads from multiple threads need
/// no synchronization. The search engine owns one instance — there is no
/// hidden global.
#[derive(Debug, Clone)]
pub struct SynonymGraph {
    neighbors: HashMap<String, HashSet<String>>,
}

impl SynonymGraph {
    /// Builds a graph from equivalence clusters.
    ///
    /// Terms are lower-cased on insertion; every pair within a cluster is
    /// linked in both directions, so symmetry holds by construction.
    pub fn from_clusters(clusters: &[&[&str]]) -> Self {
        let mut neighbors: HashMap<String, HashSet<String>> = HashMap::new();

        for cluster in clusters {
            for a in *cluster {
                let a = a.to_lowercase();
                for b in *cluster {
                    let b = b.to_lowercase();
                    if a != b {
                        neighbors.entry(a.clone()).or_default().insert(b);
                    }
                }
            }
        }

        Self { neighbors }
    }

    /// Expands a term to itself plus its direct equivalents.
    ///
    /// One hop only; unknown terms expand to themselves. Case-insensitive.
    ///
    /// # Example
    /// ```
    /// use foundly_search::SynonymGraph;
    ///
    /// let graph = SynonymGraph::default();
    /// assert!(graph.expand("Phone").contains("cellphone"));
    /// assert_eq!(graph.expand("xyzzy").len(), 1);
    /// ```
    pub fn expand(&self, term: &str) -> HashSet<String> {
        let term = term.to_lowercase();
        let mut expanded = HashSet::new();

        if let Some(equivalents) = self.neighbors.get(&term) {
            expanded.extend(equivalents.iter().cloned());
        }
        expanded.insert(term);

        expanded
    }

    /// Direct equivalents of a term, excluding the term itself.
    pub fn neighbors(&self, term: &str) -> Option<&HashSet<String>> {
        self.neighbors.get(&term.to_lowercase())
    }

    /// Number of terms with at least one equivalent.
    pub fn term_count(&self) -> usize {
        self.neighbors.len()
    }
}

impl Default for SynonymGraph {
    /// Graph seeded with the curated lost & found clusters.
    fn default() -> Self {
        Self::from_clusters(CLUSTERS)
    }
}
