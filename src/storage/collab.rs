//! Collaboration graph: author arena + undirected adjacency
//!
//! Nodes live in a single indexable arena owned by the graph; edges are
//! arena indices, so neighbor references can never dangle and (distance, id)
//! pairs order cleanly in the relaxation ranker's working set.
//!
//! # Layout
//!
//! ```text
//! publications: [["Erdos", "Renyi"], ["Renyi", "Szekeres"]]
//!
//! arena:
//!   names:     ["Erdos", "Renyi", "Szekeres"]   // index = AuthorId
//!   adjacency: [{1}, {0, 2}, {1}]               // symmetric, simple
//! ```

use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Author identifier (zero-indexed arena slot, assigned in first-seen order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorId(pub u32);

/// Errors raised by graph construction and ranking
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A publication names an author absent from the declared author list
    #[error("publication references unknown author: {name}")]
    UnknownAuthor {
        /// The unresolved author name
        name: String,
    },

    /// The graph contains no node with the root author's name
    #[error("graph has no root author named {root:?}")]
    MissingRoot {
        /// The root name that was looked up
        root: String,
    },
}

/// Undirected co-authorship graph
///
/// Each publication contributes a clique of edges between its authors. The
/// adjacency relation is a set per node: no self-loops, no duplicate edges,
/// and symmetric by construction. A load replaces all previous content.
///
/// # Example
///
/// ```
/// use erdos_rank::CollabGraph;
///
/// let mut graph = CollabGraph::new();
/// graph.load_from_publications(&[
///     vec!["Erdos", "Renyi"],
///     vec!["Renyi", "Szekeres"],
/// ]);
///
/// assert_eq!(graph.num_authors(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollabGraph {
    /// Arena of author names; index = `AuthorId`, insertion order preserved
    names: Vec<String>,

    /// Name → arena index; keys unique
    ids: HashMap<String, u32>,

    /// Neighbor ids per node
    /// Length: `names.len()`
    adjacency: Vec<BTreeSet<u32>>,

    /// Undirected edge count
    edge_count: usize,
}

impl CollabGraph {
    /// Create new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a declared author list plus publications
    ///
    /// Creates one node per distinct declared author, in list order (ids from
    /// 0), then inserts a clique of edges for each publication. Every name a
    /// publication mentions must appear in `authors`. Replaces any previously
    /// held content.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownAuthor`] if a publication references a
    /// name absent from `authors`. The failed load leaves the graph with the
    /// declared nodes but none of the publications' edges.
    ///
    /// # Example
    ///
    /// ```
    /// use erdos_rank::CollabGraph;
    ///
    /// let mut graph = CollabGraph::new();
    /// graph.load_from_authors(
    ///     &["Erdos", "Renyi", "Szekeres"],
    ///     &[vec!["Erdos", "Renyi"], vec!["Renyi", "Szekeres"]],
    /// ).unwrap();
    ///
    /// assert_eq!(graph.num_authors(), 3);
    /// ```
    pub fn load_from_authors<S: AsRef<str>>(
        &mut self,
        authors: &[S],
        publications: &[Vec<S>],
    ) -> Result<(), GraphError> {
        self.clear();

        for name in authors {
            self.intern(name.as_ref());
        }

        // Resolve every publication before inserting any edge, so a failed
        // load never leaves a partial clique behind.
        let mut resolved: Vec<Vec<u32>> = Vec::with_capacity(publications.len());
        for publication in publications {
            let mut members = Vec::with_capacity(publication.len());
            for name in publication {
                let id = self.ids.get(name.as_ref()).copied().ok_or_else(|| {
                    GraphError::UnknownAuthor {
                        name: name.as_ref().to_string(),
                    }
                })?;
                members.push(id);
            }
            resolved.push(members);
        }

        for members in &resolved {
            self.close_clique(members);
        }

        Ok(())
    }

    /// Load from publications alone, discovering authors lazily
    ///
    /// The first occurrence of each distinct name creates a node (id assigned
    /// at first sight, in scan order); later occurrences reuse it. Edge
    /// insertion is the same clique closure per publication. Replaces any
    /// previously held content.
    pub fn load_from_publications<S: AsRef<str>>(&mut self, publications: &[Vec<S>]) {
        self.clear();

        let mut members = Vec::new();
        for publication in publications {
            members.clear();
            for name in publication {
                members.push(self.intern(name.as_ref()));
            }
            self.close_clique(&members);
        }
    }

    /// Insert edges between every pair of distinct members, both directions
    ///
    /// Repeated ids (duplicate names within one publication) produce no
    /// self-loop; the set adjacency absorbs duplicate pairs. Fewer than two
    /// distinct members contribute nothing.
    fn close_clique(&mut self, members: &[u32]) {
        for (i, &a) in members.iter().enumerate() {
            for &b in &members[i + 1..] {
                if a == b {
                    continue;
                }
                if self.adjacency[a as usize].insert(b) {
                    self.adjacency[b as usize].insert(a);
                    self.edge_count += 1;
                }
            }
        }
    }

    /// Look up or create the arena slot for `name`
    fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        #[allow(clippy::cast_possible_truncation)] // Graphs >4B authors not supported
        let id = self.names.len() as u32;
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        self.adjacency.push(BTreeSet::new());
        id
    }

    /// Discard all held content
    pub fn clear(&mut self) {
        self.names.clear();
        self.ids.clear();
        self.adjacency.clear();
        self.edge_count = 0;
    }

    /// Get number of authors
    #[must_use]
    pub fn num_authors(&self) -> usize {
        self.names.len()
    }

    /// Get number of undirected edges
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.edge_count
    }

    /// Get the id of a named author, if present
    #[must_use]
    pub fn author_id(&self, name: &str) -> Option<AuthorId> {
        self.ids.get(name).copied().map(AuthorId)
    }

    /// Get an author's name
    #[must_use]
    pub fn author_name(&self, author: AuthorId) -> Option<&str> {
        self.names.get(author.0 as usize).map(String::as_str)
    }

    /// Get an author's co-authors
    ///
    /// Returns `None` if the id is out of bounds.
    pub fn neighbors(&self, author: AuthorId) -> Option<impl Iterator<Item = AuthorId> + '_> {
        self.adjacency
            .get(author.0 as usize)
            .map(|set| set.iter().map(|&id| AuthorId(id)))
    }

    /// Iterate over (id, name) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (AuthorId, &str)> {
        self.names.iter().enumerate().map(|(i, name)| {
            #[allow(clippy::cast_possible_truncation)] // Arena indexed by u32
            (AuthorId(i as u32), name.as_str())
        })
    }
}
