//! Known-document set supplied by content discovery

use std::path::{Component, Path};

use indexmap::IndexSet;

/// File extensions that count as documents.
pub const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Identifiers of every document that exists in the content corpus.
///
/// The resolver only reads this set; discovering documents is the job of
/// the surrounding pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownDocs {
    ids: IndexSet<String>,
}

impl KnownDocs {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from paths relative to the docs root.
    ///
    /// `getting-started/registration.md` becomes
    /// `getting-started/registration`. Paths without a document extension
    /// are skipped.
    ///
    /// ```
    /// use docnav::KnownDocs;
    ///
    /// let docs = KnownDocs::from_paths(["intro.md", "sdks/go.mdx", "img/logo.svg"]);
    /// assert!(docs.contains("intro"));
    /// assert!(docs.contains("sdks/go"));
    /// assert_eq!(docs.len(), 2);
    /// ```
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .filter_map(|p| doc_id_from_path(p.as_ref()))
            .collect()
    }

    /// Add an identifier. Returns `false` if it was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Check if a document exists.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Iterate identifiers in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of known documents.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if no documents are known.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KnownDocs {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Convert a relative document path into its identifier.
pub fn doc_id_from_path(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !DOC_EXTENSIONS.contains(&ext) {
        return None;
    }

    let stem = path.with_extension("");
    let mut parts = Vec::new();
    for component in stem.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
