//! Authored sidebar specification
//!
//! A [`SidebarSpec`] maps sidebar names to ordered trees of categories and
//! document references. It is built once from static input and never
//! mutated after resolution begins.

use indexmap::IndexMap;

/// A reference to one content page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Document identifier (`getting-started/registration`)
    pub id: String,

    /// Optional display label overriding the page title
    pub label: Option<String>,
}

impl DocumentRef {
    /// Create a reference without a label.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    /// Attach a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A named, ordered grouping of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display label (need not be unique)
    pub label: String,

    /// Whether the category starts collapsed
    pub collapsed: bool,

    /// Children in authored order
    pub children: Vec<Child>,
}

impl Category {
    /// Create an expanded, empty category.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            collapsed: false,
            children: Vec::new(),
        }
    }

    /// Set the collapsed flag.
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children in order.
    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

/// Either a nested category or a document reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// Nested category
    Category(Category),

    /// Document reference
    Document(DocumentRef),
}

impl Child {
    /// Shorthand for an unlabeled document reference.
    pub fn doc(id: impl Into<String>) -> Self {
        Child::Document(DocumentRef::new(id))
    }
}

impl From<Category> for Child {
    fn from(category: Category) -> Self {
        Child::Category(category)
    }
}

impl From<DocumentRef> for Child {
    fn from(doc: DocumentRef) -> Self {
        Child::Document(doc)
    }
}

impl From<&str> for Child {
    fn from(id: &str) -> Self {
        Child::doc(id)
    }
}

impl From<String> for Child {
    fn from(id: String) -> Self {
        Child::doc(id)
    }
}

/// Sidebar name to root-level children, in insertion order.
///
/// Inserting a name twice keeps the first tree as the sidebar and sets the
/// repeated tree aside, so resolution can report the name and still check
/// the references inside it.
///
/// # Example
///
/// ```
/// use docnav::{Category, SidebarSpec};
///
/// let spec = SidebarSpec::new().with_sidebar(
///     "docsSidebar",
///     vec![Category::new("Getting Started").children(["intro", "setup"]).into()],
/// );
///
/// assert_eq!(spec.len(), 1);
/// assert!(spec.duplicate_names().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarSpec {
    sidebars: IndexMap<String, Vec<Child>>,
    duplicates: Vec<(String, Vec<Child>)>,
}

impl SidebarSpec {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sidebar. Returns `false` if the name was already taken.
    pub fn insert(&mut self, name: impl Into<String>, items: Vec<Child>) -> bool {
        let name = name.into();
        if self.sidebars.contains_key(&name) {
            self.duplicates.push((name, items));
            return false;
        }
        self.sidebars.insert(name, items);
        true
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_sidebar(mut self, name: impl Into<String>, items: Vec<Child>) -> Self {
        self.insert(name, items);
        self
    }

    /// Root-level children of a sidebar.
    pub fn get(&self, name: &str) -> Option<&[Child]> {
        self.sidebars.get(name).map(Vec::as_slice)
    }

    /// Iterate sidebars in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Child])> {
        self.sidebars
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Sidebar names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.sidebars.keys().map(String::as_str).collect()
    }

    /// Names that were inserted more than once, once per repeat.
    pub fn duplicate_names(&self) -> Vec<&str> {
        self.duplicates.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Repeated sidebars with the trees they were authored with.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &[Child])> {
        self.duplicates
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Number of distinct sidebars.
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Check if the specification has no sidebars.
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}
