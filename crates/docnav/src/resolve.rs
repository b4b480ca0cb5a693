//! Sidebar resolution
//!
//! Walks every sidebar of a [`SidebarSpec`], checks each document reference
//! against the [`KnownDocs`] set and produces a [`NavTree`] that mirrors the
//! authored structure node for node.
//!
//! ```text
//! SidebarSpec + KnownDocs → [Resolver] → NavTree | ValidationError
//! ```
//!
//! Problems are collected rather than short-circuited so one pass reports
//! everything an author has to fix.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::breadcrumb::Breadcrumb;
use crate::context::{DuplicateScope, ResolveContext};
use crate::error::{Problem, ValidationError};
use crate::known::KnownDocs;
use crate::nav::{NavCategory, NavDocument, NavNode, NavSidebar, NavTree};
use crate::spec::{Category, Child, DocumentRef, SidebarSpec};

/// Resolve a specification with the default context.
///
/// # Example
///
/// ```
/// use docnav::{resolve, Category, KnownDocs, SidebarSpec};
///
/// let spec = SidebarSpec::new().with_sidebar(
///     "docsSidebar",
///     vec![Category::new("Getting Started").children(["intro", "setup"]).into()],
/// );
/// let known: KnownDocs = ["intro", "setup"].into_iter().collect();
///
/// let tree = resolve(&spec, &known).unwrap();
/// assert_eq!(tree.sidebar("docsSidebar").unwrap().document_ids(), ["intro", "setup"]);
/// ```
pub fn resolve(spec: &SidebarSpec, known: &KnownDocs) -> Result<NavTree, ValidationError> {
    Resolver::default().resolve(spec, known)
}

/// Where a document was first seen in the current duplicate scope.
#[derive(Debug, Clone)]
struct FirstSeen {
    location: String,
    position: usize,
}

/// Mutable state for one sidebar walk.
struct Walk<'a> {
    ctx: &'a ResolveContext,
    known: &'a KnownDocs,
    seen: HashMap<String, FirstSeen>,
    problems: &'a mut Vec<Problem>,
}

impl<'a> Walk<'a> {
    fn report(&mut self, problem: Problem) {
        warn!(kind = problem.kind(), "{}", problem);
        self.problems.push(problem);
    }

    fn children(&mut self, children: &[Child], crumbs: &mut Breadcrumb) -> Vec<NavNode> {
        let outer = match self.ctx.duplicate_scope {
            DuplicateScope::Category => Some(std::mem::take(&mut self.seen)),
            DuplicateScope::Sidebar => None,
        };

        let mut nodes = Vec::with_capacity(children.len());
        for (position, child) in children.iter().enumerate() {
            match child {
                Child::Document(doc) => {
                    nodes.push(NavNode::Doc(self.document(doc, position, crumbs)));
                }
                Child::Category(cat) => {
                    if let Some(cat) = self.category(cat, position, crumbs) {
                        nodes.push(NavNode::Category(cat));
                    }
                }
            }
        }

        if let Some(outer) = outer {
            self.seen = outer;
        }
        nodes
    }

    fn document(
        &mut self,
        doc: &DocumentRef,
        position: usize,
        crumbs: &Breadcrumb,
    ) -> NavDocument {
        let location = crumbs.render();
        if self.ctx.trace {
            trace!(id = %doc.id, position, location = %location, "document");
        }

        if !self.known.contains(&doc.id) {
            self.report(Problem::UnresolvedDocumentRef {
                id: doc.id.clone(),
                location: location.clone(),
            });
        }

        match self.seen.get(&doc.id) {
            Some(first) => {
                let problem = Problem::DuplicateDocumentRef {
                    id: doc.id.clone(),
                    first: first.location.clone(),
                    first_position: first.position,
                    duplicate: location,
                    duplicate_position: position,
                };
                self.report(problem);
            }
            None => {
                self.seen.insert(doc.id.clone(), FirstSeen { location, position });
            }
        }

        NavDocument {
            id: doc.id.clone(),
            label: doc.label.clone(),
            position,
        }
    }

    fn category(
        &mut self,
        cat: &Category,
        position: usize,
        crumbs: &mut Breadcrumb,
    ) -> Option<NavCategory> {
        let mut guard = match crumbs.enter(cat.label.as_str()) {
            Ok(guard) => guard,
            Err(problem) => {
                self.report(problem);
                return None;
            }
        };
        if self.ctx.trace {
            trace!(label = %cat.label, position, location = %guard.render(), "category");
        }

        let children = self.children(&cat.children, &mut guard);
        Some(NavCategory {
            label: cat.label.clone(),
            collapsed: cat.collapsed,
            position,
            children,
        })
    }
}

/// Resolves sidebar specifications under a fixed [`ResolveContext`].
///
/// A resolver holds no state between calls and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    ctx: ResolveContext,
}

impl Resolver {
    /// Create a resolver with the given context.
    pub fn new(ctx: ResolveContext) -> Self {
        Self { ctx }
    }

    fn walk_sidebar(
        &self,
        name: &str,
        items: &[Child],
        known: &KnownDocs,
        problems: &mut Vec<Problem>,
    ) -> Vec<NavNode> {
        let mut crumbs = Breadcrumb::new(name, self.ctx.max_depth);
        let mut walk = Walk {
            ctx: &self.ctx,
            known,
            seen: HashMap::new(),
            problems,
        };
        walk.children(items, &mut crumbs)
    }

    /// The context this resolver runs with.
    pub fn context(&self) -> &ResolveContext {
        &self.ctx
    }

    /// Resolve every sidebar in `spec` against `known`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every problem found, in order:
    /// an empty specification, each repeated sidebar name followed by the
    /// problems inside its repeated tree, then per-sidebar problems in
    /// authored order.
    pub fn resolve(&self, spec: &SidebarSpec, known: &KnownDocs) -> Result<NavTree, ValidationError> {
        let mut problems = Vec::new();

        if spec.is_empty() {
            problems.push(Problem::EmptySpec);
        }
        for (name, items) in spec.duplicates() {
            let problem = Problem::DuplicateSidebarName {
                name: name.to_string(),
            };
            warn!(kind = problem.kind(), "{}", problem);
            problems.push(problem);

            // Checked for problems only; never part of the output tree.
            self.walk_sidebar(name, items, known, &mut problems);
        }

        let mut sidebars = IndexMap::with_capacity(spec.len());
        for (name, items) in spec.iter() {
            let before = problems.len();
            let items = self.walk_sidebar(name, items, known, &mut problems);
            let sidebar = NavSidebar { items };

            debug!(
                sidebar = name,
                documents = sidebar.documents().len(),
                problems = problems.len() - before,
                "resolved sidebar"
            );
            sidebars.insert(name.to_string(), sidebar);
        }

        if problems.is_empty() {
            Ok(NavTree::from_sidebars(sidebars))
        } else {
            Err(ValidationError::new(problems))
        }
    }
}
