//! RAII guard for automatic breadcrumb cleanup

use super::Breadcrumb;
use crate::error::Problem;

/// RAII guard that pops the entered category when dropped.
///
/// # Example
///
/// ```
/// use docnav::Breadcrumb;
///
/// let mut crumbs = Breadcrumb::new("docsSidebar", 8);
///
/// {
///     let mut outer = crumbs.enter("Guides").unwrap();
///     let inner = outer.enter("Webhooks").unwrap();
///     assert_eq!(inner.depth(), 2);
/// }
/// // guards dropped, both categories left
/// assert!(crumbs.is_root());
/// ```
pub struct CrumbGuard<'a> {
    crumbs: &'a mut Breadcrumb,
}

impl Breadcrumb {
    /// Enter a category now and leave it when the guard drops.
    ///
    /// # Errors
    ///
    /// Returns `NestingTooDeep` without entering if the limit is reached.
    pub fn enter(&mut self, label: impl Into<String>) -> Result<CrumbGuard<'_>, Problem> {
        self.push(label)?;
        Ok(CrumbGuard { crumbs: self })
    }
}

impl<'a> Drop for CrumbGuard<'a> {
    fn drop(&mut self) {
        self.crumbs.pop();
    }
}

impl<'a> std::ops::Deref for CrumbGuard<'a> {
    type Target = Breadcrumb;

    fn deref(&self) -> &Self::Target {
        self.crumbs
    }
}

impl<'a> std::ops::DerefMut for CrumbGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.crumbs
    }
}
