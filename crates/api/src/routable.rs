use crate::segment::join;
use std::sync::Arc;

/// Host-addressable object in the URL space that defines its own url name
/// relative to its parent.
///
/// This is often used as the basis of extension points: during resolution the
/// host walks its object tree and matches each request path segment against
/// the url name the current object reports.
///
/// The accessor is a pure read, called concurrently from resolution threads.
/// Callers treat the value as stable for the lifetime of a single resolution
/// request. Uniqueness is only required among siblings under the same parent,
/// and it is enforced by whichever component attaches children, not here.
pub trait Routable: Send + Sync {
    /// The path segment this object occupies beneath its parent.
    fn url_name(&self) -> &str;
}

impl<T: Routable + ?Sized> Routable for &T {
    fn url_name(&self) -> &str {
        (**self).url_name()
    }
}

impl<T: Routable + ?Sized> Routable for Box<T> {
    fn url_name(&self) -> &str {
        (**self).url_name()
    }
}

impl<T: Routable + ?Sized> Routable for Arc<T> {
    fn url_name(&self) -> &str {
        (**self).url_name()
    }
}

/// Full path of `routable` beneath `parent`, e.g. `"job"` under `"/tree"` is
/// `"/tree/job"`.
///
/// Pure string composition; locating `parent` in the tree is the host's job.
pub fn url_of(parent: &str, routable: &dyn Routable) -> String {
    join(parent, routable.url_name())
}
