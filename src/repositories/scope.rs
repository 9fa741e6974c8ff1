//! Short-lived repository handles with guaranteed release.

use std::fmt;
use std::ops::Deref;

type ReleaseFn = Box<dyn FnOnce() + Send + Sync>;

/// An owned repository handle plus the function that releases it.
///
/// The release function runs exactly once, when the handle is dropped. That
/// covers every exit path of the code holding it: normal return, `?` on an
/// error, and cancellation of the enclosing future.
pub struct ScopedHandle<R: ?Sized> {
    repo: Box<R>,
    release: Option<ReleaseFn>,
}

impl<R: ?Sized> ScopedHandle<R> {
    /// Wrap a repository with its release function.
    pub fn new(repo: Box<R>, release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            repo,
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release.
    pub fn unmanaged(repo: Box<R>) -> Self {
        Self {
            repo,
            release: None,
        }
    }
}

impl<R: ?Sized> Deref for ScopedHandle<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.repo
    }
}

impl<R: ?Sized> Drop for ScopedHandle<R> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl<R: ?Sized> fmt::Debug for ScopedHandle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedHandle")
            .field("released", &self.release.is_none())
            .finish()
    }
}
