//! # yield
//!
//! yield handle for closure bodied generators
//!

use crate::generator::{GeneratorState, Resume};

/// passed in scope type
/// the body writes the value of the current advance into it
pub struct Scope<T> {
    ret: Option<T>,
}

impl<T> Scope<T> {
    /// create a new scope object
    pub(crate) fn new() -> Self {
        Scope { ret: None }
    }

    /// yield a value for the current advance
    ///
    /// only one value can be handed out per advance, a second call replaces
    /// the first one
    #[inline]
    pub fn yield_with(&mut self, v: T) {
        if self.ret.is_some() {
            warn!("yield twice in one resume, the earlier value is dropped");
        }
        self.ret = Some(v);
    }

    /// has the body yielded in the current advance
    #[inline]
    pub fn has_yielded(&self) -> bool {
        self.ret.is_some()
    }

    #[inline]
    fn take_ret(&mut self) -> Option<T> {
        self.ret.take()
    }
}

/// return from a scoped generator body early, completing the generator
#[macro_export]
macro_rules! done {
    () => {
        return
    };
}

/// closure body driven through a `Scope`
pub(crate) struct ScopedBody<T, F> {
    scope: Scope<T>,
    f: F,
}

impl<T, F> ScopedBody<T, F>
where
    F: FnMut(&mut Scope<T>),
{
    pub(crate) fn new(f: F) -> Self {
        ScopedBody {
            scope: Scope::new(),
            f,
        }
    }
}

impl<T, F> Resume for ScopedBody<T, F>
where
    F: FnMut(&mut Scope<T>),
{
    type Yield = T;

    fn resume(&mut self) -> GeneratorState<T> {
        (self.f)(&mut self.scope);
        self.scope.take_ret().into()
    }
}
