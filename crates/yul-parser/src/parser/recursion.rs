//! Nesting depth accounting.
//!
//! Every grammar routine that can recurse holds a [`RecursionGuard`] for its
//! whole body. The guard's `Drop` gives the level back on every exit path,
//! including `?` propagation of a fatal error and panic unwinding, so the
//! counter never drifts.

use std::cell::Cell;
use std::rc::Rc;

/// Depth limit used when none is configured.
pub const MAX_RECURSION_DEPTH: usize = 1024;

/// Shared depth counter of one parser.
#[derive(Debug, Default)]
pub(crate) struct RecursionDepth {
    depth: Rc<Cell<usize>>,
}

/// One held nesting level.
#[must_use]
#[derive(Debug)]
pub(crate) struct RecursionGuard {
    depth: Rc<Cell<usize>>,
}

impl RecursionDepth {
    /// Take one level and return the guard that releases it.
    pub(crate) fn enter(&self) -> RecursionGuard {
        self.depth.set(self.depth.get() + 1);
        RecursionGuard {
            depth: Rc::clone(&self.depth),
        }
    }

    pub(crate) fn current(&self) -> usize {
        self.depth.get()
    }

    pub(crate) fn reset(&self) {
        self.depth.set(0);
    }
}

impl RecursionGuard {
    /// Depth including the level held by this guard.
    pub(crate) fn depth(&self) -> usize {
        self.depth.get()
    }
}

impl Drop for RecursionGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guards_nest_and_release() {
        let depth = RecursionDepth::default();
        {
            let outer = depth.enter();
            assert_eq!(outer.depth(), 1);
            {
                let inner = depth.enter();
                assert_eq!(inner.depth(), 2);
            }
            assert_eq!(depth.current(), 1);
        }
        assert_eq!(depth.current(), 0);
    }

    #[test]
    fn test_guard_released_on_error_path() {
        fn failing(depth: &RecursionDepth) -> Result<(), ()> {
            let _guard = depth.enter();
            let inner: Result<(), ()> = Err(());
            inner?;
            Ok(())
        }

        let depth = RecursionDepth::default();
        assert!(failing(&depth).is_err());
        assert_eq!(depth.current(), 0);
    }

    #[test]
    fn test_guard_released_on_unwind() {
        let depth = RecursionDepth::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = depth.enter();
            panic!("abort");
        }));
        assert!(result.is_err());
        assert_eq!(depth.current(), 0);
    }
}
