//! Debug-build validation of the path building protocol.

/// Tracks whether path building methods are called in a valid order, panicking
/// in debug builds when the protocol is broken (a `line_to` outside of a
/// sub-path, two `begin` in a row, building while a sub-path is open).
///
/// Release builds compile this down to nothing.
#[derive(Default)]
pub(crate) struct DebugValidator {
    #[cfg(debug_assertions)]
    in_subpath: bool,
}

impl DebugValidator {
    pub fn new() -> Self {
        DebugValidator::default()
    }

    #[inline(always)]
    pub fn begin(&mut self) {
        #[cfg(debug_assertions)]
        {
            assert!(!self.in_subpath, "begin while a sub-path is already open");
            self.in_subpath = true;
        }
    }

    #[inline(always)]
    pub fn end(&mut self) {
        #[cfg(debug_assertions)]
        {
            assert!(self.in_subpath, "end without a sub-path");
            self.in_subpath = false;
        }
    }

    #[inline(always)]
    pub fn edge(&self) {
        #[cfg(debug_assertions)]
        {
            assert!(self.in_subpath, "edge without a sub-path");
        }
    }

    #[inline(always)]
    pub fn build(&self) {
        #[cfg(debug_assertions)]
        {
            assert!(!self.in_subpath, "build while a sub-path is open");
        }
    }
}
