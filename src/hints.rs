//! Branch prediction hints for hot paths.
//!
//! Stable Rust exposes no `likely`/`unlikely` intrinsics; marking the
//! unexpected side with a `#[cold]` call steers codegen the same way.

#[inline(always)]
#[cold]
fn cold() {}

#[inline(always)]
pub(crate) fn likely(b: bool) -> bool {
    if !b {
        cold();
    }
    b
}

#[inline(always)]
pub(crate) fn unlikely(b: bool) -> bool {
    if b {
        cold();
    }
    b
}
