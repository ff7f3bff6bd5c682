//! Stack growth for nested method dispatch.
//!
//! A user method runs through the executor, which may call back into
//! [`ClassInstance::call`](crate::ClassInstance::call) for the next method,
//! so dispatch depth follows the program's recursion depth.

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// On WASM targets the closure is called directly.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow when less than this much stack (100KB) is left.
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each new stack segment (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
