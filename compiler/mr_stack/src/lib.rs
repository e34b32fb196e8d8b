//! Stack growth guard for recursive compiler passes.
//!
//! The lexer re-enters its own dispatch loop for every `{...}` inside an
//! interpolated string, and AST dumps and structural comparison recurse per
//! nested node. All of them wrap the recursive step in
//! [`ensure_sufficient_stack`], which grows the stack on demand instead of
//! overflowing on pathological nesting.
//!
//! On `wasm32` the guard is a plain call.
//!
//! ```text
//! fn interpolation(&mut self, mode: Mode) -> Result<(), LexError> {
//!     self.depth += 1;
//!     let result = mr_stack::ensure_sufficient_stack(|| self.interpolation_body(mode));
//!     self.depth -= 1;
//!     result
//! }
//! ```

/// Grow when less than this much stack remains (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Passthrough: wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| 7), 7);
    }

    #[test]
    fn propagates_errors() {
        let result: Result<(), &str> = ensure_sufficient_stack(|| Err("unterminated"));
        assert_eq!(result, Err("unterminated"));
    }

    #[test]
    fn nested_brace_depth_survives_deep_recursion() {
        fn depth_of(nested: &[u8], depth: u32) -> u32 {
            ensure_sufficient_stack(|| match nested.split_first() {
                Some((b'{', rest)) => depth_of(rest, depth + 1),
                _ => depth,
            })
        }

        let nested = vec![b'{'; 50_000];
        assert_eq!(depth_of(&nested, 0), 50_000);
    }
}
