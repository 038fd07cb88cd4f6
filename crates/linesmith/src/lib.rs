//! # linesmith
//!
//! Composable combinators for line-oriented text editing.
//!
//! The library is built from three kinds of values, composed leaves-first:
//!
//! ```text
//! Predicate (one line → bool)
//!     → Selection (lines + span → span)
//!         → Edit (lines + span → new lines)
//!             → apply (text → text)
//! ```
//!
//! A [`Predicate`] is a pure boolean test over a single line, closed under
//! `and`/`or`/`negate`. A [`Selection`] locates a contiguous span of lines:
//! [`find`] moves the span to the first matching line, [`extend_until`] and
//! [`extend_while`] grow it forward, and [`Selection::then`] chains steps so
//! each one refines the span the previous one produced. An [`Edit`] rewrites
//! the selected span; [`replace`] is the fundamental edit and
//! [`add_prefix`]/[`remove_prefix`] are built on top of it. [`apply`] ties
//! the three together over a text blob.
//!
//! The classic use case is commenting out a block of an ini-style file:
//!
//! ```
//! use linesmith::{add_prefix, apply, blank, contains, extend_while, find};
//!
//! let text = "[testenv:docs]\ndeps = sphinx\n\n[testenv:typecheck]\ndeps = mypy";
//! let block = find(contains("typecheck")).then(&extend_while(blank().negate()));
//! let out = apply(text, &block, &add_prefix("# "));
//! assert_eq!(
//!     out,
//!     "[testenv:docs]\ndeps = sphinx\n\n# [testenv:typecheck]\n# deps = mypy"
//! );
//! ```
//!
//! This is not a syntax-aware editor: a text is only ever an ordered sequence
//! of lines, and only `\n` line endings are recognized. Callers using other
//! conventions must normalize before calling in.
//!
//! All values are immutable once constructed and `Send + Sync`, so they can
//! be shared across threads freely. A selection that finds nothing degrades
//! to a no-op rather than failing, so an optional refinement step never
//! aborts a whole edit pipeline. The only fallible surface is pattern
//! compilation, which reports [`PatternError`] at construction time.

pub mod edit;
pub mod predicate;
pub mod select;

// Re-export key types for flat `linesmith::` usage
pub use edit::{
    Edit, add_prefix, add_prefix_with, apply, remove_prefix, remove_prefix_with, replace,
};
pub use predicate::{
    PatternError, Predicate, blank, contains, ends_with, full_match, glob, matches, search,
    starts_with,
};
pub use select::{Selection, Span, everything, extend_until, extend_while, find};
