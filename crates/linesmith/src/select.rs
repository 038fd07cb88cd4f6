//! Selections: pure functions narrowing, relocating, or extending a span.
//!
//! A selection receives the current base span and produces a new one.
//! [`find`] relocates the span to a single anchor line, [`extend_until`] and
//! [`extend_while`] grow it forward from its end, and [`Selection::then`]
//! sequences steps left to right. Spans are line-index ranges into one
//! specific line sequence; they must never be reused after an edit, since an
//! edit can change the line count.

use std::sync::Arc;

use crate::predicate::Predicate;

/// A half-open range `[start, end)` of line indices.
///
/// Invariant for any span actually used to index: `start <= end <= lines.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start line index.
    pub start: usize,
    /// Exclusive end line index.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `[start, end)`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The span covering the whole line sequence.
    #[must_use]
    pub fn all(lines: &[String]) -> Self {
        Self {
            start: 0,
            end: lines.len(),
        }
    }

    /// Returns the number of lines covered. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no lines.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// A pure function from `(lines, base span)` to a new span.
///
/// Selections are immutable and cheap to clone. They hold no reference to
/// any particular line sequence: the same selection can be resolved against
/// any number of texts.
#[derive(Clone)]
pub struct Selection(Arc<dyn Fn(&[String], Span) -> Span + Send + Sync>);

impl Selection {
    /// Lifts any `Fn(&[String], Span) -> Span` into a [`Selection`].
    pub fn new(select: impl Fn(&[String], Span) -> Span + Send + Sync + 'static) -> Self {
        Self(Arc::new(select))
    }

    /// Runs the selection against `lines`, starting from `base`.
    #[must_use]
    pub fn resolve(&self, lines: &[String], base: Span) -> Span {
        (self.0)(lines, base)
    }

    /// Sequences two selections: `self` runs first, `next` consumes its span.
    ///
    /// This is how anchored region selections are built:
    ///
    /// ```
    /// use linesmith::{contains, extend_until, find, Span};
    ///
    /// let lines: Vec<String> = ["a", "b", "c", "d"].map(String::from).into();
    /// let sel = find(contains("b")).then(&extend_until(contains("d")));
    /// assert_eq!(sel.resolve(&lines, Span::all(&lines)), Span::new(1, 3));
    /// ```
    #[must_use]
    pub fn then(&self, next: &Selection) -> Selection {
        let (first, second) = (self.clone(), next.clone());
        Selection::new(move |lines, base| second.resolve(lines, first.resolve(lines, base)))
    }

    /// Resolves the selection against the full line sequence and yields
    /// `(index, line)` pairs for every covered line, in ascending order.
    pub fn enumerate<'a>(
        &self,
        lines: &'a [String],
    ) -> impl Iterator<Item = (usize, &'a str)> + use<'a> {
        let span = self.resolve(lines, Span::all(lines));
        lines[span.start..span.end]
            .iter()
            .enumerate()
            .map(move |(offset, line)| (span.start + offset, line.as_str()))
    }
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Selection(..)")
    }
}

/// The identity selection: returns the base span unchanged.
pub fn everything() -> Selection {
    Selection::new(|_, base| base)
}

/// Relocates the span to the first line in the base span satisfying `pred`.
///
/// Returns the single-line span `[i, i + 1)` for the first match. When no
/// line in the base span matches, the base span is returned unchanged: a
/// missed find is a no-op, never an error, so downstream steps degrade
/// gracefully.
pub fn find(pred: Predicate) -> Selection {
    Selection::new(move |lines, base| {
        (base.start..base.end.min(lines.len()))
            .find(|&i| pred.test(&lines[i]))
            .map_or(base, |i| Span::new(i, i + 1))
    })
}

/// Extends the span forward, stopping just before the first line past its
/// end that satisfies `pred`.
///
/// Scanning starts at the base span's end, so lines already inside the span
/// are never re-tested. When no line matches, the span extends to the end of
/// the sequence. This primitive only ever grows a span.
pub fn extend_until(pred: Predicate) -> Selection {
    Selection::new(move |lines, base| {
        let end = (base.end..lines.len())
            .find(|&i| pred.test(&lines[i]))
            .unwrap_or(lines.len());
        Span::new(base.start, end)
    })
}

/// Extends the span forward while `pred` holds, stopping at the first line
/// where it fails. Sugar for `extend_until(pred.negate())`.
pub fn extend_while(pred: Predicate) -> Selection {
    extend_until(pred.negate())
}
