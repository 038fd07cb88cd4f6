//! Edits: pure functions producing a new line sequence from a span, plus the
//! top-level [`apply`] driver.
//!
//! [`replace`] is the fundamental edit; [`add_prefix`] and [`remove_prefix`]
//! are built on top of it with per-line transforms. An edit may change the
//! line count, so spans held across an edit are invalid by construction.

use std::sync::Arc;

use crate::predicate::{Predicate, blank};
use crate::select::{Selection, Span};

/// A pure function from `(lines, span)` to a new line sequence.
#[derive(Clone)]
pub struct Edit(Arc<dyn Fn(&[String], Span) -> Vec<String> + Send + Sync>);

impl Edit {
    /// Lifts any `Fn(&[String], Span) -> Vec<String>` into an [`Edit`].
    pub fn new(edit: impl Fn(&[String], Span) -> Vec<String> + Send + Sync + 'static) -> Self {
        Self(Arc::new(edit))
    }

    /// Runs the edit against `lines`, rewriting the lines covered by `span`.
    #[must_use]
    pub fn run(&self, lines: &[String], span: Span) -> Vec<String> {
        (self.0)(lines, span)
    }
}

impl std::fmt::Debug for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Edit(..)")
    }
}

/// Replaces the selected span with the result of `change`.
///
/// The span's lines are joined with `\n` into one string, passed to
/// `change`, and the result is split back into lines and spliced in place of
/// the span. The replacement may have a different line count than the span.
/// An empty-string result becomes exactly one empty line, matching the
/// convention that empty text is a single blank line.
///
/// A zero-line span is a no-op: replace never invents content from nothing.
pub fn replace(change: impl Fn(&str) -> String + Send + Sync + 'static) -> Edit {
    Edit::new(move |lines, span| {
        if span.is_empty() {
            return lines.to_vec();
        }
        let selected = lines[span.start..span.end].join("\n");
        let replacement = split_lines(&change(&selected));
        let mut out = Vec::with_capacity(lines.len() - span.len() + replacement.len());
        out.extend_from_slice(&lines[..span.start]);
        out.extend(replacement);
        out.extend_from_slice(&lines[span.end..]);
        out
    })
}

/// Prepends `prefix` to every selected line, skipping blank lines.
pub fn add_prefix(prefix: &str) -> Edit {
    add_prefix_with(prefix, blank())
}

/// Prepends `prefix` to every selected line for which `skip` is false.
///
/// Pass a never-true `skip` to force the prefix onto every line, blank ones
/// included.
pub fn add_prefix_with(prefix: &str, skip: Predicate) -> Edit {
    let prefix = prefix.to_string();
    replace(move |text| {
        let out: Vec<String> = split_lines(text)
            .into_iter()
            .map(|line| {
                if skip.test(&line) {
                    line
                } else {
                    format!("{prefix}{line}")
                }
            })
            .collect();
        out.join("\n")
    })
}

/// Strips `prefix` from every selected line that carries it, skipping blank
/// lines.
pub fn remove_prefix(prefix: &str) -> Edit {
    remove_prefix_with(prefix, blank())
}

/// Strips `prefix` from every selected line that carries it and for which
/// `skip` is false.
///
/// Removal is conservative: lines not starting with `prefix` pass through
/// unchanged, never erroring.
pub fn remove_prefix_with(prefix: &str, skip: Predicate) -> Edit {
    let prefix = prefix.to_string();
    replace(move |text| {
        let out: Vec<String> = split_lines(text)
            .into_iter()
            .map(|line| {
                if skip.test(&line) {
                    return line;
                }
                match line.strip_prefix(&prefix) {
                    Some(rest) => rest.to_string(),
                    None => line,
                }
            })
            .collect();
        out.join("\n")
    })
}

/// Applies one edit to `text` over the span the selection resolves to.
///
/// The text is split on `\n` (empty text is one empty line), the selection
/// runs against the full span, the edit rewrites the resulting span, and the
/// lines are rejoined. Selections compose beforehand via
/// [`Selection::then`]; exactly one edit runs per call.
///
/// ```
/// use linesmith::{apply, everything, remove_prefix};
///
/// let out = apply("# a\n\n# b", &everything(), &remove_prefix("# "));
/// assert_eq!(out, "a\n\nb");
/// ```
pub fn apply(text: &str, selection: &Selection, edit: &Edit) -> String {
    let lines = split_lines(text);
    let span = selection.resolve(&lines, Span::all(&lines));
    edit.run(&lines, span).join("\n")
}

/// Splits on `\n` only. Empty text becomes a single empty line, never zero
/// lines.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::contains;
    use crate::select::{everything, extend_until, find};
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<String> {
        split_lines(text)
    }

    #[test]
    fn split_empty_text_is_one_empty_line() {
        assert_eq!(lines(""), vec![String::new()]);
    }

    #[test]
    fn split_keeps_trailing_empty_line() {
        assert_eq!(lines("a\n"), vec!["a".to_string(), String::new()]);
    }

    #[test]
    fn replace_on_empty_span_is_a_noop() {
        let input = lines("a\nb\nc");
        let edit = replace(|_| "should never appear".to_string());
        assert_eq!(edit.run(&input, Span::new(1, 1)), input);
    }

    #[test]
    fn replace_transforms_the_selected_block() {
        let out = apply(
            "a\nb\nc",
            &find(contains("b")),
            &replace(|s| s.to_uppercase()),
        );
        assert_eq!(out, "a\nB\nc");
    }

    #[test]
    fn replace_may_grow_the_line_count() {
        let out = apply("a\nb\nc", &find(contains("b")), &replace(|_| "x\ny".to_string()));
        assert_eq!(out, "a\nx\ny\nc");
    }

    #[test]
    fn replace_may_shrink_the_line_count() {
        let sel = find(contains("a")).then(&extend_until(contains("zzz")));
        let out = apply("a\nb\nc", &sel, &replace(|_| "only".to_string()));
        assert_eq!(out, "only");
    }

    #[test]
    fn replace_with_empty_result_leaves_one_blank_line() {
        let out = apply("a\nb\nc", &find(contains("b")), &replace(|_| String::new()));
        assert_eq!(out, "a\n\nc");
    }

    #[test]
    fn add_prefix_skips_blank_lines_by_default() {
        let out = apply("a\n\nb", &everything(), &add_prefix("# "));
        assert_eq!(out, "# a\n\n# b");
    }

    #[test]
    fn add_prefix_with_never_skip_prefixes_blank_lines() {
        let never = Predicate::new(|_| false);
        let out = apply("a\n\nb", &everything(), &add_prefix_with("# ", never));
        assert_eq!(out, "# a\n# \n# b");
    }

    #[test]
    fn remove_prefix_leaves_unprefixed_lines_alone() {
        let out = apply("# a\nb", &everything(), &remove_prefix("# "));
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn remove_prefix_strips_exactly_the_prefix() {
        let out = apply("# # a", &everything(), &remove_prefix("# "));
        assert_eq!(out, "# a");
    }

    #[test]
    fn remove_prefix_undoes_add_prefix() {
        let text = "fn main() {\n\n    body();\n}";
        let commented = apply(text, &everything(), &add_prefix("// "));
        assert_eq!(commented, "// fn main() {\n\n//     body();\n// }");
        let restored = apply(&commented, &everything(), &remove_prefix("// "));
        assert_eq!(restored, text);
    }

    #[test]
    fn apply_on_empty_text_acts_on_one_blank_line() {
        // The default skip deliberately leaves the lone blank line
        // unprefixed; see the "Empty-text prefix scenario" note in DESIGN.md
        // before changing this...
        assert_eq!(apply("", &everything(), &add_prefix("# ")), "");
        // ...while a forced prefix proves the line exists.
        let never = Predicate::new(|_| false);
        assert_eq!(apply("", &everything(), &add_prefix_with("# ", never)), "# ");
    }

    #[test]
    fn apply_with_missed_selection_edits_the_whole_text() {
        // A missed find degrades to the base span, here the full text.
        let out = apply("a\nb", &find(contains("zzz")), &add_prefix("> "));
        assert_eq!(out, "> a\n> b");
    }
}
