//! Boolean tests over a single line, closed under composition.
//!
//! Constructors that compile a pattern (`search`, `matches`, `full_match`,
//! `glob`) fail at construction time with [`PatternError`]; evaluation never
//! fails once a predicate exists.

mod glob_translate;

use std::fmt;
use std::sync::Arc;

use regex::Regex;

/// A pattern failed to compile while constructing a [`Predicate`].
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern `{pattern}`: {source}")]
    Regex {
        pattern: String,
        source: regex::Error,
    },
    #[error("invalid glob pattern `{pattern}`: {source}")]
    Glob {
        pattern: String,
        source: regex::Error,
    },
}

/// A pure boolean test over a single line.
///
/// Predicates are stateless and cheap to clone (the test function is behind
/// an `Arc`). Combinators return new predicates without touching their
/// operands, so composition is referentially transparent.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Predicate {
    /// Lifts any `Fn(&str) -> bool` into a [`Predicate`].
    pub fn new(test: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(test))
    }

    /// Evaluates the predicate against one line.
    #[must_use]
    pub fn test(&self, line: &str) -> bool {
        (self.0)(line)
    }

    /// Logical conjunction. Short-circuits on the left operand.
    #[must_use]
    pub fn and(&self, other: &Predicate) -> Predicate {
        let (p, q) = (self.clone(), other.clone());
        Predicate::new(move |line| p.test(line) && q.test(line))
    }

    /// Logical disjunction. Short-circuits on the left operand.
    #[must_use]
    pub fn or(&self, other: &Predicate) -> Predicate {
        let (p, q) = (self.clone(), other.clone());
        Predicate::new(move |line| p.test(line) || q.test(line))
    }

    /// Logical negation: true exactly where `self` is false.
    #[must_use]
    pub fn negate(&self) -> Predicate {
        let p = self.clone();
        Predicate::new(move |line| !p.test(line))
    }

    /// Runs `transform` over the line before testing it.
    ///
    /// ```
    /// use linesmith::starts_with;
    ///
    /// let p = starts_with("hello").precompose(str::to_lowercase);
    /// assert!(p.test("HELLO WORLD"));
    /// ```
    #[must_use]
    pub fn precompose(
        &self,
        transform: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Predicate {
        let p = self.clone();
        Predicate::new(move |line| p.test(&transform(line)))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// True for lines starting with `prefix`.
pub fn starts_with(prefix: impl Into<String>) -> Predicate {
    let prefix = prefix.into();
    Predicate::new(move |line| line.starts_with(&prefix))
}

/// True for lines ending with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> Predicate {
    let suffix = suffix.into();
    Predicate::new(move |line| line.ends_with(&suffix))
}

/// True for lines containing `part` anywhere.
pub fn contains(part: impl Into<String>) -> Predicate {
    let part = part.into();
    Predicate::new(move |line| line.contains(&part))
}

/// True for lines that are empty after trimming leading/trailing whitespace.
pub fn blank() -> Predicate {
    Predicate::new(|line| line.trim().is_empty())
}

/// True for lines where `pattern` matches anywhere.
pub fn search(pattern: &str) -> Result<Predicate, PatternError> {
    let re = compile_regex(pattern, pattern)?;
    Ok(Predicate::new(move |line| re.is_match(line)))
}

/// True for lines where `pattern` matches anchored at the start of the line.
///
/// Named `matches` rather than `match` (a Rust keyword).
pub fn matches(pattern: &str) -> Result<Predicate, PatternError> {
    let re = compile_regex(&format!(r"\A(?:{pattern})"), pattern)?;
    Ok(Predicate::new(move |line| re.is_match(line)))
}

/// True for lines consumed entirely by `pattern`.
pub fn full_match(pattern: &str) -> Result<Predicate, PatternError> {
    let re = compile_regex(&format!(r"\A(?:{pattern})\z"), pattern)?;
    Ok(Predicate::new(move |line| re.is_match(line)))
}

/// True for lines matched entirely by the shell glob `pattern`.
///
/// The glob is translated to a regex (`*` → `.*`, `?` → `.`, `[...]` passed
/// through, everything else escaped) and evaluated like [`full_match`].
///
/// ```
/// use linesmith::glob;
///
/// let p = glob("he*").unwrap();
/// assert!(p.test("hello José"));
/// assert!(!p.test("hi, hello world!"));
/// ```
pub fn glob(pattern: &str) -> Result<Predicate, PatternError> {
    let translated = glob_translate::translate(pattern);
    let re =
        Regex::new(&format!(r"\A(?:{translated})\z")).map_err(|source| PatternError::Glob {
            pattern: pattern.to_string(),
            source,
        })?;
    Ok(Predicate::new(move |line| re.is_match(line)))
}

fn compile_regex(wrapped: &str, original: &str) -> Result<Regex, PatternError> {
    Regex::new(wrapped).map_err(|source| PatternError::Regex {
        pattern: original.to_string(),
        source,
    })
}
