//! Shell glob → regex translation, in the spirit of POSIX `fnmatch`.
//!
//! The output is meant to be wrapped in `\A(?:...)\z` by the caller; the
//! translation itself is total. Unterminated `[` sets are escaped literally
//! rather than rejected, matching `fnmatch` behavior.

/// Translates a shell glob into an (unanchored) regex fragment.
///
/// `*` → `.*`, `?` → `.`, `[...]` is passed through as a character class
/// (`[!` becomes `[^`, a leading `^` is escaped, backslashes are doubled,
/// `&`/`~`/`|` are escaped to stay literal), and every other character is
/// escaped.
pub(crate) fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;
    while i < n {
        let c = chars[i];
        i += 1;
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => {
                // Find the closing bracket; `]` is literal when it comes
                // first in the set (optionally after `!`).
                let mut j = i;
                if j < n && chars[j] == '!' {
                    j += 1;
                }
                if j < n && chars[j] == ']' {
                    j += 1;
                }
                while j < n && chars[j] != ']' {
                    j += 1;
                }
                if j >= n {
                    out.push_str(r"\[");
                } else {
                    let set: String = chars[i..j].iter().collect();
                    let set = set.replace('\\', r"\\");
                    // The regex crate gives doubled `&`, `~` and `|` set-operation
                    // meaning inside a class; fnmatch escapes them to keep them
                    // literal.
                    let mut escaped = String::with_capacity(set.len());
                    for c in set.chars() {
                        if matches!(c, '&' | '~' | '|') {
                            escaped.push('\\');
                        }
                        escaped.push(c);
                    }
                    let set = escaped;
                    out.push('[');
                    if let Some(rest) = set.strip_prefix('!') {
                        out.push('^');
                        out.push_str(rest);
                    } else if let Some(rest) = set.strip_prefix('^') {
                        out.push('\\');
                        out.push('^');
                        out.push_str(rest);
                    } else {
                        out.push_str(&set);
                    }
                    out.push(']');
                    i = j + 1;
                }
            }
            _ => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }
    out
}
