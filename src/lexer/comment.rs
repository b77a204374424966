//! Comment stripping, run as a pre-pass before tokenization.
//!
//! Jack forbids comment delimiters inside string literals, so this pass
//! can run over raw source text without tracking string state.

/// Removes `//` line comments and `/* ... */` block comments from
/// `source`, returning the remaining text unchanged except for the
/// removed spans.
///
/// Grounded on the original tokenizer's two-regex `removeComment`: a
/// `//` comment runs to end of line; a `/*` comment runs to the next
/// `*/`, possibly spanning multiple lines.
pub(super) fn strip(source: &str) -> String {
    let without_line_comments = strip_line_comments(source);
    strip_block_comments(&without_line_comments)
}

fn strip_line_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut chars = source.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '/' && source[i..].starts_with("//") {
            while let Some(&(_, next)) = chars.peek() {
                if next == '\n' {
                    break;
                }
                chars.next();
            }
            continue;
        }
        result.push(c);
    }

    result
}

fn strip_block_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        match rest[start..].find("*/") {
            Some(end) => rest = &rest[start + end + 2..],
            None => return result,
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_comment() {
        assert_eq!(strip("let x = 1; // comment\n"), "let x = 1; \n");
    }

    #[test]
    fn strips_block_comment_single_line() {
        assert_eq!(strip("let /* inline */ x = 1;"), "let  x = 1;");
    }

    #[test]
    fn strips_block_comment_spanning_lines() {
        assert_eq!(strip("let x = 1; /* a\nb\nc */ let y = 2;"), "let x = 1;  let y = 2;");
    }

    #[test]
    fn stripping_is_idempotent() {
        let source = "do Output.printString(\"hi\"); // greet\n/* trailing */";
        let once = strip(source);
        let twice = strip(&once);
        assert_eq!(once, twice);
    }
}
