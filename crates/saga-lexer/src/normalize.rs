//! Raw source text → normalized logical lines.
//!
//! Normalization rules:
//! - leading spaces are kept only in pairs (the indent unit is two
//!   spaces; an odd straggler is dropped),
//! - tabs become spaces, interior whitespace runs collapse to one space,
//! - `//` truncates the rest of the line,
//! - trailing whitespace is trimmed,
//! - blank and comment-only lines vanish.

/// One retained logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Normalized text, leading indent included.
    pub text: String,
    /// 1-based line number in the raw source, for diagnostics.
    pub number: u32,
}

/// Normalize a whole script source into its retained lines.
pub fn normalize(source: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        if let Some(text) = normalize_line(raw) {
            lines.push(Line {
                text,
                number: (idx + 1) as u32,
            });
        }
    }
    lines
}

/// Normalize one raw line. Returns `None` for blank or comment-only
/// lines.
fn normalize_line(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();

    let mut leading = 0;
    while leading < bytes.len() && bytes[leading] == b' ' {
        leading += 1;
    }

    let mut out = " ".repeat(leading - (leading & 1));
    let mut found_text = false;
    let mut rest = raw[leading..].chars().peekable();

    while let Some(mut ch) = rest.next() {
        if ch == '\t' {
            ch = ' ';
        }
        if ch == '/' && rest.peek() == Some(&'/') {
            break;
        }
        if ch == ' ' {
            // Collapse runs; the trailing trim below handles the end.
            if out.ends_with(' ') || !found_text {
                continue;
            }
            out.push(' ');
        } else {
            found_text = true;
            out.push(ch);
        }
    }

    if !found_text {
        return None;
    }
    while out.ends_with(' ') {
        out.pop();
    }
    Some(out)
}

/// Force single spaces around every arithmetic/comparison operator so
/// operators tokenize as standalone words. Scripts are allowed to write
/// `tmpx=selfx+5` and still compile.
pub fn space_operators(line: &str) -> String {
    let indent = line.len() - line.trim_start_matches(' ').len();
    let mut out = String::with_capacity(line.len() + 8);
    out.push_str(&line[..indent]);
    for ch in line[indent..].chars() {
        match ch {
            '+' | '-' | '/' | '*' | '%' | '>' | '<' | '&' | '=' => {
                if !out[indent..].is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push(ch);
                out.push(' ');
            }
            ' ' if out.ends_with(' ') => {}
            _ => out.push(ch),
        }
    }
    while out.len() > indent && out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Indentation depth: leading-space count, floor-divided by the 2-space
/// unit. Unclamped — the compiler clamps to the word layout's 4 bits and
/// records the diagnostic.
pub fn indentation(line: &str) -> u32 {
    (line.bytes().take_while(|&b| b == b' ').count() as u32) >> 1
}

/// True when the first non-space character is a capital letter — the
/// mark of a function/predicate line as opposed to an assignment.
pub fn starts_with_capital(line: &str) -> bool {
    line.chars()
        .find(|&c| c != ' ')
        .is_some_and(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_and_comment_lines() {
        let lines = normalize("\n   \n// header comment\nIfSpawned\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "IfSpawned");
        assert_eq!(lines[0].number, 4);
    }

    #[test]
    fn collapses_interior_whitespace() {
        let lines = normalize("SpawnPoof   \t  Now");
        assert_eq!(lines[0].text, "SpawnPoof Now");
    }

    #[test]
    fn keeps_indent_in_pairs() {
        assert_eq!(normalize("    IfAttacked")[0].text, "    IfAttacked");
        // An odd fifth space is dropped.
        assert_eq!(normalize("     IfAttacked")[0].text, "    IfAttacked");
    }

    #[test]
    fn comment_truncates_mid_line() {
        let lines = normalize("  SetState // remember we fled");
        assert_eq!(lines[0].text, "  SetState");
    }

    #[test]
    fn trailing_whitespace_trimmed() {
        assert_eq!(normalize("End   \t")[0].text, "End");
    }
}
