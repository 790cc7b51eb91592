//! Comment and docstring removal for Python sources.
//!
//! Lexical rather than syntactic: `#` comments outside string literals are
//! dropped, and a string literal standing alone as the first statement of
//! the module or of a `def`/`class` body is dropped as a docstring.

const DOCSTRING_OWNERS: &[&str] = &["def", "class"];
const STRING_PREFIXES: &str = "rRbBuUfF";

pub fn strip_python(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;
    // open brackets on the current logical line
    let mut depth = 0usize;
    let mut at_statement_start = true;
    let mut head = String::new();
    let mut words = 0usize;
    let mut last: Option<char> = None;
    let mut docstring_allowed = true;
    // right after the `:` of a def/class header, on the same line
    let mut after_header = false;

    while i < chars.len() {
        let c = chars[i];
        if c == '#' {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }
        if c == '\n' {
            out.push('\n');
            i += 1;
            if depth > 0 || last == Some('\\') {
                continue;
            }
            if let Some(l) = last {
                docstring_allowed = l == ':' && DOCSTRING_OWNERS.contains(&head.as_str());
            }
            at_statement_start = true;
            after_header = false;
            head.clear();
            words = 0;
            last = None;
            continue;
        }
        if c.is_whitespace() {
            out.push(c);
            i += 1;
            continue;
        }
        if string_start(&chars, i).is_some() {
            let end = literal_run_end(&chars, i);
            let own_line = at_statement_start && docstring_allowed;
            if depth == 0 && (own_line || after_header) && ends_statement(&chars, end) {
                docstring_allowed = false;
                after_header = false;
                if !at_statement_start {
                    // keeps the next line from owning a docstring
                    last = Some(chars[end - 1]);
                }
                i = end;
                continue;
            }
            out.extend(&chars[i..end]);
            i = end;
            at_statement_start = false;
            after_header = false;
            last = chars.get(end.saturating_sub(1)).copied();
            continue;
        }
        if is_ident_char(c) {
            let start = i;
            while i < chars.len() && is_ident_char(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if at_statement_start && head.is_empty() {
                head = word.clone();
            } else if words == 1 && head == "async" && word == "def" {
                head = word.clone();
            }
            words += 1;
            out.push_str(&word);
            at_statement_start = false;
            after_header = false;
            last = Some(chars[i - 1]);
            continue;
        }
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        after_header = c == ':' && depth == 0 && DOCSTRING_OWNERS.contains(&head.as_str());
        out.push(c);
        i += 1;
        at_statement_start = false;
        last = Some(c);
    }
    out
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Index of the opening quote if a string literal (optionally prefixed)
/// starts at `i`.
fn string_start(chars: &[char], i: usize) -> Option<usize> {
    let c = chars[i];
    if c == '"' || c == '\'' {
        return Some(i);
    }
    if i > 0 && is_ident_char(chars[i - 1]) {
        return None;
    }
    let mut j = i;
    while j < chars.len() && j - i < 2 && STRING_PREFIXES.contains(chars[j]) {
        j += 1;
    }
    if j > i && j < chars.len() && (chars[j] == '"' || chars[j] == '\'') {
        Some(j)
    } else {
        None
    }
}

/// Index just past the literal opened at `quote_at`. Unterminated
/// single-line literals end at the newline.
fn string_end(chars: &[char], quote_at: usize) -> usize {
    let quote = chars[quote_at];
    let triple = quote_at + 2 < chars.len() && chars[quote_at + 1] == quote && chars[quote_at + 2] == quote;
    let mut j = quote_at + if triple { 3 } else { 1 };
    while j < chars.len() {
        let c = chars[j];
        if c == '\\' {
            j += 2;
            continue;
        }
        if triple {
            if j + 2 < chars.len() && c == quote && chars[j + 1] == quote && chars[j + 2] == quote {
                return j + 3;
            }
        } else if c == quote {
            return j + 1;
        } else if c == '\n' {
            return j;
        }
        j += 1;
    }
    chars.len()
}

/// Index just past a run of adjacent literals (`"a" 'b'`) starting at `i`,
/// which Python joins into one string.
fn literal_run_end(chars: &[char], i: usize) -> usize {
    let mut end = i;
    let mut j = i;
    while j < chars.len() {
        let Some(quote_at) = string_start(chars, j) else { break };
        end = string_end(chars, quote_at);
        j = end;
        while j < chars.len() && matches!(chars[j], ' ' | '\t') {
            j += 1;
        }
    }
    end
}

/// Whether nothing but blanks, a comment or a `;` follows on this line.
fn ends_statement(chars: &[char], from: usize) -> bool {
    let mut j = from;
    while j < chars.len() && matches!(chars[j], ' ' | '\t' | '\r') {
        j += 1;
    }
    j >= chars.len() || matches!(chars[j], '\n' | '#' | ';')
}
