//! Turns raw zone-file text into logical record lines.
//!
//! Comments are stripped per physical line, parenthesised records
//! (RFC 1035 §5.1) and bare continuation lines are folded into one logical
//! line each, and `$ORIGIN`/`$TTL` are pulled out of the line stream.

use bindzone_domain::{DomainError, PreprocessResult, SupportedType, WarnedType};
use fancy_regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::text::{compiled, regex_error, Pattern};

static RECORD_START: Pattern = LazyLock::new(|| {
    Regex::new(r"(?i)^\S+\s+(\d+\s+)?(IN\s+)?[A-Z]+\s").map_err(|e| e.to_string())
});

static NAMELESS_RECORD_START: Pattern = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:\d+|IN)\s+){0,2}([A-Z][A-Z0-9-]*)\s").map_err(|e| e.to_string())
});

static ORIGIN_DIRECTIVE: Pattern =
    LazyLock::new(|| Regex::new(r"(?i)^\$ORIGIN\s+(\S+)").map_err(|e| e.to_string()));

static TTL_DIRECTIVE: Pattern =
    LazyLock::new(|| Regex::new(r"(?i)^\$TTL\s+(\d+)").map_err(|e| e.to_string()));

pub fn preprocess(content: &str) -> Result<PreprocessResult, DomainError> {
    let physical: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(strip_comment)
        .map(str::trim_end)
        .filter(|line| !line.trim_start().is_empty())
        .collect();

    let logical = collapse_multiline(&physical)?;
    let (lines, origin) = extract_origin(logical)?;
    let (lines, default_ttl) = extract_ttl(lines)?;

    debug!(
        physical = physical.len(),
        logical = lines.len(),
        origin = ?origin,
        default_ttl = ?default_ttl,
        "Preprocessed zone file"
    );

    Ok(PreprocessResult {
        lines,
        origin,
        default_ttl,
    })
}

/// Cut the line at the first `;` outside a double-quoted span.
///
/// Quote state starts fresh on every line; a `"` preceded by `\` does not
/// toggle it.
pub fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    let mut prev = None;
    for (idx, ch) in line.char_indices() {
        match ch {
            '"' if prev != Some('\\') => in_quotes = !in_quotes,
            ';' if !in_quotes => return &line[..idx],
            _ => {}
        }
        prev = Some(ch);
    }
    line
}

/// Byte offset of the first `target` outside quotes.
fn find_unquoted(line: &str, target: char) -> Option<usize> {
    let mut in_quotes = false;
    let mut prev = None;
    for (idx, ch) in line.char_indices() {
        if ch == '"' && prev != Some('\\') {
            in_quotes = !in_quotes;
        } else if ch == target && !in_quotes {
            return Some(idx);
        }
        prev = Some(ch);
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parens {
    None,
    Opened,
    Closed,
}

fn parens_of(line: &str) -> Parens {
    match find_unquoted(line, '(') {
        None => Parens::None,
        Some(open) => match find_unquoted(&line[open..], ')') {
            Some(_) => Parens::Closed,
            None => Parens::Opened,
        },
    }
}

fn is_directive(line: &str) -> bool {
    line.trim_start().starts_with('$')
}

fn looks_like_record_start(line: &str) -> Result<bool, DomainError> {
    let trimmed = line.trim_start();
    if compiled(&RECORD_START)?
        .is_match(trimmed)
        .map_err(regex_error)?
    {
        return Ok(true);
    }
    // An indented line may be a record that inherits its owner name, but only
    // when it names a known type; a relative domain name there is a
    // continuation of the record above.
    if line.len() != trimmed.len() {
        let caps = compiled(&NAMELESS_RECORD_START)?
            .captures(trimmed)
            .map_err(regex_error)?;
        return Ok(caps
            .and_then(|c| c.get(1))
            .is_some_and(|m| is_known_type(m.as_str())));
    }
    Ok(false)
}

fn is_known_type(mnemonic: &str) -> bool {
    mnemonic.parse::<SupportedType>().is_ok() || mnemonic.parse::<WarnedType>().is_ok()
}

/// Join buffered fragments into one logical line: unquoted parentheses
/// dropped, unquoted whitespace runs collapsed to one space. An indented
/// first fragment keeps a single leading space so the owner stays omitted.
fn join_logical(parts: &[&str]) -> String {
    let indented = parts
        .first()
        .is_some_and(|p| p.starts_with(char::is_whitespace));
    let joined = parts.join(" ");

    let mut out = String::with_capacity(joined.len());
    let mut in_quotes = false;
    let mut prev = None;
    let mut pending_space = false;

    for ch in joined.chars() {
        if ch == '"' && prev != Some('\\') {
            in_quotes = !in_quotes;
        }
        if !in_quotes && (ch.is_whitespace() || ch == '(' || ch == ')') {
            pending_space = true;
        } else {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
        prev = Some(ch);
    }

    if indented && !out.is_empty() {
        out.insert(0, ' ');
    }
    out
}

#[derive(Default)]
struct Collapser<'a> {
    out: Vec<String>,
    pending: Vec<&'a str>,
    parens: Vec<&'a str>,
    in_parens: bool,
}

impl<'a> Collapser<'a> {
    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let parts = std::mem::take(&mut self.pending);
            self.emit(parts);
        }
    }

    fn flush_parens(&mut self) {
        self.in_parens = false;
        if !self.parens.is_empty() {
            let parts = std::mem::take(&mut self.parens);
            self.emit(parts);
        }
    }

    fn emit(&mut self, parts: Vec<&'a str>) {
        let line = join_logical(&parts);
        if !line.trim().is_empty() {
            self.out.push(line);
        }
    }

    fn push_in_parens(&mut self, line: &'a str) {
        match find_unquoted(line, ')') {
            Some(close) => {
                self.parens.push(&line[..=close]);
                self.flush_parens();
                let rest = line[close + 1..].trim();
                if !rest.is_empty() {
                    self.pending.push(rest);
                }
            }
            None => self.parens.push(line),
        }
    }

    fn push(&mut self, line: &'a str) -> Result<(), DomainError> {
        if self.in_parens {
            self.push_in_parens(line);
            return Ok(());
        }

        if is_directive(line) {
            self.flush_pending();
            self.out.push(line.trim().to_string());
            return Ok(());
        }

        // A bare "(" always opens the record buffered before it.
        let continues = line.trim() == "("
            || (!self.pending.is_empty() && !looks_like_record_start(line)?);
        if !continues {
            self.flush_pending();
        }
        self.pending.push(line);

        match parens_of(line) {
            Parens::Closed => self.flush_pending(),
            Parens::Opened => {
                self.parens = std::mem::take(&mut self.pending);
                self.in_parens = true;
            }
            Parens::None => {}
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<String> {
        // Unclosed parentheses are kept as a best-effort record.
        if self.in_parens {
            debug!(fragments = self.parens.len(), "Unclosed parenthesis at end of zone file");
            self.flush_parens();
        }
        self.flush_pending();
        self.out
    }
}

pub fn collapse_multiline(lines: &[&str]) -> Result<Vec<String>, DomainError> {
    let mut collapser = Collapser::default();
    for &line in lines {
        collapser.push(line)?;
    }
    Ok(collapser.finish())
}

fn extract_origin(lines: Vec<String>) -> Result<(Vec<String>, Option<String>), DomainError> {
    let re = compiled(&ORIGIN_DIRECTIVE)?;
    let mut origin = None;
    let mut kept = Vec::with_capacity(lines.len());
    for line in lines {
        match re.captures(line.trim_start()).map_err(regex_error)? {
            Some(caps) => {
                if let Some(value) = caps.get(1) {
                    let value = value.as_str();
                    origin = Some(value.strip_suffix('.').unwrap_or(value).to_string());
                }
            }
            None => kept.push(line),
        }
    }
    Ok((kept, origin))
}

fn extract_ttl(lines: Vec<String>) -> Result<(Vec<String>, Option<u32>), DomainError> {
    let re = compiled(&TTL_DIRECTIVE)?;
    let mut ttl = None;
    let mut kept = Vec::with_capacity(lines.len());
    for line in lines {
        match re.captures(line.trim_start()).map_err(regex_error)? {
            Some(caps) => {
                if let Some(value) = caps.get(1).and_then(|m| m.as_str().parse().ok()) {
                    ttl = Some(value);
                }
            }
            None => kept.push(line),
        }
    }
    Ok((kept, ttl))
}
