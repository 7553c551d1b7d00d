use super::text::is_digits;

/// Leading fields of one logical record line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// `None` when the line omits its owner and inherits the previous one.
    pub name: Option<String>,
    pub ttl: Option<u32>,
    /// Uppercased type mnemonic.
    pub record_type: String,
    /// Everything after the type field, trimmed but otherwise untouched.
    pub rdata: String,
}

impl Token {
    /// Owner for this line, falling back to the inherited name.
    pub fn owner<'a>(&'a self, previous_name: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(previous_name)
    }
}

/// Split a logical line into `[name] [ttl] [IN] type rdata`.
///
/// A line starting with whitespace has no name. Otherwise the first field is
/// read as the name, unless it is the `IN` class or the rest of the line does
/// not yield a type, in which case the line is re-read as nameless. TTL and
/// class may appear in either order. Returns `None` for directives and lines
/// with no usable type field.
pub fn tokenize(line: &str) -> Option<Token> {
    let line = line.trim_end();
    let body = line.trim_start();
    if body.is_empty() || body.starts_with('$') {
        return None;
    }

    let fields = fields_of(line);
    let indented = line.len() != body.len();

    if !indented {
        if let Some(&(_, first)) = fields.first() {
            if !first.eq_ignore_ascii_case("IN") {
                if let Some(token) = read_record(line, &fields[1..], Some(first)) {
                    return Some(token);
                }
            }
        }
    }
    read_record(line, &fields, None)
}

fn read_record(line: &str, fields: &[(usize, &str)], name: Option<&str>) -> Option<Token> {
    let mut idx = 0;
    let mut ttl = None;
    let mut seen_ttl = false;
    let mut seen_class = false;

    loop {
        let &(_, field) = fields.get(idx)?;
        if !seen_ttl && is_digits(field) {
            // An out-of-range TTL is dropped rather than truncated.
            ttl = field.parse().ok();
            seen_ttl = true;
        } else if !seen_class && field.eq_ignore_ascii_case("IN") {
            seen_class = true;
        } else {
            break;
        }
        idx += 1;
    }

    let &(start, rtype) = fields.get(idx)?;
    if !is_type_mnemonic(rtype) {
        return None;
    }

    Some(Token {
        name: name.map(str::to_string),
        ttl,
        record_type: rtype.to_ascii_uppercase(),
        rdata: line[start + rtype.len()..].trim().to_string(),
    })
}

fn is_type_mnemonic(field: &str) -> bool {
    let mut chars = field.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Whitespace-separated fields with their byte offsets.
fn fields_of(line: &str) -> Vec<(usize, &str)> {
    let mut fields = Vec::new();
    let mut start = None;
    for (idx, ch) in line.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                fields.push((s, &line[s..idx]));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        fields.push((s, &line[s..]));
    }
    fields
}
