use bindzone_domain::DomainError;
use fancy_regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

pub(crate) type Pattern = LazyLock<Result<Regex, String>>;

/// Resolve a lazily compiled pattern, surfacing a compile failure as an error
/// rather than a panic.
pub(crate) fn compiled(pattern: &'static Pattern) -> Result<&'static Regex, DomainError> {
    pattern
        .as_ref()
        .map_err(|e| DomainError::ZoneParse(format!("invalid pattern: {}", e)))
}

pub(crate) fn regex_error(e: fancy_regex::Error) -> DomainError {
    DomainError::ZoneParse(e.to_string())
}

static QUOTED_SEGMENT: Pattern =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)""#).map_err(|e| e.to_string()));

/// Base-10 parse of the leading digit run. Anything unparseable is `0`.
///
/// `"10abc"` gives 10, `"abc"`, `"-5"` and values that overflow `T` give 0.
pub fn parse_int<T: FromStr + Default>(text: &str) -> T {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().unwrap_or_default()
}

pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

pub fn strip_trailing_dot(text: &str) -> String {
    let text = text.trim();
    text.strip_suffix('.').unwrap_or(text).to_string()
}

pub fn ensure_trailing_dot(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() || text.ends_with('.') {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

/// Drop any `\` escape, keeping the escaped character.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Concatenation of every double-quoted segment, unescaped. `None` when the
/// text holds no quoted segment at all.
pub fn concat_quoted(text: &str) -> Result<Option<String>, DomainError> {
    let re = compiled(&QUOTED_SEGMENT)?;
    let mut found = false;
    let mut out = String::new();
    for caps in re.captures_iter(text) {
        let caps = caps.map_err(regex_error)?;
        found = true;
        if let Some(segment) = caps.get(1) {
            out.push_str(&unescape(segment.as_str()));
        }
    }
    Ok(found.then_some(out))
}

/// TXT payload: quoted segments joined, or the raw text when unquoted.
pub fn txt_content(rdata: &str) -> Result<String, DomainError> {
    Ok(concat_quoted(rdata)?.unwrap_or_else(|| rdata.trim().to_string()))
}

/// Whitespace split that keeps `"..."` spans (and the quotes) inside one field.
pub fn split_fields_quoted(text: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start: Option<usize> = None;
    let mut in_quotes = false;
    let mut prev = None;

    for (idx, ch) in text.char_indices() {
        if ch == '"' && prev != Some('\\') {
            in_quotes = !in_quotes;
        }
        if ch.is_whitespace() && !in_quotes {
            if let Some(s) = start.take() {
                fields.push(&text[s..idx]);
            }
        } else if start.is_none() {
            start = Some(idx);
        }
        prev = Some(ch);
    }
    if let Some(s) = start {
        fields.push(&text[s..]);
    }
    fields
}

/// `key=value` / `key="value"` pair; a bare key has an empty value.
pub fn split_param(field: &str) -> (&str, &str) {
    match field.split_once('=') {
        Some((key, value)) => (key, value.trim_matches('"')),
        None => (field, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_leading_digits() {
        assert_eq!(parse_int::<u16>("10"), 10);
        assert_eq!(parse_int::<u16>(" 10abc"), 10);
        assert_eq!(parse_int::<u16>("abc"), 0);
        assert_eq!(parse_int::<u16>("-5"), 0);
        assert_eq!(parse_int::<u8>("300"), 0);
        assert_eq!(parse_int::<u32>(""), 0);
    }

    #[test]
    fn test_trailing_dot_helpers() {
        assert_eq!(strip_trailing_dot("mail.example.com."), "mail.example.com");
        assert_eq!(strip_trailing_dot(" host "), "host");
        assert_eq!(ensure_trailing_dot("ns1.example.com"), "ns1.example.com.");
        assert_eq!(ensure_trailing_dot("ns1.example.com."), "ns1.example.com.");
        assert_eq!(ensure_trailing_dot(""), "");
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r#"say \"hi\""#), r#"say "hi""#);
        assert_eq!(unescape(r"a\;b"), "a;b");
        assert_eq!(unescape(r"trailing\"), "trailing");
    }

    #[test]
    fn test_concat_quoted() {
        assert_eq!(
            concat_quoted(r#""ab" "cd""#).unwrap(),
            Some("abcd".to_string())
        );
        assert_eq!(
            concat_quoted(r#""with \"escape\"""#).unwrap(),
            Some(r#"with "escape""#.to_string())
        );
        assert_eq!(concat_quoted("hello world").unwrap(), None);
        assert_eq!(concat_quoted(r#""""#).unwrap(), Some(String::new()));
    }

    #[test]
    fn test_split_fields_quoted() {
        assert_eq!(
            split_fields_quoted(r#"alpn="h2 h3" port=443"#),
            vec![r#"alpn="h2 h3""#, "port=443"]
        );
        assert!(split_fields_quoted("   ").is_empty());
    }

    #[test]
    fn test_split_param() {
        assert_eq!(split_param(r#"alpn="h2,h3""#), ("alpn", "h2,h3"));
        assert_eq!(split_param("port=443"), ("port", "443"));
        assert_eq!(split_param("no-default-alpn"), ("no-default-alpn", ""));
    }
}
