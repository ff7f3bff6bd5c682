use super::*;
use pretty_assertions::assert_eq;

#[test]
fn resolve_escape_valid() {
    assert_eq!(resolve_escape('n'), Some('\n'));
    assert_eq!(resolve_escape('t'), Some('\t'));
    assert_eq!(resolve_escape('r'), Some('\r'));
    assert_eq!(resolve_escape('"'), Some('"'));
    assert_eq!(resolve_escape('\\'), Some('\\'));
    assert_eq!(resolve_escape('\''), Some('\''));
}

#[test]
fn resolve_escape_invalid() {
    assert_eq!(resolve_escape('q'), None);
    assert_eq!(resolve_escape('0'), None);
    assert_eq!(resolve_escape(' '), None);
}

#[test]
fn plain_string() {
    assert_eq!(scan_string(r#""hello" rest"#), Some(("hello".to_string(), 7)));
    assert_eq!(scan_string("''"), Some((String::new(), 2)));
}

#[test]
fn newline_escape() {
    let (value, consumed) = scan_string(r#""a\nb""#).unwrap_or_default();
    assert_eq!(value, "a\nb");
    assert_eq!(consumed, 6);
}

#[test]
fn escaped_delimiter() {
    assert_eq!(
        scan_string(r"'it\'s'"),
        Some(("it's".to_string(), 7))
    );
    assert_eq!(
        scan_string(r#""say \"hi\"""#),
        Some(("say \"hi\"".to_string(), 12))
    );
}

#[test]
fn other_quote_needs_no_escape() {
    assert_eq!(scan_string(r#""it's""#), Some(("it's".to_string(), 6)));
    assert_eq!(scan_string(r#"'"q"'"#), Some(("\"q\"".to_string(), 5)));
}

#[test]
fn all_escapes() {
    assert_eq!(
        scan_string(r#""\n\t\r\"\\\'""#).map(|(v, _)| v),
        Some("\n\t\r\"\\'".to_string())
    );
}

#[test]
fn unknown_escape_is_dropped() {
    assert_eq!(scan_string(r#""a\qb""#).map(|(v, _)| v), Some("ab".to_string()));
}

#[test]
fn unterminated() {
    assert_eq!(scan_string(r#""abc"#), None);
    assert_eq!(scan_string(r#""abc\""#), None);
    assert_eq!(scan_string("'abc\\"), None);
    assert_eq!(scan_string(""), None);
}

#[test]
fn multibyte_content() {
    assert_eq!(scan_string("'héllo'"), Some(("héllo".to_string(), 8)));
}
