use super::*;
use ini_parse::MAX_SOURCE_LEN;
use facet_testhelpers::test;
use std::io::Cursor;

fn load_str(source: &str) -> Store {
    load(Cursor::new(source)).unwrap_or_else(|e| panic!("{}", e.render("test.ini", source)))
}

macro_rules! assert_rendered_contains {
    ($rendered:expr, $($needle:expr),+ $(,)?) => {{
        let stripped = String::from_utf8(strip_ansi_escapes::strip(&$rendered)).unwrap();
        $(
            assert!(
                stripped.contains($needle),
                "expected {:?} in:\n{}",
                $needle,
                stripped
            );
        )+
    }};
}

#[test]
fn test_unknown_keys_are_empty() {
    let store = Store::new();
    assert_eq!(store.get("", "foo"), "");
    assert_eq!(store.get("bar", "foo"), "");
    assert!(!store.has("", "foo"));
    assert!(!store.has("bar", "foo"));
}

#[test]
fn test_set_then_get() {
    let store = Store::new();
    store.set("", "foo", "bar");
    assert_eq!(store.get("", "foo"), "bar");
    assert!(store.has("", "foo"));

    store.set("", "foo", "baz");
    assert_eq!(store.get("", "foo"), "baz");
}

#[test]
fn test_empty_strings_are_stored() {
    let store = Store::new();
    store.set("", "", "");
    assert!(store.has("", ""));
    assert_eq!(store.get("", ""), "");

    store.set("s", "k", "");
    assert!(store.has("s", "k"));
    assert!(!store.has("s", "other"));
}

#[test]
fn test_new_store_has_only_default_section() {
    let store = Store::new();
    assert_eq!(store.sections(), vec![String::new()]);
    assert!(store.is_empty());
    assert_eq!(store.section(""), Some(Vec::new()));
    assert_eq!(store.section("missing"), None);
}

#[test]
fn test_insertion_order() {
    let store = Store::new();
    store.set("b", "z", "1");
    store.set("a", "y", "2");
    store.set("b", "x", "3");
    store.set("b", "z", "4");
    assert_eq!(store.sections(), vec!["", "b", "a"]);
    assert_eq!(store.keys("b"), vec!["z", "x"]);
    assert_eq!(
        store.section("b"),
        Some(vec![
            ("z".to_string(), "4".to_string()),
            ("x".to_string(), "3".to_string()),
        ])
    );
    assert_eq!(store.len(), 3);
}

#[test]
fn test_load_most_basic() {
    let store = load_str("foo=bar");
    assert_eq!(store.get("", "foo"), "bar");
}

#[test]
fn test_load_quoted_value() {
    let store = load_str(r#"foo="bar""#);
    assert_eq!(store.get("", "foo"), "bar");
}

#[test]
fn test_load_multi_line() {
    let store = load_str("foo=32\nbar=54");
    assert_eq!(store.get("", "foo"), "32");
    assert_eq!(store.get("", "bar"), "54");
}

#[test]
fn test_load_with_comment() {
    let store = load_str("foo=1\n; comment\nbar=2");
    assert_eq!(store.get("", "foo"), "1");
    assert_eq!(store.get("", "bar"), "2");
    assert_eq!(store.len(), 2);
}

#[test]
fn test_load_section() {
    let store = load_str("[sect]\nkey=val");
    assert_eq!(store.get("sect", "key"), "val");
    assert_eq!(store.get("", "key"), "");
    assert!(!store.has("", "key"));
}

#[test]
fn test_trailing_spaces_preserved() {
    let store = load_str("k=v   \n");
    assert_eq!(store.get("", "k"), "v   ");
}

#[test]
fn test_last_write_wins() {
    let store = load_str("[s]\nk=1\n[t]\nk=2\n[s]\nk=3");
    assert_eq!(store.get("s", "k"), "3");
    assert_eq!(store.get("t", "k"), "2");
    assert_eq!(store.sections(), vec!["", "s", "t"]);
}

#[test]
fn test_header_without_keys_creates_nothing() {
    let store = load_str("[empty]\n[full]\nk=v\n");
    assert_eq!(store.sections(), vec!["", "full"]);
}

#[test]
fn test_unterminated_section_fails() {
    let err = load(Cursor::new("[unterminated\nkey=val")).unwrap_err();
    let syntax = err.as_syntax().expect("syntax error");
    assert_eq!(syntax.kind, ParseErrorKind::UnterminatedSection);
    assert_eq!(syntax.position.line, 1);
    assert_eq!(syntax.position.column, 14);
    assert_eq!(
        err.to_string(),
        "syntax error: unterminated section header at 1:14"
    );
}

#[test]
fn test_failed_read_leaves_store_unchanged() {
    let store = Store::new();
    store.set("", "keep", "me");
    let err = store
        .read_from(Cursor::new("added=1\n[broken\n"))
        .unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
    assert!(!store.has("", "added"));
    assert_eq!(store.get("", "keep"), "me");
}

#[test]
fn test_read_from_merges() {
    let store = Store::new();
    store.set("", "a", "old");
    store.set("", "b", "kept");
    let read = store.read_from(Cursor::new("a=new\nc=3\n")).unwrap();
    assert_eq!(read, 10);
    assert_eq!(store.get("", "a"), "new");
    assert_eq!(store.get("", "b"), "kept");
    assert_eq!(store.keys(""), vec!["a", "b", "c"]);
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let err = load(Cursor::new(vec![b'k', b'=', 0xff, 0xfe])).unwrap_err();
    match err {
        Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_oversized_source_is_io_error() {
    use crate::store::check_source_len;

    assert!(check_source_len(0).is_ok());
    assert!(check_source_len(MAX_SOURCE_LEN).is_ok());
    let err = check_source_len(MAX_SOURCE_LEN + 1).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_unclosed_quote_does_not_fail_load() {
    let store = load_str("k=\"abc\nx=1\nmsg=it is a \"quote\n");
    assert_eq!(store.get("", "k"), "abc");
    assert_eq!(store.get("", "x"), "1");
    assert_eq!(store.get("", "msg"), "quote");
}

#[test]
fn test_from_str_and_parse() {
    let store: Store = "a=1\n[s]\nb=2".parse().unwrap();
    assert_eq!(store, parse("[s]\nb=2\n[]\na=1").unwrap());
    assert!("[s".parse::<Store>().is_err());
}

#[test]
fn test_clone_is_independent() {
    let store = Store::new();
    store.set("", "k", "1");
    let copy = store.clone();
    store.set("", "k", "2");
    assert_eq!(copy.get("", "k"), "1");
    assert_eq!(store.get("", "k"), "2");
    assert_ne!(copy, store);
}

#[test]
fn test_guards() {
    let store = Store::new();
    {
        let mut writer = store.write();
        writer.set("s", "a", "1");
        writer.set("s", "b", "2");
        assert!(writer.has("s", "a"));
        assert_eq!(writer.get("s", "b"), "2");
    }
    let reader = store.read();
    assert_eq!(reader.get("s", "a"), "1");
    assert_eq!(reader.sections().collect::<Vec<_>>(), vec!["", "s"]);
    assert_eq!(
        reader.entries("s").collect::<Vec<_>>(),
        vec![("a", "1"), ("b", "2")]
    );
    assert_eq!(reader.entries("missing").count(), 0);
    assert_eq!(reader.len(), 2);
}

#[test]
fn test_builder_as_callback() {
    let mut builder = StoreBuilder::new();
    ini_parse::Parser::new("x=1\n[s]\ny=2\ny=3")
        .parse(&mut builder)
        .unwrap();
    assert_eq!(builder.entries(), 3);
    let store = builder.build();
    assert_eq!(store.get("", "x"), "1");
    assert_eq!(store.get("s", "y"), "3");
}

#[test]
fn test_save_default_section_first() {
    let store = Store::new();
    store.set("PHP", "engine", "On");
    store.set("", "foobar", "absolute foobaritude");
    store.set("CLI Server", "cli_server.color", "On");
    insta::assert_snapshot!(store.to_ini_string(), @r#"
    foobar="absolute foobaritude"
    [PHP]
    engine="On"
    [CLI Server]
    cli_server.color="On"
    "#);
}

#[test]
fn test_save_returns_byte_count() {
    let store = Store::new();
    store.set("s", "k", "v");
    let mut out = Vec::new();
    let written = save(&store, &mut out).unwrap();
    assert_eq!(written, out.len() as u64);
    assert_eq!(out, b"[s]\nk=\"v\"\n");
}

#[test]
fn test_save_with_options() {
    let store = load_str("a=1\n[s]\nb= two words\n");
    let mut out = Vec::new();
    store
        .write_to_with_options(&mut out, FormatOptions::new().bare_when_possible().spaced_sections())
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a=1\n\n[s]\nb=two words\n");
}

#[test]
fn test_save_then_load_round_trip() {
    let source = r#"
foobar="absolute foobaritude"
[PHP]

;;;;;;;;;;;;;;;;;;;
; About php.ini   ;
;;;;;;;;;;;;;;;;;;;

engine = On
short_open_tag = Off
unserialize_callback_func =
error_log = /usr/local/var/log/php-error.log
[CLI Server]
cli_server.color = On
"#;
    let store = load_str(source);
    let reloaded = load_str(&store.to_ini_string());
    assert_eq!(reloaded, store);
    assert_eq!(reloaded.get("", "foobar"), "absolute foobaritude");
    assert_eq!(reloaded.get("PHP", "engine"), "On");
    assert_eq!(reloaded.get("CLI Server", "cli_server.color"), "On");
}

#[test]
fn test_render_unterminated_section() {
    let source = "a=1\n[server\nhost=x\n";
    let err = parse(source).unwrap_err();
    assert_rendered_contains!(
        err.render("test.ini", source),
        "unterminated section header",
        "test.ini",
        "close the section header",
    );
}

#[test]
fn test_render_quoted_key() {
    let source = "\"key\"=value";
    let err = parse(source).unwrap_err();
    assert_rendered_contains!(
        err.render("test.ini", source),
        "unexpected quoted string in key position",
        "only values can be quoted",
    );
}

#[test]
fn test_render_io_error() {
    let err = Error::from(std::io::Error::other("boom"));
    assert_eq!(err.render("test.ini", ""), "error: test.ini: boom");
}
