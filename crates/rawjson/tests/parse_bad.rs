//! Black-box tests for spec.md §7's four error families and §8's boundary
//! behaviors, driven through the tree-builder surface.

use rawjson::{event::EventSink, leaf::DefaultNumbers, parser, tree, Cursor, JsonError, Leaf, LexicalError, NumberPolicy, StrSlice, StructuralError, SurrogateError};

fn try_build(src: &str) -> Result<(), JsonError> {
    let mut buf = src.as_bytes().to_vec();
    buf.push(0);
    let mut cursor = Cursor::new(&mut buf).unwrap();
    tree::parse(&mut cursor).map(|_| ())
}

/// An event sink that discards everything, for tests that only care whether
/// the recursive parser accepts or rejects a given input.
struct NullSink;

impl<'b> EventSink<'b> for NullSink {
    type Numbers = DefaultNumbers;
    fn leaf(&mut self, _leaf: Leaf<'b, <DefaultNumbers as NumberPolicy<'b>>::Number>) {}
    fn begin(&mut self, _in_array: bool) {}
    fn array_entry(&mut self) {}
    fn object_entry(&mut self, _key: StrSlice<'b>) {}
    fn end(&mut self, _in_array: bool) {}
}

fn try_build_recursive(src: &str) -> Result<(), JsonError> {
    let mut buf = src.as_bytes().to_vec();
    buf.push(0);
    let mut cursor = Cursor::new(&mut buf).unwrap();
    parser::recursive::parse(&mut cursor, &mut NullSink)
}

#[test]
fn rejects_lone_high_surrogate() {
    assert_eq!(
        try_build(r#""\uD834""#),
        Err(JsonError::Surrogate(SurrogateError::MissingLowSurrogate))
    );
}

#[test]
fn rejects_lone_low_surrogate() {
    assert_eq!(
        try_build(r#""\uDD1E""#),
        Err(JsonError::Surrogate(SurrogateError::UnpairedLowSurrogate))
    );
}

#[test]
fn rejects_integer_one_past_the_boundary() {
    assert_eq!(
        try_build("9223372036854775808"),
        Err(JsonError::NumericOverflow)
    );
    assert_eq!(
        try_build("-9223372036854775809"),
        Err(JsonError::NumericOverflow)
    );
}

#[test]
fn rejects_missing_colon() {
    // Both parsers now track whether the enclosing composite is an array
    // or an object (`KindStack` in `parser::stackless`), so both report the
    // same precise error instead of the stackless parser falling back to a
    // generic comma/close violation.
    assert_eq!(
        try_build_recursive(r#"{"a" 1}"#),
        Err(JsonError::Structural(StructuralError::ExpectedColon))
    );
    assert_eq!(
        try_build(r#"{"a" 1}"#),
        Err(JsonError::Structural(StructuralError::ExpectedColon))
    );
}

#[test]
fn rejects_bare_string_member_with_no_colon_in_object() {
    // A colon-less string as an object's only member used to be
    // misrouted into the array-entry path by the stackless parser (it
    // tracked no composite kind to tell the two cases apart), which made
    // `TreeBuilder::deliver` panic on a missing pending key instead of
    // returning an error. Both parsers now reject it as a missing `:`.
    assert_eq!(
        try_build(r#"{"a"}"#),
        Err(JsonError::Structural(StructuralError::ExpectedColon))
    );
    assert_eq!(
        try_build_recursive(r#"{"a"}"#),
        Err(JsonError::Structural(StructuralError::ExpectedColon))
    );
}

#[test]
fn rejects_missing_comma_or_close() {
    assert!(matches!(
        try_build("[1 2]"),
        Err(JsonError::Structural(StructuralError::ExpectedCommaOrClose))
    ));
    assert!(matches!(
        try_build(r#"{"a":1 "b":2}"#),
        Err(JsonError::Structural(StructuralError::ExpectedCommaOrClose))
    ));
}

#[test]
fn rejects_mismatched_brackets() {
    // `[1}` and `{"a":1]` used to be accepted by the stackless parser: its
    // closing loop accepted whichever of `]`/`}` came next for *any* open
    // composite, with no per-level record of which bracket opened it.
    for src in [r#"[1}"#, r#"{"a":1]"#, r#"[{"a":1}]]"#, r#"[[1}]"#] {
        assert!(
            matches!(
                try_build(src),
                Err(JsonError::Structural(StructuralError::ExpectedCommaOrClose))
            ),
            "expected {src:?} to be rejected as a bracket mismatch"
        );
        assert!(
            try_build_recursive(src).is_err(),
            "recursive parser should also reject {src:?}"
        );
    }
}

#[test]
fn rejects_empty_input() {
    assert_eq!(
        try_build(""),
        Err(JsonError::Structural(StructuralError::ExpectedValue))
    );
}

#[test]
fn rejects_garbage_token() {
    assert_eq!(
        try_build("nul"),
        Err(JsonError::Lexical(LexicalError::UnexpectedByte))
    );
}

#[test]
fn rejects_unterminated_string() {
    assert_eq!(
        try_build(r#""abc"#),
        Err(JsonError::Lexical(LexicalError::UnterminatedString))
    );
}

#[test]
fn rejects_control_byte_0x1f_but_allows_del() {
    let mut control = b"\"a".to_vec();
    control.push(0x1F);
    control.extend_from_slice(b"b\"");
    assert!(matches!(
        try_build(std::str::from_utf8(&control).unwrap()),
        Err(JsonError::Lexical(LexicalError::IllegalControlByte))
    ));

    let mut del = b"\"a".to_vec();
    del.push(0x7F);
    del.extend_from_slice(b"b\"");
    assert!(try_build(std::str::from_utf8(&del).unwrap()).is_ok());
}

#[test]
fn rejects_trailing_data_is_not_enforced_by_the_single_value_surface() {
    // `tree::parse` only parses one value and stops; trailing bytes are the
    // caller's concern (spec.md §3: "cursor ... points just past that
    // value's last byte"). `tree::parse_document` below is the surface that
    // does enforce it.
    assert!(try_build("1 2").is_ok());
}

#[test]
fn parse_document_rejects_trailing_data() {
    let mut buf = b"1 2".to_vec();
    buf.push(0);
    let mut cursor = Cursor::new(&mut buf).unwrap();
    assert_eq!(
        tree::parse_document(&mut cursor),
        Err(JsonError::Structural(StructuralError::TrailingData))
    );
}

#[test]
fn parse_document_accepts_trailing_whitespace_only() {
    let mut buf = b"1 \n\t ".to_vec();
    buf.push(0);
    let mut cursor = Cursor::new(&mut buf).unwrap();
    assert!(tree::parse_document(&mut cursor).is_ok());
}
