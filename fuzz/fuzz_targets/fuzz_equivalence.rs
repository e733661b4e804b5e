#![no_main]

use libfuzzer_sys::fuzz_target;
use rawjson::{
    leaf::DefaultNumbers, parser, Cursor, EventSink, Leaf, NumberPolicy, NumberValue, StrSlice,
};

/// Records every event it receives as an owned, comparable value, so two
/// independent parses can be diffed with plain `assert_eq!` — the
/// fuzz-equivalence property spec.md §8 names directly: "the recursive and
/// stackless parsers emit byte-identical event sequences for every accepted
/// input".
#[derive(Debug, Clone, PartialEq)]
enum Recorded {
    Leaf(RecordedLeaf),
    Begin(bool),
    ArrayEntry,
    ObjectEntry(String),
    End(bool),
}

#[derive(Debug, Clone, PartialEq)]
enum RecordedLeaf {
    Null,
    Bool(bool),
    Number(NumberValue),
    Str(String),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Recorded>,
}

impl<'b> EventSink<'b> for Recorder {
    type Numbers = DefaultNumbers;

    fn leaf(&mut self, leaf: Leaf<'b, <DefaultNumbers as NumberPolicy<'b>>::Number>) {
        let recorded = match leaf {
            Leaf::Null => RecordedLeaf::Null,
            Leaf::Bool(b) => RecordedLeaf::Bool(b),
            Leaf::Number(n) => RecordedLeaf::Number(n),
            Leaf::Str(s) => RecordedLeaf::Str(s.as_str().to_owned()),
        };
        self.events.push(Recorded::Leaf(recorded));
    }

    fn begin(&mut self, in_array: bool) {
        self.events.push(Recorded::Begin(in_array));
    }

    fn array_entry(&mut self) {
        self.events.push(Recorded::ArrayEntry);
    }

    fn object_entry(&mut self, key: StrSlice<'b>) {
        self.events
            .push(Recorded::ObjectEntry(key.as_str().to_owned()));
    }

    fn end(&mut self, in_array: bool) {
        self.events.push(Recorded::End(in_array));
    }
}

fuzz_target!(|data: &[u8]| {
    // Each parser gets its own buffer copy: both mutate the bytes they read
    // (string escape rewriting), and the two runs must not interfere.
    let mut recursive_buf = data.to_vec();
    recursive_buf.push(0);
    let mut stackless_buf = data.to_vec();
    stackless_buf.push(0);

    let (Some(mut recursive_cursor), Some(mut stackless_cursor)) = (
        Cursor::new(&mut recursive_buf),
        Cursor::new(&mut stackless_buf),
    ) else {
        return;
    };

    let mut recursive_sink = Recorder::default();
    let recursive_result = parser::recursive::parse(&mut recursive_cursor, &mut recursive_sink);

    let mut stackless_sink = Recorder::default();
    let stackless_result = parser::stackless::parse(&mut stackless_cursor, &mut stackless_sink);

    assert_eq!(
        recursive_result.is_ok(),
        stackless_result.is_ok(),
        "parsers disagreed on accept/reject for {data:?}"
    );
    if recursive_result.is_ok() {
        assert_eq!(
            recursive_sink.events, stackless_sink.events,
            "parsers produced different event traces for {data:?}"
        );
    }
});
