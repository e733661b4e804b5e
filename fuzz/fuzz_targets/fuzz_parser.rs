#![no_main]

use libfuzzer_sys::fuzz_target;
use rawjson::tree;

fuzz_target!(|data: &[u8]| {
    // The cursor requires a NUL-terminated buffer; arbitrary fuzz input
    // carries no such guarantee, and a parse mutates its buffer in place, so
    // each run gets its own owned copy with the sentinel appended.
    let mut buf = data.to_vec();
    buf.push(0);
    let Some(mut cursor) = rawjson::Cursor::new(&mut buf) else {
        return;
    };

    let Ok(tree) = tree::parse(&mut cursor) else {
        return;
    };

    // Anything the builder accepted must also print without panicking.
    let mut out = String::new();
    tree::print(&mut out, &tree).expect("formatting into a String never fails");
});
