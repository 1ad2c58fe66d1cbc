#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use versefind::query::SnippetBuilder;

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    offset: usize,
    match_len: u8,
}

fuzz_target!(|input: Input| {
    // Any offset, including ones past the end, must expand without panicking
    let builder = SnippetBuilder::new(&input.text);
    let spans = builder.expand(input.offset, input.match_len as usize);
    assert!(spans.full().end <= input.text.len());
    let _ = builder.build(input.offset, input.match_len as usize);
});
