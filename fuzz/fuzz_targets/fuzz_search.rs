#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use versefind::index::CorpusStore;
use versefind::query::SearchEngine;

#[derive(Arbitrary, Debug)]
struct Input {
    corpus: Vec<u8>,
    query: Option<String>,
    page: Option<String>,
}

fuzz_target!(|input: Input| {
    let engine = SearchEngine::new(CorpusStore::from_bytes(input.corpus), 3);
    if let Ok(page) = engine.search_params(input.query.as_deref(), input.page.as_deref()) {
        assert!(page.snippets.len() <= 3);
        assert_eq!(page.snippets.len(), page.offsets.len());
    }
});
