//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;
use versefind::index::CorpusStore;
use versefind::query::SearchEngine;

/// A small play: 30 scenes, two sword mentions each, with markup-significant
/// characters near every match
pub fn corpus() -> String {
    let mut text = String::from("THE TRAGEDY OF HAMLET, PRINCE OF DENMARK\n\n");
    for scene in 0..30 {
        text.push_str(&format!(
            "SCENE {scene}. A hall in the castle.\n\
             Enter a soldier with a Sword. He lays the sword on the table & waits.\n\
             <Exit> \"quietly\", says the guard.\n\n"
        ));
    }
    text.push_str("FINIS.\n");
    text
}

pub fn engine(page_size: usize) -> Arc<SearchEngine> {
    let store = CorpusStore::from_bytes(corpus().into_bytes());
    Arc::new(SearchEngine::new(store, page_size))
}
