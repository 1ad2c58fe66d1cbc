//! Corpus storage
//!
//! Loads the corpus once, keeps it immutable for the life of the process and
//! builds the suffix index over its case-folded copy.

use crate::error::CorpusError;
use crate::index::suffix_array::{SuffixArrayBuilder, SuffixIndex};
use crate::utils::progress;
use memmap2::Mmap;
use serde::Serialize;
use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Raw corpus bytes, either mapped from disk or owned
enum CorpusBytes {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for CorpusBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            CorpusBytes::Mapped(mmap) => mmap,
            CorpusBytes::Owned(bytes) => bytes,
        }
    }
}

/// Summary of a loaded corpus and its index
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub path: Option<PathBuf>,
    pub bytes: usize,
    pub lines: usize,
    pub suffix_count: u64,
    pub case_insensitive: bool,
    pub build_ms: f64,
    pub memory_bytes: usize,
}

/// The immutable corpus together with its suffix index
///
/// Built once before serving and shared by reference afterwards.
pub struct CorpusStore {
    text: CorpusBytes,
    index: SuffixIndex,
    path: Option<PathBuf>,
}

impl CorpusStore {
    /// Load a corpus file and index it
    pub fn open(path: &Path) -> Result<Self, CorpusError> {
        Self::open_with_progress(path, false)
    }

    /// Load a corpus file and index it, optionally showing a spinner
    pub fn open_with_progress(path: &Path, show_progress: bool) -> Result<Self, CorpusError> {
        let file = File::open(path).map_err(|source| CorpusError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let len = file
            .metadata()
            .map_err(|source| CorpusError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        // Zero-length mappings are rejected by the OS
        let text = if len == 0 {
            CorpusBytes::Owned(Vec::new())
        } else {
            // The corpus file is treated as read-only for the process lifetime
            let mmap = unsafe { Mmap::map(&file) }.map_err(|source| CorpusError::Map {
                path: path.to_path_buf(),
                source,
            })?;
            CorpusBytes::Mapped(mmap)
        };

        tracing::info!(path = %path.display(), bytes = text.len(), "corpus loaded");

        Ok(Self::build(text, Some(path.to_path_buf()), show_progress))
    }

    /// Index an in-memory corpus
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::build(CorpusBytes::Owned(bytes.into()), None, false)
    }

    fn build(text: CorpusBytes, path: Option<PathBuf>, show_progress: bool) -> Self {
        let spinner = show_progress.then(|| progress::spinner(format!("Indexing {} bytes...", text.len())));

        let mut builder = SuffixArrayBuilder::with_defaults();
        builder.push(&text);
        let index = builder.build();

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        tracing::info!(
            suffixes = index.meta().suffix_count,
            build_ms = index.meta().build_ms,
            "suffix index built"
        );

        Self { text, index, path }
    }

    /// Original corpus bytes
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    #[inline]
    pub fn index(&self) -> &SuffixIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn stats(&self) -> CorpusStats {
        let meta = self.index.meta();
        CorpusStats {
            path: self.path.clone(),
            bytes: self.text.len(),
            lines: memchr::memchr_iter(b'\n', &self.text).count(),
            suffix_count: meta.suffix_count,
            case_insensitive: meta.case_insensitive,
            build_ms: meta.build_ms,
            memory_bytes: self.index.memory_bytes(),
        }
    }
}
