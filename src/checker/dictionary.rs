use super::normalize::{normalize, normalize_in_place};
use crate::config::Config;
use crate::error::{Result, SpellError};
use fst::Set;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use super::tokenizer::READ_CHUNK;

/// Set of normalized words. Built once, read-only afterwards.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load a newline-delimited word list from disk.
    pub fn load_from_path(path: &Path, config: &Config) -> Result<Self> {
        let file = File::open(path).map_err(|source| SpellError::DictionaryUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::read_from(file, path, config)?;
        debug!(
            path = %path.display(),
            words = dictionary.len(),
            "dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Load a word list from any reader, e.g. an in-memory buffer.
    pub fn from_reader<R: Read>(reader: R, config: &Config) -> Result<Self> {
        Self::read_from(reader, Path::new("<reader>"), config)
    }

    /// Build from already-split words. No length or capacity bounds apply.
    pub fn from_words<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let entries = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self::build(entries)
    }

    /// True iff the case-folded `word` is an entry.
    pub fn contains(&self, word: &[u8]) -> bool {
        if word.iter().any(u8::is_ascii_uppercase) {
            self.set.contains(normalize(word))
        } else {
            self.set.contains(word)
        }
    }

    /// Lookup for a word the caller has already normalized.
    pub fn contains_normalized(&self, word: &[u8]) -> bool {
        self.set.contains(word)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    // Lines end at `\n` or `\r`, so `\r\n` leaves an empty line that is skipped.
    fn read_from<R: Read>(mut reader: R, path: &Path, config: &Config) -> Result<Self> {
        let unreadable = |source: io::Error| SpellError::DictionaryUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let mut loader = Loader::new(config);
        let mut chunk = vec![0; READ_CHUNK];
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(unreadable(e)),
            };
            for &byte in &chunk[..n] {
                loader.push(byte)?;
            }
        }
        loader.end_line()?;

        Self::build(loader.entries)
    }

    fn build(mut entries: Vec<Vec<u8>>) -> Result<Self> {
        entries.sort_unstable();
        entries.dedup();
        let set = Set::from_iter(entries)?;
        Ok(Self { set })
    }
}

struct Loader {
    max_word_len: usize,
    max_words: usize,
    word: Vec<u8>,
    entries: Vec<Vec<u8>>,
}

impl Loader {
    fn new(config: &Config) -> Self {
        Self {
            max_word_len: config.max_word_len,
            max_words: config.max_words,
            word: Vec::new(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, byte: u8) -> Result<()> {
        if byte == b'\n' || byte == b'\r' {
            self.end_line()
        } else {
            if self.word.len() < self.max_word_len {
                self.word.push(byte);
            }
            Ok(())
        }
    }

    fn end_line(&mut self) -> Result<()> {
        if self.word.is_empty() {
            return Ok(());
        }
        if self.max_words != 0 && self.entries.len() >= self.max_words {
            return Err(SpellError::DictionaryCapacityExceeded {
                limit: self.max_words,
            });
        }
        let mut word = std::mem::take(&mut self.word);
        normalize_in_place(&mut word);
        self.entries.push(word);
        Ok(())
    }
}
