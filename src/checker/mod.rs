pub mod dictionary;
pub mod normalize;
pub mod tokenizer;

use crate::error::Result;
use crate::input::Input;
use crate::{CheckResult, Config, FailureStage, Finding, InputFailure};
use dictionary::Dictionary;
use normalize::{is_symbols_only, normalize_in_place};
use std::io::{self, Read};
use std::path::Path;
use tokenizer::{Token, Tokens};
use tracing::{debug, warn};

pub struct SpellChecker {
    dictionary: Dictionary,
    max_word_len: usize,
}

impl SpellChecker {
    pub fn new(dictionary_path: &Path, config: &Config) -> Result<Self> {
        config.validate()?;
        let dictionary = Dictionary::load_from_path(dictionary_path, config)?;
        Ok(Self::with_dictionary(dictionary, config))
    }

    pub fn with_dictionary(dictionary: Dictionary, config: &Config) -> Self {
        Self {
            dictionary,
            max_word_len: config.max_word_len.max(1),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Lazily scan `reader`, yielding misspellings in the order they appear.
    pub fn findings<'a, R: Read>(&'a self, source: &'a str, reader: R) -> Findings<'a, R> {
        Findings {
            checker: self,
            source,
            tokens: Tokens::new(reader, self.max_word_len),
        }
    }

    /// Scan an in-memory buffer.
    pub fn check_bytes(&self, source: &str, bytes: &[u8]) -> Vec<Finding> {
        self.findings(source, bytes)
            .filter_map(|finding| finding.ok())
            .collect()
    }

    /// Open and fully scan one input, capturing any failure instead of
    /// returning it.
    pub fn check_input(&self, input: &Input) -> CheckResult {
        let mut findings = Vec::new();
        let failure = self
            .check_input_with(input, |finding| {
                findings.push(finding);
                Ok(())
            })
            .unwrap_or_default();
        CheckResult { findings, failure }
    }

    /// Scan one input, handing each finding to `sink` as soon as it is found.
    ///
    /// Open and read failures are returned as an [`InputFailure`]; only errors
    /// raised by `sink` itself come back as `Err`.
    pub fn check_input_with<F>(
        &self,
        input: &Input,
        mut sink: F,
    ) -> io::Result<Option<InputFailure>>
    where
        F: FnMut(Finding) -> io::Result<()>,
    {
        let source = input.name();

        let reader = match input.open() {
            Ok(reader) => reader,
            Err(e) => {
                warn!(input = %source, error = %e, "skipping input");
                return Ok(Some(InputFailure {
                    source,
                    stage: FailureStage::Open,
                    message: e.to_string(),
                }));
            }
        };

        debug!(input = %source, "scanning");
        let mut count = 0usize;
        for finding in self.findings(&source, reader) {
            match finding {
                Ok(finding) => {
                    sink(finding)?;
                    count += 1;
                }
                Err(e) => {
                    warn!(input = %source, error = %e, "read failed");
                    return Ok(Some(InputFailure {
                        source: source.clone(),
                        stage: FailureStage::Read,
                        message: e.to_string(),
                    }));
                }
            }
        }
        debug!(input = %source, findings = count, "done");

        Ok(None)
    }

    fn evaluate(&self, source: &str, token: Token) -> Option<Finding> {
        let mut folded = token.text.clone();
        normalize_in_place(&mut folded);

        if is_symbols_only(&folded) || self.dictionary.contains_normalized(&folded) {
            return None;
        }

        Some(Finding {
            source: source.to_string(),
            line: token.line,
            column: token.column,
            // token bytes are ASCII letters and hyphens only
            word: token.text.iter().map(|&b| b as char).collect(),
        })
    }
}

/// Iterator returned by [`SpellChecker::findings`].
pub struct Findings<'a, R> {
    checker: &'a SpellChecker,
    source: &'a str,
    tokens: Tokens<R>,
}

impl<R: Read> Iterator for Findings<'_, R> {
    type Item = io::Result<Finding>;

    fn next(&mut self) -> Option<Self::Item> {
        for token in self.tokens.by_ref() {
            match token {
                Ok(token) => {
                    if let Some(finding) = self.checker.evaluate(self.source, token) {
                        return Some(Ok(finding));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}
