pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;

pub use checker::dictionary::Dictionary;
pub use checker::SpellChecker;
pub use config::Config;
pub use error::SpellError;

use serde::Serialize;
use std::fmt;

/// A word missing from the dictionary, in its original case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    #[serde(rename = "file")]
    pub source: String,
    pub line: usize,
    pub column: usize,
    pub word: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{} {}", self.source, self.line, self.column, self.word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    Open,
    Read,
}

/// Why an input was skipped or cut short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFailure {
    #[serde(rename = "file")]
    pub source: String,
    pub stage: FailureStage,
    pub message: String,
}

impl fmt::Display for InputFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            FailureStage::Open => write!(f, "cannot open file: {}", self.source),
            FailureStage::Read => write!(f, "cannot read file: {}", self.source),
        }
    }
}

/// Everything one input produced, in scan order.
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub findings: Vec<Finding>,
    pub failure: Option<InputFailure>,
}
