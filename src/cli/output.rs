use crate::{CheckResult, Finding, InputFailure};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    inputs_checked: usize,
    total_findings: usize,
    findings: Vec<&'a Finding>,
    errors: Vec<&'a InputFailure>,
}

/// `<source>:<line>:<column> <word>`
pub fn write_finding<W: Write>(out: &mut W, finding: &Finding) -> io::Result<()> {
    writeln!(out, "{}", finding)
}

pub fn write_failure<W: Write>(out: &mut W, failure: &InputFailure) -> io::Result<()> {
    writeln!(out, "{}", failure)
}

/// One input's block: its findings, then the failure that ended it, if any.
pub fn write_text<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    for finding in &result.findings {
        write_finding(out, finding)?;
    }
    if let Some(failure) = &result.failure {
        write_failure(out, failure)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, results: &[CheckResult]) -> io::Result<()> {
    let findings: Vec<&Finding> = results.iter().flat_map(|r| &r.findings).collect();
    let output = JsonOutput {
        inputs_checked: results.len(),
        total_findings: findings.len(),
        findings,
        errors: results.iter().filter_map(|r| r.failure.as_ref()).collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)
}

pub fn summary_line(total_findings: usize, inputs: usize) -> String {
    let input_word = if inputs == 1 { "input" } else { "inputs" };
    match total_findings {
        0 => format!("✓ No misspellings found in {} {}", inputs, input_word),
        1 => format!("✗ 1 misspelling found in {} {}", inputs, input_word),
        n => format!("✗ {} misspellings found in {} {}", n, inputs, input_word),
    }
}

/// Printed on stderr so the findings stream stays machine-readable.
pub fn print_summary(total_findings: usize, inputs: usize) {
    let line = summary_line(total_findings, inputs);
    if total_findings == 0 {
        eprintln!("{}", line.green().bold());
    } else {
        eprintln!("{}", line.red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureStage;

    fn finding(source: &str, line: usize, column: usize, word: &str) -> Finding {
        Finding {
            source: source.to_string(),
            line,
            column,
            word: word.to_string(),
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_text_block() {
        let result = CheckResult {
            findings: vec![finding("a.txt", 1, 1, "Teh"), finding("a.txt", 3, 7, "wrod")],
            failure: Some(InputFailure {
                source: "a.txt".to_string(),
                stage: FailureStage::Read,
                message: "boom".to_string(),
            }),
        };

        let mut out = Vec::new();
        write_text(&mut out, &result).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a.txt:1:1 Teh\na.txt:3:7 wrod\ncannot read file: a.txt\n"
        );
    }

    #[test]
    fn test_json_document() {
        let results = vec![
            CheckResult {
                findings: vec![finding("a.txt", 2, 4, "Teh")],
                failure: None,
            },
            CheckResult {
                findings: Vec::new(),
                failure: Some(InputFailure {
                    source: "gone.txt".to_string(),
                    stage: FailureStage::Open,
                    message: "No such file".to_string(),
                }),
            },
        ];

        let mut out = Vec::new();
        write_json(&mut out, &results).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["inputs_checked"], 2);
        assert_eq!(value["total_findings"], 1);
        assert_eq!(value["findings"][0]["file"], "a.txt");
        assert_eq!(value["findings"][0]["line"], 2);
        assert_eq!(value["findings"][0]["column"], 4);
        assert_eq!(value["findings"][0]["word"], "Teh");
        assert_eq!(value["errors"][0]["file"], "gone.txt");
        assert_eq!(value["errors"][0]["stage"], "open");
    }

    #[test]
    fn test_summary_wording() {
        assert_eq!(summary_line(0, 1), "✓ No misspellings found in 1 input");
        assert_eq!(summary_line(1, 2), "✗ 1 misspelling found in 2 inputs");
        assert_eq!(summary_line(5, 3), "✗ 5 misspellings found in 3 inputs");
    }
}
