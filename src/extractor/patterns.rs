// file: src/extractor/patterns.rs
// description: compiled regex patterns for normalization, segmentation and noise detection
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::{Regex, RegexSet, RegexSetBuilder};

/// Signatures of log, trace and code output. Matched case-insensitively.
pub const NOISE_SIGNATURES: &[(&str, &str)] = &[
    ("traceback", r"Traceback"),
    ("file_reference", r"File "),
    ("failure_marker", r"FAILED"),
    ("test_identifier", r"test_"),
    ("tests_path", r"tests/"),
    ("usr_path", r"/usr/"),
    ("backslash", r"\\"),
    ("venv_path", r"venv/"),
    ("python_lib", r"lib/python"),
    ("site_packages", r"site-packages"),
    ("deprecation", r"DeprecationWarning"),
    ("assertion", r"assert "),
    ("equals_rule", r"=+ "),
    ("dash_rule", r"-{5,}"),
    ("code_fence", r"```"),
];

lazy_static! {
    // Fenced code blocks, spanning lines, shortest match
    pub static ref CODE_FENCE: Regex = Regex::new(
        r"(?s)```.*?```"
    ).expect("CODE_FENCE regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s{2,}"
    ).expect("WHITESPACE_RUN regex is valid");

    // Group 1 is the terminal punctuation that stays with the preceding unit
    pub static ref SENTENCE_BOUNDARY: Regex = Regex::new(
        r"([.!?;:])\s+|\n+"
    ).expect("SENTENCE_BOUNDARY regex is valid");

    pub static ref NOISE_SET: RegexSet = RegexSetBuilder::new(
        NOISE_SIGNATURES.iter().map(|(_, pattern)| *pattern)
    )
    .case_insensitive(true)
    .build()
    .expect("NOISE_SET regexes are valid");
}
