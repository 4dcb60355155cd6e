//! `srclex lex` argument parsing.
//!
//! Options use `--flag=value`. List values (`--keywords`, `--symbols`) and
//! marker pairs (`--string`, `--block-comment`) are whitespace-separated, so
//! a symbol such as `,` can be configured without escaping.

use srclex::LexerConfig;

use crate::error::CliError;

/// Everything `srclex lex` was asked to do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Source file, or `-` for stdin.
    pub path: String,
    pub keywords: Vec<String>,
    pub symbols: Vec<String>,
    pub string_delimiters: Option<(String, String)>,
    pub line_comment: Option<String>,
    pub block_comment: Option<(String, String)>,
}

impl LexOptions {
    pub fn to_config(&self) -> LexerConfig {
        let mut config = LexerConfig::new()
            .with_keywords(&self.keywords)
            .with_symbols(&self.symbols);
        if let Some((open, close)) = &self.string_delimiters {
            config = config.with_string_delimiters(open.as_str(), close.as_str());
        }
        if let Some(marker) = &self.line_comment {
            config = config.with_line_comment(marker.as_str());
        }
        if let Some((open, close)) = &self.block_comment {
            config = config.with_block_comment(open.as_str(), close.as_str());
        }
        config
    }
}

/// Parse the arguments following `lex`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--keywords=") {
            options.keywords = split_list(value);
        } else if let Some(value) = arg.strip_prefix("--symbols=") {
            options.symbols = split_list(value);
        } else if let Some(value) = arg.strip_prefix("--string=") {
            options.string_delimiters = Some(split_pair("--string", value)?);
        } else if let Some(value) = arg.strip_prefix("--line-comment=") {
            options.line_comment = Some(value.to_owned());
        } else if let Some(value) = arg.strip_prefix("--block-comment=") {
            options.block_comment = Some(split_pair("--block-comment", value)?);
        } else if arg.starts_with("--") {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    options.path = path.ok_or(CliError::MissingPath)?;
    Ok(options)
}

fn split_list(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_owned).collect()
}

fn split_pair(flag: &'static str, value: &str) -> Result<(String, String), CliError> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(open), Some(close), None) => Ok((open.to_owned(), close.to_owned())),
        _ => Err(CliError::InvalidPair {
            flag,
            value: value.to_owned(),
        }),
    }
}
