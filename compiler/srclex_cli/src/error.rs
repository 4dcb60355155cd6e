//! CLI failures: bad arguments and unreadable input.

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing file path")]
    MissingPath,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("{flag} expects two whitespace-separated markers, got '{value}'")]
    InvalidPair { flag: &'static str, value: String },
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
