//! Loading and saving the documents the CLI operates on.

use crate::errors::{AccessError, TraversalFailure};
use crate::value::{Record, Value};
use miette::Diagnostic;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(keypath::cli::read))]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(keypath::cli::write))]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse '{path}' as JSON")]
    #[diagnostic(code(keypath::cli::json))]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse '{path}' as YAML")]
    #[diagnostic(code(keypath::cli::yaml))]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to render the document as JSON")]
    #[diagnostic(code(keypath::cli::render))]
    RenderJson(#[source] serde_json::Error),

    #[error("failed to render the document as YAML")]
    #[diagnostic(code(keypath::cli::render))]
    RenderYaml(#[source] serde_yaml::Error),

    #[error("document '{path}' is not a record (found {found})")]
    #[diagnostic(
        code(keypath::cli::not_a_record),
        help("the top level of the document must be an object")
    )]
    NotARecord { path: String, found: &'static str },

    #[error("cannot write back to standard input")]
    #[diagnostic(code(keypath::cli::stdin_write), help("drop `--write` to print the result"))]
    StdinWrite,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Traversal(#[from] TraversalFailure),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Access(#[from] AccessError),
}

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks the format from the file extension; JSON unless it says YAML.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// A document loaded from a file or stdin.
#[derive(Debug, Clone)]
pub struct Document {
    pub source: PathBuf,
    pub format: Format,
    pub record: Record,
}

impl Document {
    pub fn is_stdin(&self) -> bool {
        self.source.as_os_str() == "-"
    }

    pub fn load(source: &Path) -> Result<Self, CliError> {
        let name = source.display().to_string();
        let (text, format) = if source.as_os_str() == "-" {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: name.clone(),
                    source,
                })?;
            (text, Format::Json)
        } else {
            let text = fs::read_to_string(source).map_err(|source| CliError::Read {
                path: name.clone(),
                source,
            })?;
            (text, Format::detect(source))
        };
        let record = Self::parse(&text, format, &name)?;
        Ok(Self {
            source: source.to_path_buf(),
            format,
            record,
        })
    }

    pub fn parse(text: &str, format: Format, name: &str) -> Result<Record, CliError> {
        let value: Value = match format {
            Format::Json => serde_json::from_str(text).map_err(|source| CliError::Json {
                path: name.to_string(),
                source,
            })?,
            Format::Yaml => serde_yaml::from_str(text).map_err(|source| CliError::Yaml {
                path: name.to_string(),
                source,
            })?,
        };
        match value {
            Value::Map(record) => Ok(record),
            other => Err(CliError::NotARecord {
                path: name.to_string(),
                found: other.type_name(),
            }),
        }
    }

    pub fn render(&self) -> Result<String, CliError> {
        match self.format {
            Format::Json => serde_json::to_string_pretty(&self.record)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(CliError::RenderJson),
            Format::Yaml => serde_yaml::to_string(&self.record).map_err(CliError::RenderYaml),
        }
    }

    pub fn save(&self) -> Result<(), CliError> {
        if self.is_stdin() {
            return Err(CliError::StdinWrite);
        }
        let rendered = self.render()?;
        fs::write(&self.source, rendered).map_err(|source| CliError::Write {
            path: self.source.display().to_string(),
            source,
        })
    }
}

/// Parses a value argument as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
