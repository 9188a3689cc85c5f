//! ps-project: quote input file format and validation.

pub mod migrate;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_quote_file};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Unsupported file extension: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<QuoteFile> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, file: &QuoteFile) -> ProjectResult<()> {
    validate_quote_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<QuoteFile> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &Path, file: &QuoteFile) -> ProjectResult<()> {
    validate_quote_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, `.yaml`/`.yml` as YAML.
pub fn load(path: &Path) -> ProjectResult<QuoteFile> {
    match extension(path).as_str() {
        "json" => load_json(path),
        "yaml" | "yml" => load_yaml(path),
        other => Err(ProjectError::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

pub fn from_yaml_str(content: &str) -> ProjectResult<QuoteFile> {
    let file: QuoteFile = serde_yaml::from_str(content)?;
    finish_load(file)
}

pub fn from_json_str(content: &str) -> ProjectResult<QuoteFile> {
    let file: QuoteFile = serde_json::from_str(content)?;
    finish_load(file)
}

fn finish_load(file: QuoteFile) -> ProjectResult<QuoteFile> {
    let file = migrate_to_latest(file)?;
    validate_quote_file(&file)?;
    Ok(file)
}

/// Lower-cased file extension, empty when there is none.
pub fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}
