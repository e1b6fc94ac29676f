//! Output configuration - where and in which formats the dataset is written.

use sea_orm::DbBackend;
use serde::Deserialize;
use std::path::PathBuf;

/// File formats the exporters understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One CSV file per table
    Csv,
    /// A single SQL script of inserts and stock updates
    Sql,
}

/// SQL dialect used to render statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlDialect {
    /// `PostgreSQL`
    Postgres,
    /// `MySQL` / `MariaDB`
    Mysql,
    /// `SQLite`
    Sqlite,
}

impl From<SqlDialect> for DbBackend {
    fn from(dialect: SqlDialect) -> Self {
        match dialect {
            SqlDialect::Postgres => Self::Postgres,
            SqlDialect::Mysql => Self::MySql,
            SqlDialect::Sqlite => Self::Sqlite,
        }
    }
}

/// Destination settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory every file is written into
    pub dir: PathBuf,
    /// Formats to emit
    pub formats: Vec<OutputFormat>,
    /// Dialect of the SQL script
    pub sql_dialect: SqlDialect,
    /// Whether the SQL script starts with `CREATE TABLE` statements
    pub include_schema: bool,
    /// File name of the analytical query catalog; `None` skips it
    pub queries_file: Option<String>,
    /// Database to load the dataset into; `DATABASE_URL` takes precedence
    pub database_url: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
            formats: vec![OutputFormat::Csv, OutputFormat::Sql],
            sql_dialect: SqlDialect::Postgres,
            include_schema: true,
            queries_file: Some("available_queries.txt".to_string()),
            database_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_output_config() {
        let toml_str = r#"
            dir = "seed"
            formats = ["sql"]
            sql_dialect = "sqlite"
        "#;

        let output: OutputConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(output.dir, PathBuf::from("seed"));
        assert_eq!(output.formats, vec![OutputFormat::Sql]);
        assert_eq!(DbBackend::from(output.sql_dialect), DbBackend::Sqlite);
        assert!(output.include_schema);
        assert_eq!(output.queries_file.as_deref(), Some("available_queries.txt"));
    }
}
