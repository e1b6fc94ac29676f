//! Serializers that write a [`Dataset`] to disk or into a database.
//!
//! Every file is written to a temporary file and renamed into place once
//! complete, so a failed run never leaves a truncated file behind.
//! [`export_dataset`] stages the whole set in a hidden directory inside the
//! destination and moves it in only after every file is written, so a failure
//! leaves the previous export untouched.

use crate::{
    config::{OutputConfig, OutputFormat},
    core::queries::query_catalog,
    dataset::Dataset,
    errors::Result,
};
use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tempfile::{Builder, NamedTempFile};
use tracing::info;

/// One CSV file per table
pub mod csv;
/// Bulk load into a live database
pub mod database;
/// The analytical query catalog
pub mod queries;
/// A single SQL seed script
pub mod sql;

pub use self::csv::CsvExporter;
pub use self::queries::write_query_catalog;
pub use self::sql::SqlExporter;

/// Writes a dataset in one format.
pub trait Exporter {
    /// Writes the dataset and returns the paths of the files produced.
    ///
    /// # Errors
    /// Returns an error if any file cannot be written.
    fn export(&self, dataset: &Dataset) -> Result<Vec<PathBuf>>;
}

/// Writes `path` through `write`, replacing any existing file only on success.
///
/// # Errors
/// Returns an error if the temporary file cannot be created, `write` fails,
/// or the final rename fails.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut out = BufWriter::new(NamedTempFile::new_in(dir)?);
    write(&mut out)?;
    let file = out.into_inner().map_err(|e| e.into_error())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// The exporters selected by the output configuration, in configured order.
#[must_use]
pub fn exporters_for(output: &OutputConfig) -> Vec<Box<dyn Exporter>> {
    exporters_in(output, &output.dir)
}

fn exporters_in(output: &OutputConfig, dir: &Path) -> Vec<Box<dyn Exporter>> {
    output
        .formats
        .iter()
        .map(|format| -> Box<dyn Exporter> {
            match format {
                OutputFormat::Csv => Box::new(CsvExporter::new(dir)),
                OutputFormat::Sql => Box::new(SqlExporter::new(
                    dir,
                    output.sql_dialect.into(),
                    output.include_schema,
                )),
            }
        })
        .collect()
}

/// Runs every configured exporter and writes the query catalog.
///
/// Files are staged first and moved into the output directory only once all
/// of them are written. On error the staging directory is removed and the
/// output directory keeps whatever it held before.
///
/// # Errors
/// Returns an error if the output directory cannot be created, any exporter
/// fails, or a staged file cannot be moved into place.
pub fn export_dataset(output: &OutputConfig, dataset: &Dataset) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&output.dir)?;
    let staging = Builder::new().prefix(".staging").tempdir_in(&output.dir)?;

    let mut staged = Vec::new();
    for exporter in exporters_in(output, staging.path()) {
        staged.extend(exporter.export(dataset)?);
    }

    if let Some(name) = &output.queries_file {
        let path = staging.path().join(name);
        let catalog = query_catalog(&dataset.range, dataset.featured_item());
        write_query_catalog(&path, &catalog)?;
        staged.push(path);
    }

    let mut written = Vec::with_capacity(staged.len());
    for path in staged {
        let relative = path.strip_prefix(staging.path()).unwrap_or(&path);
        let target = output.dir.join(relative);
        std::fs::rename(&path, &target)?;
        info!("Wrote {}", target.display());
        written.push(target);
    }
    staging.close()?;
    Ok(written)
}
