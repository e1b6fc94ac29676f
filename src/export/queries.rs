//! Query catalog file - the analytical queries as a plain text document.

use crate::{
    core::queries::AnalyticalQuery,
    errors::Result,
    export::write_atomically,
};
use std::{io::Write, path::Path};

/// Writes the catalog: required queries under one heading, special queries
/// under another, each as a quoted title line followed by its statement.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_query_catalog(path: &Path, queries: &[AnalyticalQuery]) -> Result<()> {
    let (special, required): (Vec<_>, Vec<_>) = queries.iter().partition(|q| q.special);

    write_atomically(path, |out| {
        writeln!(out, "-- {} REQUIRED QUERIES\n", required.len())?;
        for query in &required {
            writeln!(out, "\"{}\"\n{}\n", query.title, query.sql)?;
        }
        writeln!(out, "\n-- {} SPECIAL QUERIES\n", special.len())?;
        for (number, query) in (1..).zip(&special) {
            writeln!(out, "\"Special Query #{number}: {}\"\n{}\n", query.title, query.sql)?;
        }
        Ok(())
    })
}
