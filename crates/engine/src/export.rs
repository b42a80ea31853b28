//! Game document export.
//!
//! Serializes the assembled document to pretty-printed JSON at the
//! configured output path. Indentation is four spaces, matching the
//! documents downstream consumers already hold.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use quizbldr_domain::GameDocument;

use crate::error::EngineError;

/// Write the game document as pretty JSON to `path`, overwriting any
/// existing file.
pub fn write_document(document: &GameDocument, path: &Path) -> Result<(), EngineError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    document.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
