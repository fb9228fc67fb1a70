//! Writes a SlotStore as JSON.

use std::io::Write;
use std::path::Path;

use crate::types::StepperResult;

use super::SlotStore;

/// Writer for JSON slot files.
pub struct SlotWriter;

impl SlotWriter {
    /// Write the whole store to `path`, replacing the file.
    pub fn write_to_file(store: &SlotStore, path: &Path) -> StepperResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(store, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the store to any writer.
    pub fn write_to(store: &SlotStore, writer: &mut impl Write) -> StepperResult<()> {
        serde_json::to_writer_pretty(&mut *writer, store)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
