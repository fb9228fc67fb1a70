//! Reads slot files into a SlotStore.

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::types::StepperResult;

use super::SlotStore;

/// Reader for JSON slot files.
pub struct SlotReader;

impl SlotReader {
    /// Read a slot file.
    pub fn read_from_file(path: &Path) -> StepperResult<SlotStore> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Read a slot file, or start with `count` empty slots if there is none yet.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn read_or_default(path: &Path, count: usize) -> StepperResult<SlotStore> {
        let mut store = if path.exists() {
            Self::read_from_file(path)?
        } else {
            debug!("no slot file at {}, starting empty", path.display());
            SlotStore::new(count)
        };
        store.ensure_slot_count(count);
        Ok(store)
    }

    /// Read from any reader.
    pub fn read_from(reader: &mut impl Read) -> StepperResult<SlotStore> {
        let store: SlotStore = serde_json::from_reader(reader)?;
        // Reject snapshots whose edges point at vertices that are not there.
        for snapshot in store.iter().flatten() {
            snapshot.to_graph()?;
        }
        Ok(store)
    }
}
