//! Named save slots and their JSON file.

pub mod reader;
pub mod slots;
pub mod writer;

pub use reader::SlotReader;
pub use slots::{GraphSnapshot, SlotStore};
pub use writer::SlotWriter;
