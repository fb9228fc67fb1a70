//! Editable graph model and the read-only view the engine consumes.

pub mod builder;
pub mod editable;
pub mod view;

pub use builder::GraphBuilder;
pub use editable::{EdgeToggle, Graph};
pub use view::GraphView;
