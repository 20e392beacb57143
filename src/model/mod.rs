pub mod project;
pub mod settings;

pub use project::*;
pub use settings::*;
