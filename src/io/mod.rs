pub mod fs;
pub mod project_io;
pub mod settings_io;
