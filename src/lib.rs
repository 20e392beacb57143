//! Project properties for a code editor: the open project record, the
//! properties dialog that creates and edits it, and its project file.

pub mod cli;
pub mod io;
pub mod logging;
pub mod model;
pub mod ops;
pub mod ui;

pub use io::fs::{ProjectFs, RealFs};
pub use model::{Field, PathLayout, Project, ProjectCandidate, Settings};
pub use ops::derive::{DerivedPaths, derive_paths};
pub use ops::manager::{ManagerError, ProjectManager};
pub use ops::validate::{MAX_NAME_LEN, ValidationError, commit};
pub use ui::dialog::{DialogState, PropertiesDialog, Response};
pub use ui::form::{FormMode, PropertiesForm};
pub use ui::prompt::{InitialPath, PathPicker, PickMode, PickRequest, Prompter, Question};
