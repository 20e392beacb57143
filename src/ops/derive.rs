use std::path::MAIN_SEPARATOR;

use crate::model::PathLayout;

/// Default base path and project file name for a project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPaths {
    pub base_path: String,
    pub file_name: String,
}

/// Compute the default locations of a new project from its name.
///
/// An empty name yields the projects directory itself (with a trailing
/// separator) for both fields. Otherwise the project gets its own directory
/// and a `{name}.{extension}` file inside it.
pub fn derive_paths(layout: &PathLayout, name: &str) -> DerivedPaths {
    let home = layout.home.to_string_lossy();
    let home = home.trim_end_matches(MAIN_SEPARATOR);
    let projects = format!(
        "{home}{sep}{dir}{sep}",
        sep = MAIN_SEPARATOR,
        dir = layout.projects_dir
    );

    if name.is_empty() {
        return DerivedPaths {
            base_path: projects.clone(),
            file_name: projects,
        };
    }

    let base_path = format!("{projects}{name}{MAIN_SEPARATOR}");
    let file_name = format!("{base_path}{name}.{}", layout.extension);
    DerivedPaths {
        base_path,
        file_name,
    }
}
