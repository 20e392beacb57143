use std::path::PathBuf;

/// The open project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    /// Free-form description (None when the field was left empty)
    pub description: Option<String>,
    /// Location of the project file
    pub file_name: String,
    /// Root directory of the project
    pub base_path: String,
    /// Filename patterns, in the order they were entered
    pub file_patterns: Vec<String>,
}

impl Project {
    /// The project file location as a path.
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.file_name)
    }

    /// Patterns as they appear in the multi-line patterns field.
    pub fn patterns_text(&self) -> String {
        join_patterns(&self.file_patterns)
    }
}

/// A field of the properties form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Description,
    FileName,
    BasePath,
    Patterns,
}

/// Raw field values read from the properties form, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCandidate {
    pub name: String,
    pub description: String,
    pub file_name: String,
    pub base_path: String,
    /// One pattern per line
    pub patterns: String,
}

impl From<&Project> for ProjectCandidate {
    fn from(project: &Project) -> Self {
        ProjectCandidate {
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            file_name: project.file_name.clone(),
            base_path: project.base_path.clone(),
            patterns: project.patterns_text(),
        }
    }
}

/// Split the patterns field on newlines. Empty segments are kept, and an
/// empty field yields no patterns at all.
pub fn split_patterns(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(str::to_string).collect()
}

/// Inverse of [`split_patterns`].
pub fn join_patterns(patterns: &[String]) -> String {
    patterns.join("\n")
}
