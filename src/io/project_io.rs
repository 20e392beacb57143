use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::model::project::Project;

/// Error type for project file I/O
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not parse project file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not serialize project file: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}

/// On-disk layout of a project file. The file's own location is not stored.
#[derive(Debug, Serialize, Deserialize)]
struct ProjectFile {
    project: ProjectSection,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProjectSection {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    base_path: String,
    #[serde(default)]
    file_patterns: Vec<String>,
}

/// Serialize a project to the text of its project file.
pub fn serialize_project(project: &Project) -> Result<String, ProjectError> {
    let file = ProjectFile {
        project: ProjectSection {
            name: project.name.clone(),
            description: project.description.clone(),
            base_path: project.base_path.clone(),
            file_patterns: project.file_patterns.clone(),
        },
    };
    Ok(toml::to_string_pretty(&file)?)
}

/// Parse project file text. `file_name` is where the text came from.
pub fn parse_project(text: &str, file_name: &Path) -> Result<Project, ProjectError> {
    let file: ProjectFile = toml::from_str(text)?;
    let section = file.project;
    Ok(Project {
        name: section.name,
        description: section.description.filter(|d| !d.is_empty()),
        file_name: file_name.to_string_lossy().to_string(),
        base_path: section.base_path,
        file_patterns: normalize_patterns(section.file_patterns),
    })
}

/// A lone empty pattern has no form representation distinct from "no
/// patterns", so it loads as an empty list.
fn normalize_patterns(patterns: Vec<String>) -> Vec<String> {
    if patterns.len() == 1 && patterns[0].is_empty() {
        Vec::new()
    } else {
        patterns
    }
}

/// Load the project file at `path`.
pub fn load_project(path: &Path) -> Result<Project, ProjectError> {
    let text = fs::read_to_string(path).map_err(|e| ProjectError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_project(&text, path)
}

/// Write a project to its `file_name`.
pub fn save_project(project: &Project) -> Result<(), ProjectError> {
    let path = project.file_path();
    let content = serialize_project(project)?;
    atomic_write(&path, content.as_bytes()).map_err(|e| ProjectError::WriteError {
        path: path.clone(),
        source: e,
    })?;
    tracing::info!(
        event = "core.project.saved",
        name = %project.name,
        path = %path.display()
    );
    Ok(())
}

/// Write to a temp file in the same directory, then rename over the target.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::{ProjectCandidate, split_patterns};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample(dir: &Path) -> Project {
        Project {
            name: "Foo".into(),
            description: Some("Line one\nline two".into()),
            file_name: dir.join("Foo.geany").to_string_lossy().to_string(),
            base_path: dir.to_string_lossy().to_string(),
            file_patterns: vec!["*.c".into(), "".into(), "*.h".into()],
        }
    }

    #[test]
    fn save_then_load_gives_same_project() {
        let tmp = TempDir::new().unwrap();
        let project = sample(tmp.path());
        save_project(&project).unwrap();

        let loaded = load_project(&project.file_path()).unwrap();
        assert_eq!(loaded, project);
    }

    #[test]
    fn save_replaces_empty_placeholder() {
        let tmp = TempDir::new().unwrap();
        let project = sample(tmp.path());
        fs::write(project.file_path(), "").unwrap();
        save_project(&project).unwrap();
        let text = fs::read_to_string(project.file_path()).unwrap();
        assert!(text.contains("name = \"Foo\""));
    }

    #[test]
    fn missing_description_is_omitted() {
        let tmp = TempDir::new().unwrap();
        let mut project = sample(tmp.path());
        project.description = None;
        let text = serialize_project(&project).unwrap();
        assert!(!text.contains("description"));
    }

    #[test]
    fn minimal_file_parses_with_defaults() {
        let text = "[project]\nname = \"Bar\"\nbase_path = \"/b/\"\n";
        let project = parse_project(text, Path::new("/b/Bar.geany")).unwrap();
        assert_eq!(project.name, "Bar");
        assert_eq!(project.description, None);
        assert_eq!(project.file_name, "/b/Bar.geany");
        assert!(project.file_patterns.is_empty());
    }

    #[test]
    fn lone_empty_pattern_loads_as_no_patterns() {
        let text = "[project]\nname = \"Bar\"\nbase_path = \"/b/\"\nfile_patterns = [\"\"]\n";
        let project = parse_project(text, Path::new("/b/Bar.geany")).unwrap();
        assert!(project.file_patterns.is_empty());

        let refilled = split_patterns(&ProjectCandidate::from(&project).patterns);
        assert_eq!(refilled, project.file_patterns);
    }

    #[test]
    fn empty_segments_between_patterns_survive_load() {
        let text = "[project]\nname = \"Bar\"\nbase_path = \"/b/\"\nfile_patterns = [\"\", \"*.c\"]\n";
        let project = parse_project(text, Path::new("/b/Bar.geany")).unwrap();
        assert_eq!(project.file_patterns, vec!["", "*.c"]);
    }

    #[test]
    fn empty_file_is_a_parse_error() {
        let err = parse_project("", Path::new("x.geany")).unwrap_err();
        assert!(matches!(err, ProjectError::ParseError(_)));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_project(&tmp.path().join("none.geany")).unwrap_err();
        assert!(matches!(err, ProjectError::ReadError { .. }));
    }
}
