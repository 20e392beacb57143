use std::path::Path;

use crate::io::fs::ProjectFs;
use crate::model::project::{Field, Project, ProjectCandidate, split_patterns};
use crate::ui::prompt::{Prompter, Question};

/// Longest accepted project name, in bytes.
pub const MAX_NAME_LEN: usize = 50;

/// Why a set of project properties was refused.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("The specified project name is too short.")]
    EmptyName,
    #[error("The specified project name is too long (max. {max} characters).", max = MAX_NAME_LEN)]
    NameTooLong,
    #[error("You have specified an invalid project file location.")]
    InvalidFileLocation,
    #[error("You have specified an invalid project base path.")]
    InvalidBasePath,
    #[error("The specified project base path was not created.")]
    BasePathRejected,
    #[error("The project base path could not be created.")]
    BasePathNotCreated {
        path: String,
        source: std::io::Error,
    },
    #[error("Project file could not be written.")]
    FileNotWritable {
        path: String,
        source: std::io::Error,
    },
}

impl ValidationError {
    /// The form field the user has to correct.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::EmptyName | ValidationError::NameTooLong => Field::Name,
            ValidationError::InvalidFileLocation | ValidationError::FileNotWritable { .. } => {
                Field::FileName
            }
            ValidationError::InvalidBasePath
            | ValidationError::BasePathRejected
            | ValidationError::BasePathNotCreated { .. } => Field::BasePath,
        }
    }
}

/// Validate a candidate and build the project record from it.
///
/// Checks run in form order and stop at the first failure. A missing base
/// path is created only if the user agrees. The project file is truncated
/// to prove it can be written.
pub fn commit(
    candidate: &ProjectCandidate,
    fs: &impl ProjectFs,
    prompter: &mut impl Prompter,
) -> Result<Project, ValidationError> {
    let name = candidate.name.as_str();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }

    if candidate.file_name.is_empty() {
        return Err(ValidationError::InvalidFileLocation);
    }

    if candidate.base_path.is_empty() {
        return Err(ValidationError::InvalidBasePath);
    }
    ensure_base_path(&candidate.base_path, fs, prompter)?;

    fs.write_empty_file(Path::new(&candidate.file_name))
        .map_err(|e| ValidationError::FileNotWritable {
            path: candidate.file_name.clone(),
            source: e,
        })?;

    let description = if candidate.description.is_empty() {
        None
    } else {
        Some(candidate.description.clone())
    };

    Ok(Project {
        name: name.to_string(),
        description,
        file_name: candidate.file_name.clone(),
        base_path: candidate.base_path.clone(),
        file_patterns: split_patterns(&candidate.patterns),
    })
}

fn ensure_base_path(
    base_path: &str,
    fs: &impl ProjectFs,
    prompter: &mut impl Prompter,
) -> Result<(), ValidationError> {
    let path = Path::new(base_path);
    if fs.is_dir(path) {
        return Ok(());
    }

    let question = Question::CreateBasePath {
        path: base_path.to_string(),
    };
    if !prompter.confirm(&question) {
        return Err(ValidationError::BasePathRejected);
    }

    fs.create_dir_all(path)
        .map_err(|e| ValidationError::BasePathNotCreated {
            path: base_path.to_string(),
            source: e,
        })?;
    tracing::info!(
        event = "core.project.base_path_created",
        path = %base_path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::fs::RealFs;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    /// Answers every question the same way and remembers what it was asked.
    struct Answer {
        yes: bool,
        asked: Vec<Question>,
    }

    impl Answer {
        fn yes() -> Self {
            Answer {
                yes: true,
                asked: Vec::new(),
            }
        }

        fn no() -> Self {
            Answer {
                yes: false,
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for Answer {
        fn confirm(&mut self, question: &Question) -> bool {
            self.asked.push(question.clone());
            self.yes
        }

        fn show_error(&mut self, _message: &str) {}
    }

    fn candidate_in(dir: &Path, name: &str) -> ProjectCandidate {
        ProjectCandidate {
            name: name.to_string(),
            description: String::new(),
            file_name: dir.join("p.geany").to_string_lossy().to_string(),
            base_path: dir.to_string_lossy().to_string(),
            patterns: String::new(),
        }
    }

    #[test]
    fn empty_name_is_rejected_first() {
        let candidate = ProjectCandidate::default();
        let err = commit(&candidate, &RealFs, &mut Answer::yes()).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyName));
        assert_eq!(err.field(), Field::Name);
    }

    #[test]
    fn name_at_limit_is_accepted_and_one_over_is_not() {
        let tmp = TempDir::new().unwrap();
        let ok = candidate_in(tmp.path(), &"n".repeat(MAX_NAME_LEN));
        assert!(commit(&ok, &RealFs, &mut Answer::yes()).is_ok());

        let long = candidate_in(tmp.path(), &"n".repeat(MAX_NAME_LEN + 1));
        let err = commit(&long, &RealFs, &mut Answer::yes()).unwrap_err();
        assert!(matches!(err, ValidationError::NameTooLong));
        assert_eq!(
            err.to_string(),
            "The specified project name is too long (max. 50 characters)."
        );
    }

    #[test]
    fn name_length_counts_bytes() {
        let tmp = TempDir::new().unwrap();
        // 26 characters, 52 bytes
        let candidate = candidate_in(tmp.path(), &"é".repeat(26));
        let err = commit(&candidate, &RealFs, &mut Answer::yes()).unwrap_err();
        assert!(matches!(err, ValidationError::NameTooLong));
    }

    #[test]
    fn empty_file_name_is_invalid_location() {
        let tmp = TempDir::new().unwrap();
        let mut candidate = candidate_in(tmp.path(), "Foo");
        candidate.file_name.clear();
        let err = commit(&candidate, &RealFs, &mut Answer::yes()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFileLocation));
        assert_eq!(err.field(), Field::FileName);
    }

    #[test]
    fn empty_base_path_is_invalid() {
        let tmp = TempDir::new().unwrap();
        let mut candidate = candidate_in(tmp.path(), "Foo");
        candidate.base_path.clear();
        let err = commit(&candidate, &RealFs, &mut Answer::yes()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidBasePath));
        assert_eq!(err.field(), Field::BasePath);
    }

    #[test]
    fn file_location_is_checked_before_base_path() {
        let mut candidate = ProjectCandidate {
            name: "Foo".into(),
            ..Default::default()
        };
        candidate.file_name.clear();
        candidate.base_path.clear();
        let err = commit(&candidate, &RealFs, &mut Answer::yes()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFileLocation));
    }

    #[test]
    fn base_path_under_a_regular_file_cannot_be_created() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();
        let mut candidate = candidate_in(tmp.path(), "Foo");
        candidate.base_path = blocker.join("sub").to_string_lossy().to_string();

        let mut answer = Answer::yes();
        let err = commit(&candidate, &RealFs, &mut answer).unwrap_err();
        assert!(matches!(err, ValidationError::BasePathNotCreated { .. }));
        assert_eq!(err.field(), Field::BasePath);
        assert_eq!(err.to_string(), "The project base path could not be created.");
        assert_eq!(answer.asked.len(), 1);
        assert!(!tmp.path().join("p.geany").exists());
    }

    #[test]
    fn missing_base_path_is_created_on_confirmation() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("projects").join("Foo");
        let mut candidate = candidate_in(tmp.path(), "Foo");
        candidate.base_path = base.to_string_lossy().to_string();

        let mut answer = Answer::yes();
        commit(&candidate, &RealFs, &mut answer).unwrap();

        assert!(base.is_dir());
        assert_eq!(
            answer.asked,
            vec![Question::CreateBasePath {
                path: candidate.base_path.clone()
            }]
        );
    }

    #[test]
    fn declined_base_path_is_not_created() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("nope");
        let mut candidate = candidate_in(tmp.path(), "Foo");
        candidate.base_path = base.to_string_lossy().to_string();

        let err = commit(&candidate, &RealFs, &mut Answer::no()).unwrap_err();
        assert!(matches!(err, ValidationError::BasePathRejected));
        assert!(!base.exists());
        assert!(!tmp.path().join("p.geany").exists());
    }

    #[test]
    fn existing_base_path_asks_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut answer = Answer::no();
        commit(&candidate_in(tmp.path(), "Foo"), &RealFs, &mut answer).unwrap();
        assert!(answer.asked.is_empty());
    }

    #[test]
    fn unwritable_file_is_reported() {
        let tmp = TempDir::new().unwrap();
        let mut candidate = candidate_in(tmp.path(), "Foo");
        candidate.file_name = tmp
            .path()
            .join("missing")
            .join("p.geany")
            .to_string_lossy()
            .to_string();
        let err = commit(&candidate, &RealFs, &mut Answer::yes()).unwrap_err();
        assert!(matches!(err, ValidationError::FileNotWritable { .. }));
        assert_eq!(err.to_string(), "Project file could not be written.");
    }

    #[test]
    fn project_file_is_truncated() {
        let tmp = TempDir::new().unwrap();
        let candidate = candidate_in(tmp.path(), "Foo");
        fs::write(&candidate.file_name, "stale").unwrap();
        commit(&candidate, &RealFs, &mut Answer::yes()).unwrap();
        assert_eq!(fs::read_to_string(&candidate.file_name).unwrap(), "");
    }

    #[test]
    fn committed_record_carries_candidate_values() {
        let tmp = TempDir::new().unwrap();
        let mut candidate = candidate_in(tmp.path(), "Foo");
        candidate.description = "A compiler".into();
        candidate.patterns = "*.c\n\n*.h".into();

        let project = commit(&candidate, &RealFs, &mut Answer::yes()).unwrap();
        assert_eq!(
            project,
            Project {
                name: "Foo".into(),
                description: Some("A compiler".into()),
                file_name: candidate.file_name.clone(),
                base_path: candidate.base_path.clone(),
                file_patterns: vec!["*.c".into(), "".into(), "*.h".into()],
            }
        );
    }
}
