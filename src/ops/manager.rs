use std::path::Path;

use crate::io::project_io::{self, ProjectError};
use crate::model::PathLayout;
use crate::model::project::Project;
use crate::ui::dialog::PropertiesDialog;
use crate::ui::form::PropertiesForm;
use crate::ui::prompt::{Prompter, Question};

/// Misuse of the manager by calling code.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ManagerError {
    #[error("no project is open")]
    NoProjectOpen,
}

/// Owner of the (at most one) open project.
#[derive(Debug)]
pub struct ProjectManager {
    project: Option<Project>,
    layout: PathLayout,
}

impl ProjectManager {
    pub fn new(layout: PathLayout) -> Self {
        ProjectManager {
            project: None,
            layout,
        }
    }

    pub fn layout(&self) -> &PathLayout {
        &self.layout
    }

    /// The open project, if any.
    pub fn current(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.project.is_some()
    }

    /// Start a new project. If one is open the user is asked to close it
    /// first; `None` means they declined and nothing changed.
    pub fn create_new(&mut self, prompter: &mut impl Prompter) -> Option<PropertiesDialog> {
        if !self.request_close(prompter) {
            return None;
        }
        Some(PropertiesDialog::new(PropertiesForm::creating(
            self.layout.clone(),
        )))
    }

    /// Open the properties dialog, pre-filled from the open project when there is one.
    pub fn edit_properties(&self) -> PropertiesDialog {
        let form = match &self.project {
            Some(project) => PropertiesForm::editing(self.layout.clone(), project),
            None => PropertiesForm::creating(self.layout.clone()),
        };
        PropertiesDialog::new(form)
    }

    /// Gate for anything that would replace the open project.
    ///
    /// Returns `true` when no project is open (without asking) or when the
    /// user agreed to close it; `false` leaves the project open.
    pub fn request_close(&mut self, prompter: &mut impl Prompter) -> bool {
        let name = match &self.project {
            Some(project) => project.name.clone(),
            None => return true,
        };

        if !prompter.confirm(&Question::CloseOpenProject { name }) {
            return false;
        }
        self.close().is_ok()
    }

    /// Close the open project and hand back its record.
    pub fn close(&mut self) -> Result<Project, ManagerError> {
        let project = self.project.take().ok_or(ManagerError::NoProjectOpen)?;
        tracing::info!(event = "core.project.closed", name = %project.name);
        Ok(project)
    }

    /// Open the project file at `path`, closing the current project first
    /// (with confirmation). Returns `Ok(false)` if the user kept the current one.
    pub fn open(&mut self, path: &Path, prompter: &mut impl Prompter) -> Result<bool, ProjectError> {
        if !self.request_close(prompter) {
            return Ok(false);
        }
        let project = project_io::load_project(path)?;
        tracing::info!(
            event = "core.project.opened",
            name = %project.name,
            path = %path.display()
        );
        self.project = Some(project);
        Ok(true)
    }

    /// Replace the open project with a freshly committed record.
    pub(crate) fn install(&mut self, project: Project) -> &Project {
        tracing::info!(
            event = "core.project.committed",
            name = %project.name,
            file_name = %project.file_name,
            base_path = %project.base_path,
            patterns = project.file_patterns.len()
        );
        self.project.insert(project)
    }
}
