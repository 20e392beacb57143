use crate::io::fs::ProjectFs;
use crate::model::project::Field;
use crate::ops::manager::ProjectManager;
use crate::ops::validate::{ValidationError, commit};
use crate::ui::form::PropertiesForm;
use crate::ui::prompt::Prompter;

/// How the user dismissed the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Accept,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Waiting for input (also after a refused accept)
    Collecting,
    Committed,
    Cancelled,
}

/// One run of the project properties dialog.
#[derive(Debug)]
pub struct PropertiesDialog {
    form: PropertiesForm,
    state: DialogState,
    focus: Field,
    last_error: Option<ValidationError>,
}

impl PropertiesDialog {
    pub fn new(form: PropertiesForm) -> Self {
        PropertiesDialog {
            form,
            state: DialogState::Collecting,
            focus: Field::Name,
            last_error: None,
        }
    }

    pub fn form(&self) -> &PropertiesForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PropertiesForm {
        &mut self.form
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Field that has the input focus.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Why the last accept was refused, if it was.
    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    /// Handle the user closing the dialog.
    ///
    /// Accepting validates the form and, on success, installs the project in
    /// `manager`. A refused accept shows the error, focuses the offending
    /// field and keeps the dialog open. Once the dialog is committed or
    /// cancelled further responses are ignored.
    pub fn respond(
        &mut self,
        response: Response,
        manager: &mut ProjectManager,
        fs: &impl ProjectFs,
        prompter: &mut impl Prompter,
    ) -> DialogState {
        if self.state != DialogState::Collecting {
            return self.state;
        }

        match response {
            Response::Cancel => {
                self.state = DialogState::Cancelled;
            }
            Response::Accept => match commit(self.form.candidate(), fs, prompter) {
                Ok(project) => {
                    manager.install(project);
                    self.last_error = None;
                    self.state = DialogState::Committed;
                }
                Err(e) => {
                    tracing::info!(
                        event = "core.project.validation_failed",
                        field = ?e.field(),
                        error = %e
                    );
                    prompter.show_error(&e.to_string());
                    self.focus = e.field();
                    self.last_error = Some(e);
                }
            },
        }
        self.state
    }
}
