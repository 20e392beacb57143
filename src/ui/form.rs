use crate::model::PathLayout;
use crate::model::project::{Field, Project, ProjectCandidate};
use crate::ops::derive::derive_paths;
use crate::ui::prompt::{InitialPath, PathPicker, PickMode, PickRequest};

/// Whether the form creates a new project or edits the open one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing,
}

impl FormMode {
    /// Label of the accept button.
    pub fn accept_label(self) -> &'static str {
        match self {
            FormMode::Creating => "New",
            FormMode::Editing => "OK",
        }
    }
}

/// Field values of one properties dialog.
///
/// While creating, every name change re-derives the base path and project
/// file from the name. A path field stops following the name once the user
/// has set it directly.
#[derive(Debug, Clone)]
pub struct PropertiesForm {
    mode: FormMode,
    layout: PathLayout,
    values: ProjectCandidate,
    base_path_edited: bool,
    file_name_edited: bool,
}

impl PropertiesForm {
    /// Empty form for a new project, with paths derived from the empty name.
    pub fn creating(layout: PathLayout) -> Self {
        let mut form = PropertiesForm {
            mode: FormMode::Creating,
            layout,
            values: ProjectCandidate::default(),
            base_path_edited: false,
            file_name_edited: false,
        };
        form.rederive();
        form
    }

    /// Form pre-filled from an open project.
    pub fn editing(layout: PathLayout, project: &Project) -> Self {
        PropertiesForm {
            mode: FormMode::Editing,
            layout,
            values: ProjectCandidate::from(project),
            base_path_edited: false,
            file_name_edited: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn candidate(&self) -> &ProjectCandidate {
        &self.values
    }

    /// Current text of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.values.name,
            Field::Description => &self.values.description,
            Field::FileName => &self.values.file_name,
            Field::BasePath => &self.values.base_path,
            Field::Patterns => &self.values.patterns,
        }
    }

    /// Set the text of any field, as if the user typed it.
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        match field {
            Field::Name => self.set_name(text),
            Field::Description => self.values.description = text,
            Field::FileName => self.set_file_name(text),
            Field::BasePath => self.set_base_path(text),
            Field::Patterns => self.values.patterns = text,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.values.name = name.into();
        if self.mode == FormMode::Creating {
            self.rederive();
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.values.description = description.into();
    }

    pub fn set_patterns(&mut self, patterns: impl Into<String>) {
        self.values.patterns = patterns.into();
    }

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.values.file_name = file_name.into();
        self.file_name_edited = true;
    }

    pub fn set_base_path(&mut self, base_path: impl Into<String>) {
        self.values.base_path = base_path.into();
        self.base_path_edited = true;
    }

    /// Let the user choose the project file or base path with a picker.
    /// Returns whether the field changed.
    pub fn browse(&mut self, field: Field, picker: &mut impl PathPicker) -> bool {
        let mode = match field {
            Field::FileName => PickMode::File,
            Field::BasePath => PickMode::Directory,
            _ => return false,
        };
        let request = PickRequest {
            mode,
            initial: InitialPath::from_field(self.value(field)),
        };
        match picker.pick(&request) {
            Some(path) => {
                self.set(field, path);
                true
            }
            None => false,
        }
    }

    fn rederive(&mut self) {
        let derived = derive_paths(&self.layout, &self.values.name);
        if !self.base_path_edited {
            self.values.base_path = derived.base_path;
        }
        if !self.file_name_edited {
            self.values.file_name = derived.file_name;
        }
    }
}
