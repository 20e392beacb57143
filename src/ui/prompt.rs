//! Collaborators the properties dialog talks to: yes/no questions, error
//! notices, and the file/folder chooser.

use std::fmt;
use std::path::Path;

/// A yes/no question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Another project is open and must be closed first
    CloseOpenProject { name: String },
    /// The requested base path is missing
    CreateBasePath { path: String },
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::CloseOpenProject { name } => write!(
                f,
                "There is already an open project \"{}\". Do you want to close it before proceed?",
                name
            ),
            Question::CreateBasePath { .. } => write!(
                f,
                "The specified project base path does not exist. Should it be created?"
            ),
        }
    }
}

/// Synchronous confirmation and error display.
pub trait Prompter {
    /// Ask a yes/no question. `true` means yes.
    fn confirm(&mut self, question: &Question) -> bool;

    /// Tell the user something went wrong.
    fn show_error(&mut self, message: &str);
}

/// What the chooser should pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickMode {
    File,
    Directory,
}

impl PickMode {
    pub fn title(self) -> &'static str {
        match self {
            PickMode::File => "Choose project filename",
            PickMode::Directory => "Choose project base path",
        }
    }
}

/// Where the chooser starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialPath {
    /// Preselect this absolute path
    Absolute(String),
    /// Offer this text as the name to save under
    SuggestedName(String),
}

impl InitialPath {
    /// Classify the current text of a path field.
    pub fn from_field(text: &str) -> Self {
        if Path::new(text).is_absolute() {
            InitialPath::Absolute(text.to_string())
        } else {
            InitialPath::SuggestedName(text.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    pub mode: PickMode,
    pub initial: InitialPath,
}

impl PickRequest {
    pub fn title(&self) -> &'static str {
        self.mode.title()
    }
}

/// A file or folder chooser. Returns `None` when the user cancels.
pub trait PathPicker {
    fn pick(&mut self, request: &PickRequest) -> Option<String>;
}
