pub mod dialog;
pub mod form;
pub mod prompt;
