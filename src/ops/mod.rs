pub mod derive;
pub mod manager;
pub mod validate;
