use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pprops", about = "Create, edit and inspect editor project properties", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Open this project file before running the command
    #[arg(short = 'P', long = "project", global = true)]
    pub project: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project (closes the open one first)
    New(FieldArgs),
    /// Edit the properties of the open project
    Edit(FieldArgs),
    /// Show a project file
    Show(ShowArgs),
    /// Print the default base path and project file for a name
    Derive(DeriveArgs),
    /// Close the open project
    Close,
}

/// Values typed into the properties form. Unset flags keep the form's value.
#[derive(Args, Default)]
pub struct FieldArgs {
    /// Project name
    #[arg(long)]
    pub name: Option<String>,
    /// Project description
    #[arg(long)]
    pub description: Option<String>,
    /// Project file location
    #[arg(long = "file")]
    pub file_name: Option<String>,
    /// Project base path
    #[arg(long)]
    pub base_path: Option<String>,
    /// File pattern (repeatable, replaces all patterns)
    #[arg(long = "pattern", action = clap::ArgAction::Append)]
    pub patterns: Vec<String>,
    /// Choose a path interactively (repeatable)
    #[arg(long, value_enum, action = clap::ArgAction::Append)]
    pub pick: Vec<PickTarget>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PickTarget {
    File,
    BasePath,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project file to show
    pub file: PathBuf,
}

#[derive(Args)]
pub struct DeriveArgs {
    /// Project name (empty for the projects directory)
    #[arg(default_value = "")]
    pub name: String,
}
