use serde::Serialize;

use crate::model::project::Project;
use crate::ops::derive::DerivedPaths;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProjectJson {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub file_name: String,
    pub base_path: String,
    pub file_patterns: Vec<String>,
}

impl From<&Project> for ProjectJson {
    fn from(project: &Project) -> Self {
        ProjectJson {
            name: project.name.clone(),
            description: project.description.clone(),
            file_name: project.file_name.clone(),
            base_path: project.base_path.clone(),
            file_patterns: project.file_patterns.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct DerivedJson {
    pub base_path: String,
    pub file_name: String,
}

impl From<&DerivedPaths> for DerivedJson {
    fn from(paths: &DerivedPaths) -> Self {
        DerivedJson {
            base_path: paths.base_path.clone(),
            file_name: paths.file_name.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

const LABEL_WIDTH: usize = 13;

/// Append `label: value`, aligning continuation lines under the value.
fn push_field(out: &mut String, label: &str, value: &str) {
    let mut lines = value.split('\n');
    let first = lines.next().unwrap_or("");
    out.push_str(&format!("{:<width$}{}\n", format!("{}:", label), first, width = LABEL_WIDTH));
    for line in lines {
        out.push_str(&format!("{:width$}{}\n", "", line, width = LABEL_WIDTH));
    }
}

/// Human-readable summary of a project.
pub fn format_project(project: &Project) -> String {
    let mut out = String::new();
    push_field(&mut out, "name", &project.name);
    if let Some(description) = &project.description {
        push_field(&mut out, "description", description);
    }
    push_field(&mut out, "file", &project.file_name);
    push_field(&mut out, "base path", &project.base_path);
    if project.file_patterns.is_empty() {
        push_field(&mut out, "patterns", "(none)");
    } else {
        push_field(&mut out, "patterns", &project.patterns_text());
    }
    out
}

pub fn format_derived(paths: &DerivedPaths) -> String {
    let mut out = String::new();
    push_field(&mut out, "base path", &paths.base_path);
    push_field(&mut out, "file", &paths.file_name);
    out
}
