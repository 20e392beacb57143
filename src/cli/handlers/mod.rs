use std::error::Error;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::cli::terminal::TerminalPrompter;
use crate::io::fs::RealFs;
use crate::io::project_io;
use crate::io::settings_io;
use crate::model::project::Field;
use crate::ops::derive::derive_paths;
use crate::ops::manager::ProjectManager;
use crate::ui::dialog::{DialogState, PropertiesDialog, Response};
use crate::ui::form::FormMode;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    let settings = settings_io::read_settings();
    let mut manager = ProjectManager::new(settings.layout());
    let mut prompter = TerminalPrompter::new(cli.yes);

    if let Some(path) = &cli.project {
        manager.open(path, &mut prompter)?;
    }

    match cli.command {
        Commands::New(args) => cmd_new(&mut manager, &mut prompter, args, json),
        Commands::Edit(args) => cmd_edit(&mut manager, &mut prompter, args, json),
        Commands::Show(args) => cmd_show(args, json),
        Commands::Derive(args) => cmd_derive(&manager, args, json),
        Commands::Close => cmd_close(&mut manager, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Type the flag values into the form, name first so derived paths can be
/// overridden by explicit ones.
fn fill_form(dialog: &mut PropertiesDialog, args: FieldArgs, prompter: &mut TerminalPrompter) {
    let form = dialog.form_mut();
    if let Some(name) = args.name {
        form.set_name(name);
    }
    if let Some(description) = args.description {
        form.set_description(description);
    }
    if let Some(file_name) = args.file_name {
        form.set_file_name(file_name);
    }
    if let Some(base_path) = args.base_path {
        form.set_base_path(base_path);
    }
    if !args.patterns.is_empty() {
        form.set_patterns(args.patterns.join("\n"));
    }
    for target in args.pick {
        let field = match target {
            PickTarget::File => Field::FileName,
            PickTarget::BasePath => Field::BasePath,
        };
        form.browse(field, prompter);
    }
}

/// Accept the dialog and save the committed project to its file.
fn finish(
    manager: &mut ProjectManager,
    mut dialog: PropertiesDialog,
    prompter: &mut TerminalPrompter,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let verb = match dialog.form().mode() {
        FormMode::Creating => "created",
        FormMode::Editing => "updated",
    };

    if dialog.respond(Response::Accept, manager, &RealFs, prompter) != DialogState::Committed {
        return Err("project properties were not saved".into());
    }

    let project = manager
        .current()
        .ok_or("committed project is missing")?;
    project_io::save_project(project)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ProjectJson::from(project))?);
    } else {
        println!("{} project '{}' at {}", verb, project.name, project.file_name);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_new(
    manager: &mut ProjectManager,
    prompter: &mut TerminalPrompter,
    args: FieldArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut dialog = manager
        .create_new(prompter)
        .ok_or("the open project was kept; no project created")?;
    fill_form(&mut dialog, args, prompter);
    finish(manager, dialog, prompter, json)
}

fn cmd_edit(
    manager: &mut ProjectManager,
    prompter: &mut TerminalPrompter,
    args: FieldArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut dialog = manager.edit_properties();
    fill_form(&mut dialog, args, prompter);
    finish(manager, dialog, prompter, json)
}

fn cmd_show(args: ShowArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let project = project_io::load_project(&args.file)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&ProjectJson::from(&project))?);
    } else {
        print!("{}", format_project(&project));
    }
    Ok(())
}

fn cmd_derive(manager: &ProjectManager, args: DeriveArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let paths = derive_paths(manager.layout(), &args.name);
    if json {
        println!("{}", serde_json::to_string_pretty(&DerivedJson::from(&paths))?);
    } else {
        print!("{}", format_derived(&paths));
    }
    Ok(())
}

fn cmd_close(manager: &mut ProjectManager, json: bool) -> Result<(), Box<dyn Error>> {
    let project = manager.close()?;
    if json {
        println!("{}", serde_json::json!({ "closed": project.name }));
    } else {
        println!("closed project '{}'", project.name);
    }
    Ok(())
}
