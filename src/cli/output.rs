use std::error::Error;

use crate::cli::commands::{OptionsArgs, TasksArgs};
use crate::model::{builtin_add_options, builtin_tasks, find_task};

/// `tasks` subcommand: print the catalog, or a single task by id.
pub fn cmd_tasks(args: &TasksArgs) -> Result<(), Box<dyn Error>> {
    let tasks = builtin_tasks();

    if let Some(id) = args.id {
        let task = find_task(&tasks, id)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(task)?);
        } else {
            let check = if task.completed { "x" } else { " " };
            println!("[{}] {} ({})", check, task.title, task.time);
            println!("    {}", task.description);
            if !task.tags.is_empty() {
                println!("    tags: {}", task.tags.join(", "));
            }
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        for task in &tasks {
            let check = if task.completed { "x" } else { " " };
            let tags = if task.tags.is_empty() {
                String::new()
            } else {
                format!("  #{}", task.tags.join(" #"))
            };
            println!("[{}] {:>2}  {:<38} {}{}", check, task.id, task.title, task.time, tags);
        }
    }
    Ok(())
}

/// `options` subcommand: print the add-sheet catalog.
pub fn cmd_options(args: &OptionsArgs) -> Result<(), Box<dyn Error>> {
    let options = builtin_add_options();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        for option in &options {
            println!("{} {}", option.icon.glyph(), option.title);
            println!("  {}", option.description);
        }
    }
    Ok(())
}
