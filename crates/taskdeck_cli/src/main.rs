//! Command-line front end for the Taskdeck core.
//!
//! # Responsibility
//! - Render the task list and invoke core operations from subcommands.
//! - Resolve the per-user data directory and bootstrap logging.
//!
//! # Invariants
//! - User-entered strings are passed to the core unvalidated; the core's
//!   silent-rejection contract is surfaced here as plain messages.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use taskdeck_core::{
    default_log_level, init_logging, SqliteKvStore, Task, TaskEditor, TaskId, TaskService,
    ThemeService,
};

const STORE_FILE_NAME: &str = "taskdeck.sqlite3";

#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Track short tasks from the terminal")]
struct Cli {
    /// Override the data directory (defaults to the platform data dir).
    #[arg(long, env = "TASKDECK_DATA_DIR", global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a task.
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List tasks in insertion order.
    List,
    /// Flip a task's completion flag.
    Toggle {
        /// Task id; a unique prefix is enough.
        id: String,
    },
    /// Edit a task's title and/or description.
    Edit {
        /// Task id; a unique prefix is enough.
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a task.
    Rm {
        /// Task id; a unique prefix is enough.
        id: String,
    },
    /// Toggle the light/dark display preference.
    Theme,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("taskdeck: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir(cli.data_dir)?;
    std::fs::create_dir_all(&data_dir)?;

    // Logging failure must not block task access.
    if let Err(err) = init_logging(default_log_level(), &data_dir.join("logs")) {
        eprintln!("taskdeck: logging disabled: {err}");
    }

    let kv = SqliteKvStore::open(data_dir.join(STORE_FILE_NAME))?;
    let mut service = TaskService::load(&kv)?;

    match cli.command {
        Command::Add { title, description } => {
            if !service.add(&title, &description)? {
                eprintln!("a task needs a non-empty title");
                return Ok(ExitCode::FAILURE);
            }
            let added = service.tasks().last().ok_or("task list empty after add")?;
            println!("added {}  {}", short_id(added.id), added.title);
        }

        Command::List => {
            let theme = ThemeService::load(&kv)?.theme();
            if service.tasks().is_empty() {
                println!("no tasks yet");
            }
            for task in service.tasks() {
                render_task(task);
            }
            println!("theme: {}", theme.as_str());
        }

        Command::Toggle { id } => {
            let id = resolve_id(service.tasks(), &id)?;
            service.toggle_complete(id)?;
            let task = service.find(id).ok_or("task vanished during toggle")?;
            let state = if task.completed { "done" } else { "open" };
            println!("{}  {}  [{state}]", short_id(id), task.title);
        }

        Command::Edit {
            id,
            title,
            description,
        } => {
            let id = resolve_id(service.tasks(), &id)?;
            let task = service.find(id).ok_or("task vanished during edit")?;

            let mut editor = TaskEditor::new();
            editor.begin(task);
            if let Some(title) = title {
                editor.title = title;
            }
            if let Some(description) = description {
                editor.description = description;
            }

            editor.commit(&mut service, id)?;
            if editor.is_active() {
                eprintln!("a task needs a non-empty title");
                return Ok(ExitCode::FAILURE);
            }
            let task = service.find(id).ok_or("task vanished during edit")?;
            println!("updated {}  {}", short_id(id), task.title);
        }

        Command::Rm { id } => {
            let id = resolve_id(service.tasks(), &id)?;
            service.remove(id)?;
            println!("removed {}", short_id(id));
        }

        Command::Theme => {
            let mut themes = ThemeService::load(&kv)?;
            let next = themes.toggle()?;
            println!("theme set to {}", next.as_str());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, String> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    dirs::data_dir()
        .map(|dir| dir.join("taskdeck"))
        .ok_or_else(|| {
            "no platform data directory available; pass --data-dir or set TASKDECK_DATA_DIR"
                .to_string()
        })
}

/// Resolves a full id or unique id prefix against the current list.
fn resolve_id(tasks: &[Task], input: &str) -> Result<TaskId, String> {
    let needle = input.to_ascii_lowercase();
    let matches: Vec<TaskId> = tasks
        .iter()
        .filter(|task| task.id.to_string().starts_with(&needle))
        .map(|task| task.id)
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("no task matches id `{input}`")),
        _ => Err(format!(
            "id `{input}` is ambiguous ({} matches); use more characters",
            matches.len()
        )),
    }
}

fn render_task(task: &Task) {
    let mark = if task.completed { "x" } else { " " };
    println!("[{mark}] {}  {}", short_id(task.id), task.title);
    if !task.description.is_empty() {
        println!("         {}", task.description);
    }
}

fn short_id(id: TaskId) -> String {
    id.to_string().chars().take(8).collect()
}
