use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Result, eyre};
use std::path::PathBuf;
use todostore::{FileStorage, Priority, Task, TaskStore};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "todostore CLI - a persistent task list")]
#[command(version)]
struct Cli {
    /// Path to the task list file (default: <data dir>/todostore/tasks.json)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task name
        name: String,

        /// Task priority: High, Medium or Low
        #[arg(short, long)]
        priority: String,
    },

    /// Mark a task as done
    Done {
        /// Task id (shown by `list`)
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task id (shown by `list`)
        id: u64,
    },

    /// Clear all done tasks
    Clear,

    /// Show the to-do and done lists
    List {
        /// Show to-do tasks in insertion order instead of by priority
        #[arg(long)]
        unsorted: bool,
    },
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let path = match cli.store_path {
        Some(path) => path,
        None => default_store_path()?,
    };
    let mut store = TaskStore::open(FileStorage::new(&path));

    match cli.command {
        Commands::Add { name, priority } => {
            match store.add_task(&name, &priority) {
                Ok(id) => println!("{} (id {})", "Task added successfully!".green(), id),
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    std::process::exit(1);
                }
            }
        }
        Commands::Done { id } => {
            store.complete_task(id);
            println!("{}", "Task marked as done!".green());
        }
        Commands::Delete { id } => {
            store.delete_task(id);
            println!("{}", "Task deleted successfully!".green());
        }
        Commands::Clear => {
            store.clear_done();
            println!("{}", "All done tasks cleared!".green());
        }
        Commands::List { unsorted } => {
            if unsorted {
                store.toggle_sort();
            }
            render(&store);
        }
    }

    Ok(())
}

fn default_store_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| eyre!("Could not determine user data directory"))?;
    Ok(data_dir.join("todostore").join("tasks.json"))
}

fn render(store: &TaskStore<FileStorage>) {
    let todo = store.todo_view();
    println!("Tasks to do - {}", todo.len());
    for task in todo {
        println!("  [{:>3}] {}  {}", task.id, task.name, priority_badge(task));
    }

    let done = store.done_view();
    println!("\nDone - {}", done.len());
    for task in done {
        println!("  [{:>3}] {}", task.id, task.name.as_str().strikethrough().dimmed());
    }
}

fn priority_badge(task: &Task) -> colored::ColoredString {
    match task.priority {
        Priority::High => task.priority.as_str().red(),
        Priority::Medium => task.priority.as_str().yellow(),
        Priority::Low => task.priority.as_str().green(),
    }
}
