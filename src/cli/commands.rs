use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wingsfly", about = concat!("wingsfly v", env!("CARGO_PKG_VERSION"), " - a daily habit board"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start in the dark theme
    #[arg(long, global = true)]
    pub dark: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the built-in task catalog
    Tasks(TasksArgs),
    /// Print the add-sheet option catalog
    Options(OptionsArgs),
}

#[derive(Args)]
pub struct TasksArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show a single task by id
    #[arg(long)]
    pub id: Option<u32>,
}

#[derive(Args)]
pub struct OptionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
