use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tweakpad", about = "Project tooling for tweak_shader editors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to tweakpad.toml, then the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed a new shader project from the default compute template
    New {
        /// Destination file (defaults to the configured file name)
        path: Option<PathBuf>,

        /// Overwrite the destination if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Convert an introspected input dump into control panel props
    Inputs {
        /// JSON file mapping input names to their introspected values
        file: PathBuf,

        /// Emit compact JSON on one line
        #[arg(long)]
        compact: bool,
    },

    /// Print the editor's syntax highlight theme as JSON
    Theme {
        /// Emit compact JSON on one line
        #[arg(long)]
        compact: bool,
    },
}
