use clap::Subcommand;

mod cat;
mod debug;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the debugged contents of rpub::Epub.
    Debug(debug::DebugCommand),
    /// Write a resource of an EPUB to stdout.
    Cat(cat::CatCommand),
}
