mod build;
mod check;
mod inspect;

/// Subcommands for pvocab
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary from oracle-transition files.
    Build(build::BuildArgs),

    /// Summarize a saved vocabulary.
    Inspect(inspect::InspectArgs),

    /// Read a ``CoNLL-U`` file against a saved vocabulary.
    Check(check::CheckArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Build(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}
