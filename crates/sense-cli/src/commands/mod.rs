use crate::cli::{Commands, GlobalFlags};

pub mod inspect;
pub mod run;
pub mod score;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => run::handle(args, flags),
        Commands::Inspect(args) => inspect::handle(args, flags),
        Commands::Score(args) => score::handle(args, flags),
    }
}
