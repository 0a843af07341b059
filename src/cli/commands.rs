//! CLI subcommand definitions

use clap::{Args, Subcommand};

use crate::core::{SortDirection, SortKey};

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Browse the catalog one page at a time (default)
    List(ListArgs),
    /// Show a single pet in detail
    Show {
        /// Pet identifier
        id: String,
    },
    /// Show the pet of the day
    Today {
        /// Evaluate for this day instead of today (YYYYMMDD or YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Restore the default order (name ascending) and go back to page 1
    Reset,
}

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct ListArgs {
    /// Field to sort by
    #[arg(short, long, value_enum)]
    pub(crate) sort: Option<SortKey>,

    /// Sort direction
    #[arg(short, long, value_enum)]
    pub(crate) order: Option<SortDirection>,

    /// Page to show (1-based)
    #[arg(short, long, conflicts_with_all = ["next", "prev"])]
    pub(crate) page: Option<u32>,

    /// Go to the page after the last one viewed
    #[arg(short, long, conflicts_with = "prev")]
    pub(crate) next: bool,

    /// Go to the page before the last one viewed
    #[arg(long)]
    pub(crate) prev: bool,

    /// Also show the pet of the day above the listing
    #[arg(short, long)]
    pub(crate) featured: bool,
}

/// Normalized command with the default filled in
#[derive(Debug, Clone)]
pub(crate) enum PetCommand {
    List(ListArgs),
    Show { id: String },
    Today { date: Option<String> },
    Reset,
}

impl From<Option<Commands>> for PetCommand {
    fn from(cmd: Option<Commands>) -> Self {
        match cmd {
            Some(Commands::List(args)) => PetCommand::List(args),
            Some(Commands::Show { id }) => PetCommand::Show { id },
            Some(Commands::Today { date }) => PetCommand::Today { date },
            Some(Commands::Reset) => PetCommand::Reset,
            None => PetCommand::List(ListArgs::default()),
        }
    }
}
