pub mod catalog;
pub mod centers;
pub mod report;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "labdesk",
    version,
    about = "Laboratory operations companion — LIMS catalog, referral centers, report archive"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse the LIMS test/profile catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Browse referral centers
    Centers {
        #[command(subcommand)]
        command: CentersCommand,
    },
    /// Manage archived reports
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Fetch all tests and profiles from the LIMS
    List {
        /// LIMS access token (falls back to LABDESK_CATALOG_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CentersCommand {
    /// Fetch the referral center list (token from LABDESK_REFERRAL_TOKEN)
    List,
}

#[derive(Subcommand)]
pub enum ReportCommand {
    /// Archive a new report
    Create {
        /// Report title
        #[arg(long)]
        title: String,
        /// Report body
        #[arg(long)]
        content: String,
        /// Report date (RFC 3339; defaults to now)
        #[arg(long)]
        date: Option<String>,
        /// Store in the administrative collection
        #[arg(long)]
        admin: bool,
    },
    /// Show an archived report
    Show {
        /// Report id
        id: String,
    },
    /// Delete an archived report
    Delete {
        /// Report id
        id: String,
    },
}
