use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "profile-api",
    version,
    about = "Turn a career profile template into JSON records for a lookup API",
    after_help = "Paths default to profile.md and api/ in the working directory, or to the \
                  values in profile-api.toml. Set RUST_LOG=debug to see what the parser skipped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse the profile document and write one JSON file per filled section.
    ///
    /// Sections that are missing or still hold only hint comments are skipped,
    /// and their stale files are removed. index.json lists what was written.
    Build {
        /// Profile document (default: profile.md)
        #[arg(short, long)]
        input: Option<String>,
        /// Output directory (default: api)
        #[arg(short, long)]
        output: Option<String>,
        /// Date stamped into each file as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Report which sections are filled and which values are still empty
    Check {
        /// Profile document (default: profile.md)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Print one record, or the directory with `index`
    Show {
        /// Endpoint name (identity, narrative, thesis, accomplishments, stats,
        /// experience, seeking, culture-fit, skills, index)
        endpoint: String,
        /// Profile document (default: profile.md)
        #[arg(short, long)]
        input: Option<String>,
        /// Date stamped into the envelope as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Write a blank profile template with hints for every value
    Template {
        /// Where to write the template (default: profile.md)
        #[arg(short, long)]
        output: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
