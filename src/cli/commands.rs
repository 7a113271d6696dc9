use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qd", about = concat!("[#] quad v", env!("CARGO_PKG_VERSION"), " - four quadrants, one board"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a .quad data directory in the current directory
    Init,
    /// Add a task (lands at the end of the urgent & important quadrant)
    Add(AddArgs),
    /// Print the four-quadrant board
    Board,
    /// List tasks, optionally limited to one bucket
    List(ListArgs),
    /// Toggle a task done/undone
    Done(DoneArgs),
    /// Move a task to a bucket, optionally at a position
    Mv(MvArgs),
    /// Manage labels
    Label(LabelCmd),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,

    /// Attach a label by name
    #[arg(short, long)]
    pub label: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Bucket: urgent_important (ui), important (i), urgent (u), low (l)
    pub bucket: Option<String>,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Task id (as shown by `qd list`)
    pub id: i64,
}

#[derive(Args)]
pub struct MvArgs {
    /// Task id
    pub id: i64,

    /// Target bucket: urgent_important (ui), important (i), urgent (u), low (l)
    pub bucket: String,

    /// 0-based position within the target bucket (default: append)
    #[arg(long)]
    pub at: Option<usize>,
}

#[derive(Args)]
pub struct LabelCmd {
    #[command(subcommand)]
    pub action: LabelAction,
}

#[derive(Subcommand)]
pub enum LabelAction {
    /// Create a label
    Add {
        /// Label name (up to 20 characters)
        name: String,
        /// Palette color (see `qd label palette`); defaults to the first swatch
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Delete a label; referencing tasks become unlabeled
    Rm {
        name: String,
    },
    /// List labels
    List,
    /// Print the color palette
    Palette,
}
