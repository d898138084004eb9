use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod delete;
pub mod display;
pub mod favorite;
pub mod form;
pub mod list;
pub mod search;
pub mod show;
pub mod ui;
pub mod update;

pub use add::run_add;
pub use delete::run_delete;
pub use favorite::run_set_favorite;
pub use list::{run_favorites, run_list};
pub use search::run_search;
pub use show::run_show;
pub use update::run_update;

#[derive(Parser)]
#[command(name = "contactmgr")]
#[command(about = "Manage contacts stored in a local database")]
#[command(version)]
pub struct Cli {
    /// Database file (overrides CONTACTMGR_DB and the default location)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,
    /// Log store operations to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all contacts by name
    List(OutputArgs),
    /// List favorite contacts
    Favorites(OutputArgs),
    /// Search contacts by name
    Search(SearchArgs),
    /// Show full details for a contact
    Show(ShowArgs),
    /// Add a new contact
    Add(AddArgs),
    /// Update an existing contact
    Update(UpdateArgs),
    /// Mark a contact as favorite
    Favorite(IdArgs),
    /// Remove a contact from favorites
    Unfavorite(IdArgs),
    /// Delete a contact
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text contained in the contact's name
    #[arg(default_value = "")]
    pub query: String,
    #[arg(short, long)]
    pub case_sensitive: bool,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    pub id: i64,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct IdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub mobile: Option<String>,
    #[arg(short, long)]
    pub landline: Option<String>,
    /// Photo URI
    #[arg(short, long)]
    pub photo: Option<String>,
    #[arg(short, long)]
    pub favorite: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub id: i64,
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub mobile: Option<String>,
    /// New landline; pass an empty string to clear it
    #[arg(short, long)]
    pub landline: Option<String>,
    /// Photo URI
    #[arg(short, long)]
    pub photo: Option<String>,
    #[arg(long, conflicts_with = "no_favorite")]
    pub favorite: bool,
    #[arg(long)]
    pub no_favorite: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub id: i64,
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}
