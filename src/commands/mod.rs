pub mod folder;
pub mod gist;
pub mod init;
pub mod last;
pub mod log;
pub mod new;
pub mod note;
pub mod open;
pub mod plan;
pub mod today;
pub mod yesterday;
pub mod yesterday_gist;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Initialize the onit directory and configuration")]
    Init,
    #[command(about = "Create file for new day", visible_alias = "n")]
    New(new::NewArgs),
    #[command(about = "Open file for today if it exists", visible_aliases = ["t", "prep"])]
    Today,
    #[command(about = "Open file for yesterday if it exists", visible_alias = "y")]
    Yesterday,
    #[command(about = "Create and open the file for an upcoming day without moving the pointers")]
    Plan(plan::PlanArgs),
    #[command(about = "Open file for a given date", visible_alias = "o")]
    Open(open::OpenArgs),
    #[command(about = "Log yesterday and today, copied to the clipboard", visible_alias = "l")]
    Log,
    #[command(about = "Create a note from a title")]
    Note(note::NoteArgs),
    #[command(about = "Open one of the onit folders", visible_alias = "f")]
    Folder(folder::FolderArgs),
    #[command(about = "Show the most recent day files")]
    Last(last::LastArgs),
    #[command(about = "Create Gist of file for today", visible_alias = "g")]
    Gist,
    #[command(name = "yesterday_gist", about = "Set yesterday file as Gist content", visible_alias = "yg")]
    YesterdayGist(yesterday_gist::YesterdayGistArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::New(args) => new::cmd(args),
            Commands::Today => today::cmd(),
            Commands::Yesterday => yesterday::cmd(),
            Commands::Plan(args) => plan::cmd(args),
            Commands::Open(args) => open::cmd(args),
            Commands::Log => log::cmd(),
            Commands::Note(args) => note::cmd(args),
            Commands::Folder(args) => folder::cmd(args),
            Commands::Last(args) => last::cmd(args),
            Commands::Gist => gist::cmd().await,
            Commands::YesterdayGist(args) => yesterday_gist::cmd(args).await,
        }
    }
}
