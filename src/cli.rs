use std::fs;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use diesel::{Connection, SqliteConnection};

use crate::db::{self, InitPolicy};
use crate::models::user::User;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about = "Prop inventory backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Create the upload folder and any missing tables
    InitDb {
        /// Drop and recreate tables first, discarding their rows
        #[arg(long, value_enum)]
        reset: Option<ResetScope>,
    },
    /// Create a new user
    AddUser { username: String, password: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResetScope {
    /// Every table, users included
    All,
    /// Only locations and props
    Inventory,
}

impl From<Option<ResetScope>> for InitPolicy {
    fn from(reset: Option<ResetScope>) -> Self {
        match reset {
            None => InitPolicy::Preserve,
            Some(ResetScope::All) => InitPolicy::Reset,
            Some(ResetScope::Inventory) => InitPolicy::ResetInventory,
        }
    }
}

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn connect(settings: &Settings) -> anyhow::Result<SqliteConnection> {
    SqliteConnection::establish(&settings.database_url)
        .with_context(|| format!("Couldn't open database {}", settings.database_url))
}

pub fn init_db(settings: &Settings, policy: InitPolicy) -> anyhow::Result<()> {
    fs::create_dir_all(&settings.upload_folder)
        .with_context(|| format!("Couldn't create upload folder {}", settings.upload_folder))?;
    log::info!("upload folder ready at {}", settings.upload_folder);

    let mut conn = connect(settings)?;
    db::init_schema(&mut conn, policy)?;

    println!("Initialized the database.");
    Ok(())
}

pub fn add_user(settings: &Settings, username: &str, password: &str) -> anyhow::Result<()> {
    let mut conn = connect(settings)?;
    db::init_schema(&mut conn, InitPolicy::Preserve)?;

    if let Some(existing) = User::find_by_username(&mut conn, username)? {
        anyhow::bail!("User {} already exists.", existing.username);
    }

    let user = User::create(&mut conn, username, password)?;
    log::info!("created user {} with id {}", user.username, user.id);

    println!("User {} created successfully.", username);
    Ok(())
}
