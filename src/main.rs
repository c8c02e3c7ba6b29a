mod api;
mod cli;
mod cors;
mod db;
mod error;
mod models;
mod schema;
mod settings;
mod uploads;

#[cfg(test)]
mod tests;

#[macro_use]
extern crate rocket;
#[macro_use]
extern crate diesel;
extern crate dotenv;

use clap::Parser;
use cli::{Cli, Command};
use cors::CORS;
use db::DbConn;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use settings::Settings;

pub(crate) fn build_rocket(settings: Settings) -> Rocket<Build> {
    let figment =
        rocket::Config::figment().merge(("databases.props.url", settings.database_url.clone()));

    rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(AdHoc::try_on_ignite(
            "Database migrations",
            db::run_db_migrations,
        ))
        .attach(AdHoc::try_on_ignite(
            "Upload folder",
            uploads::create_upload_folder,
        ))
        .attach(CORS::new(settings.cors_allowed_origin.clone()))
        .manage(settings)
        .register("/", catchers![error::default_catcher])
        .mount(
            "/",
            routes![
                cors::preflight,
                crate::api::prop_management::get_image::get_upload,
            ],
        )
        .mount(
            "/api",
            routes![
                crate::api::location_management::list::get_locations,
                crate::api::location_management::create::create_location,
                crate::api::prop_management::create::add_prop,
                crate::api::prop_management::list::get_props,
                crate::api::prop_management::get_prop::get_prop,
                crate::api::prop_management::edit::edit_prop,
                crate::api::prop_management::delete::delete_prop,
            ],
        )
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::new()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            if let Err(err) = build_rocket(settings).launch().await {
                anyhow::bail!("Rocket failed to launch: {}", err);
            }
        }
        Command::InitDb { reset } => {
            cli::init_logging();
            cli::init_db(&settings, reset.into())?;
        }
        Command::AddUser { username, password } => {
            cli::init_logging();
            cli::add_user(&settings, &username, &password)?;
        }
    }

    Ok(())
}
