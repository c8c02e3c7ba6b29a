use std::path::Path;

use crate::settings::Settings;
use crate::uploads;
use rocket::fs::NamedFile;
use rocket::State;

#[get("/uploads/<filename>")]
pub(crate) async fn get_upload(filename: &str, settings: &State<Settings>) -> Option<NamedFile> {
    let path = uploads::photo_path(Path::new(&settings.upload_folder), filename)?;
    NamedFile::open(path).await.ok()
}
