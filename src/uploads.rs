use std::io;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rocket::tokio::fs;
use rocket::{fairing, Build, Rocket};
use thiserror::Error;
use uuid::Uuid;

use crate::settings::Settings;

const DEFAULT_EXTENSION: &str = "jpg";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("photo is not a data URL")]
    NotDataUrl,
    #[error("couldn't decode photo: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("couldn't write photo: {0}")]
    Io(#[from] io::Error),
}

pub(crate) async fn create_upload_folder(rocket: Rocket<Build>) -> fairing::Result {
    let folder = match rocket.state::<Settings>() {
        Some(settings) => PathBuf::from(&settings.upload_folder),
        None => return Err(rocket),
    };

    match fs::create_dir_all(&folder).await {
        Ok(()) => Ok(rocket),
        Err(err) => {
            log::error!("couldn't create upload folder {}: {}", folder.display(), err);
            Err(rocket)
        }
    }
}

/// Picks the file extension from a data URL header such as
/// `data:image/png;base64`.
fn extension(header: &str) -> &str {
    header
        .split_once('/')
        .map(|(_, subtype)| subtype.split(';').next().unwrap_or_default())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(DEFAULT_EXTENSION)
}

/// Writes a `data:` URL photo into `dir` and returns the generated filename.
pub(crate) async fn save_photo(dir: &Path, data_url: &str) -> Result<String, UploadError> {
    let (header, encoded) = data_url.split_once(',').ok_or(UploadError::NotDataUrl)?;
    let bytes = STANDARD.decode(encoded.trim())?;

    let filename = format!("prop_{}.{}", Uuid::new_v4().simple(), extension(header));
    fs::write(dir.join(&filename), bytes).await?;

    Ok(filename)
}

/// Best effort: files that are already gone are skipped.
pub(crate) async fn remove_photos(dir: &Path, filenames: &[String]) {
    for filename in filenames {
        let Some(path) = photo_path(dir, filename) else {
            continue;
        };
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => log::warn!("couldn't remove {}: {}", path.display(), err),
        }
    }
}

/// Resolves a stored filename inside `dir`, refusing anything that is not a
/// single plain path component.
pub(crate) fn photo_path(dir: &Path, filename: &str) -> Option<PathBuf> {
    let name = Path::new(filename).file_name()?;
    if name != filename || filename.starts_with('.') {
        return None;
    }

    Some(dir.join(name))
}
