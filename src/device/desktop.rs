//! Desktop backend for the capability boundary, built on native rfd
//! dialogs. Desktop sessions have no permission broker, so the
//! request-permission step of the mobile original collapses into
//! showing the dialog itself; denial outcomes still flow through
//! [`DeviceError`] and are handled by the reducer.

use rfd::AsyncFileDialog;

use super::DeviceError;
use crate::models::{Coordinates, PhotoSource};

/// Open a native picker for the requested photo source.
///
/// A dismissed dialog is reported as `Ok(None)`, the user-cancelled
/// case. The camera path opens an import dialog for an existing
/// capture, since no live-capture stack exists on this backend.
pub async fn pick_photo(source: PhotoSource) -> Result<Option<String>, DeviceError> {
    let dialog = AsyncFileDialog::new().add_filter("Images", &["jpg", "jpeg", "png"]);
    let dialog = match source {
        PhotoSource::Gallery => dialog.set_title("Choose a Photo"),
        PhotoSource::Camera => dialog.set_title("Import a Camera Capture"),
    };

    Ok(dialog
        .pick_file()
        .await
        .map(|handle| handle.path().display().to_string()))
}

/// Resolve one position fix.
///
/// There is no GPS on a desktop workstation; the fix comes from the
/// `position` entry of the config file when present.
pub async fn current_position(
    configured: Option<Coordinates>,
) -> Result<Coordinates, DeviceError> {
    configured.ok_or_else(|| {
        DeviceError::Unavailable(
            "no location source configured; set `position` in the config file".to_string(),
        )
    })
}
