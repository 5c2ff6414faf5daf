use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upload completed without error.
pub const UPLOAD_ERR_OK: u8 = 0;

/// Metadata describing one uploaded file, as handed over by the hosting framework.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// The file name given by the client.
    pub name: String,
    /// The media type given by the client.
    #[serde(rename = "type", default)]
    pub media_type: String,
    /// The size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Where the upload was stored on the server.
    pub tmp_name: PathBuf,
    /// Upload status code, [`UPLOAD_ERR_OK`] on success.
    #[serde(default)]
    pub error: u8,
}

impl UploadedFile {
    /// Interprets a file data entry, if it has the shape of a single upload.
    pub fn from_value(value: &Value) -> Option<UploadedFile> {
        UploadedFile::deserialize(value).ok()
    }

    /// Returns true if the upload completed without error.
    pub fn is_ok(&self) -> bool {
        self.error == UPLOAD_ERR_OK
    }
}
