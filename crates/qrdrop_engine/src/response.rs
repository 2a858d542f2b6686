use serde::Deserialize;

use crate::{FailureKind, UploadError, UploadReceipt};

const UNKNOWN_SERVER_ERROR: &str = "unknown error";

// `success` defaults to false: the server answers bare `{"error": ...}` on a
// 400 and that must read as a rejection, not as a malformed body.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    qr_code: Option<String>,
    download_url: Option<String>,
    error: Option<String>,
    filename: Option<String>,
    file_id: Option<String>,
}

/// Decodes the JSON body returned by the upload endpoint.
pub fn decode_upload_response(body: &[u8]) -> Result<UploadReceipt, UploadError> {
    let response: UploadResponse = serde_json::from_slice(body)
        .map_err(|err| UploadError::new(FailureKind::MalformedResponse, err.to_string()))?;

    if !response.success {
        let message = response
            .error
            .unwrap_or_else(|| UNKNOWN_SERVER_ERROR.to_string());
        return Err(UploadError::new(FailureKind::Rejected, message));
    }

    match (response.download_url, response.qr_code) {
        (Some(download_url), Some(qr_code)) => Ok(UploadReceipt {
            download_url,
            qr_code,
            filename: response.filename,
            file_id: response.file_id,
        }),
        (download_url, _) => Err(UploadError::new(
            FailureKind::MalformedResponse,
            if download_url.is_none() {
                "success response without download_url"
            } else {
                "success response without qr_code"
            },
        )),
    }
}
