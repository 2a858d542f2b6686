use std::time::Duration;

use qrdrop_logging::{qrdrop_debug, qrdrop_warn};
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use url::Url;

use crate::{decode_upload_response, FailureKind, UploadError, UploadReceipt, UploadRequest};

#[derive(Debug, Clone)]
pub struct UploadSettings {
    /// Absolute URL the multipart form is posted to.
    pub endpoint: String,
    /// Form field carrying the file.
    pub field_name: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/upload".to_string(),
            field_name: "file".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadReceipt, UploadError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestUploader {
    settings: UploadSettings,
}

impl ReqwestUploader {
    pub fn new(settings: UploadSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &UploadSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, UploadError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| UploadError::new(FailureKind::InvalidRequest, err.to_string()))
    }

    fn build_form(&self, request: &UploadRequest) -> Form {
        Form::new().part(self.settings.field_name.clone(), file_part(request))
    }
}

#[async_trait::async_trait]
impl Uploader for ReqwestUploader {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadReceipt, UploadError> {
        let endpoint = Url::parse(&self.settings.endpoint)
            .map_err(|err| UploadError::new(FailureKind::InvalidRequest, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(endpoint)
            .multipart(self.build_form(request))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        qrdrop_debug!(
            "upload {} answered with status {}",
            request.upload_id,
            status
        );

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode_upload_response(&body).map_err(|err| {
            if err.kind == FailureKind::MalformedResponse && !status.is_success() {
                UploadError::new(err.kind, format!("http status {status}: {}", err.message))
            } else {
                err
            }
        })
    }
}

fn file_part(request: &UploadRequest) -> Part {
    // Bytes clones share the buffer; the payload itself is never copied.
    let bare = || {
        let body = Body::from(request.payload.clone());
        Part::stream_with_length(body, request.payload.len() as u64)
            .file_name(request.file_name.clone())
    };
    if request.mime_type.is_empty() {
        return bare();
    }
    match bare().mime_str(&request.mime_type) {
        Ok(part) => part,
        Err(err) => {
            qrdrop_warn!(
                "upload {}: ignoring unusable mime type {:?}: {}",
                request.upload_id,
                request.mime_type,
                err
            );
            bare()
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> UploadError {
    if err.is_timeout() {
        return UploadError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return UploadError::new(FailureKind::InvalidRequest, err.to_string());
    }
    UploadError::new(FailureKind::Network, err.to_string())
}
