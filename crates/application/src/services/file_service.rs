//! File endpoints.

use std::path::Path;

use apicheck_domain::{ApiRequest, AssertableResponse};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::HttpClient;

/// `GET` the server's base image.
pub const DOWNLOAD: &str = "/api/files/download";
/// `POST` a multipart upload.
pub const UPLOAD: &str = "/api/files/upload";
/// `GET` the most recently uploaded file.
pub const DOWNLOAD_LAST: &str = "/api/files/downloadLastFile";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Thin wrapper over the file endpoints.
#[derive(Debug, Clone)]
pub struct FileService<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> FileService<C> {
    /// Creates a new `FileService`.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Downloads the server's base image.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn download_base_image(&self) -> ApplicationResult<AssertableResponse> {
        self.send(ApiRequest::get(DOWNLOAD)).await
    }

    /// Uploads the file at `path`, guessing its MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Io` if the file cannot be read, or an error
    /// if the call fails.
    pub async fn upload_file(&self, path: &Path) -> ApplicationResult<AssertableResponse> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApplicationError::Io(format!("{}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        self.send(ApiRequest::post(UPLOAD).multipart(UPLOAD_FIELD, file_name, content_type, bytes))
            .await
    }

    /// Downloads the most recently uploaded file.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn download_last_file(&self) -> ApplicationResult<AssertableResponse> {
        self.send(ApiRequest::get(DOWNLOAD_LAST)).await
    }

    async fn send(&self, request: ApiRequest) -> ApplicationResult<AssertableResponse> {
        let capture = self.client.execute(&request).await?;
        Ok(AssertableResponse::new(capture))
    }
}
