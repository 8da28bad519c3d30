//! File API checks against a running server.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use apicheck_application::ApplicationError;
use apicheck_domain::{has_message, has_status_code};
use apicheck_suite::SuiteContext;

type TestResult = Result<(), ApplicationError>;

fn context() -> SuiteContext {
    SuiteContext::from_env().expect("Failed to build suite context")
}

#[tokio::test]
#[ignore = "requires a running user API (APICHECK_BASE_URL)"]
async fn test_download_base_image() -> TestResult {
    let ctx = context();

    let image = ctx
        .files
        .download_base_image()
        .await?
        .should(&has_status_code(200))?;

    assert!(!image.as_bytes().is_empty());
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running user API (APICHECK_BASE_URL)"]
async fn test_upload_then_download_last_file() -> TestResult {
    let ctx = context();
    let image = ctx
        .files
        .download_base_image()
        .await?
        .should(&has_status_code(200))?;

    let mut file = tempfile::Builder::new()
        .suffix(".jpeg")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(image.as_bytes()).unwrap();

    ctx.files
        .upload_file(file.path())
        .await?
        .should(&has_status_code(200))?
        .should(&has_message("file uploaded to server"))?;

    let last = ctx.files.download_last_file().await?;
    assert!(!last.as_bytes().is_empty());
    assert_eq!(last.as_bytes().len(), image.as_bytes().len());
    Ok(())
}
