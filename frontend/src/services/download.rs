//! Client-side download of the unlocked archive.
//!
//! Synthesizes a one-shot save-as by pointing a temporary anchor at an
//! object URL for the bytes. The URL is revoked before returning, so each
//! call stands on its own.

use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::types::{AppError, AppResult};

/// Saves `bytes` under `filename` through the browser's download flow.
pub fn save_bytes(bytes: &[u8], filename: &str) -> AppResult<()> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).buffer());
    let blob = Blob::new_with_u8_array_sequence(&parts)
        .map_err(|e| AppError::Browser(format!("Failed to create blob: {:?}", e)))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| AppError::Browser(format!("Failed to create object URL: {:?}", e)))?;

    let document = document();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| AppError::Browser(format!("Failed to create anchor: {:?}", e)))?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| AppError::Browser("Document has no body".to_string()))?;
    body.append_child(&anchor)
        .map_err(|e| AppError::Browser(format!("Failed to attach anchor: {:?}", e)))?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    // Release the handle right away; the click already started the download.
    let _ = Url::revoke_object_url(&url);

    log::info!("Download triggered: {} ({} bytes)", filename, bytes.len());
    Ok(())
}
