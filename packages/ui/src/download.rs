//! Saving exported PDF reports.
//!
//! In the browser the bytes are wrapped in a `Blob` and handed to a
//! temporary `<a download>` link. On native targets the file is written to
//! the user's downloads directory.

/// Offer `bytes` to the user as a file called `file_name`.
#[cfg(target_arch = "wasm32")]
pub fn save_pdf(bytes: &[u8], file_name: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document available")?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "could not create download link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
    tracing::debug!("downloaded {file_name}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn js_error(e: wasm_bindgen::JsValue) -> String {
    format!("{e:?}")
}

/// Offer `bytes` to the user as a file called `file_name`.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_pdf(bytes: &[u8], file_name: &str) -> Result<(), String> {
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or("no downloads directory")?;
    let path = write_into(&dir, bytes, file_name)?;
    tracing::info!("saved {}", path.display());
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn write_into(
    dir: &std::path::Path,
    bytes: &[u8],
    file_name: &str,
) -> Result<std::path::PathBuf, String> {
    let path = dir.join(file_name);
    std::fs::write(&path, bytes).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(path)
}
