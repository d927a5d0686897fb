//! Reading `<input type="file">` selections.

use wasm_bindgen_futures::JsFuture;
use workforce_core::domain::Attachment;

use super::js_error;

const FALLBACK_MIME: &str = "application/octet-stream";

pub async fn read_attachment(file: web_sys::File) -> Result<Attachment, String> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|err| js_error(&err))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime_type = match file.type_() {
        t if t.is_empty() => FALLBACK_MIME.to_string(),
        t => t,
    };
    tracing::debug!(name = %file.name(), size = bytes.len(), "attachment read");
    Ok(Attachment { file_name: file.name(), mime_type, bytes })
}
