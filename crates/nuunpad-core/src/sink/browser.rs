//! Browser download sink: Blob + object URL + transient anchor element.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, Url};

use crate::error::{NuunpadError, Result};

use super::traits::{DeliveryReceipt, FileSink};

/// Sink that triggers a file download in the active document.
///
/// The object URL is revoked and the anchor removed on every exit path once they
/// exist, including when a later step fails.
pub struct BrowserDownloadSink {
    document: Document,
}

impl BrowserDownloadSink {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Bind to the current window's document.
    pub fn from_window() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| NuunpadError::Sink("No document available".to_string()))?;
        Ok(Self::new(document))
    }

    fn body(&self) -> Result<HtmlElement> {
        self.document
            .body()
            .ok_or_else(|| NuunpadError::Sink("Document has no body".to_string()))
    }
}

/// Revokes the object URL when dropped.
struct ObjectUrl(String);

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// Detaches the anchor from the document when dropped.
struct AttachedAnchor {
    body: HtmlElement,
    anchor: HtmlAnchorElement,
}

impl Drop for AttachedAnchor {
    fn drop(&mut self) {
        let _ = self.body.remove_child(&self.anchor);
    }
}

fn js_error(context: &str, err: JsValue) -> NuunpadError {
    NuunpadError::Sink(format!("{}: {:?}", context, err))
}

impl FileSink for BrowserDownloadSink {
    fn deliver(
        &mut self,
        filename: &str,
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<DeliveryReceipt> {
        let parts = Array::of1(&JsValue::from(Uint8Array::from(bytes)));
        let options = BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| js_error("Failed to create blob", e))?;

        let url = ObjectUrl(
            Url::create_object_url_with_blob(&blob)
                .map_err(|e| js_error("Failed to create object URL", e))?,
        );

        let anchor: HtmlAnchorElement = self
            .document
            .create_element("a")
            .map_err(|e| js_error("Failed to create anchor", e))?
            .dyn_into()
            .map_err(|_| NuunpadError::Sink("Created element is not an anchor".to_string()))?;
        anchor.set_href(&url.0);
        anchor.set_download(filename);
        anchor
            .style()
            .set_property("display", "none")
            .map_err(|e| js_error("Failed to hide anchor", e))?;

        let body = self.body()?;
        body.append_child(&anchor)
            .map_err(|e| js_error("Failed to attach anchor", e))?;
        let attached = AttachedAnchor { body, anchor };
        attached.anchor.click();

        tracing::debug!(filename, bytes = bytes.len(), "triggered browser download");
        drop(attached);
        drop(url);
        Ok(DeliveryReceipt::new("browser download"))
    }
}
