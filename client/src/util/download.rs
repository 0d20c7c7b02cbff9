//! Trigger a browser download of in-memory text.
//!
//! Builds a `Blob`, points a temporary anchor at its object URL, clicks it,
//! then revokes the URL. Outside the browser this reports an error.

/// Offer `contents` as a file named `filename`.
///
/// # Errors
///
/// A message describing the first DOM call that failed.
pub fn download_text(filename: &str, mime: &str, contents: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let fail = |what: &str| format!("download failed: {what}");
        let document = web_sys::window().and_then(|w| w.document()).ok_or_else(|| fail("no document"))?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(|_| fail("blob"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| fail("object url"))?;

        let anchor = document
            .create_element("a")
            .map_err(|_| fail("anchor"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| fail("anchor cast"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, contents);
        Err("download requires a browser".to_owned())
    }
}
