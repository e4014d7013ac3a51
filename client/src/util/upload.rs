//! Reading a picked image file into a data URL.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("could not create a file reader: {0}")]
    Reader(String),
    #[error("could not read the file: {0}")]
    Read(String),
}

#[cfg(feature = "csr")]
pub use reader::read_data_url;

#[cfg(feature = "csr")]
mod reader {
    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;
    use web_sys::{File, FileReader, ProgressEvent};

    use super::UploadError;
    use crate::util::browser::js_error_message;

    /// Read `file` as a `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] if the reader cannot be created, or if the read
    /// ends without a string result (aborted or failed).
    pub async fn read_data_url(file: File) -> Result<String, UploadError> {
        let reader = FileReader::new().map_err(|e| UploadError::Reader(js_error_message(&e)))?;
        let (done_tx, done_rx) = oneshot::channel::<()>();
        let on_load_end = Closure::once(move |_: ProgressEvent| {
            if done_tx.send(()).is_err() {
                log::debug!("file read finished after the upload was dropped");
            }
        });
        reader.set_onloadend(Some(on_load_end.as_ref().unchecked_ref()));
        reader
            .read_as_data_url(&file)
            .map_err(|e| UploadError::Read(js_error_message(&e)))?;

        let done = done_rx.await;
        reader.set_onloadend(None);
        drop(on_load_end);
        done.map_err(|_| UploadError::Read("reader dropped".to_owned()))?;

        if let Some(error) = reader.error() {
            return Err(UploadError::Read(String::from(error.message())));
        }
        reader
            .result()
            .map_err(|e| UploadError::Read(js_error_message(&e)))?
            .as_string()
            .ok_or_else(|| UploadError::Read("empty result".to_owned()))
    }
}
