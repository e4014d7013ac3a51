//! One-shot photo capture from the front camera.
//!
//! Opens a stream, waits a bounded time for the first frame's metadata, draws
//! that frame to an off-screen canvas and returns it as a PNG data URL. The
//! stream's tracks are stopped whether or not the frame was captured.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("카메라 접근이 지원되지 않는 브라우저입니다.")]
    Unsupported,
    #[error("카메라 접근 실패: {0}")]
    Denied(String),
    #[error("사진 캡처 실패: {0}")]
    Frame(String),
    #[error("카메라 화면이 {waited_ms}ms 동안 준비되지 않았습니다.")]
    Timeout { waited_ms: u32 },
}

impl CaptureError {
    /// Whether the visitor is told about this failure with an alert.
    ///
    /// Only a missing camera API and a refused or failed camera request are
    /// shown; frame grabbing problems and timeouts are logged.
    #[must_use]
    pub fn alerts_user(&self) -> bool {
        matches!(self, Self::Unsupported | Self::Denied(_))
    }
}

#[cfg(feature = "csr")]
pub use capture::capture_photo;

#[cfg(feature = "csr")]
mod capture {
    use std::pin::pin;

    use board::consts::CAMERA_METADATA_TIMEOUT_MS;
    use futures::channel::oneshot;
    use futures::future::{Either, select};
    use gloo_timers::future::TimeoutFuture;
    use js_sys::{Object, Reflect};
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlVideoElement, MediaDevices, MediaStream,
        MediaStreamConstraints, MediaStreamTrack,
    };

    use super::CaptureError;
    use crate::util::browser::js_error_message;

    /// Take one picture with the front-facing camera.
    ///
    /// # Errors
    ///
    /// [`CaptureError::Unsupported`] without `navigator.mediaDevices.getUserMedia`,
    /// [`CaptureError::Denied`] when the stream cannot be opened and
    /// [`CaptureError::Frame`] when the frame cannot be drawn or encoded.
    pub async fn capture_photo() -> Result<String, CaptureError> {
        let window = web_sys::window().ok_or(CaptureError::Unsupported)?;
        let devices = media_devices(&window.navigator()).ok_or(CaptureError::Unsupported)?;
        let document = window
            .document()
            .ok_or_else(|| CaptureError::Frame("no document".to_owned()))?;

        let request = devices
            .get_user_media_with_constraints(&front_camera()?)
            .map_err(|e| CaptureError::Denied(js_error_message(&e)))?;
        let stream: MediaStream = JsFuture::from(request)
            .await
            .map_err(|e| CaptureError::Denied(js_error_message(&e)))?
            .unchecked_into();

        let photo = grab_frame(&document, &stream).await;
        stop_tracks(&stream);
        photo
    }

    fn media_devices(navigator: &web_sys::Navigator) -> Option<MediaDevices> {
        let devices = Reflect::get(navigator, &JsValue::from_str("mediaDevices"))
            .ok()
            .filter(|d| !d.is_undefined() && !d.is_null())?;
        let has_get_user_media = Reflect::get(&devices, &JsValue::from_str("getUserMedia"))
            .is_ok_and(|f| f.is_function());
        has_get_user_media.then(|| devices.unchecked_into())
    }

    fn front_camera() -> Result<MediaStreamConstraints, CaptureError> {
        let video = Object::new();
        let constraints = Object::new();
        Reflect::set(&video, &JsValue::from_str("facingMode"), &JsValue::from_str("user"))
            .and_then(|_| Reflect::set(&constraints, &JsValue::from_str("video"), &video))
            .map_err(|e| CaptureError::Denied(js_error_message(&e)))?;
        Ok(constraints.unchecked_into())
    }

    async fn grab_frame(document: &Document, stream: &MediaStream) -> Result<String, CaptureError> {
        let frame_err = |e: JsValue| CaptureError::Frame(js_error_message(&e));

        let video: HtmlVideoElement = document.create_element("video").map_err(frame_err)?.unchecked_into();
        let (loaded_tx, loaded_rx) = oneshot::channel::<()>();
        let on_loaded = Closure::once(move || {
            if loaded_tx.send(()).is_err() {
                log::debug!("camera metadata arrived after capture was dropped");
            }
        });
        video.set_onloadedmetadata(Some(on_loaded.as_ref().unchecked_ref()));
        video.set_muted(true);
        video.set_src_object(Some(stream));
        if let Err(e) = video.play() {
            log::debug!("camera preview did not start: {}", js_error_message(&e));
        }

        let deadline = TimeoutFuture::new(CAMERA_METADATA_TIMEOUT_MS);
        let loaded = select(pin!(loaded_rx), pin!(deadline)).await;
        video.set_onloadedmetadata(None);
        drop(on_loaded);
        match loaded {
            Either::Left((Ok(()), _)) => {}
            Either::Left((Err(_), _)) => {
                return Err(CaptureError::Frame("video metadata never loaded".to_owned()));
            }
            Either::Right(((), _)) => {
                return Err(CaptureError::Timeout { waited_ms: CAMERA_METADATA_TIMEOUT_MS });
            }
        }

        let canvas: HtmlCanvasElement = document.create_element("canvas").map_err(frame_err)?.unchecked_into();
        canvas.set_width(video.video_width());
        canvas.set_height(video.video_height());
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(frame_err)?
            .ok_or_else(|| CaptureError::Frame("2d context unavailable".to_owned()))?
            .unchecked_into();
        context
            .draw_image_with_html_video_element_and_dw_and_dh(
                &video,
                0.0,
                0.0,
                f64::from(canvas.width()),
                f64::from(canvas.height()),
            )
            .map_err(frame_err)?;
        canvas.to_data_url_with_type("image/png").map_err(frame_err)
    }

    fn stop_tracks(stream: &MediaStream) {
        for track in stream.get_tracks().iter() {
            track.unchecked_into::<MediaStreamTrack>().stop();
        }
    }
}
