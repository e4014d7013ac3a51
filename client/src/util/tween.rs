//! Playing [`Tween`]s with the Web Animations API.
//!
//! The browser interpolates; this module only starts, samples, stops and
//! settles animations. A settled or stopped tween writes its pose to the
//! element's inline style, so the card stays where the animation left it.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use board::motion::{CardPose, Tween};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TweenError {
    #[error("element.animate is unavailable")]
    Unsupported,
    #[error("animation rejected: {0}")]
    Rejected(String),
}

/// Inline style declarations for a pose, as `(property, value)` pairs.
#[must_use]
pub fn pose_style(pose: &CardPose) -> [(&'static str, String); 2] {
    [("transform", pose.css_transform()), ("opacity", format!("{:.3}", pose.opacity))]
}

#[cfg(feature = "csr")]
pub use running::{RunningTween, apply_pose, start};

#[cfg(feature = "csr")]
mod running {
    use js_sys::{Array, Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Animation, HtmlElement};

    use super::{CardPose, Tween, TweenError, pose_style};
    use crate::util::browser::js_error_message;

    /// A tween the browser is currently playing on one element.
    pub struct RunningTween {
        serial: u64,
        plan: Tween,
        animation: Animation,
    }

    /// Write `pose` to the element's inline style.
    pub fn apply_pose(el: &HtmlElement, pose: &CardPose) {
        let style = el.style();
        for (property, value) in pose_style(pose) {
            if style.set_property(property, &value).is_err() {
                log::debug!("could not set {property} on card");
            }
        }
    }

    /// Jump to the tween's start pose and begin playing it.
    ///
    /// # Errors
    ///
    /// Returns [`TweenError`] if the browser cannot animate the element.
    pub fn start(el: &HtmlElement, plan: Tween, serial: u64) -> Result<RunningTween, TweenError> {
        apply_pose(el, &plan.from);
        let animate = Reflect::get(el.as_ref(), &JsValue::from_str("animate"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(TweenError::Unsupported)?;
        let animation = animate
            .call2(el.as_ref(), &keyframes(&plan)?, &options(&plan)?)
            .map_err(|e| TweenError::Rejected(js_error_message(&e)))?
            .dyn_into::<Animation>()
            .map_err(|_| TweenError::Unsupported)?;
        Ok(RunningTween { serial, plan, animation })
    }

    impl RunningTween {
        #[must_use]
        pub fn serial(&self) -> u64 {
            self.serial
        }

        /// Resolves `Ok` when the tween plays to the end, `Err` if cancelled.
        ///
        /// # Errors
        ///
        /// Returns [`TweenError::Unsupported`] if the animation exposes no
        /// `finished` promise.
        pub fn finished(&self) -> Result<JsFuture, TweenError> {
            Reflect::get(self.animation.as_ref(), &JsValue::from_str("finished"))
                .ok()
                .and_then(|p| p.dyn_into::<Promise>().ok())
                .map(JsFuture::from)
                .ok_or(TweenError::Unsupported)
        }

        /// Freeze the element where the tween currently is.
        pub fn stop(self, el: &HtmlElement) -> CardPose {
            let elapsed = self.animation.current_time().unwrap_or(0.0);
            let pose = self.plan.sample(elapsed);
            apply_pose(el, &pose);
            self.animation.cancel();
            pose
        }

        /// Commit the end pose of a tween that played to completion.
        pub fn settle(self, el: &HtmlElement) -> CardPose {
            apply_pose(el, &self.plan.to);
            self.animation.cancel();
            self.plan.to
        }

        /// Drop the animation without touching inline style.
        pub fn cancel(self) {
            self.animation.cancel();
        }
    }

    fn frame(pose: &CardPose) -> Result<Object, TweenError> {
        let frame = Object::new();
        for (property, value) in pose_style(pose) {
            set(&frame, property, &JsValue::from_str(&value))?;
        }
        Ok(frame)
    }

    fn keyframes(plan: &Tween) -> Result<Array, TweenError> {
        Ok(Array::of2(&frame(&plan.from)?, &frame(&plan.to)?))
    }

    fn options(plan: &Tween) -> Result<Object, TweenError> {
        let options = Object::new();
        set(&options, "duration", &JsValue::from_f64(f64::from(plan.duration_ms)))?;
        set(&options, "easing", &JsValue::from_str(plan.easing.css()))?;
        // Holds the end pose until `settle` commits it to inline style.
        set(&options, "fill", &JsValue::from_str("forwards"))?;
        Ok(options)
    }

    fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), TweenError> {
        Reflect::set(target, &JsValue::from_str(key), value)
            .map(|_| ())
            .map_err(|e| TweenError::Rejected(js_error_message(&e)))
    }
}
