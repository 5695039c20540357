use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, ScrollBehavior, ScrollToOptions, Window};

use super::driver::Host;
use super::geometry::RegionRect;

/// [`Host`] backed by the real browser window.
pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

/// A pending `requestAnimationFrame` callback, cancelled on drop.
pub struct AnimationFrame {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        // Cancelling a frame that already ran is a no-op.
        let _ = self.window.cancel_animation_frame(self.id);
    }
}

impl Host for BrowserHost {
    type Frame = AnimationFrame;
    type Timer = Timeout;

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn region_rect(&self, region_id: &str) -> Option<RegionRect> {
        let element = self.window.document()?.get_element_by_id(region_id)?;
        let rect = element.get_bounding_client_rect();
        Some(RegionRect {
            top: rect.top(),
            height: rect.height(),
        })
    }

    fn smooth_scroll_to(&self, y: f64) {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<AnimationFrame> {
        let closure = Closure::once(move || callback());
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => Some(AnimationFrame {
                window: self.window.clone(),
                id,
                _callback: closure,
            }),
            Err(err) => {
                warn!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, move || callback())
    }
}

/// Keeps an event listener registered for as long as the guard lives.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    /// Non-passive listeners are needed for `prevent_default()` to take effect.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!("Failed to listen for {}: {:?}", event, err);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
