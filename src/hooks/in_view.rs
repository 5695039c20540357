use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub struct InViewOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub trigger_once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            trigger_once: false,
        }
    }
}

impl InViewOptions {
    /// The fade-in setup every section uses.
    pub fn once() -> Self {
        Self {
            trigger_once: true,
            ..Self::default()
        }
    }
}

/// Visibility state fed by intersection entries.
#[derive(Debug, Default)]
pub struct InViewLatch {
    trigger_once: bool,
    entered: bool,
    in_view: bool,
}

impl InViewLatch {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            ..Self::default()
        }
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Records one entry. Returns false once the element no longer needs observing.
    pub fn record(&mut self, intersecting: bool) -> bool {
        if self.trigger_once && self.entered {
            return false;
        }
        self.in_view = intersecting;
        if intersecting {
            self.entered = true;
        }
        !(self.trigger_once && self.entered)
    }
}

struct Observed {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observed {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(node: &NodeRef, options: &InViewOptions, setter: UseStateSetter<bool>) -> Option<Observed> {
    let element = node.cast::<Element>()?;
    let latch = Rc::new(RefCell::new(InViewLatch::new(options.trigger_once)));
    let fallback = setter.clone();

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let mut latch = latch.borrow_mut();
            let keep_observing = latch.record(entry.is_intersecting());
            setter.set(latch.in_view());
            if !keep_observing {
                observer.unobserve(&entry.target());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("IntersectionObserver unavailable, showing content: {:?}", err);
            fallback.set(true);
            return None;
        }
    };
    observer.observe(&element);

    Some(Observed {
        observer,
        _callback: callback,
    })
}

/// Returns a node ref to attach and whether that node has entered the viewport.
#[hook]
pub fn use_in_view(options: InViewOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let in_view = use_state(|| false);

    {
        let node = node.clone();
        let setter = in_view.setter();
        use_effect_with_deps(
            move |options: &InViewOptions| {
                let observed = observe(&node, options, setter);
                move || drop(observed)
            },
            options,
        );
    }

    (node, *in_view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_intersection_when_not_once() {
        let mut latch = InViewLatch::new(false);
        assert!(latch.record(true));
        assert!(latch.in_view());
        assert!(latch.record(false));
        assert!(!latch.in_view());
    }

    #[test]
    fn latches_after_first_entry_when_once() {
        let mut latch = InViewLatch::new(true);
        assert!(latch.record(false));
        assert!(!latch.in_view());
        assert!(!latch.record(true));
        assert!(latch.in_view());
        assert!(!latch.record(false));
        assert!(latch.in_view());
    }

    #[test]
    fn once_preset() {
        let options = InViewOptions::once();
        assert!(options.trigger_once);
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px");
    }
}
