use std::rc::Rc;

use log::error;
use web_sys::Event;
use yew::prelude::*;

use super::browser::{BrowserHost, ListenerGuard};
use super::controller::StepSnapshot;
use super::driver::ScrollJacking;
use super::options::ScrollJackingOptions;

/// Everything tied to one mounted timeline; dropping it unregisters the listeners.
struct Mounted {
    driver: Rc<ScrollJacking<BrowserHost>>,
    _listeners: Vec<ListenerGuard>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.driver.teardown();
    }
}

fn mount(options: ScrollJackingOptions, setter: UseStateSetter<StepSnapshot>) -> Option<Mounted> {
    let window = web_sys::window()?;
    let host = Rc::new(BrowserHost::new(window.clone()));
    let driver = match ScrollJacking::new(host, options, move |snapshot| setter.set(snapshot)) {
        Ok(driver) => Rc::new(driver),
        Err(err) => {
            error!("Scroll jacking disabled: {}", err);
            return None;
        }
    };
    driver.start();

    let on_scroll = {
        let driver = Rc::clone(&driver);
        move |_: Event| driver.notify_scroll()
    };
    let on_resize = {
        let driver = Rc::clone(&driver);
        move |_: Event| driver.notify_resize()
    };
    let on_wheel = {
        let driver = Rc::clone(&driver);
        move |event: Event| {
            if driver.notify_wheel() {
                event.prevent_default();
            }
        }
    };

    let listeners = [
        ListenerGuard::new(&window, "scroll", true, on_scroll),
        ListenerGuard::new(&window, "resize", true, on_resize),
        ListenerGuard::new(&window, "wheel", false, on_wheel),
    ]
    .into_iter()
    .flatten()
    .collect();

    Some(Mounted {
        driver,
        _listeners: listeners,
    })
}

/// Reveals a timeline step by step as the page scrolls through `options.region_id`,
/// snapping the viewport to each step boundary.
#[hook]
pub fn use_scroll_jacking(options: ScrollJackingOptions) -> StepSnapshot {
    let snapshot = use_state(StepSnapshot::default);

    {
        let setter = snapshot.setter();
        use_effect_with_deps(
            move |options: &ScrollJackingOptions| {
                let mounted = mount(options.clone(), setter);
                move || drop(mounted)
            },
            options,
        );
    }

    *snapshot
}
