use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::controller::{SettleTicket, StepChange, StepController, StepSnapshot};
use super::geometry::RegionRect;
use super::options::{ConfigError, ScrollJackingOptions};
use crate::config;

/// The page the controller runs against.
///
/// Frame and timer handles cancel their callback when dropped.
pub trait Host: 'static {
    type Frame: 'static;
    type Timer: 'static;

    fn scroll_y(&self) -> f64;
    fn region_rect(&self, region_id: &str) -> Option<RegionRect>;
    fn smooth_scroll_to(&self, y: f64);
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<Self::Frame>;
    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
}

struct Inner<H: Host> {
    host: Rc<H>,
    controller: StepController,
    pending_frame: Option<H::Frame>,
    settle_timer: Option<H::Timer>,
    mount_timer: Option<H::Timer>,
    last_emitted: StepSnapshot,
    on_change: Rc<dyn Fn(StepSnapshot)>,
}

/// Drives a [`StepController`] from host scroll, resize and wheel notifications.
///
/// Scroll notifications are coalesced to one evaluation per frame. At most one
/// settle timer is alive; starting a new snap drops the previous one.
pub struct ScrollJacking<H: Host> {
    inner: Rc<RefCell<Inner<H>>>,
}

impl<H: Host> ScrollJacking<H> {
    pub fn new(
        host: Rc<H>,
        options: ScrollJackingOptions,
        on_change: impl Fn(StepSnapshot) + 'static,
    ) -> Result<Self, ConfigError> {
        let controller = StepController::new(options)?;
        let last_emitted = controller.snapshot();
        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                host,
                controller,
                pending_frame: None,
                settle_timer: None,
                mount_timer: None,
                last_emitted,
                on_change: Rc::new(on_change),
            })),
        })
    }

    /// Schedules the first measurement once layout had a chance to settle.
    pub fn start(&self) {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        if inner.controller.is_torn_down() {
            return;
        }
        let timer = inner.host.set_timeout(
            config::MOUNT_MEASURE_DELAY_MS,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.borrow_mut();
                    inner.mount_timer = None;
                    let host = Rc::clone(&inner.host);
                    let rect = host.region_rect(&inner.controller.options().region_id);
                    inner.controller.measure(rect, host.scroll_y());
                }
            }),
        );
        inner.mount_timer = Some(timer);
    }

    pub fn notify_scroll(&self) {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        if inner.controller.is_torn_down() || inner.pending_frame.is_some() {
            return;
        }
        inner.pending_frame = inner.host.request_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                evaluate(&inner);
            }
        }));
    }

    pub fn notify_resize(&self) {
        self.inner.borrow_mut().controller.invalidate();
    }

    /// Returns true when the wheel event should have its default prevented.
    pub fn notify_wheel(&self) -> bool {
        self.inner.borrow().controller.blocks_wheel()
    }

    pub fn snapshot(&self) -> StepSnapshot {
        self.inner.borrow().controller.snapshot()
    }

    pub fn teardown(&self) {
        let (frame, settle, mount) = {
            let mut inner = self.inner.borrow_mut();
            if inner.controller.is_torn_down() {
                return;
            }
            inner.controller.teardown();
            (
                inner.pending_frame.take(),
                inner.settle_timer.take(),
                inner.mount_timer.take(),
            )
        };
        debug!("Scroll jacking torn down");
        drop((frame, settle, mount));
    }
}

impl<H: Host> Drop for ScrollJacking<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn evaluate<H: Host>(cell: &Rc<RefCell<Inner<H>>>) {
    let (frame, change) = {
        let mut inner = cell.borrow_mut();
        let frame = inner.pending_frame.take();
        if inner.controller.is_torn_down() {
            return;
        }
        let host = Rc::clone(&inner.host);
        let scroll_y = host.scroll_y();
        if inner.controller.needs_measure() {
            let rect = host.region_rect(&inner.controller.options().region_id);
            if !inner.controller.measure(rect, scroll_y) {
                return;
            }
        }
        (frame, inner.controller.on_scroll(scroll_y))
    };
    drop(frame);

    match change {
        StepChange::Snapped {
            target_y, ticket, ..
        } => begin_snap(cell, target_y, ticket),
        StepChange::Rewound | StepChange::Finished => {
            // Any snap still animating was released by the controller.
            let stale = cell.borrow_mut().settle_timer.take();
            drop(stale);
        }
        StepChange::Unchanged | StepChange::Unmeasured => {}
    }
    emit_if_changed(cell);
}

fn begin_snap<H: Host>(cell: &Rc<RefCell<Inner<H>>>, target_y: f64, ticket: SettleTicket) {
    let weak: Weak<RefCell<Inner<H>>> = Rc::downgrade(cell);
    let (host, delay, previous) = {
        let mut inner = cell.borrow_mut();
        (
            Rc::clone(&inner.host),
            inner.controller.options().settle_delay_ms,
            inner.settle_timer.take(),
        )
    };
    drop(previous);
    host.smooth_scroll_to(target_y);
    let timer = host.set_timeout(
        delay,
        Box::new(move || {
            if let Some(cell) = weak.upgrade() {
                let fired = {
                    let mut inner = cell.borrow_mut();
                    inner.controller.settle(ticket);
                    inner.settle_timer.take()
                };
                drop(fired);
                emit_if_changed(&cell);
            }
        }),
    );
    cell.borrow_mut().settle_timer = Some(timer);
}

fn emit_if_changed<H: Host>(cell: &Rc<RefCell<Inner<H>>>) {
    let notify = {
        let mut inner = cell.borrow_mut();
        let snapshot = inner.controller.snapshot();
        let last = inner.last_emitted;
        // Direction alone does not warrant a re-render.
        if inner.controller.is_torn_down()
            || (snapshot.active_step == last.active_step && snapshot.is_jacking == last.is_jacking)
        {
            None
        } else {
            inner.last_emitted = snapshot;
            Some((Rc::clone(&inner.on_change), snapshot))
        }
    };
    if let Some((on_change, snapshot)) = notify {
        on_change(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Callback = Box<dyn FnOnce()>;

    /// Dropping the handle clears the slot, like a cancelled browser callback.
    struct Slot(Rc<RefCell<Option<Callback>>>);

    impl Drop for Slot {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    #[derive(Default)]
    struct FakeHost {
        scroll_y: Cell<f64>,
        region_top: Cell<Option<f64>>,
        scroll_commands: RefCell<Vec<f64>>,
        frames: RefCell<Vec<Rc<RefCell<Option<Callback>>>>>,
        timers: RefCell<Vec<(u32, Rc<RefCell<Option<Callback>>>)>>,
    }

    impl FakeHost {
        fn with_region_at(document_top: f64) -> Rc<Self> {
            let host = Rc::new(Self::default());
            host.region_top.set(Some(document_top));
            host
        }

        fn scroll_to(&self, y: f64) {
            self.scroll_y.set(y);
        }

        fn run_frames(&self) {
            let frames: Vec<_> = self.frames.borrow_mut().drain(..).collect();
            for slot in frames {
                let callback = slot.borrow_mut().take();
                if let Some(callback) = callback {
                    callback();
                }
            }
        }

        fn live_frames(&self) -> usize {
            self.frames.borrow().iter().filter(|s| s.borrow().is_some()).count()
        }

        fn live_timers(&self) -> Vec<u32> {
            self.timers
                .borrow()
                .iter()
                .filter(|(_, s)| s.borrow().is_some())
                .map(|(delay, _)| *delay)
                .collect()
        }

        fn fire_timers(&self, delay: u32) {
            let due: Vec<_> = self
                .timers
                .borrow()
                .iter()
                .filter(|(d, _)| *d == delay)
                .map(|(_, slot)| Rc::clone(slot))
                .collect();
            for slot in due {
                let callback = slot.borrow_mut().take();
                if let Some(callback) = callback {
                    callback();
                }
            }
        }
    }

    impl Host for FakeHost {
        type Frame = Slot;
        type Timer = Slot;

        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn region_rect(&self, _region_id: &str) -> Option<RegionRect> {
            self.region_top.get().map(|top| RegionRect {
                top: top - self.scroll_y.get(),
                height: 500.0,
            })
        }

        fn smooth_scroll_to(&self, y: f64) {
            self.scroll_commands.borrow_mut().push(y);
        }

        fn request_frame(&self, callback: Callback) -> Option<Slot> {
            let slot = Rc::new(RefCell::new(Some(callback)));
            self.frames.borrow_mut().push(Rc::clone(&slot));
            Some(Slot(slot))
        }

        fn set_timeout(&self, millis: u32, callback: Callback) -> Slot {
            let slot = Rc::new(RefCell::new(Some(callback)));
            self.timers.borrow_mut().push((millis, Rc::clone(&slot)));
            Slot(slot)
        }
    }

    fn driver(host: &Rc<FakeHost>) -> (ScrollJacking<FakeHost>, Rc<RefCell<Vec<StepSnapshot>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let driver = ScrollJacking::new(
            Rc::clone(host),
            ScrollJackingOptions::new(5, "process"),
            move |snapshot| sink.borrow_mut().push(snapshot),
        )
        .unwrap();
        (driver, seen)
    }

    fn scroll(host: &FakeHost, driver: &ScrollJacking<FakeHost>, y: f64) {
        host.scroll_to(y);
        driver.notify_scroll();
        host.run_frames();
    }

    #[test]
    fn rejects_invalid_options() {
        let host = FakeHost::with_region_at(1000.0);
        let result = ScrollJacking::new(host, ScrollJackingOptions::new(0, "process"), |_| {});
        assert!(matches!(result, Err(ConfigError::NoSteps)));
    }

    #[test]
    fn coalesces_scroll_notifications_per_frame() {
        let host = FakeHost::with_region_at(1000.0);
        let (driver, _) = driver(&host);
        host.scroll_to(905.0);
        driver.notify_scroll();
        driver.notify_scroll();
        driver.notify_scroll();
        assert_eq!(host.live_frames(), 1);
        host.run_frames();
        assert_eq!(*host.scroll_commands.borrow(), vec![900.0]);

        // The next frame can be requested once the previous one ran.
        driver.notify_scroll();
        assert_eq!(host.live_frames(), 1);
    }

    #[test]
    fn full_scenario() {
        let host = FakeHost::with_region_at(1000.0);
        let (driver, seen) = driver(&host);

        scroll(&host, &driver, 800.0);
        assert_eq!(driver.snapshot().active_step, 0);
        assert!(host.scroll_commands.borrow().is_empty());

        scroll(&host, &driver, 905.0);
        let snapshot = driver.snapshot();
        assert_eq!(snapshot.active_step, 1);
        assert!(snapshot.is_jacking);
        assert_eq!(*host.scroll_commands.borrow(), vec![900.0]);
        assert_eq!(host.live_timers(), vec![800]);
        assert!(driver.notify_wheel());

        scroll(&host, &driver, 1200.0);
        assert_eq!(driver.snapshot().active_step, 1);
        assert_eq!(host.scroll_commands.borrow().len(), 1);

        host.fire_timers(800);
        assert!(!driver.snapshot().is_jacking);
        assert!(!driver.notify_wheel());

        scroll(&host, &driver, 1460.0);
        assert_eq!(driver.snapshot().active_step, 4);
        assert_eq!(*host.scroll_commands.borrow(), vec![900.0, 1200.0]);

        let steps: Vec<(usize, bool)> = seen
            .borrow()
            .iter()
            .map(|s| (s.active_step, s.is_jacking))
            .collect();
        assert_eq!(steps, vec![(1, true), (1, false), (4, true)]);
    }

    #[test]
    fn repeated_offset_issues_one_command() {
        let host = FakeHost::with_region_at(1000.0);
        let (driver, _) = driver(&host);
        scroll(&host, &driver, 1010.0);
        host.fire_timers(800);
        scroll(&host, &driver, 1010.0);
        assert_eq!(host.scroll_commands.borrow().len(), 1);
        assert!(!driver.snapshot().is_jacking);
    }

    #[test]
    fn new_snap_replaces_settle_timer() {
        let host = FakeHost::with_region_at(1000.0);
        let (driver, _) = driver(&host);
        scroll(&host, &driver, 905.0);
        host.fire_timers(800);
        scroll(&host, &driver, 1010.0);
        assert_eq!(host.live_timers(), vec![800]);
        scroll(&host, &driver, 50.0);
        assert_eq!(driver.snapshot().active_step, 0);
        assert!(!driver.snapshot().is_jacking);
        assert!(host.live_timers().is_empty());
    }

    #[test]
    fn unresolved_region_stays_inert() {
        let host = Rc::new(FakeHost::default());
        let (driver, seen) = driver(&host);
        for y in [0.0, 900.0, 1300.0, 5000.0] {
            scroll(&host, &driver, y);
        }
        assert_eq!(driver.snapshot().active_step, 0);
        assert!(!driver.snapshot().is_jacking);
        assert!(host.scroll_commands.borrow().is_empty());
        assert!(seen.borrow().is_empty());

        // Region shows up later and is picked up on the next tick.
        host.region_top.set(Some(1000.0));
        scroll(&host, &driver, 905.0);
        assert_eq!(driver.snapshot().active_step, 1);
    }

    #[test]
    fn deferred_mount_measures_once() {
        let host = FakeHost::with_region_at(1000.0);
        let (driver, _) = driver(&host);
        driver.start();
        assert_eq!(host.live_timers(), vec![config::MOUNT_MEASURE_DELAY_MS]);
        host.fire_timers(config::MOUNT_MEASURE_DELAY_MS);
        assert!(host.live_timers().is_empty());
        assert_eq!(
            driver.inner.borrow().controller.region().map(|r| r.top_offset),
            Some(800.0)
        );
    }

    #[test]
    fn resize_remeasures_without_cancelling_snap() {
        let host = FakeHost::with_region_at(1000.0);
        let (driver, _) = driver(&host);
        scroll(&host, &driver, 905.0);
        assert!(driver.snapshot().is_jacking);

        host.region_top.set(Some(1100.0));
        driver.notify_resize();
        assert!(driver.snapshot().is_jacking);
        assert_eq!(host.live_timers(), vec![800]);

        host.fire_timers(800);
        scroll(&host, &driver, 1010.0);
        // New top offset is 900, so 1010 lands in step 1 and nothing moves.
        assert_eq!(driver.snapshot().active_step, 1);
        assert_eq!(host.scroll_commands.borrow().len(), 1);
    }

    #[test]
    fn teardown_cancels_and_silences() {
        let host = FakeHost::with_region_at(1000.0);
        let (driver, seen) = driver(&host);
        driver.start();
        scroll(&host, &driver, 905.0);
        host.scroll_to(1300.0);
        driver.notify_scroll();

        driver.teardown();
        driver.teardown();
        assert_eq!(host.live_frames(), 0);
        assert!(host.live_timers().is_empty());

        let before = driver.snapshot();
        let emitted = seen.borrow().len();
        let region = driver.inner.borrow().controller.region().copied();
        assert!(region.is_some());
        host.run_frames();
        host.fire_timers(800);
        scroll(&host, &driver, 50.0);
        driver.notify_resize();
        assert_eq!(driver.inner.borrow().controller.region().copied(), region);
        assert!(!driver.notify_wheel());
        assert_eq!(driver.snapshot().active_step, before.active_step);
        assert_eq!(host.scroll_commands.borrow().len(), 1);
        assert_eq!(seen.borrow().len(), emitted);
    }

    #[test]
    fn dropping_driver_cancels_callbacks() {
        let host = FakeHost::with_region_at(1000.0);
        {
            let (driver, _) = driver(&host);
            scroll(&host, &driver, 905.0);
            driver.notify_scroll();
        }
        assert_eq!(host.live_frames(), 0);
        assert!(host.live_timers().is_empty());
    }
}
