use log::{debug, trace};

use super::geometry::{RegionPosition, RegionRect, ScrollRegion};
use super::options::{ConfigError, ScrollJackingOptions};

/// Tracked on every evaluated tick but not acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
}

/// Identifies the transition a settle timer was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket(u64);

/// Outcome of evaluating one scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepChange {
    Unchanged,
    /// Geometry could not be resolved; try again on the next tick.
    Unmeasured,
    /// Scrolled back above the region, timeline reset to the first step.
    Rewound,
    /// Scrolled beyond the region, every step revealed.
    Finished,
    /// Entered a new step; the viewport should be snapped to `target_y`.
    Snapped {
        step: usize,
        target_y: f64,
        ticket: SettleTicket,
    },
}

/// What a renderer needs from the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepSnapshot {
    pub active_step: usize,
    pub is_jacking: bool,
    pub direction: Direction,
}

impl StepSnapshot {
    pub fn is_revealed(&self, index: usize) -> bool {
        index <= self.active_step
    }
}

/// Maps scroll offsets to a discrete step inside a fixed-height region.
///
/// The controller owns no timers or listeners. It tells its caller when a
/// snap should happen and trusts the caller to report back through
/// [`StepController::settle`] once the animation had time to finish.
#[derive(Debug)]
pub struct StepController {
    options: ScrollJackingOptions,
    region: Option<ScrollRegion>,
    active_step: usize,
    is_jacking: bool,
    last_scroll_y: f64,
    direction: Direction,
    generation: u64,
    torn_down: bool,
}

impl StepController {
    pub fn new(options: ScrollJackingOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            options,
            region: None,
            active_step: 0,
            is_jacking: false,
            last_scroll_y: 0.0,
            direction: Direction::Down,
            generation: 0,
            torn_down: false,
        })
    }

    pub fn options(&self) -> &ScrollJackingOptions {
        &self.options
    }

    pub fn region(&self) -> Option<&ScrollRegion> {
        self.region.as_ref()
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    pub fn is_jacking(&self) -> bool {
        self.is_jacking
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn needs_measure(&self) -> bool {
        !self.torn_down && self.region.is_none()
    }

    pub fn snapshot(&self) -> StepSnapshot {
        StepSnapshot {
            active_step: self.active_step,
            is_jacking: self.is_jacking,
            direction: self.direction,
        }
    }

    /// Caches region geometry. Returns false while the region can't be found.
    pub fn measure(&mut self, rect: Option<RegionRect>, scroll_y: f64) -> bool {
        if self.torn_down {
            return false;
        }
        match rect {
            Some(rect) => {
                let region = ScrollRegion::measure(
                    rect,
                    scroll_y,
                    self.options.start_offset,
                    self.options.step_height,
                    self.options.step_count,
                );
                debug!(
                    "Measured region '{}': top {} height {}",
                    self.options.region_id, region.top_offset, region.height
                );
                self.region = Some(region);
                true
            }
            None => {
                trace!("Region '{}' not in the document yet", self.options.region_id);
                false
            }
        }
    }

    /// Drops cached geometry so the next evaluation measures again.
    pub fn invalidate(&mut self) {
        if self.torn_down {
            return;
        }
        self.region = None;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> StepChange {
        if self.torn_down {
            return StepChange::Unchanged;
        }
        let Some(region) = self.region else {
            return StepChange::Unmeasured;
        };

        self.direction = if scroll_y > self.last_scroll_y {
            Direction::Down
        } else {
            Direction::Up
        };
        self.last_scroll_y = scroll_y;

        match region.classify(scroll_y) {
            RegionPosition::Before => {
                self.release();
                if self.active_step != 0 {
                    self.active_step = 0;
                    debug!("Scrolled above region, timeline reset");
                    return StepChange::Rewound;
                }
                StepChange::Unchanged
            }
            RegionPosition::Past => {
                self.release();
                let last = region.last_step();
                if self.active_step != last {
                    self.active_step = last;
                    debug!("Scrolled past region, showing all {} steps", region.step_count);
                    return StepChange::Finished;
                }
                StepChange::Unchanged
            }
            RegionPosition::Within(progress) => {
                let step = region.step_at(progress);
                if step == self.active_step || self.is_jacking {
                    return StepChange::Unchanged;
                }
                self.active_step = step;
                self.is_jacking = true;
                self.generation += 1;
                let target_y = region.step_top(step);
                debug!("Active step changed to {} (snapping to {})", step, target_y);
                StepChange::Snapped {
                    step,
                    target_y,
                    ticket: SettleTicket(self.generation),
                }
            }
        }
    }

    /// Ends the snap armed with `ticket`. Stale tickets are ignored.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if self.torn_down || !self.is_jacking || ticket.0 != self.generation {
            return false;
        }
        self.is_jacking = false;
        true
    }

    /// Wheel input is swallowed while a snap animates.
    pub fn blocks_wheel(&self) -> bool {
        !self.torn_down && self.is_jacking
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.is_jacking = false;
        self.generation += 1;
    }

    fn release(&mut self) {
        if self.is_jacking {
            self.is_jacking = false;
            self.generation += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_at(top: f64) -> Option<RegionRect> {
        Some(RegionRect { top, height: 500.0 })
    }

    fn controller() -> StepController {
        let mut controller =
            StepController::new(ScrollJackingOptions::new(5, "process")).unwrap();
        assert!(controller.measure(rect_at(1000.0), 0.0));
        controller
    }

    fn settle_current(controller: &mut StepController, change: StepChange) {
        match change {
            StepChange::Snapped { ticket, .. } => assert!(controller.settle(ticket)),
            other => panic!("expected a snap, got {:?}", other),
        }
    }

    #[test]
    fn new_rejects_zero_steps() {
        let result = StepController::new(ScrollJackingOptions::new(0, "process"));
        assert_eq!(result.unwrap_err(), ConfigError::NoSteps);
    }

    #[test]
    fn unmeasured_until_region_resolves() {
        let mut controller =
            StepController::new(ScrollJackingOptions::new(5, "process")).unwrap();
        assert_eq!(controller.on_scroll(900.0), StepChange::Unmeasured);
        assert!(!controller.measure(None, 0.0));
        assert!(controller.needs_measure());
        assert_eq!(controller.active_step(), 0);
        assert!(!controller.is_jacking());
    }

    #[test]
    fn walks_through_the_timeline() {
        let mut controller = controller();

        assert_eq!(controller.on_scroll(800.0), StepChange::Unchanged);
        assert_eq!(controller.active_step(), 0);

        let change = controller.on_scroll(905.0);
        assert!(matches!(
            change,
            StepChange::Snapped { step: 1, target_y, .. } if target_y == 900.0
        ));
        assert_eq!(controller.active_step(), 1);
        assert!(controller.is_jacking());

        // Busy: a different raw step is ignored until the snap settles.
        assert_eq!(controller.on_scroll(1200.0), StepChange::Unchanged);
        assert_eq!(controller.active_step(), 1);

        settle_current(&mut controller, change);
        assert!(!controller.is_jacking());

        let change = controller.on_scroll(1460.0);
        assert!(matches!(
            change,
            StepChange::Snapped { step: 4, target_y, .. } if target_y == 1200.0
        ));
        assert_eq!(controller.active_step(), 4);
    }

    #[test]
    fn same_offset_twice_snaps_once() {
        let mut controller = controller();
        let first = controller.on_scroll(1010.0);
        settle_current(&mut controller, first);
        assert_eq!(controller.on_scroll(1010.0), StepChange::Unchanged);
        assert!(!controller.is_jacking());
    }

    #[test]
    fn above_region_rewinds_from_any_step() {
        let mut controller = controller();
        let change = controller.on_scroll(1100.0);
        settle_current(&mut controller, change);
        assert_eq!(controller.active_step(), 3);

        assert_eq!(controller.on_scroll(50.0), StepChange::Rewound);
        assert_eq!(controller.active_step(), 0);
        assert!(!controller.is_jacking());
        assert_eq!(controller.on_scroll(40.0), StepChange::Unchanged);
    }

    #[test]
    fn above_region_releases_pending_snap() {
        let mut controller = controller();
        let change = controller.on_scroll(950.0);
        assert!(controller.is_jacking());
        assert_eq!(controller.on_scroll(100.0), StepChange::Rewound);
        assert!(!controller.is_jacking());
        let StepChange::Snapped { ticket, .. } = change else {
            panic!("expected a snap");
        };
        assert!(!controller.settle(ticket));
    }

    #[test]
    fn past_region_finishes() {
        let mut controller = controller();
        assert_eq!(controller.on_scroll(1500.0), StepChange::Finished);
        assert_eq!(controller.active_step(), 4);
        assert_eq!(controller.on_scroll(3000.0), StepChange::Unchanged);
        assert!(!controller.is_jacking());
    }

    #[test]
    fn inside_matches_clamped_floor_for_many_offsets() {
        for step_count in 1..=7usize {
            let mut offset = 800.0;
            while offset < 1500.0 {
                let mut controller =
                    StepController::new(ScrollJackingOptions::new(step_count, "process"))
                        .unwrap();
                controller.measure(rect_at(1000.0), 0.0);
                controller.on_scroll(offset);
                let segment = 500.0 / step_count as f64;
                let expected = (((offset - 800.0) / segment).floor() as usize).min(step_count - 1);
                assert_eq!(controller.active_step(), expected, "offset {}", offset);
                assert!(controller.active_step() < step_count);
                offset += 37.0;
            }
        }
    }

    #[test]
    fn stale_ticket_does_not_settle() {
        let mut controller = controller();
        let first = controller.on_scroll(905.0);
        let StepChange::Snapped { ticket: stale, .. } = first else {
            panic!("expected a snap");
        };
        settle_current(&mut controller, first);
        let second = controller.on_scroll(1010.0);
        assert!(controller.is_jacking());
        assert!(!controller.settle(stale));
        assert!(controller.is_jacking());
        settle_current(&mut controller, second);
    }

    #[test]
    fn wheel_blocked_only_while_jacking() {
        let mut controller = controller();
        assert!(!controller.blocks_wheel());
        let change = controller.on_scroll(905.0);
        assert!(controller.blocks_wheel());
        settle_current(&mut controller, change);
        assert!(!controller.blocks_wheel());
    }

    #[test]
    fn forward_snap_holds_with_fractional_region_top() {
        let mut controller =
            StepController::new(ScrollJackingOptions::new(5, "process")).unwrap();
        assert!(controller.measure(rect_at(1000.4), 0.0));

        let change = controller.on_scroll(905.0);
        let target_y = match change {
            StepChange::Snapped { step: 1, target_y, .. } => target_y,
            other => panic!("expected a snap to step 1, got {:?}", other),
        };
        settle_current(&mut controller, change);

        // Smooth scrolling finishes on a whole pixel.
        assert_eq!(controller.on_scroll(target_y.floor()), StepChange::Unchanged);
        assert_eq!(controller.active_step(), 1);
        assert!(!controller.is_jacking());
    }

    #[test]
    fn invalidate_after_teardown_keeps_geometry() {
        let mut controller = controller();
        let region = controller.region().copied();
        controller.teardown();
        controller.invalidate();
        assert_eq!(controller.region().copied(), region);
        assert!(!controller.needs_measure());
    }

    #[test]
    fn invalidate_forces_remeasure() {
        let mut controller = controller();
        controller.invalidate();
        assert!(controller.needs_measure());
        assert_eq!(controller.on_scroll(905.0), StepChange::Unmeasured);
        // Layout shifted down by 100 after resize.
        controller.measure(rect_at(1100.0), 0.0);
        assert_eq!(controller.region().unwrap().top_offset, 900.0);
        assert_eq!(controller.on_scroll(905.0), StepChange::Unchanged);
    }

    #[test]
    fn direction_follows_scroll() {
        let mut controller = controller();
        controller.on_scroll(300.0);
        assert_eq!(controller.direction(), Direction::Down);
        controller.on_scroll(200.0);
        assert_eq!(controller.direction(), Direction::Up);
    }

    #[test]
    fn teardown_is_final_and_idempotent() {
        let mut controller = controller();
        let change = controller.on_scroll(905.0);
        controller.teardown();
        controller.teardown();
        assert!(!controller.is_jacking());
        assert!(!controller.blocks_wheel());
        assert_eq!(controller.on_scroll(1300.0), StepChange::Unchanged);
        assert_eq!(controller.on_scroll(10.0), StepChange::Unchanged);
        assert_eq!(controller.active_step(), 1);
        assert!(!controller.measure(rect_at(0.0), 0.0));
        if let StepChange::Snapped { ticket, .. } = change {
            assert!(!controller.settle(ticket));
        }
    }

    #[test]
    fn snapshot_reveals_up_to_active() {
        let mut controller = controller();
        controller.on_scroll(1010.0);
        let snapshot = controller.snapshot();
        assert!(snapshot.is_revealed(0));
        assert!(snapshot.is_revealed(2));
        assert!(!snapshot.is_revealed(3));
    }
}
