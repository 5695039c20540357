use crate::config;

/// A region's bounding box as the host reports it, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionRect {
    pub top: f64,
    pub height: f64,
}

/// Where a scroll offset falls relative to a measured region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionPosition {
    /// The viewport has not reached the region yet.
    Before,
    /// Distance scrolled past the region's top.
    Within(f64),
    /// The viewport has scrolled beyond the region's end.
    Past,
}

/// Document-space geometry of the stepped region, recomputed on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    pub top_offset: f64,
    pub height: f64,
    pub step_count: usize,
    pub segment_height: f64,
}

impl ScrollRegion {
    pub fn measure(
        rect: RegionRect,
        scroll_y: f64,
        start_offset: f64,
        step_height: f64,
        step_count: usize,
    ) -> Self {
        // Scroll offsets land on whole pixels.
        Self {
            top_offset: (scroll_y + rect.top - start_offset).round(),
            height: step_height + config::REGION_PADDING,
            step_count,
            segment_height: step_height / step_count as f64,
        }
    }

    pub fn end(&self) -> f64 {
        self.top_offset + self.height
    }

    pub fn classify(&self, scroll_y: f64) -> RegionPosition {
        if scroll_y < self.top_offset {
            RegionPosition::Before
        } else if scroll_y >= self.end() {
            RegionPosition::Past
        } else {
            RegionPosition::Within(scroll_y - self.top_offset)
        }
    }

    pub fn step_at(&self, progress: f64) -> usize {
        let raw = (progress / self.segment_height).floor().max(0.0) as usize;
        raw.min(self.last_step())
    }

    /// First whole-pixel scroll offset inside `step`.
    pub fn step_top(&self, step: usize) -> f64 {
        (self.top_offset + step as f64 * self.segment_height).ceil()
    }

    pub fn last_step(&self) -> usize {
        self.step_count - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> ScrollRegion {
        // Region top sits at document offset 1000 while the page is unscrolled.
        ScrollRegion::measure(
            RegionRect {
                top: 1000.0,
                height: 480.0,
            },
            0.0,
            200.0,
            500.0,
            5,
        )
    }

    #[test]
    fn measure_applies_lead_in_and_padding() {
        let region = region();
        assert_eq!(region.top_offset, 800.0);
        assert_eq!(region.height, 700.0);
        assert_eq!(region.segment_height, 100.0);
        assert_eq!(region.end(), 1500.0);
    }

    #[test]
    fn measure_accounts_for_current_scroll() {
        let region = ScrollRegion::measure(
            RegionRect {
                top: 250.0,
                height: 480.0,
            },
            750.0,
            200.0,
            500.0,
            5,
        );
        assert_eq!(region.top_offset, 800.0);
    }

    #[test]
    fn measure_snaps_top_to_whole_pixels() {
        let region = ScrollRegion::measure(
            RegionRect {
                top: 1000.4,
                height: 480.0,
            },
            0.0,
            200.0,
            500.0,
            5,
        );
        assert_eq!(region.top_offset, 800.0);
        assert_eq!(region.step_top(1), 900.0);
    }

    #[test]
    fn step_top_lands_inside_its_step_with_uneven_segments() {
        let region = ScrollRegion::measure(
            RegionRect {
                top: 1000.0,
                height: 480.0,
            },
            0.0,
            200.0,
            600.0,
            7,
        );
        for step in 0..7 {
            let top = region.step_top(step);
            assert_eq!(top, top.floor());
            assert_eq!(region.step_at(top - region.top_offset), step);
        }
    }

    #[test]
    fn classify_boundaries() {
        let region = region();
        assert_eq!(region.classify(799.9), RegionPosition::Before);
        assert_eq!(region.classify(800.0), RegionPosition::Within(0.0));
        assert_eq!(region.classify(1499.0), RegionPosition::Within(699.0));
        assert_eq!(region.classify(1500.0), RegionPosition::Past);
    }

    #[test]
    fn step_at_clamps_into_padding() {
        let region = region();
        assert_eq!(region.step_at(0.0), 0);
        assert_eq!(region.step_at(99.9), 0);
        assert_eq!(region.step_at(105.0), 1);
        assert_eq!(region.step_at(660.0), 4);
    }

    #[test]
    fn step_top_is_segment_aligned() {
        let region = region();
        assert_eq!(region.step_top(0), 800.0);
        assert_eq!(region.step_top(1), 900.0);
        assert_eq!(region.step_top(4), 1200.0);
    }
}
