//! Test double for the display surface
//!
//! Records every submission so tests can inspect exactly what reached the
//! display boundary, and can be primed to fail a given submission.

#![allow(dead_code)]

use graphics::{DisplayGeometry, DisplaySurface, DrawRegion, PixelBuffer, SurfaceError};

pub struct RecordingSurface {
    geometry: DisplayGeometry,
    pub submissions: Vec<(DrawRegion, PixelBuffer)>,
    fail_on: Option<usize>,
    attempts: usize,
}

impl RecordingSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_geometry(DisplayGeometry::new(width, height))
    }

    pub fn with_geometry(geometry: DisplayGeometry) -> Self {
        Self {
            geometry,
            submissions: Vec::new(),
            fail_on: None,
            attempts: 0,
        }
    }

    /// Fail the `n`-th submit call (0-based) with a transport error
    pub fn failing_on(mut self, n: usize) -> Self {
        self.fail_on = Some(n);
        self
    }

    pub fn last(&self) -> Option<&(DrawRegion, PixelBuffer)> {
        self.submissions.last()
    }

    pub fn regions(&self) -> Vec<DrawRegion> {
        self.submissions.iter().map(|(region, _)| *region).collect()
    }
}

impl DisplaySurface for RecordingSurface {
    fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    fn submit(&mut self, region: DrawRegion, buffer: &PixelBuffer) -> Result<(), SurfaceError> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_on == Some(attempt) {
            return Err(SurfaceError::new("bus transfer failed"));
        }

        assert_eq!(buffer.width(), region.width, "buffer width differs from region");
        assert_eq!(buffer.height(), region.height, "buffer height differs from region");
        self.submissions.push((region, buffer.clone()));
        Ok(())
    }
}
