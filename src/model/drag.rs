//! Divider drag: pointer displacement to split ratio
//!
//! A [`DragSession`] is created when the pointer goes down on a divider and
//! lives in `AppModel::drag` until the gesture ends. While it exists, every
//! pointer move is turned into a clamped, snapped ratio for one split.

use serde::{Deserialize, Serialize};

use super::layout::Rect;
use super::partition::{NodeId, Split, SplitDirection};

/// Smallest ratio an interactive resize may produce
pub const MIN_RATIO: f32 = 0.1;
/// Largest ratio an interactive resize may produce
pub const MAX_RATIO: f32 = 0.9;
/// Ratios that attract the divider
pub const SNAP_POINTS: [f32; 3] = [0.25, 0.5, 0.75];
/// Distance (exclusive) within which a ratio snaps
pub const SNAP_EPSILON: f32 = 0.02;

/// Snap `ratio` to the nearest of [`SNAP_POINTS`] when within [`SNAP_EPSILON`]
pub fn snap(ratio: f32) -> f32 {
    snap_to(ratio, &SNAP_POINTS, SNAP_EPSILON)
}

/// Snap `ratio` to the first of `points` closer than `epsilon`
pub fn snap_to(ratio: f32, points: &[f32], epsilon: f32) -> f32 {
    points
        .iter()
        .copied()
        .find(|point| (ratio - point).abs() < epsilon)
        .unwrap_or(ratio)
}

/// Tunables for interactive resizing, read from the `drag:` config section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    pub min_ratio: f32,
    pub max_ratio: f32,
    pub snap_points: Vec<f32>,
    pub snap_epsilon: f32,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            min_ratio: MIN_RATIO,
            max_ratio: MAX_RATIO,
            snap_points: SNAP_POINTS.to_vec(),
            snap_epsilon: SNAP_EPSILON,
        }
    }
}

impl DragSettings {
    #[inline]
    pub fn clamp(&self, ratio: f32) -> f32 {
        ratio.clamp(self.min_ratio, self.max_ratio)
    }

    #[inline]
    pub fn snap(&self, ratio: f32) -> f32 {
        snap_to(ratio, &self.snap_points, self.snap_epsilon)
    }

    /// Clamp then snap: the ratio a pointer position maps to
    pub fn apply(&self, ratio: f32) -> f32 {
        self.snap(self.clamp(ratio))
    }

    /// Check the settings and describe the first problem found.
    ///
    /// Snap bands must not overlap, otherwise snapping stops being idempotent.
    pub fn validate(&self) -> Result<(), String> {
        let bounds_ok = self.min_ratio.is_finite()
            && self.max_ratio.is_finite()
            && 0.0 < self.min_ratio
            && self.min_ratio < self.max_ratio
            && self.max_ratio < 1.0;
        if !bounds_ok {
            return Err(format!(
                "ratio bounds must satisfy 0 < min < max < 1 (got {} and {})",
                self.min_ratio, self.max_ratio
            ));
        }
        if !(self.snap_epsilon.is_finite() && self.snap_epsilon >= 0.0) {
            return Err(format!("invalid snap epsilon {}", self.snap_epsilon));
        }
        let mut points = self.snap_points.clone();
        points.sort_by(f32::total_cmp);
        for point in &points {
            if !(self.min_ratio..=self.max_ratio).contains(point) {
                return Err(format!(
                    "snap point {} outside [{}, {}]",
                    point, self.min_ratio, self.max_ratio
                ));
            }
        }
        if let Some(pair) = points
            .windows(2)
            .find(|pair| pair[1] - pair[0] < 2.0 * self.snap_epsilon)
        {
            return Err(format!(
                "snap points {} and {} are closer than twice the epsilon",
                pair[0], pair[1]
            ));
        }
        Ok(())
    }
}

/// One divider drag gesture, from pointer-down to pointer-up
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Split being resized
    pub split_id: NodeId,
    pub direction: SplitDirection,
    /// Pointer coordinate along the split axis when the drag started
    pub start_pointer: f64,
    /// Split container length along the split axis, in pixels
    pub container_size: f32,
    /// Split ratio when the drag started
    pub start_ratio: f32,
}

impl DragSession {
    /// Start dragging the divider of `split`, laid out in `container`
    pub fn begin(split: &Split, container: Rect, x: f64, y: f64) -> Self {
        let (start_pointer, container_size) = match split.direction {
            SplitDirection::Vertical => (x, container.width),
            SplitDirection::Horizontal => (y, container.height),
        };
        Self {
            split_id: split.id,
            direction: split.direction,
            start_pointer,
            container_size,
            start_ratio: split.ratio,
        }
    }

    /// Ratio for the pointer at (`x`, `y`).
    ///
    /// Vertical splits follow horizontal motion and horizontal splits follow
    /// vertical motion. A collapsed container keeps the starting ratio.
    pub fn ratio_at(&self, x: f64, y: f64, settings: &DragSettings) -> f32 {
        if !(self.container_size.is_finite() && self.container_size > 0.0) {
            return self.start_ratio;
        }
        let pointer = match self.direction {
            SplitDirection::Vertical => x,
            SplitDirection::Horizontal => y,
        };
        let delta = (pointer - self.start_pointer) as f32;
        settings.apply(self.start_ratio + delta / self.container_size)
    }
}
