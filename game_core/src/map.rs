use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Axis;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Closed containment: points on the edge count
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Widest aspect ratio (width : height) the playable area keeps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: f32,
    pub height: f32,
}

impl AspectRatio {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The rectangle of the output surface where play happens.
///
/// Spans the full output width and is centered vertically; fixed for the
/// life of a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayableArea {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
}

impl PlayableArea {
    pub fn new(origin: Vec2, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Fit the area to an output surface.
    ///
    /// Playable height is `output_width / ratio`; the leftover height is
    /// split evenly above and below.
    pub fn from_output(output_width: f32, output_height: f32, ratio: AspectRatio) -> Self {
        // width * h / w rather than width / (w / h): exact for integral sizes
        let playable_height = output_width * ratio.height / ratio.width;
        let margin = (output_height - playable_height) / 2.0;
        Self::new(Vec2::new(0.0, margin), output_width, playable_height)
    }

    pub fn min(&self) -> Vec2 {
        self.origin
    }

    pub fn max(&self) -> Vec2 {
        self.origin + Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::new(self.width, self.height) * 0.5
    }

    /// Clamp a center coordinate on `axis` so a body of `half_extent`
    /// stays fully inside the area
    pub fn clamp_on_axis(&self, axis: Axis, value: f32, half_extent: f32) -> f32 {
        let lo = axis.component(self.min()) + half_extent;
        let hi = axis.component(self.max()) - half_extent;
        // Body longer than the area: clamp would panic with lo > hi
        if lo > hi {
            return axis.component(self.center());
        }
        value.clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playable_area_four_by_three() {
        let area = PlayableArea::from_output(2048.0, 1536.0, AspectRatio::new(4.0, 3.0));
        assert_eq!(area.height, 1536.0);
        assert_eq!(area.min(), Vec2::new(0.0, 0.0));
        assert_eq!(area.max(), Vec2::new(2048.0, 1536.0));
    }

    #[test]
    fn test_playable_area_letterboxed() {
        let area = PlayableArea::from_output(2048.0, 1536.0, AspectRatio::new(16.0, 9.0));
        assert_eq!(area.height, 1152.0);
        assert_eq!(area.min().y, 192.0);
        assert_eq!(area.max().y, 1344.0);
        assert_eq!(area.center(), Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn test_clamp_on_axis() {
        let area = PlayableArea::from_output(2048.0, 1536.0, AspectRatio::new(16.0, 9.0));
        assert_eq!(area.clamp_on_axis(Axis::Vertical, -500.0, 80.0), 272.0);
        assert_eq!(area.clamp_on_axis(Axis::Vertical, 5000.0, 80.0), 1264.0);
        assert_eq!(area.clamp_on_axis(Axis::Vertical, 700.0, 80.0), 700.0);
    }

    #[test]
    fn test_clamp_oversized_body_pins_to_center() {
        let area = PlayableArea::new(Vec2::ZERO, 100.0, 100.0);
        assert_eq!(area.clamp_on_axis(Axis::Vertical, 10.0, 80.0), 50.0);
    }

    #[test]
    fn test_aabb_strict_intersection() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        let overlapping = Aabb::new(Vec2::new(9.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
    }

    #[test]
    fn test_aabb_contains_edges() {
        let a = Aabb::from_center_size(Vec2::new(40.0, 768.0), Vec2::new(40.0, 160.0));
        assert!(a.contains(Vec2::new(20.0, 688.0)));
        assert!(a.contains(Vec2::new(40.0, 768.0)));
        assert!(!a.contains(Vec2::new(61.0, 768.0)));
    }
}
