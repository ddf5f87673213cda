//! Edge snapping between axis-aligned rectangles.
//!
//! A dragged rectangle snaps to a neighbour when one of its edges comes
//! within the proximity threshold of the facing edge of the neighbour and the
//! two rectangles share a band on the perpendicular axis. Rectangles placed
//! corner to corner never snap.

use crate::geometry::IRect;
use serde::{Deserialize, Serialize};

/// Default proximity threshold for edge snapping (in pixels).
pub const DEFAULT_PROXIMITY_THRESHOLD: i32 = 20;

/// Side of the *other* rectangle that the dragged rectangle is closest to.
///
/// `Left` means the dragged rectangle's right edge is near the other
/// rectangle's left edge, so it will be placed flush to the left of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// How a dragged rectangle is resolved against several nearby neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapPolicy {
    /// Visit neighbours in scene order and apply every snap as it is found.
    /// Each snap sees the position produced by the previous one, so the last
    /// neighbour on an axis wins.
    #[default]
    Sequential,
    /// Only apply the single snap with the smallest edge distance.
    Nearest,
}

impl SnapPolicy {
    /// Cycle to the next policy.
    pub fn next(self) -> Self {
        match self {
            SnapPolicy::Sequential => SnapPolicy::Nearest,
            SnapPolicy::Nearest => SnapPolicy::Sequential,
        }
    }

    /// Get display name for this policy.
    pub fn name(self) -> &'static str {
        match self {
            SnapPolicy::Sequential => "Sequential",
            SnapPolicy::Nearest => "Nearest",
        }
    }
}

/// The closest side between two rectangles and its edge-to-edge distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideMatch {
    pub side: RectSide,
    pub distance: i32,
}

/// Check if the spans `[lo1, hi1]` and `[lo2, hi2]` overlap once the second
/// one is widened by `slack` on both ends.
fn spans_overlap(lo1: i64, hi1: i64, lo2: i64, hi2: i64, slack: i64) -> bool {
    lo1 <= hi2 + slack && hi1 >= lo2 - slack
}

/// Check if any edge of `r1` is within `threshold` of the facing edge of `r2`
/// while the rectangles overlap on the perpendicular axis (with `threshold`
/// of slack on both ends).
///
/// The gap is measured as an absolute distance, so an edge that has been
/// pushed slightly past the facing edge still counts as near.
pub fn is_near(r1: &IRect, r2: &IRect, threshold: i32) -> bool {
    let t = i64::from(threshold);
    let (x1, y1, right1, bottom1) = r1.edges();
    let (x2, y2, right2, bottom2) = r2.edges();

    let vertical_band = spans_overlap(y1, bottom1, y2, bottom2, t);
    let horizontal_band = spans_overlap(x1, right1, x2, right2, t);

    // Left of r1 against right of r2
    if (x1 - right2).abs() <= t && vertical_band {
        return true;
    }
    // Right of r1 against left of r2
    if (x2 - right1).abs() <= t && vertical_band {
        return true;
    }
    // Top of r1 against bottom of r2
    if (y1 - bottom2).abs() <= t && horizontal_band {
        return true;
    }
    // Bottom of r1 against top of r2
    (y2 - bottom1).abs() <= t && horizontal_band
}

/// Check if two rectangles sit corner to corner: they do not intersect and
/// `r1` lies strictly beside `r2` on both axes at once.
pub fn is_diagonal(r1: &IRect, r2: &IRect) -> bool {
    if r1.intersects(r2) {
        return false;
    }

    let (x1, y1, right1, bottom1) = r1.edges();
    let (x2, y2, right2, bottom2) = r2.edges();
    let left_of = right1 < x2;
    let right_of = x1 > right2;
    let above = bottom1 < y2;
    let below = y1 > bottom2;

    (left_of || right_of) && (above || below)
}

/// Find the side of `r2` that `r1` is closest to, together with the edge
/// distance.
///
/// Returns `None` when the rectangles are not near each other or are in a
/// diagonal relation. Equal distances resolve in the order left, right, top,
/// bottom.
pub fn nearest_side(r1: &IRect, r2: &IRect, threshold: i32) -> Option<SideMatch> {
    if !is_near(r1, r2, threshold) || is_diagonal(r1, r2) {
        return None;
    }

    let (x1, y1, right1, bottom1) = r1.edges();
    let (x2, y2, right2, bottom2) = r2.edges();
    let candidates = [
        (RectSide::Left, (right1 - x2).abs()),
        (RectSide::Right, (right2 - x1).abs()),
        (RectSide::Top, (bottom1 - y2).abs()),
        (RectSide::Bottom, (bottom2 - y1).abs()),
    ];

    // Strict comparison keeps the earliest side on ties.
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 < best.1 {
            best = *candidate;
        }
    }

    // Within the threshold, so the distance fits in an i32
    let distance = i32::try_from(best.1).ok().filter(|d| *d <= threshold)?;
    Some(SideMatch {
        side: best.0,
        distance,
    })
}

/// Find which side of `r2` the rectangle `r1` should snap to, if any.
pub fn which_side_is_near(r1: &IRect, r2: &IRect, threshold: i32) -> Option<RectSide> {
    nearest_side(r1, r2, threshold).map(|m| m.side)
}

/// Move `rect` so that its edge sits flush against the given side of `other`.
/// Only the axis of that side changes.
pub fn snap_rect(rect: IRect, other: &IRect, side: RectSide) -> IRect {
    let mut snapped = rect;
    match side {
        RectSide::Left => snapped.x = other.x.saturating_sub(rect.width),
        RectSide::Right => snapped.x = other.right(),
        RectSide::Top => snapped.y = other.y.saturating_sub(rect.height),
        RectSide::Bottom => snapped.y = other.bottom(),
    }
    snapped
}

/// Snap `rect` against a single neighbour.
/// Returns the snapped rectangle and the side it was snapped to.
pub fn snap_to_rect(rect: IRect, other: &IRect, threshold: i32) -> Option<(IRect, SideMatch)> {
    nearest_side(&rect, other, threshold).map(|m| (snap_rect(rect, other, m.side), m))
}
