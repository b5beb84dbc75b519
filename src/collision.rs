/// Axis-aligned overlap test.

use crate::entities::Rect;

/// Half-open interval overlap on both axes: boxes that merely touch along an
/// edge do not collide.
pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
