//! Convex-quadrilateral exclusion zones for disc sampling.
//!
//! # The bound test is a documented approximation
//!
//! A candidate point is tested by treating the quad's two "vertical" edges
//! (v0→v1 and v2→v3) as linear functions of y bounding x, and its two
//! "horizontal" edges (v1→v2 and v3→v0) as linear functions of x bounding y.
//! The point is rejected when it falls inside the min/max box of the four
//! edge intersections.  This is exact for axis-aligned rectangles but only
//! approximate for skewed quads (it can over- or under-reject near slanted
//! corners).  The behavior is intentional and must be preserved — zone
//! tables in existing deployments were hand-tuned against it.

/// A convex quadrilateral in the planar sampling frame (km offsets from the
/// disc center), defined by four ordered vertices `v0..v3`.
///
/// Vertex order matters: `v0→v1` is the right edge, `v1→v2` the upper edge,
/// `v2→v3` the left edge, `v3→v0` the lower edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExclusionZone {
    vertices: [[f64; 2]; 4],
}

impl ExclusionZone {
    pub fn new(vertices: [[f64; 2]; 4]) -> Self {
        Self { vertices }
    }

    /// Build from the flat `(x0,y0,x1,y1,x2,y2,x3,y3)` tuple form used by
    /// hand-written zone tables.
    pub fn from_flat(t: [f64; 8]) -> Self {
        Self::new([[t[0], t[1]], [t[2], t[3]], [t[4], t[5]], [t[6], t[7]]])
    }

    pub fn vertices(&self) -> &[[f64; 2]; 4] {
        &self.vertices
    }

    /// Edge-interpolation bound test (see module docs).  `true` means the
    /// point is inside the zone and must be rejected.
    ///
    /// Degenerate edges (zero extent along the interpolation axis) produce
    /// non-finite bounds, and the comparison then rejects nothing — the same
    /// outcome as the original float arithmetic.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let [[a0, b0], [a1, b1], [a2, b2], [a3, b3]] = self.vertices;

        // Right and left edges as x(y); upper and lower edges as y(x).
        let right_x_at = |y: f64| ((y - b0) * (a1 - a0)) / (b1 - b0) + a0;
        let left_x_at  = |y: f64| ((y - b2) * (a3 - a2)) / (b3 - b2) + a2;
        let up_y_at    = |x: f64| ((b2 - b1) / (a2 - a1)) * (x - a1) + b1;
        let down_y_at  = |x: f64| ((b0 - b3) / (a0 - a3)) * (x - a3) + b3;

        // Where a "+" cross projected from the point meets the four edges.
        let (up, down) = (up_y_at(x), down_y_at(x));
        let (left, right) = (left_x_at(y), right_x_at(y));

        let y_hi = up.max(down);
        let y_lo = up.min(down);
        let x_hi = left.max(right);
        let x_lo = left.min(right);

        x >= x_lo && x <= x_hi && y >= y_lo && y <= y_hi
    }
}
