//! Plane geometry in world units (y grows downward, as on a canvas).

/// A point in world coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The four corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }
}

/// Corner radii of a rounded rectangle, clockwise from the top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Same radius on every corner.
    pub const fn uniform(r: f64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Whether a local point lies inside `rect` rounded by these radii.
    ///
    /// Negative radii count as zero and each radius is capped at half the
    /// shorter side.
    pub fn contains(&self, rect: &Rect, p: Point) -> bool {
        let left = rect.x.min(rect.x + rect.width);
        let top = rect.y.min(rect.y + rect.height);
        let (w, h) = (rect.width.abs(), rect.height.abs());
        if p.x < left || p.x > left + w || p.y < top || p.y > top + h {
            return false;
        }

        let cap = w.min(h) / 2.0;
        let clamp = |r: f64| r.max(0.0).min(cap);

        // Centre of the corner arc and its radius for the quadrant p falls in
        let (cx, cy, r) = match (p.x < left + w / 2.0, p.y < top + h / 2.0) {
            (true, true) => {
                let r = clamp(self.top_left);
                (left + r, top + r, r)
            }
            (false, true) => {
                let r = clamp(self.top_right);
                (left + w - r, top + r, r)
            }
            (false, false) => {
                let r = clamp(self.bottom_right);
                (left + w - r, top + h - r, r)
            }
            (true, false) => {
                let r = clamp(self.bottom_left);
                (left + r, top + h - r, r)
            }
        };

        let outside_arc_x = if p.x < left + w / 2.0 { p.x < cx } else { p.x > cx };
        let outside_arc_y = if p.y < top + h / 2.0 { p.y < cy } else { p.y > cy };
        if outside_arc_x && outside_arc_y {
            Point::new(cx, cy).distance_squared(p) <= r * r
        } else {
            true
        }
    }
}

/// 2D affine transform with the same layout as a canvas matrix:
/// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Compose a translation onto this transform (applied before it).
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            e: self.a * dx + self.c * dy + self.e,
            f: self.b * dx + self.d * dy + self.f,
            ..self
        }
    }

    /// Compose a clockwise rotation (in screen space) onto this transform.
    pub fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    /// Map a local point to world coordinates.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Map a world point back to local coordinates.
    ///
    /// Returns `None` for a degenerate (non-invertible) transform.
    pub fn invert(&self, p: Point) -> Option<Point> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < f64::EPSILON {
            return None;
        }
        let x = p.x - self.e;
        let y = p.y - self.f;
        Some(Point::new(
            (self.d * x - self.c * y) / det,
            (self.a * y - self.b * x) / det,
        ))
    }
}
