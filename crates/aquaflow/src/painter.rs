//! Rasterizes recorded draw commands onto a ratatui canvas.

use aquaflow_core::{CornerRadii, DrawCommand, Point, Rect, Rgba, Transform, Viewport};
use ratatui::widgets::canvas::{Painter, Shape};

/// A frame's worth of draw commands, ready to hand to `Context::draw`.
///
/// Filled shapes are sampled at every canvas grid point they cover;
/// `dot_width`/`dot_height` are the size of one dot in world units.
#[derive(Debug)]
pub struct SceneShape<'a> {
    pub commands: &'a [DrawCommand],
    pub viewport: Viewport,
    pub backdrop: [u8; 3],
    pub dot_width: f64,
    pub dot_height: f64,
}

impl Shape for SceneShape<'_> {
    fn draw(&self, painter: &mut Painter) {
        if !(self.dot_width > 0.0 && self.dot_height > 0.0) {
            return;
        }
        for command in self.commands {
            match command {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => self.circle(painter, *center, *radius, *color),
                DrawCommand::RoundRect {
                    transform,
                    rect,
                    radii,
                    color,
                    stroke,
                } => self.round_rect(painter, transform, rect, radii, *color, *stroke),
                DrawCommand::Line {
                    from, to, color, ..
                } => self.line(painter, *from, *to, *color),
            }
        }
    }
}

impl SceneShape<'_> {
    fn min_dot(&self) -> f64 {
        self.dot_width.min(self.dot_height)
    }

    /// Number of canvas dots across and down the viewport.
    fn resolution(&self) -> (usize, usize) {
        (
            (self.viewport.width / self.dot_width).round() as usize,
            (self.viewport.height / self.dot_height).round() as usize,
        )
    }

    /// Largest disc that can still miss every grid point.
    fn sample_gap(&self) -> f64 {
        let (cols, rows) = self.resolution();
        let pitch = |span: f64, n: usize| span / n.saturating_sub(1).max(1) as f64;
        pitch(self.viewport.width, cols).hypot(pitch(self.viewport.height, rows)) / 2.0
    }

    fn plot(&self, painter: &mut Painter, p: Point, color: Rgba) {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return;
        }
        // Canvas y grows upward
        if let Some((x, y)) = painter.get_point(p.x, self.viewport.height - p.y) {
            painter.paint(x, y, color.over(self.backdrop));
        }
    }

    /// Paint every grid point inside `bounds` accepted by `inside`.
    fn fill_where(
        &self,
        painter: &mut Painter,
        bounds: (Point, Point),
        color: Rgba,
        inside: impl Fn(Point) -> bool,
    ) {
        let (min, max) = bounds;
        let (cols, rows) = self.resolution();
        let xs = grid_samples(min.x, max.x, self.viewport.width, cols);
        for y in grid_samples(min.y, max.y, self.viewport.height, rows) {
            for &x in &xs {
                let p = Point::new(x, y);
                if inside(p) {
                    self.plot(painter, p, color);
                }
            }
        }
    }

    fn circle(&self, painter: &mut Painter, center: Point, radius: f64, color: Rgba) {
        // Small discs can fall between grid points; paint the nearest one instead
        if radius < self.sample_gap() {
            self.plot(painter, center, color);
            return;
        }
        let bounds = (
            Point::new(center.x - radius, center.y - radius),
            Point::new(center.x + radius, center.y + radius),
        );
        let r2 = radius * radius;
        self.fill_where(painter, bounds, color, |p| p.distance_squared(center) <= r2);
    }

    fn round_rect(
        &self,
        painter: &mut Painter,
        transform: &Transform,
        rect: &Rect,
        radii: &CornerRadii,
        color: Rgba,
        stroke: Option<f64>,
    ) {
        let outer = match stroke {
            Some(width) => outline_band(rect, radii, width.max(self.min_dot())),
            None => (*rect, *radii, None),
        };
        let (outer_rect, outer_radii, inner) = outer;

        let Some(bounds) = world_bounds(transform, &outer_rect) else {
            return;
        };

        self.fill_where(painter, bounds, color, |p| {
            let Some(local) = transform.invert(p) else {
                return false;
            };
            if !outer_radii.contains(&outer_rect, local) {
                return false;
            }
            match &inner {
                Some((inner_rect, inner_radii)) => !inner_radii.contains(inner_rect, local),
                None => true,
            }
        });
    }

    fn line(&self, painter: &mut Painter, from: Point, to: Point, color: Rgba) {
        let step = self.min_dot() / 2.0;
        let length = from.distance(to);
        if !length.is_finite() {
            return;
        }
        let samples = (length / step).ceil().max(1.0) as usize;
        for k in 0..=samples {
            let t = k as f64 / samples as f64;
            let p = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.plot(painter, p, color);
        }
    }
}

/// World positions of the canvas grid points that fall in `[min, max]`.
///
/// The canvas spreads `resolution` points over `[0, limit]` with the first on
/// 0 and the last on `limit`, so point `i` sits at `i * limit / (resolution - 1)`.
pub fn grid_samples(min: f64, max: f64, limit: f64, resolution: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite() && limit > 0.0) || resolution < 2 {
        return Vec::new();
    }
    let last_index = (resolution - 1) as f64;
    let lo = min.max(0.0);
    let hi = max.min(limit);
    if lo > hi {
        return Vec::new();
    }
    let first = (lo * last_index / limit).ceil() as usize;
    let last = ((hi * last_index / limit).floor() as usize).min(resolution - 1);
    (first..=last)
        .map(|i| i as f64 * limit / last_index)
        .filter(|c| *c >= min && *c <= max)
        .collect()
}

/// Axis-aligned world bounds of a transformed local rectangle.
pub fn world_bounds(transform: &Transform, rect: &Rect) -> Option<(Point, Point)> {
    let corners = rect.corners().map(|c| transform.apply(c));
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for c in corners {
        if !(c.x.is_finite() && c.y.is_finite()) {
            return None;
        }
        min.x = min.x.min(c.x);
        min.y = min.y.min(c.y);
        max.x = max.x.max(c.x);
        max.y = max.y.max(c.y);
    }
    Some((min, max))
}

/// The band covered by an outline of `width` centred on the rectangle edge.
///
/// Returns the outer shape and, when the outline doesn't swallow the whole
/// shape, the inner hole.
fn outline_band(
    rect: &Rect,
    radii: &CornerRadii,
    width: f64,
) -> (Rect, CornerRadii, Option<(Rect, CornerRadii)>) {
    let half = width / 2.0;
    let grow = |r: f64, by: f64| (r + by).max(0.0);

    let outer_rect = Rect::new(
        rect.x - half,
        rect.y - half,
        rect.width + width,
        rect.height + width,
    );
    let outer_radii = CornerRadii::new(
        grow(radii.top_left, half),
        grow(radii.top_right, half),
        grow(radii.bottom_right, half),
        grow(radii.bottom_left, half),
    );

    let inner = (rect.width > width && rect.height > width).then(|| {
        (
            Rect::new(
                rect.x + half,
                rect.y + half,
                rect.width - width,
                rect.height - width,
            ),
            CornerRadii::new(
                grow(radii.top_left, -half),
                grow(radii.top_right, -half),
                grow(radii.bottom_right, -half),
                grow(radii.bottom_left, -half),
            ),
        )
    });

    (outer_rect, outer_radii, inner)
}
