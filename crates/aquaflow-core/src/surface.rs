//! The drawing surface animations render onto.

use crate::{CornerRadii, Point, Rect, Rgba, Transform, Viewport};

/// A 2D drawing context with a canvas-style transform stack.
///
/// Coordinates are world units with the origin at the top-left.
pub trait Surface {
    /// Discard everything drawn so far.
    fn clear(&mut self, viewport: Viewport);
    /// Push the current transform.
    fn save(&mut self);
    /// Pop the transform pushed by the matching `save`.
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, angle: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
    fn fill_round_rect(&mut self, rect: Rect, radii: CornerRadii, color: Rgba);
    fn stroke_round_rect(&mut self, rect: Rect, radii: CornerRadii, color: Rgba, line_width: f64);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled disc, centre already in world coordinates.
    Circle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    /// Rounded rectangle in local coordinates under `transform`.
    RoundRect {
        transform: Transform,
        rect: Rect,
        radii: CornerRadii,
        color: Rgba,
        /// `Some(width)` for an outline, `None` for a fill.
        stroke: Option<f64>,
    },
    /// Straight line in world coordinates.
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
}

/// A [`Surface`] that records commands for a rasterizer to replay.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    transform: Transform,
    stack: Vec<Transform>,
    viewport: Viewport,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Viewport passed to the last clear.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn push_rect(&mut self, rect: Rect, radii: CornerRadii, color: Rgba, stroke: Option<f64>) {
        if !color.is_visible() {
            return;
        }
        self.commands.push(DrawCommand::RoundRect {
            transform: self.transform,
            rect,
            radii,
            color,
            stroke,
        });
    }
}

impl Surface for DrawList {
    fn clear(&mut self, viewport: Viewport) {
        self.commands.clear();
        self.stack.clear();
        self.transform = Transform::IDENTITY;
        self.viewport = viewport;
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.translated(dx, dy);
    }

    fn rotate(&mut self, angle: f64) {
        self.transform = self.transform.rotated(angle);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        if !color.is_visible() || radius <= 0.0 {
            return;
        }
        self.commands.push(DrawCommand::Circle {
            center: self.transform.apply(center),
            radius,
            color,
        });
    }

    fn fill_round_rect(&mut self, rect: Rect, radii: CornerRadii, color: Rgba) {
        self.push_rect(rect, radii, color, None);
    }

    fn stroke_round_rect(&mut self, rect: Rect, radii: CornerRadii, color: Rgba, line_width: f64) {
        self.push_rect(rect, radii, color, Some(line_width));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.push_rect(rect, CornerRadii::default(), color, None);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, line_width: f64) {
        if !color.is_visible() {
            return;
        }
        self.commands.push(DrawCommand::Line {
            from: self.transform.apply(from),
            to: self.transform.apply(to),
            color,
            width: line_width,
        });
    }
}
