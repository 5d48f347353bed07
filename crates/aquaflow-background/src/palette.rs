//! Color constants for the animations.

use aquaflow_core::Rgba;

/// Bubble body and highlight (alpha varies per bubble).
pub const BUBBLE: Rgba = Rgba::opaque(255, 255, 255);

/// Bottle body fill, Sky 100.
pub const BOTTLE_BODY: Rgba = Rgba::opaque(224, 242, 254);

/// Bottle outline.
pub const BOTTLE_EDGE: Rgba = Rgba::opaque(255, 255, 255);

/// Water inside a bottle, Sky 400.
pub const BOTTLE_WATER: Rgba = Rgba::opaque(56, 189, 248);

/// Bottle cap, Sky 600.
pub const BOTTLE_CAP: Rgba = Rgba::opaque(2, 132, 199);

/// Bottle label.
pub const BOTTLE_LABEL: Rgba = Rgba::opaque(255, 255, 255);

/// Accent stripe on the label.
pub const BOTTLE_ACCENT: Rgba = Rgba::opaque(2, 132, 199);

/// Network node color.
pub const NODE: Rgba = Rgba {
    r: 102,
    g: 126,
    b: 234,
    a: 0.7,
};

/// Network link color (alpha is set from distance).
pub const LINK: Rgba = Rgba::opaque(102, 126, 234);
