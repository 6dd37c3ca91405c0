// Hover-circle geometry for the pill navigation.

/// Placement of the circular hover fill that expands to cover a pill.
///
/// All values are CSS pixels relative to the pill box: the circle is a
/// `diameter`-sized square hanging `bottom_offset` below the pill's bottom
/// edge, scaled up from a transform origin `origin_y` down from its own top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverCircle {
    pub diameter: f64,
    pub bottom_offset: f64,
    pub origin_y: f64,
}

/// Compute the circle that, tangent to the pill's bottom edge, passes
/// through both of its top corners: `R = (w²/4 + h²) / (2h)`.
///
/// Diameter and offset are padded by a couple of pixels so the grown circle
/// overshoots the pill outline instead of leaving antialiased slivers.
pub fn hover_circle(width: f64, height: f64) -> HoverCircle {
    let w = width.max(1.0);
    let h = height.max(1.0);
    let r = (w * w / 4.0 + h * h) / (2.0 * h);
    let diameter = (2.0 * r).ceil() + 2.0;
    let bottom_offset = (r - (r * r - w * w / 4.0).max(0.0).sqrt()).ceil() + 1.0;
    HoverCircle {
        diameter,
        bottom_offset,
        origin_y: diameter - bottom_offset,
    }
}
