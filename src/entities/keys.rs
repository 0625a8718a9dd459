//! Property name constants for bag slots.
//!
//! Avoid string typos, enable IDE autocomplete.
//! Usage: `PolygonGraphics::descriptor(A_FILL)`

// === Shared by all graphics bags ===
/// Visibility (Boolean property)
pub const A_SHOW: &str = "show";
/// Appearance (material property)
pub const A_MATERIAL: &str = "material";

// === Polygon ===
/// Height above the surface; unset means on the surface
pub const A_HEIGHT: &str = "height";
/// Height of the far side of an extruded volume
pub const A_EXTRUDED_HEIGHT: &str = "extruded_height";
/// Angular distance in radians between lat/lon sample points
pub const A_GRANULARITY: &str = "granularity";
/// Texture coordinate rotation in radians, counter-clockwise
pub const A_ST_ROTATION: &str = "st_rotation";
/// Whether the interior is filled (Boolean)
pub const A_FILL: &str = "fill";
/// Whether the outline is drawn (Boolean)
pub const A_OUTLINE: &str = "outline";
/// Outline color (Color)
pub const A_OUTLINE_COLOR: &str = "outline_color";

// === Polyline ===
/// Line width in pixels
pub const A_WIDTH: &str = "width";
/// Whether segments follow the ellipsoid surface (Boolean)
pub const A_FOLLOW_SURFACE: &str = "follow_surface";
