// Rendering: mood color palette and the SVG network image.

pub mod palette;
pub mod svg;
