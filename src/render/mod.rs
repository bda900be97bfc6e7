//! Shape library: path geometry, view-boxes, gradient tables and the SVG
//! primitives components are drawn with.

mod gradients;
mod shapes;

pub use gradients::{gradient_stops_for, GradientKind, GradientStop};
pub use shapes::{
    build_shape_shell, close_icon, linear_gradient, path, svg_element, PathPaint, ShapeShell,
    ShellGeometry, BORDER_STROKE_WIDTH, BUTTON_BACKGROUND_PATH, BUTTON_BORDER_PATH,
    BUTTON_VIEW_BOX, CLOSE_ICON_PATH, CLOSE_ICON_VIEW_BOX, MODAL_BACKGROUND_PATH,
    MODAL_BORDER_PATH, MODAL_VIEW_BOX,
};
