//! SVG primitives and the background/border shell drawn behind components.

use super::gradients::{gradient_stops_for, GradientKind, GradientStop};
use crate::dom::{Document, Node};

/// Background outline of modal-family shells.
pub const MODAL_BACKGROUND_PATH: &str = "M 265.95318,319.32816 H 448.53221 V 83.2702 L 388.18033,22.91834 H 12.563998 v 232.299 H 199.28437 c 1.70635,0 3.25149,0.6935 4.36769,1.81279 z";

/// Border outline of modal-family shells, including the corner hatching.
pub const MODAL_BORDER_PATH: &str = "M 265.95318,319.32816 H 448.53221 V 83.2702 L 388.18033,22.91834 H 12.563998 v 232.299 H 199.28437 c 1.70635,0 3.25149,0.6935 4.36769,1.81279 z M 87.602309,318.31528 H 57.655818 L 20.263785,280.55635 h 29.946494 z m 46.857081,0 H 104.5129 L 67.119839,280.55635 h 29.947526 z m 46.86226,0 h -29.94856 l -37.38997,-37.75893 h 29.94753 z m 46.86226,0 h -29.94753 l -37.39099,-37.75893 h 29.94546 z M 442.30106,46.18823 395.70235,-0.40943956 H 342.34643 L 331.48613,10.55733 H 6.3824633 c -3.413744,0 -6.18153394,2.7678 -6.18153394,6.1805 v 244.65999 c 0,3.41583 2.76778994,6.18361 6.18153394,6.18361 H 196.72225 l 61.4557,61.45154 c 1.11619,1.60612 2.97344,2.65721 5.07669,2.65721 h 191.45805 c 3.41273,0 6.18051,-2.76778 6.18051,-6.18154 V 147.25906 l 13.61054,-13.47722 V 78.39091 L 442.30106,46.18823";

/// Background outline of button shells.
pub const BUTTON_BACKGROUND_PATH: &str = "M 77.484816,21.569251 H 105.32498 L 117.80174,9.0935273 h 347.5581 V 146.188 l -12.47777,12.47779 v 93.39481 l -56.60845,56.60741 H 368.43244 L 355.9567,321.14579 H 8.3985972 V 184.04927 L 20.875357,171.57456 V 78.178714 L 77.484816,21.569251";

/// Border outline of button shells.
pub const BUTTON_BORDER_PATH: &str = "m 70.54467,0.53487593 h 399.09296 c 2.36265,0 4.27881,1.91822907 4.27881,4.28087607 V 259.00075 c 0,1.18028 -0.47956,2.25205 -1.25161,3.02411 l -66.42695,66.42385 c -0.83614,0.83611 -1.93064,1.25368 -3.02411,1.25368 H 4.1197872 c -2.36265,0 -4.27880996,-1.91513 -4.27880996,-4.27778 V 71.239603 c 0,-1.18029 0.47956,-2.252059 1.25366996,-3.024105 L 67.519533,1.788546 C 68.354624,0.95552393 69.449131,0.53694493 70.54467,0.53694493 Z M 77.484816,21.569251 H 105.32498 L 117.80174,9.0935273 h 347.5581 V 146.188 l -12.47777,12.47779 v 93.39481 l -56.60845,56.60741 H 368.43244 L 355.9567,321.14579 H 8.3985972 V 184.04927 L 20.875357,171.57456 V 78.178714 L 77.484816,21.569251";

/// Stroke of the modal close icon.
pub const CLOSE_ICON_PATH: &str = "M16 8L8 16M8.00003 8L10 10M16 16L12 12";

pub const MODAL_VIEW_BOX: &str = "0 0 474 332";
pub const BUTTON_VIEW_BOX: &str = "0 0 474 329";
pub const CLOSE_ICON_VIEW_BOX: &str = "0 0 24 24";

/// Stroke width of every shell border.
pub const BORDER_STROKE_WIDTH: &str = "2";

/// Outline family of a shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellGeometry {
    /// Cut-corner panel used by modals, cards, info popups and tags.
    #[default]
    Modal,
    /// Compact outline used by buttons.
    Button,
}

impl ShellGeometry {
    fn view_box(self) -> &'static str {
        match self {
            Self::Modal => MODAL_VIEW_BOX,
            Self::Button => BUTTON_VIEW_BOX,
        }
    }

    fn paths(self) -> (&'static str, &'static str) {
        match self {
            Self::Modal => (MODAL_BACKGROUND_PATH, MODAL_BORDER_PATH),
            Self::Button => (BUTTON_BACKGROUND_PATH, BUTTON_BORDER_PATH),
        }
    }

    /// (background, border) classes of the two SVG layers.
    fn classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Modal => ("cosmic-bg", "cosmic-border"),
            Self::Button => ("cosmic-btn-bg", "cosmic-btn-border"),
        }
    }
}

/// Paint applied to a path. `None` leaves the attribute unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathPaint<'a> {
    pub fill: Option<&'a str>,
    pub stroke: Option<&'a str>,
    pub stroke_width: Option<&'a str>,
}

/// The two SVG layers drawn behind a component, plus direct handles to the
/// paths whose paint changes on hover.
#[derive(Debug, Clone)]
pub struct ShapeShell {
    pub background_svg: Node,
    pub border_svg: Node,
    pub background_path: Node,
    pub border_path: Node,
}

impl ShapeShell {
    /// Appends both layers to `wrapper`, background first.
    pub fn attach_to(&self, wrapper: &Node) {
        wrapper.append_child(&self.background_svg);
        wrapper.append_child(&self.border_svg);
    }

    /// Current `(stroke, fill)` of the border and background paths.
    pub fn paint(&self) -> (Option<String>, Option<String>) {
        (
            self.border_path.attribute("stroke"),
            self.background_path.attribute("fill"),
        )
    }
}

/// Creates an `<svg>` stretched to its container.
pub fn svg_element(doc: &Document, class_name: &str, view_box: &str) -> Node {
    let svg = doc.create_svg_element("svg");
    svg.set_attribute("class", class_name);
    svg.set_attribute("preserveAspectRatio", "none");
    svg.set_attribute("viewBox", view_box);
    svg
}

/// Creates a diagonal `<linearGradient>` with one `<stop>` per entry.
pub fn linear_gradient(doc: &Document, id: &str, stops: &[GradientStop]) -> Node {
    let gradient = doc.create_svg_element("linearGradient");
    gradient.set_attribute("id", id);
    gradient.set_attribute("x1", "0%");
    gradient.set_attribute("y1", "0%");
    gradient.set_attribute("x2", "100%");
    gradient.set_attribute("y2", "100%");
    gradient.set_attribute("gradientUnits", "objectBoundingBox");

    for stop in stops {
        let element = doc.create_svg_element("stop");
        element.set_attribute("offset", stop.offset);
        element.set_attribute("stop-color", stop.color);
        gradient.append_child(&element);
    }
    gradient
}

pub fn path(doc: &Document, d: &str, paint: PathPaint<'_>) -> Node {
    let path = doc.create_svg_element("path");
    path.set_attribute("fill-rule", "evenodd");
    path.set_attribute("d", d);
    if let Some(fill) = paint.fill {
        path.set_attribute("fill", fill);
    }
    if let Some(stroke) = paint.stroke {
        path.set_attribute("stroke", stroke);
    }
    if let Some(width) = paint.stroke_width {
        path.set_attribute("stroke-width", width);
    }
    path
}

/// The cross drawn inside a modal's close control.
pub fn close_icon(doc: &Document) -> Node {
    let svg = svg_element(doc, "cosmic-close-icon", CLOSE_ICON_VIEW_BOX);
    svg.set_style("width", "40px");
    svg.set_style("height", "40px");
    svg.set_style("cursor", "pointer");

    let icon = path(
        doc,
        CLOSE_ICON_PATH,
        PathPaint {
            fill: Some("none"),
            stroke: Some("#ffffff"),
            stroke_width: Some("1.5"),
        },
    );
    icon.set_attribute("stroke-linecap", "round");
    icon.set_attribute("stroke-linejoin", "round");
    svg.append_child(&icon);
    svg
}

/// Builds the background and border layers of a shell.
///
/// The background is filled with a fresh gradient whose id is `gradient_id`;
/// callers pass an id from [`Document::unique_id`] so that several shells in
/// one document each reference their own `<defs>`.
pub fn build_shape_shell(
    doc: &Document,
    gradient_id: &str,
    border_color: &str,
    kind: GradientKind,
    geometry: ShellGeometry,
) -> ShapeShell {
    let (background_d, border_d) = geometry.paths();
    let (background_class, border_class) = geometry.classes();

    let background_svg = svg_element(doc, background_class, geometry.view_box());
    let defs = doc.create_svg_element("defs");
    defs.append_child(&linear_gradient(doc, gradient_id, gradient_stops_for(kind)));
    background_svg.append_child(&defs);

    let fill = format!("url(#{})", gradient_id);
    let background_path = path(
        doc,
        background_d,
        PathPaint {
            fill: Some(&fill),
            ..PathPaint::default()
        },
    );
    background_svg.append_child(&background_path);

    let border_svg = svg_element(doc, border_class, geometry.view_box());
    let border_path = path(
        doc,
        border_d,
        PathPaint {
            fill: Some("transparent"),
            stroke: Some(border_color),
            stroke_width: Some(BORDER_STROKE_WIDTH),
        },
    );
    border_svg.append_child(&border_path);

    ShapeShell {
        background_svg,
        border_svg,
        background_path,
        border_path,
    }
}
