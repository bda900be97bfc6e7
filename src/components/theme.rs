//! Paint palette and the named style variants components select from.

use std::time::Duration;

use crate::dom::{EventKind, Node};
use crate::render::ShapeShell;

/// Border stroke of a resting shell.
pub const DEFAULT_BORDER: &str = "#333333";
/// Border stroke of a hovered shell, also the accent border of overlays.
pub const HIGHLIGHT_BORDER: &str = "#00d4ff";
/// Background fill of a shell after the pointer has left it.
pub const DEFAULT_FILL: &str = "#1a1a2e";
/// Background fill of a hovered shell.
pub const HIGHLIGHT_FILL: &str = "#2a2a4e";
/// Length of the modal fade-out before the overlay is detached.
pub const CLOSE_DELAY: Duration = Duration::from_millis(200);

/// Colours and timing used when components are built.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    /// Resting border stroke (buttons, cards)
    pub border_default: String,
    /// Hovered border stroke
    pub border_highlight: String,
    /// Resting background fill restored on mouse leave
    pub fill_default: String,
    /// Hovered background fill
    pub fill_highlight: String,
    /// Border stroke of modals, info popups and tags
    pub accent_border: String,
    /// Delay between starting a modal close and detaching it
    pub close_delay: Duration,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            border_default: DEFAULT_BORDER.to_string(),
            border_highlight: HIGHLIGHT_BORDER.to_string(),
            fill_default: DEFAULT_FILL.to_string(),
            fill_highlight: HIGHLIGHT_FILL.to_string(),
            accent_border: HIGHLIGHT_BORDER.to_string(),
            close_delay: CLOSE_DELAY,
        }
    }
}

/// Swaps the shell's border stroke and background fill while the pointer is
/// over `wrapper`.
///
/// Enter always writes the highlight pair and leave always writes the default
/// pair, so any number of enter/leave cycles ends in the same state.
pub fn wire_hover(wrapper: &Node, shell: &ShapeShell, paint: &Paint) {
    let border = shell.border_path.clone();
    let background = shell.background_path.clone();
    let (stroke, fill) = (paint.border_highlight.clone(), paint.fill_highlight.clone());
    wrapper.add_event_listener(EventKind::MouseEnter, move |_| {
        border.set_attribute("stroke", &stroke);
        background.set_attribute("fill", &fill);
    });

    let border = shell.border_path.clone();
    let background = shell.background_path.clone();
    let (stroke, fill) = (paint.border_default.clone(), paint.fill_default.clone());
    wrapper.add_event_listener(EventKind::MouseLeave, move |_| {
        border.set_attribute("stroke", &stroke);
        background.set_attribute("fill", &fill);
    });
}

/// Button variant types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }

    /// Parses a variant name, falling back to `Default`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "danger" => Self::Danger,
            _ => Self::Default,
        }
    }
}

/// Title colour themes for info popups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleColor {
    Yellow,
    Green,
    Blue,
    Purple,
    GoldenRed,
}

impl TitleColor {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::GoldenRed => "golden-red",
        }
    }

    /// Parses a colour name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "yellow" => Some(Self::Yellow),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "purple" => Some(Self::Purple),
            "golden-red" | "golden_red" => Some(Self::GoldenRed),
            _ => None,
        }
    }
}
