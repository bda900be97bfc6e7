//! Gradient tables for each component family.

/// One colour stop of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    /// Position along the gradient axis as a percentage string, e.g. `"30%"`.
    pub offset: &'static str,
    /// Hex colour.
    pub color: &'static str,
}

const fn stop(offset: &'static str, color: &'static str) -> GradientStop {
    GradientStop { offset, color }
}

const MODAL_STOPS: [GradientStop; 5] = [
    stop("0%", "#1a1a2e"),
    stop("30%", "#2a2a4e"),
    stop("50%", "#1a1a2e"),
    stop("70%", "#3a1a4e"),
    stop("100%", "#1a1a2e"),
];

const INFO_STOPS: [GradientStop; 5] = [
    stop("0%", "#1a2a3e"),
    stop("30%", "#2a3a5e"),
    stop("50%", "#1a2a3e"),
    stop("70%", "#3a4a6e"),
    stop("100%", "#1a2a3e"),
];

const BUTTON_STOPS: [GradientStop; 5] = [
    stop("0%", "#1a1a2e"),
    stop("25%", "#2a2a4e"),
    stop("50%", "#1a1a2e"),
    stop("75%", "#4a2a3e"),
    stop("100%", "#1a1a2e"),
];

const CARD_STOPS: [GradientStop; 4] = [
    stop("0%", "#1a1a2e"),
    stop("30%", "#1a3a2e"),
    stop("70%", "#3a2a1e"),
    stop("100%", "#1a1a2e"),
];

/// Component family selecting a gradient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientKind {
    #[default]
    Card,
    Modal,
    Info,
    Button,
    Tag,
}

impl GradientKind {
    /// Parses a family name. Unknown names fall back to [`GradientKind::Card`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "modal" => Self::Modal,
            "info" => Self::Info,
            "button" => Self::Button,
            "tag" => Self::Tag,
            "card" => Self::Card,
            other => {
                log::debug!("unknown gradient kind '{}', using card", other);
                Self::Card
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Modal => "modal",
            Self::Info => "info",
            Self::Button => "button",
            Self::Tag => "tag",
        }
    }
}

/// Ordered colour stops for `kind`. Modal and tag share a table.
pub fn gradient_stops_for(kind: GradientKind) -> &'static [GradientStop] {
    match kind {
        GradientKind::Modal | GradientKind::Tag => &MODAL_STOPS,
        GradientKind::Info => &INFO_STOPS,
        GradientKind::Button => &BUTTON_STOPS,
        GradientKind::Card => &CARD_STOPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_and_tag_share_a_table() {
        assert_eq!(
            gradient_stops_for(GradientKind::Modal),
            gradient_stops_for(GradientKind::Tag)
        );
    }

    #[test]
    fn test_unknown_kind_falls_back_to_card() {
        assert_eq!(GradientKind::parse("sparkles"), GradientKind::Card);
        assert_eq!(GradientKind::parse(" Info "), GradientKind::Info);
        assert_eq!(gradient_stops_for(GradientKind::parse("")).len(), 4);
    }

    #[test]
    fn test_tables_start_and_end_on_the_edges() {
        for kind in [
            GradientKind::Card,
            GradientKind::Modal,
            GradientKind::Info,
            GradientKind::Button,
        ] {
            let stops = gradient_stops_for(kind);
            assert_eq!(stops.first().map(|s| s.offset), Some("0%"));
            assert_eq!(stops.last().map(|s| s.offset), Some("100%"));
        }
    }

    #[test]
    fn test_button_table_order() {
        let colors: Vec<_> = gradient_stops_for(GradientKind::Button)
            .iter()
            .map(|s| s.color)
            .collect();
        assert_eq!(
            colors,
            vec!["#1a1a2e", "#2a2a4e", "#1a1a2e", "#4a2a3e", "#1a1a2e"]
        );
    }
}
