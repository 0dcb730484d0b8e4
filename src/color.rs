use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Named marker colours
// ---------------------------------------------------------------------------

/// Marker colour given to every country.
pub const DEFAULT_MARKER_COLOR: &str = "orange";

/// Resolve a CSS/SVG colour name, falling back to gray for unknown names.
pub fn named_color(name: &str) -> Srgb<u8> {
    palette::named::from_str(name).unwrap_or(palette::named::GRAY)
}

// ---------------------------------------------------------------------------
// Conversion to egui
// ---------------------------------------------------------------------------

/// Convert a marker colour and opacity into an egui colour.
pub fn to_color32(color: Srgb<u8>, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.red, color.green, color.blue, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orange_resolves_by_name() {
        assert_eq!(named_color("orange"), Srgb::new(255u8, 165, 0));
        assert_eq!(named_color("not-a-colour"), palette::named::GRAY);
    }

    #[test]
    fn opaque_marker_keeps_its_rgb() {
        let c = to_color32(named_color("orange"), 1.0);
        assert_eq!(c, Color32::from_rgb(255, 165, 0));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(to_color32(Srgb::new(0, 0, 0), 2.0).a(), 255);
        assert_eq!(to_color32(Srgb::new(0, 0, 0), -1.0).a(), 0);
    }
}
