//! Color theme shared by the demos.
//!
//! A `Theme` is built once at startup from the configured variant and handed
//! to each program, which passes it by reference into its render code.

use ratatui::style::{Color, Modifier, Style};
use weather_core::ThemeVariant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub body: Color,
    pub accent: Color,
    pub brand: Color,
    pub highlight: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
    pub card_border: Color,
    pub info_border: Color,
    pub error_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        let brand = Color::Rgb(0xFF, 0x5C, 0x00);
        Self {
            body: Color::Rgb(0x88, 0x90, 0x96),
            accent: Color::Rgb(0xFF, 0xFF, 0xFF),
            brand,
            highlight: brand,
            error: Color::Indexed(203),
            info: Color::Rgb(0x00, 0xBA, 0xFE),
            muted: Color::Indexed(240),
            card_border: Color::Rgb(0x60, 0x5D, 0xFF),
            info_border: Color::Rgb(0x00, 0xBA, 0xFE),
            error_border: Color::Rgb(0xFF, 0x62, 0x7D),
        }
    }

    pub fn light() -> Self {
        let brand = Color::Rgb(0xFF, 0x5C, 0x00);
        Self {
            body: Color::Rgb(0x88, 0x90, 0x96),
            accent: Color::Rgb(0x11, 0x18, 0x1C),
            brand,
            highlight: brand,
            error: Color::Indexed(203),
            info: Color::Rgb(0x04, 0x2E, 0x49),
            muted: Color::Indexed(245),
            card_border: Color::Rgb(0x42, 0x2A, 0xD5),
            info_border: Color::Rgb(0x04, 0x2E, 0x49),
            error_border: Color::Rgb(0x4D, 0x02, 0x18),
        }
    }

    pub fn text_body(&self) -> Style {
        Style::default().fg(self.body)
    }

    pub fn text_accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn text_brand(&self) -> Style {
        Style::default().fg(self.brand)
    }

    pub fn text_highlight(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    pub fn text_error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn text_info(&self) -> Style {
        Style::default().fg(self.info)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Filled panel for failures: error background, accent text.
    pub fn panel_error(&self) -> Style {
        Style::default().bg(self.error).fg(self.accent)
    }

    /// Location header on the weather card.
    pub fn header(&self) -> Style {
        self.text_accent().add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_selects_palette() {
        assert_eq!(Theme::new(ThemeVariant::Dark), Theme::dark());
        assert_eq!(Theme::new(ThemeVariant::Light), Theme::light());
        assert_ne!(Theme::dark().accent, Theme::light().accent);
    }

    #[test]
    fn brand_is_shared_across_variants() {
        assert_eq!(Theme::dark().brand, Theme::light().brand);
        assert_eq!(Theme::dark().text_brand().fg, Some(Color::Rgb(0xFF, 0x5C, 0x00)));
    }

    #[test]
    fn error_panel_fills_with_error_color() {
        let light = Theme::light();
        let style = light.panel_error();

        assert_eq!(style.bg, Some(light.error));
        assert_eq!(style.fg, Some(Color::Rgb(0x11, 0x18, 0x1C)));
    }
}
