use coolor::{Hsl, Rgb};
use ratatui::style::Color;

pub struct ColorConverter;

impl ColorConverter {
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = to_rgb(color);
        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Same hue as `color` at the given lightness and saturation.
    #[must_use]
    pub fn tint(color: Color, lightness: f32, saturation: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.l = lightness;
        hsl.s = saturation;
        Self::to_ratatui(hsl)
    }

    /// Black or white, whichever reads better on `background`.
    #[must_use]
    pub fn readable_on(background: Color) -> Color {
        if Self::to_hsl(background).l > 0.55 {
            Color::Black
        } else {
            Color::White
        }
    }
}

fn to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (170, 0, 0),
        Color::Green => (0, 170, 0),
        Color::Yellow => (170, 85, 0),
        Color::Blue => (0, 0, 170),
        Color::Magenta => (170, 0, 170),
        Color::Cyan => (0, 170, 170),
        Color::Gray => (170, 170, 170),
        Color::DarkGray => (85, 85, 85),
        Color::LightRed => (255, 85, 85),
        Color::LightGreen => (85, 255, 85),
        Color::LightYellow => (255, 255, 85),
        Color::LightBlue => (85, 85, 255),
        Color::LightMagenta => (255, 85, 255),
        Color::LightCyan => (85, 255, 255),
        Color::Indexed(i) => ansi_to_rgb(i),
        _ => (255, 255, 255),
    }
}

fn ansi_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => {
            const BASE: [(u8, u8, u8); 16] = [
                (0, 0, 0),
                (170, 0, 0),
                (0, 170, 0),
                (170, 85, 0),
                (0, 0, 170),
                (170, 0, 170),
                (0, 170, 170),
                (170, 170, 170),
                (85, 85, 85),
                (255, 85, 85),
                (85, 255, 85),
                (255, 255, 85),
                (85, 85, 255),
                (255, 85, 255),
                (85, 255, 255),
                (255, 255, 255),
            ];
            BASE[usize::from(i)]
        }
        16..=231 => {
            let i = i - 16;
            let map = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (map((i / 36) % 6), map((i / 6) % 6), map(i % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_round_trip() {
        let original = Color::Rgb(76, 175, 80);
        let back = ColorConverter::to_ratatui(ColorConverter::to_hsl(original));

        let Color::Rgb(r, g, b) = back else {
            panic!("expected RGB color");
        };
        assert!((i16::from(r) - 76).abs() <= 1);
        assert!((i16::from(g) - 175).abs() <= 1);
        assert!((i16::from(b) - 80).abs() <= 1);
    }

    #[test]
    fn test_ansi_256_cube() {
        assert_eq!(ansi_to_rgb(208), (255, 135, 0));
        assert_eq!(ansi_to_rgb(16), (0, 0, 0));
        assert_eq!(ansi_to_rgb(231), (255, 255, 255));
        assert_eq!(ansi_to_rgb(232), (8, 8, 8));
    }

    #[test]
    fn test_readable_foreground() {
        assert_eq!(ColorConverter::readable_on(Color::Rgb(250, 250, 250)), Color::Black);
        assert_eq!(ColorConverter::readable_on(Color::Rgb(20, 20, 40)), Color::White);
    }

    #[test]
    fn test_tint_keeps_hue_darkens() {
        let dark = ColorConverter::tint(Color::Rgb(76, 175, 80), 0.1, 0.5);
        let Color::Rgb(r, g, b) = dark else {
            panic!("expected RGB color");
        };
        assert!(g > r && g > b);
        assert!(g < 60);
    }
}
