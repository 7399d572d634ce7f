use ratatui::style::Color;

/// Color pair for a tag pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStyle {
    pub background: Color,
    pub text: Color,
}

/// Fixed palette for one theme variant. Every themed style on the screen is
/// derived from this record; toggling rebuilds it from the flipped flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    pub background: Color,
    pub card_background: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub border: Color,
    pub shadow: Color,
    pub modal_overlay: Color,
    pub quote_background: Color,
    pub date_item_background: Color,
    pub primary: Color,
    pub success: Color,
    pub surface: Color,
    pub icon_tint: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            dark: false,
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            card_background: Color::Rgb(0xFF, 0xFF, 0xFF),
            text_primary: Color::Rgb(0x33, 0x33, 0x33),
            text_secondary: Color::Rgb(0x66, 0x66, 0x66),
            text_tertiary: Color::Rgb(0x77, 0x77, 0x77),
            border: Color::Rgb(0xE0, 0xE0, 0xE0),
            shadow: Color::Rgb(0x00, 0x00, 0x00),
            modal_overlay: Color::Rgb(0x80, 0x80, 0x80),
            quote_background: Color::Rgb(0xF8, 0xF9, 0xFF),
            date_item_background: Color::Rgb(0xF1, 0xF1, 0xF1),
            primary: Color::Rgb(0x3F, 0x51, 0xB5),
            success: Color::Rgb(0x4C, 0xAF, 0x50),
            surface: Color::Rgb(0xFA, 0xFA, 0xFA),
            icon_tint: Color::Rgb(0x66, 0x66, 0x66),
        }
    }

    pub fn dark() -> Self {
        Theme {
            dark: true,
            background: Color::Rgb(0x12, 0x12, 0x12),
            card_background: Color::Rgb(0x1E, 0x1E, 0x1E),
            text_primary: Color::Rgb(0xFF, 0xFF, 0xFF),
            text_secondary: Color::Rgb(0xB0, 0xB0, 0xB0),
            text_tertiary: Color::Rgb(0x88, 0x88, 0x88),
            border: Color::Rgb(0x33, 0x33, 0x33),
            shadow: Color::Rgb(0x00, 0x00, 0x00),
            modal_overlay: Color::Rgb(0x04, 0x04, 0x04),
            quote_background: Color::Rgb(0x2A, 0x2A, 0x2A),
            date_item_background: Color::Rgb(0x2A, 0x2A, 0x2A),
            primary: Color::Rgb(0x5C, 0x6B, 0xC0),
            success: Color::Rgb(0x66, 0xBB, 0x6A),
            surface: Color::Rgb(0x2A, 0x2A, 0x2A),
            icon_tint: Color::Rgb(0xB0, 0xB0, 0xB0),
        }
    }

    /// Pure mapping from the theme flag to a palette.
    pub fn from_flag(dark: bool) -> Self {
        if dark { Theme::dark() } else { Theme::light() }
    }

    /// The palette with the flag flipped.
    pub fn toggled(&self) -> Self {
        Theme::from_flag(!self.dark)
    }

    /// Style pair for a tag label. Exact-match lookup with a neutral default
    /// for unknown labels; the table variant follows the theme flag.
    pub fn tag_style(&self, label: &str) -> TagStyle {
        fn pair(bg: (u8, u8, u8), fg: (u8, u8, u8)) -> TagStyle {
            TagStyle {
                background: Color::Rgb(bg.0, bg.1, bg.2),
                text: Color::Rgb(fg.0, fg.1, fg.2),
            }
        }

        if self.dark {
            match label {
                "Habit" => pair((0x1A, 0x23, 0x7E), (0x64, 0xB5, 0xF6)),
                "Work" => pair((0x4A, 0x14, 0x8C), (0xCE, 0x93, 0xD8)),
                "Must" => pair((0xB7, 0x1C, 0x1C), (0xEF, 0x53, 0x50)),
                "Important" => pair((0xE6, 0x51, 0x00), (0xFF, 0xB7, 0x4D)),
                "Task" => pair((0x1B, 0x5E, 0x20), (0x81, 0xC7, 0x84)),
                _ => pair((0x33, 0x33, 0x33), (0xB0, 0xB0, 0xB0)),
            }
        } else {
            match label {
                "Habit" => pair((0xE3, 0xF2, 0xFD), (0x19, 0x76, 0xD2)),
                "Work" => pair((0xF3, 0xE5, 0xF5), (0x7B, 0x1F, 0xA2)),
                "Must" => pair((0xFF, 0xEB, 0xEE), (0xD3, 0x2F, 0x2F)),
                "Important" => pair((0xFF, 0xF3, 0xE0), (0xF5, 0x7C, 0x00)),
                "Task" => pair((0xE8, 0xF5, 0xE8), (0x38, 0x8E, 0x3C)),
                _ => pair((0xF5, 0xF5, 0xF5), (0x61, 0x61, 0x61)),
            }
        }
    }
}
