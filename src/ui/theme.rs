use crate::color::Rgb;
use crate::inspect::{PaletteMode, StyleClass};
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub string: Color,
    pub boolean: Color,
    pub number: Color,
    pub comment: Color, // Objects and arrays
    pub null: Color,
    pub undefined: Color,
    pub function: Color,
    pub icon: Color,
    pub selection_bg: Color,
    pub focus_outline: Color,
    pub status_bg: Color,
    pub status_key_bg: Color,
}

const fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(12, 41, 69),        // #0c2945
    fg: Color::Rgb(212, 212, 212),     // #d4d4d4
    string: Color::Rgb(206, 145, 120), // #ce9178
    boolean: Color::Rgb(86, 156, 214), // #569cd6
    number: Color::Rgb(181, 206, 168), // #b5cea8
    comment: Color::Rgb(96, 139, 78),  // #608b4e
    null: Color::Rgb(86, 156, 214),
    undefined: Color::Rgb(86, 156, 214),
    function: Color::Rgb(86, 156, 214),
    icon: Color::Rgb(150, 160, 175),
    selection_bg: Color::Rgb(30, 66, 102),
    focus_outline: rgb(FOCUS_OUTLINE),
    status_bg: Color::Rgb(8, 30, 52),
    status_key_bg: Color::Rgb(150, 160, 175),
};

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(255, 255, 255),
    fg: Color::Rgb(0, 0, 0),
    string: Color::Rgb(163, 21, 21), // #a31515
    boolean: Color::Rgb(0, 0, 255),  // #0000ff
    number: Color::Rgb(9, 134, 88),  // #098658
    comment: Color::Rgb(0, 128, 0),  // #008000
    null: Color::Rgb(0, 0, 255),
    undefined: Color::Rgb(0, 0, 255),
    function: Color::Rgb(0, 0, 255),
    icon: Color::Rgb(90, 90, 90),
    selection_bg: Color::Rgb(225, 232, 240),
    focus_outline: rgb(FOCUS_OUTLINE),
    status_bg: Color::Rgb(236, 236, 236),
    status_key_bg: Color::Rgb(90, 90, 90),
};

/// `#333` lightened by 0.3
const FOCUS_OUTLINE: Rgb = Rgb::new(112, 112, 112);

/// Ratio used to derive a swatch border from the swatch color
pub const SWATCH_BORDER_LIGHTEN: f64 = 0.7;

impl Theme {
    pub fn for_mode(mode: PaletteMode) -> &'static Theme {
        match mode {
            PaletteMode::Dark => &DARK_THEME,
            PaletteMode::Light => &LIGHT_THEME,
        }
    }

    /// Foreground for a label's token class. Classes without a palette entry use `fg`.
    pub fn token_color(&self, class: StyleClass) -> Color {
        match class {
            StyleClass::String => self.string,
            StyleClass::Boolean => self.boolean,
            StyleClass::Number => self.number,
            StyleClass::Comment => self.comment,
            StyleClass::Null => self.null,
            StyleClass::Undefined => self.undefined,
            StyleClass::Function => self.function,
            StyleClass::Symbol | StyleClass::BigInt => self.fg,
        }
    }
}
