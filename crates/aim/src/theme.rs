use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub panel: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub muted: Color32,
    pub danger: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub body_size: f32,
    pub caption_size: f32,
}

impl Theme {
    /// Default campus theme: PSU navy on white.
    pub fn psu() -> Self {
        Self {
            name: "psu".to_string(),
            background: Color32::WHITE,
            panel: Color32::from_rgb(0xF2, 0xF4, 0xF8),
            foreground: Color32::from_rgb(0x20, 0x24, 0x2C),
            heading_color: Color32::from_rgb(0x04, 0x1E, 0x42),
            accent: Color32::from_rgb(0x04, 0x1E, 0x42),
            muted: Color32::from_rgb(0x6B, 0x72, 0x80),
            danger: Color32::from_rgb(0xB3, 0x26, 0x1E),
            h1_size: 30.0,
            h2_size: 22.0,
            body_size: 16.0,
            caption_size: 13.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x15, 0x18, 0x1E),
            panel: Color32::from_rgb(0x1E, 0x23, 0x2C),
            foreground: Color32::from_rgb(0xC8, 0xCD, 0xD4),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x5C, 0x8D, 0xD6),
            muted: Color32::from_rgb(0x7A, 0x82, 0x8E),
            danger: Color32::from_rgb(0xE0, 0x6C, 0x5E),
            h1_size: 30.0,
            h2_size: 22.0,
            body_size: 16.0,
            caption_size: 13.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::psu(),
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}
