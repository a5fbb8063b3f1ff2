use eframe::egui::Color32;
use crate::config::ThemeName;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub grid_line: Color32,
    pub player_head: Color32,
    pub player_body: Color32,
    pub ai_head: Color32,
    pub ai_body: Color32,
    pub food: Color32,
    pub text: Color32,
    pub overlay: Color32,
    pub dark: bool,
}

impl Palette {
    pub fn for_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Classic => Self {
                background: Color32::from_rgb(0x88, 0xFF, 0x88),
                grid_line: Color32::from_rgb(0x7A, 0xE8, 0x7A),
                player_head: Color32::from_rgb(0x1B, 0x5E, 0x20),
                player_body: Color32::from_rgb(0x2E, 0x7D, 0x32),
                ai_head: Color32::from_rgb(0x0D, 0x47, 0xA1),
                ai_body: Color32::from_rgb(0x19, 0x76, 0xD2),
                food: Color32::from_rgb(0xD3, 0x2F, 0x2F),
                text: Color32::from_rgb(0x21, 0x21, 0x21),
                overlay: Color32::from_rgba_unmultiplied(255, 255, 255, 190),
                dark: false,
            },
            ThemeName::Midnight => Self {
                background: Color32::from_rgb(0x12, 0x14, 0x26),
                grid_line: Color32::from_rgb(0x1E, 0x22, 0x3C),
                player_head: Color32::from_rgb(0xB3, 0xE5, 0xFC),
                player_body: Color32::from_rgb(0x4F, 0xC3, 0xF7),
                ai_head: Color32::from_rgb(0xF8, 0xBB, 0xD0),
                ai_body: Color32::from_rgb(0xF0, 0x62, 0x92),
                food: Color32::from_rgb(0xFF, 0xD5, 0x4F),
                text: Color32::from_rgb(0xE8, 0xEA, 0xF6),
                overlay: Color32::from_rgba_unmultiplied(0, 0, 0, 170),
                dark: true,
            },
            ThemeName::Neon => Self {
                background: Color32::from_rgb(0x0A, 0x0A, 0x0A),
                grid_line: Color32::from_rgb(0x1A, 0x1A, 0x1A),
                player_head: Color32::from_rgb(0xCC, 0xFF, 0x00),
                player_body: Color32::from_rgb(0x39, 0xFF, 0x14),
                ai_head: Color32::from_rgb(0xFF, 0x00, 0xFF),
                ai_body: Color32::from_rgb(0xBC, 0x13, 0xFE),
                food: Color32::from_rgb(0x00, 0xFF, 0xFF),
                text: Color32::WHITE,
                overlay: Color32::from_rgba_unmultiplied(0, 0, 0, 190),
                dark: true,
            },
            ThemeName::Desert => Self {
                background: Color32::from_rgb(0xED, 0xD9, 0xA3),
                grid_line: Color32::from_rgb(0xE0, 0xC9, 0x8E),
                player_head: Color32::from_rgb(0x6D, 0x4C, 0x41),
                player_body: Color32::from_rgb(0x8D, 0x6E, 0x63),
                ai_head: Color32::from_rgb(0xBF, 0x36, 0x0C),
                ai_body: Color32::from_rgb(0xE6, 0x4A, 0x19),
                food: Color32::from_rgb(0x33, 0x69, 0x1E),
                text: Color32::from_rgb(0x3E, 0x27, 0x23),
                overlay: Color32::from_rgba_unmultiplied(255, 248, 225, 200),
                dark: false,
            },
        }
    }

    pub fn confetti(&self) -> [Color32; 5] {
        [
            self.player_head,
            self.player_body,
            self.food,
            Color32::from_rgb(0xFF, 0xC1, 0x07),
            Color32::from_rgb(0xE9, 0x1E, 0x63),
        ]
    }
}
