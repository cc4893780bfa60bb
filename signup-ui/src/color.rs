use iced::Color;
pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;

pub const BACKGROUND: Color = Color::from_rgb(
    0xF7 as f32 / 255.0,
    0xF8 as f32 / 255.0,
    0xFA as f32 / 255.0,
); // #F7F8FA

pub const SURFACE: Color = WHITE;

pub const TEXT_PRIMARY: Color = Color::from_rgb(
    0x1B as f32 / 255.0,
    0x1F as f32 / 255.0,
    0x24 as f32 / 255.0,
); // #1B1F24

pub const TEXT_SECONDARY: Color = Color::from_rgb(
    0x5E as f32 / 255.0,
    0x66 as f32 / 255.0,
    0x70 as f32 / 255.0,
); // #5E6670

pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);

pub const GREY_3: Color = Color::from_rgb(
    0xA5 as f32 / 255.0,
    0xA5 as f32 / 255.0,
    0xA5 as f32 / 255.0,
);

pub const BLUE: Color = Color::from_rgb(
    0x1F as f32 / 255.0,
    0x6F as f32 / 255.0,
    0xEB as f32 / 255.0,
); // #1F6FEB

pub const BLUE_DARK: Color = Color::from_rgb(
    0x17 as f32 / 255.0,
    0x55 as f32 / 255.0,
    0xB8 as f32 / 255.0,
); // #1755B8

pub const LIGHT_BLUE_TINT: Color = Color::from_rgb(
    0xE8 as f32 / 255.0,
    0xF0 as f32 / 255.0,
    0xFD as f32 / 255.0,
); // #E8F0FD

pub const GREEN: Color = Color::from_rgb(
    0x1A as f32 / 255.0,
    0x7F as f32 / 255.0,
    0x37 as f32 / 255.0,
); // #1A7F37

pub const LIGHT_GREEN_TINT: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xF4 as f32 / 255.0,
    0xEA as f32 / 255.0,
); // #E6F4EA

pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);

pub const LIGHT_RED_TINT: Color = Color::from_rgb(
    0xFD as f32 / 255.0,
    0xEC as f32 / 255.0,
    0xE6 as f32 / 255.0,
); // #FDECE6
