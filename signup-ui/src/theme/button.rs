use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn link(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.link, status)
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => styled(&p.active),
        Status::Hovered => styled(&p.hovered),
        Status::Pressed => styled(p.pressed.as_ref().unwrap_or(&p.active)),
        Status::Disabled => {
            let style = styled(p.disabled.as_ref().unwrap_or(&p.active));
            Style {
                text_color: Color {
                    a: 0.4,
                    ..style.text_color
                },
                ..style
            }
        }
    }
}

fn styled(p: &ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: if let Some(color) = p.border {
            Border {
                radius: 25.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border::default()
        },
        ..Default::default()
    }
}
