use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::BACKGROUND,
            },
            text: Text {
                primary: color::TEXT_PRIMARY,
                secondary: color::TEXT_SECONDARY,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: color::BLUE.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::BLUE_DARK,
                        text: color::WHITE,
                        border: color::BLUE_DARK.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::BLUE_DARK,
                        text: color::WHITE,
                        border: color::BLUE_DARK.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_2,
                        text: color::TEXT_PRIMARY,
                        border: color::GREY_2.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::SURFACE,
                        text: color::BLUE,
                        border: color::BLUE.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::LIGHT_BLUE_TINT,
                        text: color::BLUE,
                        border: color::BLUE.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLUE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLUE_DARK,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::SURFACE,
                    text: None,
                    border: color::GREY_2.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::LIGHT_GREEN_TINT,
                    text: color::GREEN.into(),
                    border: Some(color::GREEN),
                },
                error: ContainerPalette {
                    background: color::LIGHT_RED_TINT,
                    text: color::RED.into(),
                    border: Some(color::RED),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::SURFACE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::TEXT_PRIMARY,
                        selection: color::LIGHT_BLUE_TINT,
                        border: Some(color::GREY_3),
                    },
                    disabled: TextInputPalette {
                        background: color::BACKGROUND,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::TEXT_SECONDARY,
                        selection: color::LIGHT_BLUE_TINT,
                        border: Some(color::GREY_2),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::SURFACE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::TEXT_PRIMARY,
                        selection: color::LIGHT_BLUE_TINT,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::BACKGROUND,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::TEXT_SECONDARY,
                        selection: color::LIGHT_BLUE_TINT,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
