use iced::Length;

use crate::{
    color,
    component::text,
    theme,
    widget::{text_input, *},
};

/// A form input value together with the validation message to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<&'static str>,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            warning: None,
            valid: true,
        }
    }
}

pub struct Form<'a, Message> {
    label: Option<&'a str>,
    input: TextInput<'a, Message>,
    warning: Option<&'a str>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &'a Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, &value.value).on_input(on_change),
            warning: value.warning,
            valid: value.valid,
        }
    }

    /// Creates a new [`Form`] that has a disabled input.
    pub fn new_disabled(placeholder: &str, value: &'a Value<String>) -> Self {
        Self {
            label: None,
            input: TextInput::new(placeholder, &value.value),
            warning: value.warning,
            valid: value.valid,
        }
    }

    /// Sets the label displayed above the input.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Masks the input value.
    pub fn secure(mut self, secure: bool) -> Self {
        self.input = self.input.secure(secure);
        self
    }

    /// Sets the widget id of the input, used to move the focus.
    pub fn id(mut self, id: text_input::Id) -> Self {
        self.input = self.input.id(id);
        self
    }

    /// Sets the message produced when the user presses Enter in the input.
    pub fn on_submit_maybe(mut self, message: Option<Message>) -> Self {
        if let Some(message) = message {
            self.input = self.input.on_submit(message);
        }
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push_maybe(form.label.map(text::p2_regular))
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).color(color::RED))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_value_is_valid_and_empty() {
        let value = Value::<String>::default();
        assert!(value.value.is_empty());
        assert!(value.valid);
        assert_eq!(value.warning, None);
    }
}
