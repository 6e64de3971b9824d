use serde::Serialize;

use crate::discord::embed::{Color, Embed, Field};

/// Initial values of a fresh [`Notification`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDefaults {
    pub content: String,
    pub color: Color,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            content: String::from("New form submission!"),
            color: Color::BLACK,
        }
    }
}

/// Outcome of [`Notification::set_color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorStatus {
    Accepted(Color),
    /// The input was not `#RRGGBB`; black was used instead.
    Defaulted { input: String },
}

impl ColorStatus {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    title: String,
    content: String,
    color: Color,
    fields: Vec<Field>,
}

/// Borrowed wire representation of a [`Notification`].
#[derive(Debug, Clone, Serialize)]
pub struct Payload<'a> {
    pub content: &'a str,
    pub embeds: [Embed<'a>; 1],
}

impl Default for Notification {
    fn default() -> Self {
        Self::with_defaults(NotificationDefaults::default())
    }
}

impl Notification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_defaults(defaults: NotificationDefaults) -> Self {
        Self {
            title: String::new(),
            content: defaults.content,
            color: defaults.color,
            fields: Vec::new(),
        }
    }

    /// Sets the embed color from a `#RRGGBB` string.
    ///
    /// Malformed input never fails the notification: a warning is logged
    /// and the color falls back to black.
    pub fn set_color(&mut self, hex: &str) -> ColorStatus {
        match Color::from_hex(hex) {
            Ok(color) => {
                self.color = color;
                ColorStatus::Accepted(color)
            }
            Err(e) => {
                log::warn!("{e}. Using default color #000000.");
                self.color = Color::BLACK;
                ColorStatus::Defaulted { input: e.input }
            }
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn build(&self) -> Payload<'_> {
        let embed = Embed {
            title: &self.title,
            color: self.color,
            fields: &self.fields,
        };
        Payload {
            content: &self.content,
            embeds: [embed],
        }
    }
}

impl Payload<'_> {
    /// # Errors
    /// Only if `serde_json` fails to write to its in-memory buffer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
