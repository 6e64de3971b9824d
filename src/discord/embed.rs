mod color;
mod field;

use serde::Serialize;

pub use color::{Color, InvalidColor};
pub use field::Field;

#[derive(Debug, Clone, Serialize)]
pub struct Embed<'a> {
    pub title: &'a str,
    pub color: Color,
    pub fields: &'a [Field],
}
