// HTML rendering for page decorations.

pub mod card;

pub use card::{emojify, escape_html, render_card};
