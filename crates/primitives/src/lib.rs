//! Core value types for the result viewer: cursor positions, tokens under the
//! cursor, and the fragments overlay providers render.

/// Renderable overlay content.
pub mod fragment;
/// Cursor positions within displayed text.
pub mod position;
/// Tokens reported by the widget for hover queries.
pub mod token;

pub use fragment::Fragment;
pub use position::{ParsePositionError, Position};
pub use token::{Token, TokenKind};
