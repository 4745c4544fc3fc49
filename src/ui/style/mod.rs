//! Colour themes for the terminal interface.

pub mod theme;

pub use theme::Theme;
