//! Terminal styling for menu and command output.

use serde::{Deserialize, Serialize};

use crate::types::GraphError;

const RESET: &str = "\x1b[0m";

/// Escape sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Basic ANSI foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }
}

/// What kind of outcome a message reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
}

/// Output style. Owned by the caller and passed to whatever renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Emit ANSI color codes at all.
    pub color: bool,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: true,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Blue,
        }
    }
}

impl Style {
    /// Style that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    pub fn color_for(&self, tone: Tone) -> Color {
        match tone {
            Tone::Success => self.success,
            Tone::Error => self.error,
            Tone::Warning => self.warning,
            Tone::Info => self.info,
        }
    }

    /// Wrap `message` in the color for `tone`.
    pub fn paint(&self, tone: Tone, message: &str) -> String {
        if self.color {
            format!("{}{message}{RESET}", self.color_for(tone).code())
        } else {
            message.to_string()
        }
    }
}

/// User-facing text for an engine error.
pub fn describe(err: &GraphError) -> String {
    match err {
        GraphError::AlreadyExists(id) => format!("Node {id} already exists!"),
        GraphError::NotFound(_) => "Node does not exist!".to_string(),
        GraphError::NodeMissing { .. } => "One or both nodes do not exist!".to_string(),
        other => format!("{other}!"),
    }
}
