//! Headless surface that records draw calls

use super::RenderSurface;

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
    },
}

/// Keeps every command issued since the last clear
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Number of frames started (clear calls seen)
    pub frames: u64,
}

impl RecordingSurface {
    /// Ball circle of the most recent frame
    pub fn last_circle(&self) -> Option<(f32, f32, f32)> {
        self.commands.iter().rev().find_map(|c| match *c {
            DrawCommand::Circle { cx, cy, radius } => Some((cx, cy, radius)),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.commands.push(DrawCommand::Circle { cx, cy, radius });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}
