//! Render command emission.
//!
//! The widget never draws; it pushes [`RenderCommand`]s into a
//! [`CommandBuffer`] each frame and the host renderer interprets them.
//! Hosts that upload geometry directly can flatten paths into [`Vertex`]
//! fans instead.

use crate::layout::{Point, Rect};
use crate::shape::PathCommand;
use crate::style::Color;

/// An offset-zero soft shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Color,
    /// Blur radius in logical pixels.
    pub radius: f32,
    /// Shadow opacity in `[0, 1]`.
    pub opacity: f32,
}

/// A drawing instruction for the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rounded rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Filled vector path in local coordinates.
    Path {
        /// Path commands, relative to `origin`.
        commands: Vec<PathCommand>,
        /// Screen position of the path's local origin.
        origin: Point,
        /// Fill color.
        fill: Color,
        /// Optional soft shadow.
        shadow: Option<Shadow>,
    },
    /// An icon inside a rounded, optionally shadowed plate.
    Icon {
        /// Bounds of the icon plate (scale already applied).
        bounds: Rect,
        /// Icon ID in the host's atlas.
        icon_id: u32,
        /// Tint for the glyph, if any.
        tint: Option<Color>,
        /// Plate background color.
        background: Color,
        /// Plate corner radius.
        corner_radius: f32,
        /// Optional soft shadow.
        shadow: Option<Shadow>,
        /// Opacity multiplier in `[0, 1]`.
        alpha: f32,
    },
}

/// Collects the commands for one frame.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<RenderCommand>,
}

impl CommandBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    /// Begins a new frame, dropping last frame's commands.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Adds a command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Returns this frame's commands in submission order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the number of queued commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Gives mutable access to the underlying vector for widget emission.
    pub fn as_mut_vec(&mut self) -> &mut Vec<RenderCommand> {
        &mut self.commands
    }
}

/// Vertex for hosts that upload tessellated geometry.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl Vertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }

    /// Triangulates a convex-ish polygon outline into a triangle fan.
    ///
    /// Returns three vertices per triangle, all carrying the fill color.
    #[must_use]
    pub fn fan(outline: &[Point], color: Color) -> Vec<Self> {
        if outline.len() < 3 {
            return Vec::new();
        }
        let rgba = color.to_array();
        let anchor = outline[0];
        let mut vertices = Vec::with_capacity((outline.len() - 2) * 3);
        for pair in outline[1..].windows(2) {
            vertices.push(Self::new(anchor.x, anchor.y, 0.0, 0.0, rgba));
            vertices.push(Self::new(pair[0].x, pair[0].y, 0.0, 0.0, rgba));
            vertices.push(Self::new(pair[1].x, pair[1].y, 0.0, 0.0, rgba));
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_frame_cycle() {
        let mut buffer = CommandBuffer::new();
        buffer.push(RenderCommand::Rect {
            bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
            color: Color::WHITE,
            corner_radius: 2.0,
        });
        assert_eq!(buffer.len(), 1);

        buffer.begin_frame();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_fan_triangulation() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let vertices = Vertex::fan(&square, Color::WHITE);
        // 4 outline points -> 2 triangles -> 6 vertices.
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [0.0, 0.0]);
    }
}
