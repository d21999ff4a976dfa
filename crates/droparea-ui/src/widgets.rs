//! Widget system for UI components.

use crate::color::Color;
use crate::draw_list::{DrawCommand, QuadCommand, TextCommand};
use crate::style::Style;
use crate::tree::LayoutRect;
use droparea_core::math::Vec2;
use std::any::Any;

/// Approximate glyph advance as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Base trait for all UI widgets.
pub trait Widget: Any {
    /// Get widget type as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get mutable widget type as Any for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Get the style for this widget.
    fn style(&self) -> &Style;

    /// Get mutable style for this widget.
    fn style_mut(&mut self) -> &mut Style;

    /// Get the widget's name for debugging.
    fn debug_name(&self) -> &str {
        "Widget"
    }

    /// Measure content size for layout (for intrinsic sizing).
    fn measure(&self, _available_space: Vec2) -> Vec2 {
        Vec2::ZERO
    }

    /// Produce draw commands for this widget at its absolute bounds.
    ///
    /// The default paints the style's background and border.
    fn draw(&self, bounds: LayoutRect, z_index: u16) -> Vec<DrawCommand> {
        style_commands(self.style(), bounds, z_index)
    }

    /// Clone the widget into a box.
    fn clone_box(&self) -> Box<dyn Widget>;
}

impl Clone for Box<dyn Widget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Background and border commands for a styled box.
pub fn style_commands(style: &Style, bounds: LayoutRect, z_index: u16) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    if let Some(background) = style.background_color {
        commands.push(DrawCommand::Quad(QuadCommand::rounded(
            bounds.position(),
            bounds.size(),
            background,
            style.border_radius,
            z_index,
        )));
    }

    if style.has_border()
        && let Some(border_color) = style.border_color
    {
        commands.push(DrawCommand::Quad(
            QuadCommand::bordered(
                bounds.position(),
                bounds.size(),
                border_color,
                style.border_width,
                style.border_radius,
                z_index,
            )
            .with_border_style(style.border_style),
        ));
    }

    commands
}

/// Container widget - holds other widgets with flexbox layout.
#[derive(Clone)]
pub struct Container {
    pub style: Style,
}

impl Container {
    pub fn new() -> Self {
        Self {
            style: Style::new().display(taffy::Display::Flex),
        }
    }

    pub fn with_style(style: Style) -> Self {
        Self { style }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn debug_name(&self) -> &str {
        "Container"
    }

    fn clone_box(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// Text widget - a single-line label.
///
/// Measured with a fixed advance per character; shaping is left to the
/// rendering backend that consumes the draw list.
#[derive(Clone)]
pub struct Text {
    pub content: String,
    pub font_size: f32,
    pub color: Color,
    pub style: Style,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: 16.0,
            color: Color::BLACK,
            style: Style::new(),
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text content. Returns true if it changed.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        if self.content == content {
            return false;
        }
        self.content = content;
        true
    }
}

impl Widget for Text {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn debug_name(&self) -> &str {
        "Text"
    }

    fn measure(&self, available_space: Vec2) -> Vec2 {
        let width = self.content.chars().count() as f32 * self.font_size * CHAR_WIDTH_FACTOR;
        Vec2::new(
            width.min(available_space.x),
            self.font_size * LINE_HEIGHT_FACTOR,
        )
    }

    fn draw(&self, bounds: LayoutRect, z_index: u16) -> Vec<DrawCommand> {
        let mut commands = style_commands(&self.style, bounds, z_index);
        if !self.content.is_empty() {
            commands.push(DrawCommand::Text(TextCommand::new(
                bounds.position(),
                self.content.clone(),
                self.font_size,
                self.color,
                z_index,
            )));
        }
        commands
    }

    fn clone_box(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BorderStyle;

    #[test]
    fn test_text_measure() {
        let text = Text::new("abcd").size(10.0);
        let size = text.measure(Vec2::new(f32::MAX, f32::MAX));
        assert!((size.x - 24.0).abs() < 1e-4);
        assert!((size.y - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_text_measure_clamps_to_available_width() {
        let text = Text::new("a long settings label").size(20.0);
        let size = text.measure(Vec2::new(50.0, 100.0));
        assert_eq!(size.x, 50.0);
    }

    #[test]
    fn test_set_content_reports_change() {
        let mut text = Text::new("a");
        assert!(!text.set_content("a"));
        assert!(text.set_content("b"));
        assert_eq!(text.content(), "b");
    }

    #[test]
    fn test_plain_container_draws_nothing() {
        let container = Container::new();
        assert!(container.draw(LayoutRect::new(0.0, 0.0, 10.0, 10.0), 0).is_empty());
    }

    #[test]
    fn test_style_commands_background_then_border() {
        let style = Style::new()
            .background_color(Color::WHITE)
            .border_color(Color::BLACK)
            .border_width(2.0)
            .border_style(BorderStyle::dashed());
        let commands = style_commands(&style, LayoutRect::new(0.0, 0.0, 10.0, 10.0), 1);

        assert_eq!(commands.len(), 2);
        match &commands[1] {
            DrawCommand::Quad(q) => {
                assert_eq!(q.border_thickness, 2.0);
                assert!(q.border_style.is_dashed());
                assert_eq!(q.z_index, 1);
            }
            other => panic!("expected border quad, got {:?}", other),
        }
    }
}
