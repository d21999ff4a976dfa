//! Retained draw list for UI rendering.
//!
//! The draw list is backend-agnostic: it records what each node paints
//! (quads and text) in screen space and leaves encoding to the consumer.
//! It tracks which nodes contribute which commands so a single node can be
//! replaced or removed without rebuilding everything.

use crate::color::Color;
use crate::style::BorderStyle;
use crate::tree::NodeId;
use droparea_core::alloc::HashMap;
use droparea_core::math::Vec2;
use droparea_core::profiling::profile_function;

/// High-level draw command for a UI element.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a filled or bordered rectangle
    Quad(QuadCommand),
    /// Draw a run of text
    Text(TextCommand),
}

impl DrawCommand {
    /// Get the node ID that owns this command.
    pub fn node_id(&self) -> NodeId {
        match self {
            DrawCommand::Quad(q) => q.node_id,
            DrawCommand::Text(t) => t.node_id,
        }
    }

    /// Get the z-index for sorting.
    pub fn z_index(&self) -> u16 {
        match self {
            DrawCommand::Quad(q) => q.z_index,
            DrawCommand::Text(t) => t.z_index,
        }
    }

    /// Set the node ID for this command.
    pub fn set_node_id(&mut self, node_id: NodeId) {
        match self {
            DrawCommand::Quad(q) => q.node_id = node_id,
            DrawCommand::Text(t) => t.node_id = node_id,
        }
    }

    pub fn as_quad(&self) -> Option<&QuadCommand> {
        match self {
            DrawCommand::Quad(q) => Some(q),
            DrawCommand::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextCommand> {
        match self {
            DrawCommand::Text(t) => Some(t),
            DrawCommand::Quad(_) => None,
        }
    }
}

/// Command to draw a quad (rectangle).
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCommand {
    /// Node that owns this command
    pub node_id: NodeId,
    /// Position in screen space
    pub position: Vec2,
    /// Size of the quad
    pub size: Vec2,
    /// Fill or border color
    pub color: Color,
    /// Border radius for rounded corners (0 = sharp)
    pub border_radius: f32,
    /// Border thickness (0 = filled, >0 = outline)
    pub border_thickness: f32,
    /// Stroke pattern for outlines
    pub border_style: BorderStyle,
    /// Z-index for depth sorting
    pub z_index: u16,
}

impl QuadCommand {
    /// Create a new filled quad command.
    pub fn filled(position: Vec2, size: Vec2, color: Color, z_index: u16) -> Self {
        Self::rounded(position, size, color, 0.0, z_index)
    }

    /// Create a new rounded quad command.
    pub fn rounded(
        position: Vec2,
        size: Vec2,
        color: Color,
        border_radius: f32,
        z_index: u16,
    ) -> Self {
        Self {
            node_id: NodeId(0), // Will be set by DrawList
            position,
            size,
            color,
            border_radius,
            border_thickness: 0.0,
            border_style: BorderStyle::Solid,
            z_index,
        }
    }

    /// Create a new bordered quad command.
    pub fn bordered(
        position: Vec2,
        size: Vec2,
        color: Color,
        border_thickness: f32,
        border_radius: f32,
        z_index: u16,
    ) -> Self {
        Self {
            node_id: NodeId(0), // Will be set by DrawList
            position,
            size,
            color,
            border_radius,
            border_thickness,
            border_style: BorderStyle::Solid,
            z_index,
        }
    }

    pub fn with_border_style(mut self, border_style: BorderStyle) -> Self {
        self.border_style = border_style;
        self
    }

    /// Outline rather than fill.
    pub fn is_outline(&self) -> bool {
        self.border_thickness > 0.0
    }
}

/// Command to draw a run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    /// Node that owns this command
    pub node_id: NodeId,
    /// Top-left position in screen space
    pub position: Vec2,
    pub content: String,
    pub font_size: f32,
    pub color: Color,
    /// Z-index for depth sorting
    pub z_index: u16,
}

impl TextCommand {
    /// Create a new text command.
    pub fn new(
        position: Vec2,
        content: impl Into<String>,
        font_size: f32,
        color: Color,
        z_index: u16,
    ) -> Self {
        Self {
            node_id: NodeId(0), // Will be set by DrawList
            position,
            content: content.into(),
            font_size,
            color,
            z_index,
        }
    }
}

/// Retained draw list.
///
/// Maintains a list of draw commands and tracks which nodes contribute
/// which commands. Replaced and removed commands are compacted away on the
/// next [`DrawList::sort_if_needed`].
pub struct DrawList {
    /// All draw commands in the list
    commands: Vec<DrawCommand>,
    /// Mapping from node ID to command indices
    node_to_commands: HashMap<NodeId, Vec<usize>>,
    /// Whether the list needs compaction and re-sorting
    needs_sort: bool,
    /// Total number of updates since creation
    update_count: u64,
}

impl DrawList {
    /// Create a new empty draw list.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            node_to_commands: HashMap::new(),
            needs_sort: false,
            update_count: 0,
        }
    }

    /// Create a draw list with initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            node_to_commands: HashMap::with_capacity(capacity / 2),
            needs_sort: false,
            update_count: 0,
        }
    }

    /// Update commands for a node.
    ///
    /// Replaces all existing commands for the node with the new ones.
    pub fn update_node(&mut self, node_id: NodeId, new_commands: Vec<DrawCommand>) {
        self.update_count += 1;
        self.needs_sort = true;

        if new_commands.is_empty() {
            self.node_to_commands.remove(&node_id);
            return;
        }

        let mut new_indices = Vec::with_capacity(new_commands.len());
        for mut cmd in new_commands {
            cmd.set_node_id(node_id);
            new_indices.push(self.commands.len());
            self.commands.push(cmd);
        }

        // Old indices become unreachable and are dropped by compact()
        self.node_to_commands.insert(node_id, new_indices);
    }

    /// Remove all commands for a node.
    pub fn remove_node(&mut self, node_id: NodeId) {
        if self.node_to_commands.remove(&node_id).is_some() {
            self.needs_sort = true;
            self.update_count += 1;
        }
    }

    /// Compact and sort commands by z-index.
    ///
    /// The sort is stable, so commands with equal z-index keep insertion order.
    pub fn sort_if_needed(&mut self) {
        profile_function!();

        if !self.needs_sort {
            return;
        }

        self.compact();
        self.commands.sort_by_key(|cmd| cmd.z_index());
        self.rebuild_node_mapping();

        self.needs_sort = false;
    }

    /// Whether commands were added or removed since the last sort.
    pub fn needs_sort(&self) -> bool {
        self.needs_sort
    }

    /// Compact the command list by removing invalidated entries.
    fn compact(&mut self) {
        let mut valid_indices: Vec<usize> = self
            .node_to_commands
            .values()
            .flat_map(|indices| indices.iter().copied())
            .collect();

        if valid_indices.len() == self.commands.len() {
            return;
        }

        valid_indices.sort_unstable();
        valid_indices.dedup();

        let mut new_commands = Vec::with_capacity(valid_indices.len());
        for idx in valid_indices {
            if let Some(cmd) = self.commands.get(idx) {
                new_commands.push(cmd.clone());
            }
        }

        self.commands = new_commands;
    }

    /// Rebuild node-to-command mapping after sorting/compacting.
    fn rebuild_node_mapping(&mut self) {
        self.node_to_commands.clear();
        for (idx, cmd) in self.commands.iter().enumerate() {
            self.node_to_commands
                .entry(cmd.node_id())
                .or_default()
                .push(idx);
        }
    }

    /// Get all commands for rendering.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands currently owned by a node.
    pub fn commands_for(&self, node_id: NodeId) -> Vec<&DrawCommand> {
        self.node_to_commands
            .get(&node_id)
            .map(|indices| {
                indices
                    .iter()
                    .filter_map(|&idx| self.commands.get(idx))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Clear the entire draw list.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.node_to_commands.clear();
        self.needs_sort = false;
    }

    /// Get the number of commands in the list.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the draw list is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of nodes that contribute at least one command.
    pub fn node_count(&self) -> usize {
        self.node_to_commands.len()
    }

    /// Total number of updates since creation.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(color: Color, z_index: u16) -> DrawCommand {
        DrawCommand::Quad(QuadCommand::filled(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 50.0),
            color,
            z_index,
        ))
    }

    #[test]
    fn test_update_sets_node_id() {
        let mut draw_list = DrawList::new();
        draw_list.update_node(NodeId(7), vec![quad(Color::WHITE, 0)]);

        assert_eq!(draw_list.len(), 1);
        assert_eq!(draw_list.commands()[0].node_id(), NodeId(7));
    }

    #[test]
    fn test_update_replaces_commands_after_sort() {
        let mut draw_list = DrawList::new();
        let node_id = NodeId(1);

        draw_list.update_node(node_id, vec![quad(Color::WHITE, 0)]);
        draw_list.update_node(node_id, vec![quad(Color::RED, 0)]);

        // Stale command is still present until compaction
        assert_eq!(draw_list.len(), 2);

        draw_list.sort_if_needed();
        assert_eq!(draw_list.len(), 1);
        assert_eq!(draw_list.commands_for(node_id)[0].as_quad().unwrap().color, Color::RED);
    }

    #[test]
    fn test_remove_node_compacts() {
        let mut draw_list = DrawList::new();
        draw_list.update_node(NodeId(1), vec![quad(Color::WHITE, 0)]);
        draw_list.update_node(NodeId(2), vec![quad(Color::RED, 0)]);
        draw_list.sort_if_needed();

        draw_list.remove_node(NodeId(1));
        assert!(draw_list.needs_sort());
        draw_list.sort_if_needed();

        assert_eq!(draw_list.len(), 1);
        assert_eq!(draw_list.commands()[0].node_id(), NodeId(2));
        assert_eq!(draw_list.node_count(), 1);
    }

    #[test]
    fn test_sort_is_stable_by_z_index() {
        let mut draw_list = DrawList::new();
        draw_list.update_node(NodeId(1), vec![quad(Color::WHITE, 2)]);
        draw_list.update_node(NodeId(2), vec![quad(Color::RED, 0)]);
        draw_list.update_node(NodeId(3), vec![quad(Color::BLUE, 0)]);
        draw_list.sort_if_needed();

        let order: Vec<NodeId> = draw_list.commands().iter().map(|c| c.node_id()).collect();
        assert_eq!(order, vec![NodeId(2), NodeId(3), NodeId(1)]);
    }

    #[test]
    fn test_clear() {
        let mut draw_list = DrawList::new();
        draw_list.update_node(NodeId(1), vec![quad(Color::WHITE, 0)]);
        draw_list.clear();

        assert!(draw_list.is_empty());
        assert!(!draw_list.needs_sort());
        assert_eq!(draw_list.update_count(), 1);
    }
}
