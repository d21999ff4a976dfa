//! UI tree structure with Taffy layout integration.

use crate::style::Style;
use crate::widgets::Widget;
use droparea_core::geometry::Size;
use droparea_core::math::Vec2;
use droparea_core::profiling::profile_function;
use indexmap::IndexMap;
use taffy::{AvailableSpace, TaffyTree};

/// Node identifier in the UI tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Layout information computed by Taffy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Same size, shifted by `offset`.
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }
}

/// A node in the UI tree.
pub struct UiNode {
    pub widget: Box<dyn Widget>,
    pub taffy_node: taffy::NodeId,
    /// Layout relative to the parent node.
    pub layout: LayoutRect,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// UI tree managing widgets and layout.
pub struct UiTree {
    taffy: TaffyTree<NodeId>,
    nodes: IndexMap<NodeId, UiNode>,
    root: Option<NodeId>,
    next_id: usize,
    layout_dirty: bool,
}

impl UiTree {
    /// Create a new UI tree.
    pub fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
            nodes: IndexMap::new(),
            root: None,
            next_id: 0,
            layout_dirty: false,
        }
    }

    /// Add a detached widget to the tree and return its NodeId.
    pub fn add_widget(&mut self, widget: Box<dyn Widget>) -> NodeId {
        let node_id = NodeId(self.next_id);
        self.next_id += 1;

        let style = widget.style().layout.clone();
        let taffy_node = self
            .taffy
            .new_leaf_with_context(style, node_id)
            .expect("Failed to create taffy node");

        self.nodes.insert(
            node_id,
            UiNode {
                widget,
                taffy_node,
                layout: LayoutRect::default(),
                parent: None,
                children: Vec::new(),
            },
        );
        self.layout_dirty = true;

        node_id
    }

    /// Set a node as the last child of another node.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if let (Some(parent_node), Some(child_node)) =
            (self.nodes.get(&parent), self.nodes.get(&child))
        {
            self.taffy
                .add_child(parent_node.taffy_node, child_node.taffy_node)
                .ok();

            if let Some(child_node) = self.nodes.get_mut(&child) {
                child_node.parent = Some(parent);
            }
            if let Some(parent_node) = self.nodes.get_mut(&parent) {
                parent_node.children.push(child);
            }

            self.layout_dirty = true;
        }
    }

    /// Set the root node.
    pub fn set_root(&mut self, node_id: NodeId) {
        self.root = Some(node_id);
        self.layout_dirty = true;
    }

    /// Get the root node.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Check whether a node is in the tree.
    pub fn node_exists(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of a node, in insertion order. Empty for unknown nodes.
    pub fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node_id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of a node.
    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(&node_id).and_then(|n| n.parent)
    }

    /// Get a widget by node ID.
    pub fn get_widget(&self, node_id: NodeId) -> Option<&dyn Widget> {
        self.nodes.get(&node_id).map(|n| &*n.widget)
    }

    /// Get a mutable widget by node ID.
    pub fn get_widget_mut(&mut self, node_id: NodeId) -> Option<&mut dyn Widget> {
        self.nodes.get_mut(&node_id).map(|n| &mut *n.widget)
    }

    /// Get a widget downcast to its concrete type.
    pub fn widget_as<T: Widget>(&self, node_id: NodeId) -> Option<&T> {
        self.get_widget(node_id)
            .and_then(|w| w.as_any().downcast_ref::<T>())
    }

    /// Get layout for a node, relative to its parent.
    pub fn get_layout(&self, node_id: NodeId) -> Option<LayoutRect> {
        self.nodes.get(&node_id).map(|n| n.layout)
    }

    /// Get layout for a node in viewport coordinates.
    pub fn absolute_layout(&self, node_id: NodeId) -> Option<LayoutRect> {
        let node = self.nodes.get(&node_id)?;
        let mut rect = node.layout;
        let mut current = node.parent;
        while let Some(parent_id) = current {
            let Some(parent) = self.nodes.get(&parent_id) else {
                break;
            };
            rect = rect.translate(parent.layout.position());
            current = parent.parent;
        }
        Some(rect)
    }

    /// Check if the tree changed since the last layout pass.
    pub fn is_dirty(&self) -> bool {
        self.layout_dirty
    }

    /// Force the next `compute_layout` to run.
    pub fn mark_dirty(&mut self) {
        self.layout_dirty = true;
    }

    /// Replace a widget's style and mark the tree dirty.
    pub fn update_style(&mut self, node_id: NodeId, style: Style) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            self.taffy.set_style(node.taffy_node, style.layout.clone()).ok();
            *node.widget.style_mut() = style;
            self.layout_dirty = true;
        }
    }

    /// Remove a node and all of its descendants.
    ///
    /// Returns the number of nodes removed (0 if the node was not found).
    pub fn remove_subtree(&mut self, node_id: NodeId) -> usize {
        let Some(node) = self.nodes.get(&node_id) else {
            return 0;
        };

        if let Some(parent_id) = node.parent {
            let taffy_child = node.taffy_node;
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.children.retain(|&c| c != node_id);
                self.taffy.remove_child(parent.taffy_node, taffy_child).ok();
            }
        }

        let mut removed = 0;
        let mut stack = vec![node_id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.shift_remove(&current) {
                self.taffy.remove(node.taffy_node).ok();
                stack.extend(node.children);
                removed += 1;
            }
        }

        if self.root == Some(node_id) {
            self.root = None;
        }
        self.layout_dirty = true;

        removed
    }

    /// Compute layout for the whole tree against the viewport size.
    pub fn compute_layout(&mut self, viewport_size: Size<f32>) {
        profile_function!();

        if !self.layout_dirty {
            return;
        }
        let Some(root) = self.root else {
            return;
        };
        let Some(root_taffy_node) = self.nodes.get(&root).map(|n| n.taffy_node) else {
            return;
        };

        let available_space = taffy::Size {
            width: AvailableSpace::Definite(viewport_size.width),
            height: AvailableSpace::Definite(viewport_size.height),
        };

        let nodes = &self.nodes;
        let measure_func = |known_dimensions: taffy::Size<Option<f32>>,
                            available_space: taffy::Size<AvailableSpace>,
                            _taffy_node: taffy::NodeId,
                            node_context: Option<&mut NodeId>,
                            _style: &taffy::Style|
         -> taffy::Size<f32> {
            let measured = node_context
                .and_then(|id| nodes.get(&*id))
                .map(|node| {
                    let available = Vec2::new(
                        resolve_available(available_space.width),
                        resolve_available(available_space.height),
                    );
                    node.widget.measure(available)
                })
                .unwrap_or(Vec2::ZERO);

            taffy::Size {
                width: known_dimensions.width.unwrap_or(measured.x),
                height: known_dimensions.height.unwrap_or(measured.y),
            }
        };

        if let Err(e) =
            self.taffy
                .compute_layout_with_measure(root_taffy_node, available_space, measure_func)
        {
            tracing::warn!("Layout computation failed: {}", e);
            return;
        }

        self.cache_layouts();
        self.layout_dirty = false;
    }

    /// Cache layout results from Taffy into our nodes.
    fn cache_layouts(&mut self) {
        for node in self.nodes.values_mut() {
            if let Ok(layout) = self.taffy.layout(node.taffy_node) {
                node.layout = LayoutRect {
                    x: layout.location.x,
                    y: layout.location.y,
                    width: layout.size.width,
                    height: layout.size.height,
                };
            }
        }
    }

    /// Depth-first traversal from the root, yielding each node with its depth.
    pub fn walk(&self) -> Vec<(NodeId, usize)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let Some(root) = self.root else {
            return out;
        };
        let mut stack = vec![(root, 0usize)];
        while let Some((node_id, depth)) = stack.pop() {
            out.push((node_id, depth));
            for &child in self.children(node_id).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }

    /// Clear the entire tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.taffy.clear();
        self.root = None;
        self.next_id = 0;
        self.layout_dirty = false;
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &UiNode)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }
}

impl Default for UiTree {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_available(space: AvailableSpace) -> f32 {
    match space {
        AvailableSpace::Definite(v) => v,
        AvailableSpace::MinContent => 0.0,
        AvailableSpace::MaxContent => f32::MAX,
    }
}
