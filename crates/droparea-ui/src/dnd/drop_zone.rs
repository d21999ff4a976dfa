//! Drop-zone container: a styled region registered as a drop target.

use super::error::{DndError, DndResult};
use super::registry::{DropTargetHandle, DropTargetId, DropTargetRegistry};
use crate::color::Color;
use crate::style::{BorderStyle, Style};
use crate::tree::{NodeId, UiTree};
use crate::widgets::Widget;
use std::any::Any;

pub const DEFAULT_MIN_HEIGHT: f32 = 200.0;
pub const DEFAULT_BORDER_WIDTH: f32 = 2.0;
pub const DEFAULT_BORDER_RADIUS: f32 = 8.0;
pub const DEFAULT_PADDING: f32 = 16.0;

pub fn default_border_color() -> Color {
    Color::from_hex(0xD1D5DB)
}

/// Presentation defaults for a drop zone.
///
/// Purely cosmetic; re-theming does not change registration behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct DropZoneStyle {
    pub min_height: f32,
    pub border_width: f32,
    pub border_radius: f32,
    pub border_color: Color,
    pub border_style: BorderStyle,
    pub padding: f32,
    /// Spacing between content items.
    pub gap: f32,
    pub background_color: Option<Color>,
}

impl Default for DropZoneStyle {
    fn default() -> Self {
        Self {
            min_height: DEFAULT_MIN_HEIGHT,
            border_width: DEFAULT_BORDER_WIDTH,
            border_radius: DEFAULT_BORDER_RADIUS,
            border_color: default_border_color(),
            border_style: BorderStyle::dashed(),
            padding: DEFAULT_PADDING,
            gap: 8.0,
            background_color: None,
        }
    }
}

impl DropZoneStyle {
    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn border_style(mut self, border_style: BorderStyle) -> Self {
        self.border_style = border_style;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Widget style for the container node: a full-width column that stacks
    /// content.
    pub fn to_style(&self) -> Style {
        let style = Style::new()
            .display(taffy::Display::Flex)
            .flex_direction(taffy::FlexDirection::Column)
            .width_percent(1.0)
            .min_height(self.min_height)
            .padding(self.padding)
            .gap(self.gap)
            .border_width(self.border_width)
            .border_radius(self.border_radius)
            .border_color(self.border_color)
            .border_style(self.border_style);

        match self.background_color {
            Some(color) => style.background_color(color),
            None => style,
        }
    }
}

/// Widget occupying the drop zone's node in the tree.
#[derive(Clone)]
pub struct DropZoneWidget {
    id: DropTargetId,
    style: Style,
}

impl DropZoneWidget {
    pub fn new(id: DropTargetId, style: &DropZoneStyle) -> Self {
        Self {
            id,
            style: style.to_style(),
        }
    }

    /// Identifier this zone registers under.
    pub fn identifier(&self) -> &DropTargetId {
        &self.id
    }
}

impl Widget for DropZoneWidget {
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
        "DropZone"
    }

    fn clone_box(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// An unmounted drop zone: identifier, style and content.
///
/// Content is opaque here; every widget is attached unchanged, in order,
/// as a child of the zone.
///
/// ```
/// use droparea_ui::dnd::{DragDropContext, DropZoneContainer};
/// use droparea_ui::tree::UiTree;
/// use droparea_ui::widgets::Text;
///
/// let mut tree = UiTree::new();
/// let mut registry = DragDropContext::new();
///
/// let zone = DropZoneContainer::new("settings-files")
///     .child(Text::new("config.toml"))
///     .child(Text::new("theme.json"))
///     .mount(&mut tree, None, &mut registry)
///     .unwrap();
///
/// assert_eq!(tree.children(zone.node()).len(), 2);
/// ```
pub struct DropZoneContainer {
    id: DropTargetId,
    style: DropZoneStyle,
    content: Vec<Box<dyn Widget>>,
}

impl DropZoneContainer {
    /// Create an empty drop zone registering under `id`.
    pub fn new(id: impl Into<DropTargetId>) -> Self {
        Self {
            id: id.into(),
            style: DropZoneStyle::default(),
            content: Vec::new(),
        }
    }

    /// Append a content widget.
    pub fn child(mut self, widget: impl Widget) -> Self {
        self.content.push(Box::new(widget));
        self
    }

    /// Append already boxed content widgets.
    pub fn children(mut self, widgets: impl IntoIterator<Item = Box<dyn Widget>>) -> Self {
        self.content.extend(widgets);
        self
    }

    pub fn style(mut self, style: DropZoneStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> &DropTargetId {
        &self.id
    }

    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Attach the zone to `tree` and register it with `registry`.
    ///
    /// With `parent == None` the zone becomes the tree root. Fails without
    /// touching the tree or the registry if `parent` is not in the tree, or
    /// if `parent` is `None` and the tree already has a root.
    pub fn mount(
        self,
        tree: &mut UiTree,
        parent: Option<NodeId>,
        registry: &mut dyn DropTargetRegistry,
    ) -> DndResult<MountedDropZone> {
        match parent {
            Some(parent) if !tree.node_exists(parent) => {
                return Err(DndError::NodeNotFound(parent));
            }
            None => {
                if let Some(root) = tree.root() {
                    return Err(DndError::RootOccupied(root));
                }
            }
            Some(_) => {}
        }

        let node = tree.add_widget(Box::new(DropZoneWidget::new(self.id.clone(), &self.style)));
        match parent {
            Some(parent) => tree.add_child(parent, node),
            None => tree.set_root(node),
        }

        let content: Vec<NodeId> = self
            .content
            .into_iter()
            .map(|widget| {
                let child = tree.add_widget(widget);
                tree.add_child(node, child);
                child
            })
            .collect();

        let handle = registry.register(self.id.clone(), node);
        tracing::debug!(
            "Mounted drop zone '{}' at {:?} with {} content nodes",
            self.id,
            node,
            content.len()
        );

        Ok(MountedDropZone {
            node,
            id: self.id,
            content,
            handle,
        })
    }
}

impl Default for DropZoneContainer {
    fn default() -> Self {
        Self::new(DropTargetId::default())
    }
}

/// A drop zone attached to a tree and registered as a drop target.
#[derive(Debug)]
pub struct MountedDropZone {
    node: NodeId,
    id: DropTargetId,
    content: Vec<NodeId>,
    handle: DropTargetHandle,
}

impl MountedDropZone {
    /// The zone's container node; its layout is the drop target geometry.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn id(&self) -> &DropTargetId {
        &self.id
    }

    /// Nodes created for the content widgets, in order.
    pub fn content(&self) -> &[NodeId] {
        &self.content
    }

    pub fn handle(&self) -> &DropTargetHandle {
        &self.handle
    }

    /// Release the registration and remove the zone's subtree.
    ///
    /// The subtree is removed even if the registry rejects the handle.
    pub fn unmount(self, tree: &mut UiTree, registry: &mut dyn DropTargetRegistry) -> DndResult<()> {
        let released = registry.release(self.handle);
        let removed = tree.remove_subtree(self.node);
        tracing::debug!(
            "Unmounted drop zone '{}' ({} nodes removed)",
            self.id,
            removed
        );
        released.map(|_| ())
    }
}
