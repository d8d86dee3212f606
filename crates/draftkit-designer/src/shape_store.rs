//! Shape storage: the node arena plus the layer's ordered collections.
//!
//! `ShapeStore` owns every [`ShapeNode`]. Membership is expressed by ids:
//! - `shapes`: top-level shapes in draw order (first drawn first)
//! - `guides`: construction lines, hit only when explicitly requested
//! - group members, path segments and connectors inside their composites
//!
//! Control points are owned by the store and shared by reference; they carry
//! no owner. Every other shape has at most one place of membership: a
//! top-level collection, or the child collection named by its `owner`.

use std::collections::{HashMap, HashSet};

use draftkit_core::ShapeError;

use crate::model::{
    ArcShape, BoxShape, ConnectorRole, CubicBezierShape, GroupShape, ImageShape, LineShape,
    PathFigure, PathShape, Point2, PointShape, QuadraticBezierShape, ShapeId, ShapeKind,
    ShapeNode, ShapeState, ShapeVariant, TextShape,
};

/// Arena of shapes plus the top-level `shapes` and `guides` collections.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    nodes: HashMap<ShapeId, ShapeNode>,
    shapes: Vec<ShapeId>,
    guides: Vec<ShapeId>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> ShapeId {
        self.next_id += 1;
        ShapeId(self.next_id)
    }

    /// Number of nodes in the arena, including control points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeNode> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut ShapeNode> {
        self.nodes.get_mut(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All nodes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ShapeNode> {
        self.nodes.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ShapeNode> {
        self.nodes.values_mut()
    }

    /// Top-level shapes in draw order.
    pub fn shapes(&self) -> &[ShapeId] {
        &self.shapes
    }

    /// Guides in draw order.
    pub fn guides(&self) -> &[ShapeId] {
        &self.guides
    }

    pub fn is_top_level(&self, id: ShapeId) -> bool {
        self.shapes.contains(&id)
    }

    pub fn is_guide(&self, id: ShapeId) -> bool {
        self.guides.contains(&id)
    }

    /// Position of a point shape.
    pub fn position(&self, id: ShapeId) -> Option<Point2> {
        self.get(id).and_then(ShapeNode::position)
    }

    /// Removes every shape and resets both collections. Ids keep increasing.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.shapes.clear();
        self.guides.clear();
    }

    // --- Detached creation ---

    /// Creates a detached point.
    pub fn create_point(&mut self, position: Point2) -> ShapeId {
        self.insert_kind(ShapeKind::Point(PointShape::new(position.x, position.y)))
    }

    /// Creates a detached line between two existing points.
    pub fn create_line(&mut self, start: ShapeId, end: ShapeId) -> Result<ShapeId, ShapeError> {
        self.require_points(&[start, end])?;
        Ok(self.insert_kind(ShapeKind::Line(LineShape::new(start, end))))
    }

    /// Creates a detached cubic bezier from start, two controls, and end.
    pub fn create_cubic_bezier(&mut self, points: [ShapeId; 4]) -> Result<ShapeId, ShapeError> {
        self.require_points(&points)?;
        Ok(self.insert_kind(ShapeKind::CubicBezier(CubicBezierShape::new(points))))
    }

    /// Creates a detached quadratic bezier from start, control, and end.
    pub fn create_quadratic_bezier(
        &mut self,
        points: [ShapeId; 3],
    ) -> Result<ShapeId, ShapeError> {
        self.require_points(&points)?;
        Ok(self.insert_kind(ShapeKind::QuadraticBezier(QuadraticBezierShape::new(points))))
    }

    /// Creates a detached arc.
    pub fn create_arc(&mut self, points: [ShapeId; 4]) -> Result<ShapeId, ShapeError> {
        self.require_points(&points)?;
        Ok(self.insert_kind(ShapeKind::Arc(ArcShape::new(points))))
    }

    pub fn create_rectangle(
        &mut self,
        top_left: ShapeId,
        bottom_right: ShapeId,
    ) -> Result<ShapeId, ShapeError> {
        self.require_points(&[top_left, bottom_right])?;
        Ok(self.insert_kind(ShapeKind::Rectangle(BoxShape::new(top_left, bottom_right))))
    }

    pub fn create_ellipse(
        &mut self,
        top_left: ShapeId,
        bottom_right: ShapeId,
    ) -> Result<ShapeId, ShapeError> {
        self.require_points(&[top_left, bottom_right])?;
        Ok(self.insert_kind(ShapeKind::Ellipse(BoxShape::new(top_left, bottom_right))))
    }

    pub fn create_text(
        &mut self,
        top_left: ShapeId,
        bottom_right: ShapeId,
        text: impl Into<String>,
    ) -> Result<ShapeId, ShapeError> {
        self.require_points(&[top_left, bottom_right])?;
        Ok(self.insert_kind(ShapeKind::Text(TextShape {
            frame: BoxShape::new(top_left, bottom_right),
            text: text.into(),
        })))
    }

    pub fn create_image(
        &mut self,
        top_left: ShapeId,
        bottom_right: ShapeId,
        key: impl Into<String>,
    ) -> Result<ShapeId, ShapeError> {
        self.require_points(&[top_left, bottom_right])?;
        Ok(self.insert_kind(ShapeKind::Image(ImageShape {
            frame: BoxShape::new(top_left, bottom_right),
            key: key.into(),
        })))
    }

    /// Creates a detached path owning the segments of `figures`.
    ///
    /// Segments must be detached, non-point shapes, and no figure may be empty.
    pub fn create_path(&mut self, figures: Vec<PathFigure>) -> Result<ShapeId, ShapeError> {
        if figures.is_empty() || figures.iter().any(PathFigure::is_empty) {
            return Err(ShapeError::EmptyComposite {
                variant: ShapeVariant::Path,
            });
        }
        let segments: Vec<ShapeId> = figures.iter().flat_map(|f| f.shapes.iter().copied()).collect();
        self.require_members(&segments)?;

        let id = self.insert_kind(ShapeKind::Path(PathShape { figures }));
        self.adopt(id, &segments);
        Ok(id)
    }

    /// Creates a detached group owning `children`.
    pub fn create_group(&mut self, children: Vec<ShapeId>) -> Result<ShapeId, ShapeError> {
        if children.is_empty() {
            return Err(ShapeError::EmptyComposite {
                variant: ShapeVariant::Group,
            });
        }
        self.require_members(&children)?;

        let id = self.insert_kind(ShapeKind::Group(GroupShape {
            shapes: children.clone(),
            connectors: Vec::new(),
        }));
        self.adopt(id, &children);
        Ok(id)
    }

    /// Attaches an unowned point to a group as a connector with the given role.
    pub fn add_connector(
        &mut self,
        group: ShapeId,
        point: ShapeId,
        role: ConnectorRole,
    ) -> Result<(), ShapeError> {
        self.require_points(&[point])?;
        if !self.is_detached(point) {
            return Err(ShapeError::AlreadyOwned { id: point });
        }
        let node = self.nodes.get_mut(&group).ok_or(ShapeError::NotFound { id: group })?;
        let actual = node.variant();
        let ShapeKind::Group(g) = &mut node.kind else {
            return Err(ShapeError::WrongVariant {
                id: group,
                expected: ShapeVariant::Group,
                actual,
            });
        };
        g.connectors.push(point);
        node.dirty = true;

        if let Some(p) = self.nodes.get_mut(&point) {
            p.owner = Some(group);
            p.state.remove(ShapeState::STANDALONE);
            p.state.insert(ShapeState::connector(role));
        }
        Ok(())
    }

    // --- Layer collections ---

    /// Appends a detached shape to the top-level collection.
    pub fn add_shape(&mut self, id: ShapeId) -> Result<(), ShapeError> {
        self.require_members(&[id])
            .or_else(|e| self.allow_standalone_point(id, e))?;
        self.shapes.push(id);
        Ok(())
    }

    /// Appends a detached shape to the guides collection.
    pub fn add_guide(&mut self, id: ShapeId) -> Result<(), ShapeError> {
        self.require_members(&[id])?;
        self.guides.push(id);
        Ok(())
    }

    /// Adds a standalone point to the top level.
    pub fn add_point(&mut self, position: Point2) -> ShapeId {
        let id = self.create_point(position);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.state.insert(ShapeState::STANDALONE);
        }
        self.shapes.push(id);
        id
    }

    /// Adds a line with fresh end points to the top level.
    pub fn add_line(&mut self, start: Point2, end: Point2) -> ShapeId {
        let kind = {
            let a = self.create_point(start);
            let b = self.create_point(end);
            ShapeKind::Line(LineShape::new(a, b))
        };
        self.push_kind(kind)
    }

    /// Adds a rectangle spanning `x, y, width, height` to the top level.
    pub fn add_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> ShapeId {
        let frame = self.create_frame(x, y, width, height);
        self.push_kind(ShapeKind::Rectangle(frame))
    }

    /// Adds an ellipse inscribed in `x, y, width, height` to the top level.
    pub fn add_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) -> ShapeId {
        let frame = self.create_frame(x, y, width, height);
        self.push_kind(ShapeKind::Ellipse(frame))
    }

    /// Adds a text box to the top level.
    pub fn add_text(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        text: impl Into<String>,
    ) -> ShapeId {
        let frame = self.create_frame(x, y, width, height);
        self.push_kind(ShapeKind::Text(TextShape {
            frame,
            text: text.into(),
        }))
    }

    /// Adds a cubic bezier with fresh points to the top level.
    pub fn add_cubic_bezier(&mut self, points: [Point2; 4]) -> ShapeId {
        let ids = points.map(|p| self.create_point(p));
        self.push_kind(ShapeKind::CubicBezier(CubicBezierShape::new(ids)))
    }

    /// Adds a quadratic bezier with fresh points to the top level.
    pub fn add_quadratic_bezier(&mut self, points: [Point2; 3]) -> ShapeId {
        let ids = points.map(|p| self.create_point(p));
        self.push_kind(ShapeKind::QuadraticBezier(QuadraticBezierShape::new(ids)))
    }

    /// Adds a guide line with fresh end points.
    pub fn add_guide_line(&mut self, start: Point2, end: Point2) -> ShapeId {
        let a = self.create_point(start);
        let b = self.create_point(end);
        let id = self.insert_kind(ShapeKind::Line(LineShape::new(a, b)));
        self.guides.push(id);
        id
    }

    /// Builds a path from `figures` and appends it to the top level.
    pub fn add_path(&mut self, figures: Vec<PathFigure>) -> Result<ShapeId, ShapeError> {
        let id = self.create_path(figures)?;
        self.shapes.push(id);
        Ok(id)
    }

    // --- Grouping ---

    /// Moves top-level shapes into a new group appended to the top level.
    pub fn group(&mut self, ids: &[ShapeId]) -> Result<ShapeId, ShapeError> {
        if ids.is_empty() {
            return Err(ShapeError::EmptyComposite {
                variant: ShapeVariant::Group,
            });
        }
        if let Some(&id) = ids.iter().find(|id| !self.shapes.contains(id)) {
            return Err(ShapeError::NotTopLevel { id });
        }
        // Keep draw order among the grouped shapes.
        let children: Vec<ShapeId> = self.shapes.iter().copied().filter(|id| ids.contains(id)).collect();
        for &id in &children {
            let actual = self.get(id).map(ShapeNode::variant);
            if actual == Some(ShapeVariant::Point) {
                return Err(ShapeError::PointMember { id });
            }
        }
        self.shapes.retain(|id| !children.contains(id));
        for &child in &children {
            if let Some(node) = self.nodes.get_mut(&child) {
                node.state.remove(ShapeState::STANDALONE);
            }
        }

        let group = self.create_group(children)?;
        self.shapes.push(group);
        Ok(group)
    }

    /// Dissolves a top-level group; members and connectors take its place in draw order.
    ///
    /// Former connectors become standalone points.
    pub fn ungroup(&mut self, id: ShapeId) -> Result<Vec<ShapeId>, ShapeError> {
        let index = self
            .shapes
            .iter()
            .position(|&s| s == id)
            .ok_or(ShapeError::NotTopLevel { id })?;
        let node = self.nodes.get(&id).ok_or(ShapeError::NotFound { id })?;
        let ShapeKind::Group(group) = &node.kind else {
            return Err(ShapeError::WrongVariant {
                id,
                expected: ShapeVariant::Group,
                actual: node.variant(),
            });
        };

        let released: Vec<ShapeId> = group
            .shapes
            .iter()
            .chain(group.connectors.iter())
            .copied()
            .collect();
        let connectors = group.connectors.clone();

        for &member in &released {
            if let Some(n) = self.nodes.get_mut(&member) {
                n.owner = None;
                if connectors.contains(&member) {
                    n.state.remove(ShapeState::CONNECTOR | ShapeState::INPUT | ShapeState::OUTPUT);
                    n.state.insert(ShapeState::STANDALONE);
                }
            }
        }
        self.nodes.remove(&id);
        self.shapes.splice(index..=index, released.iter().copied());
        Ok(released)
    }

    // --- Dirty tracking ---

    /// Flags a shape's cached bounds/geometry as stale.
    pub fn mark_dirty(&mut self, id: ShapeId) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.dirty = true;
        }
    }

    /// Returns the dirty shapes in id order and clears their flags.
    pub fn take_dirty(&mut self) -> Vec<ShapeId> {
        let mut dirty: Vec<ShapeId> = self
            .nodes
            .values_mut()
            .filter(|n| n.dirty)
            .map(|n| {
                n.dirty = false;
                n.id
            })
            .collect();
        dirty.sort();
        dirty
    }

    // --- Queries ---

    /// Whether any shape uses `point` as a control point or connector.
    pub fn is_point_referenced(&self, point: ShapeId) -> bool {
        self.nodes.values().any(|n| n.kind.references_point(point))
    }

    /// Every point of a path's segments in declaration order, each listed once.
    pub fn path_points(&self, path: ShapeId) -> Vec<ShapeId> {
        let mut seen = HashSet::new();
        let mut points = Vec::new();
        let mut stack: Vec<ShapeId> = match self.get(path) {
            Some(node) => node.kind.children().into_iter().rev().collect(),
            None => return points,
        };
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            for p in node.kind.control_points().into_iter().flatten() {
                if seen.insert(p) {
                    points.push(p);
                }
            }
            stack.extend(node.kind.children().into_iter().rev());
        }
        points
    }

    /// Whether a shape sits in no collection at all.
    pub fn is_detached(&self, id: ShapeId) -> bool {
        self.get(id).is_some_and(|n| n.owner.is_none())
            && !self.shapes.contains(&id)
            && !self.guides.contains(&id)
    }

    // --- Crate internals used by edit operations ---

    pub(crate) fn insert_node(&mut self, node: ShapeNode) {
        self.next_id = self.next_id.max(node.id.0);
        self.nodes.insert(node.id, node);
    }

    pub(crate) fn remove_node(&mut self, id: ShapeId) -> Option<ShapeNode> {
        self.nodes.remove(&id)
    }

    pub(crate) fn shapes_mut(&mut self) -> &mut Vec<ShapeId> {
        &mut self.shapes
    }

    pub(crate) fn guides_mut(&mut self) -> &mut Vec<ShapeId> {
        &mut self.guides
    }

    // --- Helpers ---

    fn insert_kind(&mut self, kind: ShapeKind) -> ShapeId {
        let id = self.generate_id();
        self.nodes.insert(id, ShapeNode::new(id, kind));
        id
    }

    fn push_kind(&mut self, kind: ShapeKind) -> ShapeId {
        let id = self.insert_kind(kind);
        self.shapes.push(id);
        id
    }

    fn create_frame(&mut self, x: f64, y: f64, width: f64, height: f64) -> BoxShape {
        let top_left = self.create_point(Point2::new(x, y));
        let bottom_right = self.create_point(Point2::new(x + width, y + height));
        BoxShape::new(top_left, bottom_right)
    }

    fn adopt(&mut self, owner: ShapeId, children: &[ShapeId]) {
        for child in children {
            if let Some(node) = self.nodes.get_mut(child) {
                node.owner = Some(owner);
            }
        }
    }

    fn require_points(&self, ids: &[ShapeId]) -> Result<(), ShapeError> {
        for &id in ids {
            let node = self.get(id).ok_or(ShapeError::NotFound { id })?;
            if node.variant() != ShapeVariant::Point {
                return Err(ShapeError::NotAPoint {
                    id,
                    actual: node.variant(),
                });
            }
        }
        Ok(())
    }

    /// Composite members and top-level entries must be detached, non-point shapes.
    fn require_members(&self, ids: &[ShapeId]) -> Result<(), ShapeError> {
        let mut seen = HashSet::new();
        for &id in ids {
            let node = self.get(id).ok_or(ShapeError::NotFound { id })?;
            if node.variant() == ShapeVariant::Point {
                return Err(ShapeError::PointMember { id });
            }
            if !self.is_detached(id) || !seen.insert(id) {
                return Err(ShapeError::AlreadyOwned { id });
            }
        }
        Ok(())
    }

    /// Standalone points may live at the top level even though they cannot be composite members.
    fn allow_standalone_point(&mut self, id: ShapeId, err: ShapeError) -> Result<(), ShapeError> {
        match err {
            ShapeError::PointMember { .. } => {
                if !self.is_detached(id) {
                    return Err(ShapeError::AlreadyOwned { id });
                }
                if let Some(node) = self.nodes.get_mut(&id) {
                    node.state.insert(ShapeState::STANDALONE);
                }
                Ok(())
            }
            other => Err(other),
        }
    }
}
