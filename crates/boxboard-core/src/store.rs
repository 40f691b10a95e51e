//! Element collection and selection state.

use crate::elements::{DEFAULT_POSITION, Element, ElementId, ElementKind, Rectangle, Rgba, Text};
use crate::geometry::{self, CANVAS_SIZE};
use kurbo::Size;
use uuid::Uuid;

/// Direction for adjacent z-order moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDirection {
    /// Toward the front (paints later).
    Up,
    /// Toward the back (paints earlier).
    Down,
}

/// Partial element update, applied through the same round/floor/clamp rules
/// as interactive edits. Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub color: Option<Rgba>,
    pub text: Option<String>,
}

/// Owns the element collection, the selection pointer, and the canvas
/// extents. All mutations keep every element inside the canvas, above the
/// minimum size, and with unique ids and z-indices.
#[derive(Debug, Clone)]
pub struct ElementStore {
    elements: Vec<Element>,
    selected: Option<ElementId>,
    canvas_size: Size,
    revision: u64,
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementStore {
    /// Create an empty store with the default 800x600 canvas.
    pub fn new() -> Self {
        Self::with_canvas_size(CANVAS_SIZE)
    }

    /// Create an empty store with explicit canvas extents.
    pub fn with_canvas_size(canvas_size: Size) -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            canvas_size,
            revision: 0,
        }
    }

    /// Canvas extents used for clamping.
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Monotonic counter bumped on every successful mutation. External views
    /// compare it to detect model changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Next free z-index. Equals `len - 1` after a plain append while no
    /// deletions have occurred; max-based so z-uniqueness survives gaps.
    fn next_z_index(&self) -> i32 {
        self.elements
            .iter()
            .map(Element::z_index)
            .max()
            .map_or(0, |z| z + 1)
    }

    /// Add a new element of the given kind with default geometry. The new
    /// element becomes the selection.
    pub fn add(&mut self, kind: ElementKind) -> ElementId {
        let id = Uuid::new_v4();
        let z_index = self.next_z_index();
        let element = match kind {
            ElementKind::Rectangle => {
                Element::Rectangle(Rectangle::new(id, DEFAULT_POSITION, z_index))
            }
            ElementKind::Text => Element::Text(Text::new(id, DEFAULT_POSITION, z_index)),
        };
        self.elements.push(element);
        self.selected = Some(id);
        self.touch();
        id
    }

    /// Remove an element. Clears the selection if it referenced the element.
    /// Remaining z-indices are not renumbered; gaps are expected.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        let removed = self.elements.remove(index);
        self.touch();
        Some(removed)
    }

    /// Apply a partial update. Sizes are floored to the minimum and capped at
    /// the canvas edge, positions are clamped; a stale id is a silent no-op.
    pub fn apply_patch(&mut self, id: ElementId, patch: ElementPatch) {
        let canvas = self.canvas_size;
        let Some(element) = self.elements.iter_mut().find(|e| e.id() == id) else {
            log::debug!("patch for unknown element {id} ignored");
            return;
        };

        let mut size = element.size();
        let position = element.position();
        if let Some(width) = patch.width {
            size.width = geometry::floor_size(width).min(canvas.width - position.x);
        }
        if let Some(height) = patch.height {
            size.height = geometry::floor_size(height).min(canvas.height - position.y);
        }
        element.set_size(size);

        let mut position = element.position();
        if let Some(x) = patch.x {
            position.x = geometry::clamp_axis(x, size.width, canvas.width);
        }
        if let Some(y) = patch.y {
            position.y = geometry::clamp_axis(y, size.height, canvas.height);
        }
        element.set_position(position);

        if let Some(color) = patch.color {
            element.set_color(color);
        }
        if let Some(text) = patch.text {
            element.set_text(text);
        }
        self.touch();
    }

    /// Set the selection. Selecting an absent id is rejected and leaves the
    /// selection unchanged; selecting `None` always succeeds.
    pub fn select(&mut self, id: Option<ElementId>) -> bool {
        if let Some(id) = id {
            if !self.contains(id) {
                return false;
            }
        }
        if self.selected != id {
            self.selected = id;
            self.touch();
        }
        true
    }

    /// Id of the selected element, if any.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    /// The selected element, resolved by id on every call. A stale selection
    /// resolves to `None`.
    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Swap z-indices with the immediate neighbor in the requested direction,
    /// ranked by z-index. Returns false (no-op) for a stale id or when the
    /// element is already frontmost/backmost.
    pub fn reorder_adjacent(&mut self, id: ElementId, direction: LayerDirection) -> bool {
        let Some(current_z) = self.get(id).map(Element::z_index) else {
            return false;
        };
        let neighbor = match direction {
            LayerDirection::Up => self
                .elements
                .iter()
                .filter(|e| e.z_index() > current_z)
                .min_by_key(|e| e.z_index()),
            LayerDirection::Down => self
                .elements
                .iter()
                .filter(|e| e.z_index() < current_z)
                .max_by_key(|e| e.z_index()),
        }
        .map(|e| (e.id(), e.z_index()));
        let Some((neighbor_id, neighbor_z)) = neighbor else {
            return false;
        };

        // Pairwise swap of the two z values, never a renumbering.
        if let Some(element) = self.get_mut(id) {
            element.set_z_index(neighbor_z);
        }
        if let Some(element) = self.get_mut(neighbor_id) {
            element.set_z_index(current_z);
        }
        self.touch();
        true
    }

    /// Get an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Check if an element with the given id exists.
    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Elements in paint order (ascending z-index, back to front).
    pub fn elements_by_z(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.z_index());
        ordered
    }

    /// Replace the whole collection (the load path). Clears the selection.
    pub fn replace_all(&mut self, elements: Vec<Element>) {
        self.elements = elements;
        self.selected = None;
        self.touch();
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MIN_ELEMENT_SIZE;
    use kurbo::Point;

    #[test]
    fn test_add_selects_and_assigns_z() {
        let mut store = ElementStore::new();
        let first = store.add(ElementKind::Rectangle);
        let second = store.add(ElementKind::Text);

        assert_eq!(store.len(), 2);
        assert_eq!(store.selected_id(), Some(second));
        assert_eq!(store.get(first).map(Element::z_index), Some(0));
        assert_eq!(store.get(second).map(Element::z_index), Some(1));
    }

    #[test]
    fn test_add_after_gap_keeps_z_unique() {
        let mut store = ElementStore::new();
        let a = store.add(ElementKind::Rectangle);
        let b = store.add(ElementKind::Rectangle);
        store.reorder_adjacent(a, LayerDirection::Up);
        store.remove(a);

        // b holds z 0 after the swap; a fresh element must not collide with
        // any surviving z value.
        let c = store.add(ElementKind::Rectangle);
        let z_b = store.get(b).map(Element::z_index);
        let z_c = store.get(c).map(Element::z_index);
        assert_ne!(z_b, z_c);
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut store = ElementStore::new();
        let id = store.add(ElementKind::Rectangle);
        assert_eq!(store.selected_id(), Some(id));

        store.remove(id);
        assert!(store.is_empty());
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let mut store = ElementStore::new();
        let a = store.add(ElementKind::Rectangle);
        let b = store.add(ElementKind::Rectangle);

        store.remove(a);
        assert_eq!(store.selected_id(), Some(b));
    }

    #[test]
    fn test_select_absent_id_rejected() {
        let mut store = ElementStore::new();
        let id = store.add(ElementKind::Rectangle);

        assert!(!store.select(Some(Uuid::new_v4())));
        assert_eq!(store.selected_id(), Some(id));
    }

    #[test]
    fn test_select_none_always_clears() {
        let mut store = ElementStore::new();
        store.add(ElementKind::Rectangle);

        assert!(store.select(None));
        assert_eq!(store.selected_id(), None);
        assert!(store.select(None));
    }

    #[test]
    fn test_patch_clamps_position() {
        let mut store = ElementStore::new();
        let id = store.add(ElementKind::Rectangle);

        store.apply_patch(
            id,
            ElementPatch {
                x: Some(5000.0),
                y: Some(-20.0),
                ..Default::default()
            },
        );
        let element = store.get(id).unwrap();
        assert_eq!(element.position(), Point::new(680.0, 0.0));
    }

    #[test]
    fn test_patch_floors_and_caps_size() {
        let mut store = ElementStore::new();
        let id = store.add(ElementKind::Rectangle);

        store.apply_patch(
            id,
            ElementPatch {
                width: Some(3.0),
                height: Some(10_000.0),
                ..Default::default()
            },
        );
        let element = store.get(id).unwrap();
        assert_eq!(element.size().width, MIN_ELEMENT_SIZE);
        // Default position is y=50, so height caps at 600 - 50.
        assert_eq!(element.size().height, 550.0);
    }

    #[test]
    fn test_patch_stale_id_is_noop() {
        let mut store = ElementStore::new();
        store.add(ElementKind::Rectangle);
        let before = store.elements().to_vec();

        store.apply_patch(Uuid::new_v4(), ElementPatch {
            x: Some(0.0),
            ..Default::default()
        });
        assert_eq!(store.elements(), &before[..]);
    }

    #[test]
    fn test_patch_text_only_on_text() {
        let mut store = ElementStore::new();
        let rect = store.add(ElementKind::Rectangle);
        let text = store.add(ElementKind::Text);

        store.apply_patch(rect, ElementPatch {
            text: Some("hello".to_string()),
            ..Default::default()
        });
        store.apply_patch(text, ElementPatch {
            text: Some("hello".to_string()),
            ..Default::default()
        });

        assert_eq!(store.get(rect).unwrap().text(), None);
        assert_eq!(store.get(text).unwrap().text(), Some("hello"));
    }

    #[test]
    fn test_reorder_swaps_z_pairwise() {
        let mut store = ElementStore::new();
        let a = store.add(ElementKind::Rectangle);
        let b = store.add(ElementKind::Rectangle);
        let c = store.add(ElementKind::Rectangle);

        assert!(store.reorder_adjacent(a, LayerDirection::Up));
        assert_eq!(store.get(a).unwrap().z_index(), 1);
        assert_eq!(store.get(b).unwrap().z_index(), 0);
        assert_eq!(store.get(c).unwrap().z_index(), 2);
    }

    #[test]
    fn test_reorder_up_then_down_is_inverse() {
        let mut store = ElementStore::new();
        let a = store.add(ElementKind::Rectangle);
        let b = store.add(ElementKind::Rectangle);
        let c = store.add(ElementKind::Rectangle);

        assert!(store.reorder_adjacent(b, LayerDirection::Up));
        assert!(store.reorder_adjacent(b, LayerDirection::Down));
        assert_eq!(store.get(a).unwrap().z_index(), 0);
        assert_eq!(store.get(b).unwrap().z_index(), 1);
        assert_eq!(store.get(c).unwrap().z_index(), 2);
    }

    #[test]
    fn test_reorder_at_extremes_is_noop() {
        let mut store = ElementStore::new();
        let a = store.add(ElementKind::Rectangle);
        let b = store.add(ElementKind::Rectangle);

        assert!(!store.reorder_adjacent(a, LayerDirection::Down));
        assert!(!store.reorder_adjacent(b, LayerDirection::Up));
        assert_eq!(store.get(a).unwrap().z_index(), 0);
        assert_eq!(store.get(b).unwrap().z_index(), 1);
    }

    #[test]
    fn test_reorder_ranks_by_z_not_array_position() {
        let mut store = ElementStore::new();
        let a = store.add(ElementKind::Rectangle);
        let b = store.add(ElementKind::Rectangle);
        let c = store.add(ElementKind::Rectangle);
        // Scramble: z becomes a=1, b=0, c=2 while array order stays a, b, c.
        store.reorder_adjacent(a, LayerDirection::Up);

        // Up from a (z=1) must swap with c (z=2), not with its array
        // neighbor.
        assert!(store.reorder_adjacent(a, LayerDirection::Up));
        assert_eq!(store.get(a).unwrap().z_index(), 2);
        assert_eq!(store.get(b).unwrap().z_index(), 0);
        assert_eq!(store.get(c).unwrap().z_index(), 1);
    }

    #[test]
    fn test_elements_by_z_sorted() {
        let mut store = ElementStore::new();
        let a = store.add(ElementKind::Rectangle);
        let _b = store.add(ElementKind::Rectangle);
        store.reorder_adjacent(a, LayerDirection::Up);

        let ordered: Vec<i32> = store.elements_by_z().iter().map(|e| e.z_index()).collect();
        assert_eq!(ordered, vec![0, 1]);
    }

    #[test]
    fn test_custom_canvas_size_bounds_clamping() {
        let mut store = ElementStore::with_canvas_size(Size::new(400.0, 300.0));
        let id = store.add(ElementKind::Rectangle);

        store.apply_patch(id, ElementPatch {
            x: Some(9999.0),
            y: Some(9999.0),
            ..Default::default()
        });
        let element = store.get(id).unwrap();
        assert_eq!(element.position(), Point::new(280.0, 220.0));
    }

    #[test]
    fn test_replace_all_clears_selection() {
        let mut store = ElementStore::new();
        store.add(ElementKind::Rectangle);
        let snapshot = store.elements().to_vec();

        store.replace_all(snapshot);
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn test_revision_bumps_on_mutation() {
        let mut store = ElementStore::new();
        let before = store.revision();
        let id = store.add(ElementKind::Rectangle);
        assert!(store.revision() > before);

        let before = store.revision();
        store.apply_patch(id, ElementPatch {
            x: Some(60.0),
            ..Default::default()
        });
        assert!(store.revision() > before);
    }
}
