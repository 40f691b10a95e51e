//! Interaction state machine: selection, drag, resize, keyboard editing.
//!
//! Input events arrive already hit-tested (the renderer owns picking); the
//! editor validates them against the current gesture, routes geometry through
//! the snap/clamp helpers, and commits the result to the element store. Every
//! committed mutation queues a notification for the external views.

use crate::elements::{ElementId, ElementKind};
use crate::export;
use crate::geometry::{self, GRID_SIZE, MIN_ELEMENT_SIZE, NUDGE_STEP};
use crate::persist::{DOCUMENT_KEY, Document};
use crate::storage::{SlotStorage, StorageError};
use crate::store::{ElementPatch, ElementStore, LayerDirection};
use kurbo::{Point, Size, Vec2};

/// Status line shown while no gesture is active.
pub const STATUS_READY: &str = "Ready";
/// Status line shown while a drag gesture is active.
pub const STATUS_DRAGGING: &str = "Dragging...";
/// Status line shown while a resize gesture is active.
pub const STATUS_RESIZING: &str = "Resizing...";

/// What a press landed on, as hit-tested by the event source.
///
/// A press on the resize handle is delivered as `ResizeHandle` and never
/// additionally as an `Element` press in the same dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    Element(ElementId),
    ResizeHandle(ElementId),
    Canvas,
}

/// Abstract pointer events driving the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Press { target: PressTarget, position: Point },
    Move { position: Point },
    Release { position: Point },
}

/// Keyboard events the editor consumes. Anything else is the host's problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
}

/// Transient gesture state. Exactly one gesture is active at a time; the id
/// is the selection captured when the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        id: ElementId,
        anchor_pointer: Point,
        anchor_origin: Point,
    },
    Resizing {
        id: ElementId,
        anchor_pointer: Point,
        anchor_size: Size,
    },
}

/// Notifications queued for external collaborators and drained by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The element collection or selection changed; views should re-read.
    ModelChanged,
    /// Short state description for the status display.
    Status(&'static str),
}

/// The canvas editor: element store plus interaction state machine.
#[derive(Debug, Clone)]
pub struct Editor {
    store: ElementStore,
    gesture: Gesture,
    snap_to_grid: bool,
    events: Vec<EditorEvent>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor over an empty store with the default canvas.
    pub fn new() -> Self {
        Self::with_store(ElementStore::new())
    }

    /// Create an editor over an existing store.
    pub fn with_store(store: ElementStore) -> Self {
        Self {
            store,
            gesture: Gesture::Idle,
            snap_to_grid: false,
            events: vec![EditorEvent::Status(STATUS_READY)],
        }
    }

    /// Read-only view of the element store.
    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    /// Current gesture state.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Whether grid snap is applied to drag/resize/nudge targets.
    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.snap_to_grid = enabled;
    }

    /// Drain the queued notifications.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    fn notify_changed(&mut self) {
        self.events.push(EditorEvent::ModelChanged);
    }

    // --- store operations fronted for the toolbar/panel collaborators ---

    /// Add a new element; it becomes the selection.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let id = self.store.add(kind);
        self.notify_changed();
        id
    }

    /// Remove an element (layers panel delete button).
    pub fn remove_element(&mut self, id: ElementId) {
        if self.store.remove(id).is_some() {
            self.notify_changed();
        }
    }

    /// Apply a properties-panel edit through the clamp/floor rules.
    pub fn apply_patch(&mut self, id: ElementId, patch: ElementPatch) {
        self.store.apply_patch(id, patch);
        self.notify_changed();
    }

    /// Set the selection; an absent id is rejected.
    pub fn select(&mut self, id: Option<ElementId>) -> bool {
        let accepted = self.store.select(id);
        if accepted {
            self.notify_changed();
        }
        accepted
    }

    /// Swap the element with its z-order neighbor (layers panel up/down).
    pub fn reorder(&mut self, id: ElementId, direction: LayerDirection) -> bool {
        let moved = self.store.reorder_adjacent(id, direction);
        if moved {
            self.notify_changed();
        }
        moved
    }

    // --- pointer and keyboard transitions ---

    /// Feed one pointer event through the state machine.
    pub fn handle_pointer(&mut self, input: PointerInput) {
        match input {
            PointerInput::Press { target, position } => self.handle_press(target, position),
            PointerInput::Move { position } => self.handle_move(position),
            PointerInput::Release { .. } => self.handle_release(),
        }
    }

    fn handle_press(&mut self, target: PressTarget, position: Point) {
        if !matches!(self.gesture, Gesture::Idle) {
            // The event source is expected to serialize gestures; a press
            // arriving mid-gesture is undefined input.
            log::debug!("press ignored while a gesture is active");
            return;
        }
        match target {
            PressTarget::Element(id) => {
                if self.store.selected_id() == Some(id) {
                    // Drag only starts on a press against the element that is
                    // already selected; the first press merely selects.
                    if let Some(element) = self.store.get(id) {
                        self.gesture = Gesture::Dragging {
                            id,
                            anchor_pointer: position,
                            anchor_origin: element.position(),
                        };
                        self.events.push(EditorEvent::Status(STATUS_DRAGGING));
                    }
                } else if self.store.select(Some(id)) {
                    self.notify_changed();
                }
            }
            PressTarget::ResizeHandle(id) => {
                if self.store.selected_id() == Some(id) {
                    if let Some(element) = self.store.get(id) {
                        self.gesture = Gesture::Resizing {
                            id,
                            anchor_pointer: position,
                            anchor_size: element.size(),
                        };
                        self.events.push(EditorEvent::Status(STATUS_RESIZING));
                    }
                } else {
                    // The handle only exists on the selected element; anything
                    // else is a stale event.
                    log::debug!("resize press on unselected element {id} ignored");
                }
            }
            PressTarget::Canvas => {
                if self.store.selected_id().is_some() {
                    self.store.select(None);
                    self.notify_changed();
                }
            }
        }
    }

    fn handle_move(&mut self, position: Point) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Dragging {
                id,
                anchor_pointer,
                anchor_origin,
            } => {
                let Some(element) = self.store.get(id) else {
                    self.gesture = Gesture::Idle;
                    return;
                };
                let size = element.size();
                let delta = position - anchor_pointer;
                let proposed = Point::new(
                    geometry::snap_value(anchor_origin.x + delta.x, GRID_SIZE, self.snap_to_grid),
                    geometry::snap_value(anchor_origin.y + delta.y, GRID_SIZE, self.snap_to_grid),
                );
                let target = geometry::clamp_position(proposed, size, self.store.canvas_size());
                self.store.apply_patch(
                    id,
                    ElementPatch {
                        x: Some(target.x),
                        y: Some(target.y),
                        ..Default::default()
                    },
                );
                self.notify_changed();
            }
            Gesture::Resizing {
                id,
                anchor_pointer,
                anchor_size,
            } => {
                let Some(element) = self.store.get(id) else {
                    self.gesture = Gesture::Idle;
                    return;
                };
                let origin = element.position();
                let canvas = self.store.canvas_size();
                let delta = position - anchor_pointer;
                // Floor before the canvas cap; the origin never moves during
                // a resize.
                let width =
                    geometry::snap_value(anchor_size.width + delta.x, GRID_SIZE, self.snap_to_grid)
                        .max(MIN_ELEMENT_SIZE)
                        .min(canvas.width - origin.x);
                let height = geometry::snap_value(
                    anchor_size.height + delta.y,
                    GRID_SIZE,
                    self.snap_to_grid,
                )
                .max(MIN_ELEMENT_SIZE)
                .min(canvas.height - origin.y);
                self.store.apply_patch(
                    id,
                    ElementPatch {
                        width: Some(width),
                        height: Some(height),
                        ..Default::default()
                    },
                );
                self.notify_changed();
            }
        }
    }

    fn handle_release(&mut self) {
        if !matches!(self.gesture, Gesture::Idle) {
            self.gesture = Gesture::Idle;
            self.events.push(EditorEvent::Status(STATUS_READY));
        }
    }

    /// Feed one keyboard event through the state machine. Keyboard input is
    /// only honored in `Idle` with a live selection.
    pub fn handle_key(&mut self, key: Key) {
        if !matches!(self.gesture, Gesture::Idle) {
            return;
        }
        let Some(id) = self.store.selected_id() else {
            return;
        };
        let step = if self.snap_to_grid { GRID_SIZE } else { NUDGE_STEP };
        match key {
            Key::Delete => {
                self.store.remove(id);
                self.notify_changed();
            }
            Key::ArrowLeft => self.nudge(id, Vec2::new(-step, 0.0)),
            Key::ArrowRight => self.nudge(id, Vec2::new(step, 0.0)),
            Key::ArrowUp => self.nudge(id, Vec2::new(0.0, -step)),
            Key::ArrowDown => self.nudge(id, Vec2::new(0.0, step)),
        }
    }

    fn nudge(&mut self, id: ElementId, delta: Vec2) {
        let Some(element) = self.store.get(id) else {
            return;
        };
        let target = geometry::clamp_position(
            element.position() + delta,
            element.size(),
            self.store.canvas_size(),
        );
        self.store.apply_patch(
            id,
            ElementPatch {
                x: Some(target.x),
                y: Some(target.y),
                ..Default::default()
            },
        );
        self.notify_changed();
    }

    // --- persistence and export ---

    /// Snapshot the current collection as a document.
    pub fn document(&self) -> Document {
        Document::new(self.store.elements().to_vec())
    }

    /// Replace the collection with a loaded document and clear the selection.
    pub fn load_document(&mut self, document: Document) {
        self.store.replace_all(document.elements);
        self.notify_changed();
    }

    /// Write the current document to the persistence slot.
    pub fn save_to(&self, storage: &mut dyn SlotStorage) -> Result<(), StorageError> {
        let json = self
            .document()
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        storage.put(DOCUMENT_KEY, json.as_bytes())
    }

    /// Load the persisted document at startup. An absent slot or malformed
    /// payload starts an empty collection; initialization never fails over
    /// bad persisted data.
    pub fn load_from(&mut self, storage: &dyn SlotStorage) {
        match storage.get(DOCUMENT_KEY) {
            Ok(bytes) => {
                let parsed = std::str::from_utf8(&bytes)
                    .ok()
                    .and_then(|json| Document::from_json(json).ok());
                match parsed {
                    Some(document) => self.load_document(document),
                    None => {
                        log::warn!("persisted design is malformed, starting empty");
                        self.load_document(Document::default());
                    }
                }
            }
            Err(StorageError::NotFound(_)) => {}
            Err(e) => {
                log::warn!("failed to read persisted design ({e}), starting empty");
            }
        }
    }

    /// Render the collection as a self-contained static HTML document.
    pub fn export_markup(&self) -> String {
        export::export_static_markup(self.store.elements(), self.store.canvas_size())
    }
}
