//! BoxBoard Core Library
//!
//! Platform-agnostic model and interaction logic for the BoxBoard canvas
//! editor: the element store, the drag/resize/keyboard state machine, grid
//! snapping and canvas clamping, JSON persistence, and static HTML export.
//! Rendering and panel widgets are external collaborators that consume the
//! editor's notifications and feed hit-tested input events back in.

pub mod editor;
pub mod elements;
pub mod export;
pub mod geometry;
pub mod persist;
pub mod storage;
pub mod store;

pub use editor::{Editor, EditorEvent, Gesture, Key, PointerInput, PressTarget};
pub use elements::{Element, ElementId, ElementKind, Rectangle, Rgba, Text};
pub use export::export_static_markup;
pub use geometry::{GRID_SIZE, MIN_ELEMENT_SIZE, NUDGE_STEP};
pub use persist::{DATA_EXPORT_NAME, DOCUMENT_KEY, Document, MARKUP_EXPORT_NAME};
pub use storage::{MemoryStorage, SlotStorage, StorageError};
pub use store::{ElementPatch, ElementStore, LayerDirection};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
