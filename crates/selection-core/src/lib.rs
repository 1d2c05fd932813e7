#![warn(missing_docs)]
//! Selection Core - Headless Multi-Cursor Selection Tracking Engine
//!
//! # Overview
//!
//! `selection-core` is a headless engine for tracking one or more
//! cursors/selections over a mutable text document. It keeps every selection
//! valid and semantically stable while the host editor mutates the document
//! or reports externally-driven selection changes, and it provides the
//! character-scanning primitives that "seek word / seek object" commands are
//! built on. It does not involve rendering, keybinding, or command dispatch;
//! those belong to the host.
//!
//! # Core Features
//!
//! - **Tracked Positions**: (line, column, offset) triples with validated and
//!   fast update paths
//! - **Caret Semantics**: non-directional, never-empty, single-symbol-minimum
//!   selections alongside the conventional empty-allowed mode
//! - **Host Reconciliation**: identity-preserving re-pairing of tracked
//!   selections with host-reported selection lists
//! - **Document-Change Adjustment**: batch translation of selections across
//!   text replacements, with degenerate selections dropped
//! - **Character Scanning**: predicate-driven symbol skipping across line
//!   boundaries with amortized per-line lookups
//! - **Change Notifications**: version numbers and subscription callbacks
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  SelectionSet (reconciliation + mutation)   │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Selection (anchor/active + caret mode)     │  ← Range Semantics
//! ├─────────────────────────────────────────────┤
//! │  Cursor & OffsetCursor (scanning)           │  ← Seek Primitives
//! ├─────────────────────────────────────────────┤
//! │  Position (tracked line/column/offset)      │  ← Coordinates
//! ├─────────────────────────────────────────────┤
//! │  Document trait (host document model)       │  ← Host Boundary
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Tracking host selections
//!
//! ```rust
//! use selection_core::{
//!     Coord, CoordSelection, SelectionPolicy, SelectionSet, TextDocument,
//! };
//!
//! let doc = TextDocument::from_text("fn main() {\n    println!(\"Hello\");\n}\n");
//!
//! // Caret mode: a point always occupies one symbol.
//! let mut set = SelectionSet::new(
//!     &doc,
//!     SelectionPolicy::caret(),
//!     &[CoordSelection::caret(Coord::new(0, 3))],
//! );
//!
//! let main = set.main().unwrap();
//! assert!(main.is_single_symbol());
//!
//! // The host reports the user clicked elsewhere; identity is preserved.
//! let id = main.id();
//! set.notify_selections_changed(&doc, &[CoordSelection::caret(Coord::new(1, 4))]);
//! assert_eq!(set.main().unwrap().id(), id);
//! ```
//!
//! ## Scanning
//!
//! ```rust
//! use selection_core::{Cursor, Direction, Position, SkipOptions, TextDocument};
//!
//! let doc = TextDocument::from_text("foo   bar");
//! let mut position = Position::from_offset(&doc, 0);
//!
//! let mut cursor = Cursor::new(&doc, &mut position);
//! cursor.skip_while(
//!     Direction::Forward,
//!     |c, _offset, _line, _column| c.is_alphanumeric(),
//!     SkipOptions::default(),
//! );
//! assert_eq!(cursor.position().offset(), 3);
//! ```
//!
//! # Module Description
//!
//! - [`document`] - host document boundary ([`Document`], [`TextDocument`],
//!   change batches)
//! - [`position`] - tracked positions and the movement vocabulary
//! - [`selection`] - anchor/active selections and caret-mode normalization
//! - [`selection_set`] - selection sets, host reconciliation, bulk mutation
//! - [`cursor`] - character scanners ([`Cursor`], [`OffsetCursor`])
//! - [`classes`] - character classes for scanning predicates
//! - [`intervals`] - batch-oriented offset-interval tracking for history
//!   bookkeeping
//! - [`host`] - the host editor trait and an in-process implementation
//!
//! # Concurrency
//!
//! Single-threaded and host-event-driven: every entry point completes its
//! whole read-modify-write cycle before returning. Document-change
//! notifications for an edit must be processed before the selection report
//! that reflects the same edit. Scanners are invalidated by any document
//! change and must not be retained across one.

pub mod classes;
pub mod cursor;
pub mod document;
pub mod host;
pub mod intervals;
pub mod position;
pub mod selection;
pub mod selection_set;

pub use classes::{CharCategory, CharacterClasses};
pub use cursor::{Cursor, LineLimit, OffsetCursor, ScanError, Select, SkipOptions};
pub use document::{ContentChange, Coord, CoordSelection, Document, TextDocument};
pub use host::{EditorId, HostEditor, LocalEditor};
pub use intervals::{IntervalTracker, OffsetInterval};
pub use position::{
    Anchor, CollapseFlags, Direction, LineBoundary, MoveMode, Position, SavedPosition,
};
pub use selection::{SavedSelection, Selection, SelectionId, SelectionPolicy};
pub use selection_set::{
    CopyId, SelectionEvent, SelectionEventCallback, SelectionEventKind, SelectionSet,
    SelectionTracker,
};
