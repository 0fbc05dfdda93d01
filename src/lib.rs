//! Multi-region brush selection over one or two axes.
//!
//! A [`MultiBrush`] keeps an ordered collection of rectangular regions in
//! pixel space and lets a pointer create, translate and resize them. Each
//! bound axis carries a [`Scale`] that maps between domain values and pixels,
//! so hosts can read and write regions in domain space.
//!
//! ```ignore
//! let mut brush: MultiBrush = MultiBrush::default();
//! brush.bind_axis(Axis::X, LinearScale::new([0.0, 10.0], [0.0, 100.0]));
//! brush.on(EventType::End, |event| {
//!     println!("{} regions", event.snapshot.regions.len());
//!     Ok(())
//! });
//! brush.pointer_down(PointerEvent::at(20.0, 0.0))?;
//! brush.pointer_move(PointerEvent::at(60.0, 0.0));
//! brush.pointer_up(PointerEvent::at(60.0, 0.0));
//! assert_eq!(brush.get_extent_domain()?, vec![DomainExtent::X([2.0, 6.0])]);
//! ```

pub mod brush;
pub mod clamp;
pub mod constants;
pub mod error;
pub mod events;
pub mod input;
pub mod perf;
pub mod render;
pub mod scale;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use brush::{MultiBrush, SharedBrush};
pub use error::{BrushError, BrushResult, ScaleError};
pub use events::{BrushEvent, BrushEventKind, BrushSnapshot, ChangeMode, EventType, ListenerId};
pub use input::{Modifiers, PointerEvent};
pub use render::{HeadlessRenderer, HitTarget, RenderAdapter, RenderFrame};
pub use scale::{LinearScale, Scale, ScaleAdapter};
pub use settings::BrushSettings;
pub use types::{Axis, AxisPair, DomainExtent, DomainPair, Point, Region, ResizeHandle, Span};
