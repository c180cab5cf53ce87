#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shortcuts;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use command::{Command, CommitOutcome, History};
pub use config::SketchConfig;
pub use element::{Drawable, StickerMark, Stroke};
pub use error::{SketchError, SketchResult};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use export::{ExportError, Exporter};
pub use input::{InputHandler, PointerEvent, PointerSnapshot};
pub use renderer::Renderer;
pub use state::Sketchpad;
pub use surface::{PainterSurface, PixmapSurface, RecordingSurface, Surface, SurfaceOp};
pub use tools::{Tool, ToolPreview, ToolState};
