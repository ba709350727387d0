//! # gilt-imui
//!
//! An embeddable immediate-mode GUI kernel.
//!
//! The host calls widget functions every frame; the engine turns those calls
//! into a flat list of draw commands (clip, rect, text, icon) that any
//! renderer can replay. There is no retained widget tree. The only state
//! kept between frames is keyed by IDs hashed from labels under a scope
//! stack: window geometry, scroll offsets, tree-node expansion, hover and
//! focus.
//!
//! ## Core Systems
//!
//! - **[`id`]** — FNV-1a IDs scoped by a stack of parent IDs
//! - **[`clip`]** — Clip rectangle stack and visibility tests
//! - **[`layout`]** — Row/column cursor layout with relative sizes
//! - **[`command`]** — Append-only command buffer with jump-linked z-order
//! - **[`pool`]** — Fixed-capacity LRU pools for retained state
//! - **[`context`]** — The engine: frame lifecycle, hover/focus, containers
//! - **[`widgets`]** — Labels, buttons, checkboxes, text boxes, sliders,
//!   numbers, headers, tree nodes, windows, popups and panels
//! - **[`term`]** — Crossterm renderer and input adapter for cell grids
//! - **[`testing`]** — Headless [`Pilot`](testing::Pilot) for tests
//!
//! ## Example
//!
//! ```
//! use gilt_imui::{Context, FixedMetrics, Opt, Rect};
//!
//! let mut ctx = Context::new(FixedMetrics::default());
//! let mut enabled = true;
//! ctx.begin();
//! ctx.window("Settings", Rect::new(10, 10, 240, 160), Opt::empty(), |ctx| {
//!     ctx.layout_row(&[80, -1], 0);
//!     ctx.label("Enabled:");
//!     ctx.checkbox("on", &mut enabled);
//! });
//! ctx.end().unwrap();
//! assert!(ctx.commands().count() > 0);
//! ```

// Foundation
pub mod config;
pub mod error;
pub mod geometry;
pub mod options;
pub mod style;

// Core systems
pub mod clip;
pub mod command;
pub mod id;
pub mod input;
pub mod layout;
pub mod metrics;
pub mod pool;

// Engine and controls
pub mod context;
pub mod widgets;

// Backends
pub mod term;
pub mod testing;

pub use command::{Command, Icon};
pub use config::Config;
pub use context::{default_draw_frame, Container, Context, DrawFrameFn, Real};
pub use error::{FrameError, StackKind};
pub use geometry::{Color, Rect, Vec2};
pub use id::{Id, IdKey};
pub use input::{Key, MouseButton};
pub use metrics::{FixedMetrics, LineMetrics, TextMetrics};
pub use options::{Opt, Response};
pub use style::{ColorId, FontId, Style};
pub use widgets::format_real;
