//! The engine instance.
//!
//! A [`Context`] owns everything that outlives a single widget call: the
//! four per-frame stacks (ID, clip, container, layout), the command buffer,
//! the hover/focus state machine and the two retained-state pools. The host
//! creates one, feeds it input, and brackets every frame with
//! [`begin`](Context::begin) and [`end`](Context::end):
//!
//! ```
//! use gilt_imui::{Context, FixedMetrics, Opt, Rect};
//!
//! let mut ctx = Context::new(FixedMetrics::default());
//! ctx.input_mouse_move(20, 40);
//! ctx.begin();
//! if ctx.begin_window("Demo", Rect::new(10, 10, 200, 150), Opt::empty()) {
//!     if ctx.button("Press").is_empty() {
//!         // not clicked this frame
//!     }
//!     ctx.end_window();
//! }
//! ctx.end().unwrap();
//! for cmd in ctx.commands() {
//!     // hand `cmd` to a renderer
//!     let _ = cmd;
//! }
//! ```

mod container;
mod control;
mod draw;
mod frame;
mod placement;

pub use container::Container;
pub use draw::default_draw_frame;

use crate::clip::ClipStack;
use crate::command::{CommandList, Commands};
use crate::config::Config;
use crate::geometry::{Rect, Vec2};
use crate::id::{Id, IdStack};
use crate::input::{InputState, Key, MouseButton};
use crate::layout::LayoutStack;
use crate::metrics::TextMetrics;
use crate::pool::Pool;
use crate::style::{ColorId, FontId, Style};

/// Scalar type for slider and number values.
pub type Real = f32;

/// Signature of the replaceable frame painter.
pub type DrawFrameFn = fn(&mut Context, Rect, ColorId);

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// An immediate-mode UI engine.
pub struct Context {
    /// Visual configuration; may be replaced between frames.
    pub style: Style,
    /// Paints control and container frames. Defaults to
    /// [`default_draw_frame`].
    pub draw_frame_fn: DrawFrameFn,

    pub(crate) metrics: Box<dyn TextMetrics>,

    // interaction state
    pub(crate) hover: Id,
    pub(crate) focus: Id,
    pub(crate) updated_focus: bool,
    pub(crate) last_rect: Rect,
    pub(crate) last_zindex: i32,
    pub(crate) frame: u64,
    pub(crate) in_frame: bool,
    pub(crate) hover_root: Option<usize>,
    pub(crate) next_hover_root: Option<usize>,
    pub(crate) scroll_target: Option<usize>,
    pub(crate) number_edit: Id,
    pub(crate) number_edit_buf: String,
    pub(crate) number_pending: Id,
    pub(crate) number_pending_buf: String,
    pub(crate) fmt_buf: String,

    // per-frame stacks
    pub(crate) commands: CommandList,
    pub(crate) root_list: Vec<usize>,
    pub(crate) container_stack: Vec<usize>,
    pub(crate) clips: ClipStack,
    pub(crate) ids: IdStack,
    pub(crate) layouts: LayoutStack,

    // retained state
    pub(crate) container_pool: Pool,
    pub(crate) containers: Box<[Container]>,
    pub(crate) treenode_pool: Pool,

    pub(crate) input: InputState,
}

impl Context {
    /// Create an engine with the default style and capacities.
    pub fn new(metrics: impl TextMetrics + 'static) -> Self {
        Self::with_config(metrics, Config::default())
    }

    /// Create an engine with explicit capacities.
    ///
    /// # Panics
    ///
    /// Panics if either pool size is zero.
    pub fn with_config(metrics: impl TextMetrics + 'static, config: Config) -> Self {
        Self {
            style: Style::default(),
            draw_frame_fn: default_draw_frame,
            metrics: Box::new(metrics),
            hover: Id::NONE,
            focus: Id::NONE,
            updated_focus: false,
            last_rect: Rect::ZERO,
            last_zindex: 0,
            frame: 0,
            in_frame: false,
            hover_root: None,
            next_hover_root: None,
            scroll_target: None,
            number_edit: Id::NONE,
            number_edit_buf: String::with_capacity(32),
            number_pending: Id::NONE,
            number_pending_buf: String::with_capacity(32),
            fmt_buf: String::with_capacity(32),
            commands: CommandList::with_capacity(config.command_capacity, config.text_capacity),
            root_list: Vec::with_capacity(config.root_capacity),
            container_stack: Vec::with_capacity(config.root_capacity),
            clips: ClipStack::with_capacity(config.stack_capacity),
            ids: IdStack::with_capacity(config.stack_capacity),
            layouts: LayoutStack::with_capacity(config.stack_capacity),
            container_pool: Pool::new(config.container_pool_size),
            containers: vec![Container::default(); config.container_pool_size].into_boxed_slice(),
            treenode_pool: Pool::new(config.treenode_pool_size),
            input: InputState::with_text_capacity(64),
        }
    }

    /// Replace the style (builder).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // -- state accessors ----------------------------------------------------

    /// The control under the mouse, or [`Id::NONE`].
    pub fn hover(&self) -> Id {
        self.hover
    }

    /// The control holding focus, or [`Id::NONE`].
    pub fn focus(&self) -> Id {
        self.focus
    }

    /// Frames begun since creation.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether a frame is being built.
    pub fn in_frame(&self) -> bool {
        self.in_frame
    }

    /// The rectangle of the most recently placed control.
    pub fn last_rect(&self) -> Rect {
        self.last_rect
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// The raw command buffer, jumps included.
    pub fn command_list(&self) -> &CommandList {
        &self.commands
    }

    /// Traverse this frame's commands in z-order.
    ///
    /// Only meaningful after [`end`](Self::end) has linked the root
    /// containers.
    pub fn commands(&self) -> Commands<'_> {
        self.commands.iter()
    }

    /// Feed every command to `f`, then drop the buffer's contents.
    pub fn render(&mut self, mut f: impl FnMut(crate::command::Command<'_>)) {
        for cmd in self.commands.iter() {
            f(cmd);
        }
        self.commands.clear();
    }

    /// Root containers opened this frame, in z-order once the frame ended.
    pub fn root_list(&self) -> &[usize] {
        &self.root_list
    }

    /// Current depth of the ID, clip, container and layout stacks.
    pub fn stack_depths(&self) -> [usize; 4] {
        [self.ids.len(), self.clips.len(), self.container_stack.len(), self.layouts.len()]
    }

    // -- text metrics -------------------------------------------------------

    pub fn text_width(&self, font: FontId, text: &str) -> i32 {
        self.metrics.measure(font, text)
    }

    pub fn text_height(&self, font: FontId) -> i32 {
        self.metrics.line_metrics(font).height()
    }

    // -- input --------------------------------------------------------------

    pub fn input_mouse_move(&mut self, x: i32, y: i32) {
        self.input.mouse_move(x, y);
    }

    pub fn input_mouse_down(&mut self, x: i32, y: i32, button: MouseButton) {
        self.input.mouse_down(x, y, button);
    }

    pub fn input_mouse_up(&mut self, x: i32, y: i32, button: MouseButton) {
        self.input.mouse_up(x, y, button);
    }

    pub fn input_scroll(&mut self, dx: i32, dy: i32) {
        self.input.scroll(dx, dy);
    }

    pub fn input_key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn input_key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    pub fn input_text(&mut self, text: &str) {
        self.input.text(text);
    }

    pub(crate) fn mouse_pos(&self) -> Vec2 {
        self.input.mouse_pos
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("frame", &self.frame)
            .field("hover", &self.hover)
            .field("focus", &self.focus)
            .field("commands", &self.commands.len())
            .field("roots", &self.root_list)
            .finish_non_exhaustive()
    }
}
