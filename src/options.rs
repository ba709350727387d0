//! Control options and results.

use bitflags::bitflags;

bitflags! {
    /// Behaviour flags for controls and containers.
    ///
    /// One namespace serves both, so a window's options can be forwarded to
    /// the controls it draws for itself (title bar, close button).
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Opt: u32 {
        const ALIGN_CENTER = 1 << 0;
        const ALIGN_RIGHT = 1 << 1;
        /// Skip hover/focus handling entirely.
        const NO_INTERACT = 1 << 2;
        const NO_FRAME = 1 << 3;
        const NO_RESIZE = 1 << 4;
        const NO_SCROLL = 1 << 5;
        const NO_CLOSE = 1 << 6;
        const NO_TITLE = 1 << 7;
        /// Keep focus after the mouse button is released.
        const HOLD_FOCUS = 1 << 8;
        const AUTO_SIZE = 1 << 9;
        /// Close when the mouse is pressed outside the container.
        const POPUP = 1 << 10;
        /// Do not create the container if it does not exist yet.
        const CLOSED = 1 << 11;
        /// Headers and tree nodes start expanded.
        const EXPANDED = 1 << 12;
    }
}

bitflags! {
    /// What happened to a control this frame.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Response: u8 {
        /// The control is open/expanded.
        const ACTIVE = 1 << 0;
        /// The control was clicked or its edit was confirmed.
        const SUBMIT = 1 << 1;
        /// The bound value changed.
        const CHANGE = 1 << 2;
    }
}
