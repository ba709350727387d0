//! Collapsible headers and tree nodes.
//!
//! The expanded state of each header lives in the tree-node pool: a node is
//! expanded while its ID is resident. [`Opt::EXPANDED`] inverts that, so a
//! node that starts open is tracked by being absent.

use crate::command::Icon;
use crate::context::Context;
use crate::geometry::Rect;
use crate::id::Id;
use crate::input::MouseButton;
use crate::options::{Opt, Response};
use crate::style::ColorId;

impl Context {
    /// A full-width collapsible header. Reports [`Response::ACTIVE`] while
    /// expanded.
    pub fn header(&mut self, label: &str) -> Response {
        self.header_ex(label, Opt::empty())
    }

    pub fn header_ex(&mut self, label: &str, opt: Opt) -> Response {
        self.header_row(label, false, opt).1
    }

    /// Open a tree node. Returns `true` when expanded, in which case the
    /// layout is indented, the node's ID scope is open, and
    /// [`end_tree_node`](Self::end_tree_node) must follow.
    pub fn begin_tree_node(&mut self, label: &str) -> bool {
        self.begin_tree_node_ex(label, Opt::empty())
    }

    pub fn begin_tree_node_ex(&mut self, label: &str, opt: Opt) -> bool {
        let (id, res) = self.header_row(label, true, opt);
        if !res.contains(Response::ACTIVE) {
            return false;
        }
        let indent = self.style.indent;
        self.layout_indent(indent);
        self.ids.push_id(id);
        true
    }

    /// Close an expanded tree node.
    pub fn end_tree_node(&mut self) {
        let indent = self.style.indent;
        self.layout_indent(-indent);
        self.pop_id();
    }

    /// Run `f` inside the tree node when it is expanded.
    pub fn tree_node<R>(&mut self, label: &str, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_tree_node(label) {
            return None;
        }
        let res = f(self);
        self.end_tree_node();
        Some(res)
    }

    fn header_row(&mut self, label: &str, tree_node: bool, opt: Opt) -> (Id, Response) {
        let id = self.id(label);
        let slot = self.treenode_pool.get(id);
        self.layout_row(&[-1], 0);

        let resident = slot.is_some();
        let expanded = if opt.contains(Opt::EXPANDED) { !resident } else { resident };

        let rect = self.control(id, Opt::empty());
        let clicked = self.input.mouse_pressed == MouseButton::LEFT && self.focus == id;
        let resident = resident ^ clicked;

        match slot {
            Some(idx) if resident => self.treenode_pool.update(idx, self.frame),
            Some(idx) => self.treenode_pool.remove(idx),
            None if resident => {
                self.treenode_pool.init(id, self.frame);
            }
            None => {}
        }

        if tree_node {
            if self.hover == id {
                self.draw_frame(rect, ColorId::ButtonHover);
            }
        } else {
            self.draw_control_frame(id, rect, ColorId::Button, Opt::empty());
        }
        let icon = if expanded { Icon::Expanded } else { Icon::Collapsed };
        let color = self.style.colors[ColorId::Text];
        self.draw_icon(icon, Rect::new(rect.x, rect.y, rect.h, rect.h), color);

        let shift = rect.h - self.style.padding;
        let text = Rect::new(rect.x + shift, rect.y, rect.w - shift, rect.h);
        self.draw_control_text(label, text, ColorId::Text, Opt::empty());

        let res = if expanded { Response::ACTIVE } else { Response::empty() };
        (id, res)
    }
}
