//! Retained container state and the container stack.

use tracing::debug;

use super::Context;
use crate::geometry::{Rect, Vec2};
use crate::id::{Id, IdKey};
use crate::options::Opt;

/// Persistent state of a window, popup or panel.
///
/// Lives in a pool slot and survives between frames while its name keeps
/// being referenced. `head` and `tail` index the jump commands bracketing
/// a root container's region of the command buffer; panels leave them
/// unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Container {
    pub rect: Rect,
    pub body: Rect,
    pub content_size: Vec2,
    pub scroll: Vec2,
    pub zindex: i32,
    pub open: bool,
    pub head: Option<usize>,
    pub tail: Option<usize>,
}

impl Context {
    /// Look up a container, creating it unless `opt` holds [`Opt::CLOSED`].
    ///
    /// A closed container that is looked up with `CLOSED` is not stamped,
    /// so it ages out of the pool like any unreferenced one.
    pub(crate) fn container_index(&mut self, id: Id, opt: Opt) -> Option<usize> {
        if let Some(idx) = self.container_pool.get(id) {
            if self.containers[idx].open || !opt.contains(Opt::CLOSED) {
                self.container_pool.update(idx, self.frame);
            }
            return Some(idx);
        }
        if opt.contains(Opt::CLOSED) {
            return None;
        }
        Some(self.create_container(id))
    }

    /// Look up a container, creating it if needed.
    pub(crate) fn ensure_container(&mut self, id: Id) -> usize {
        match self.container_pool.get(id) {
            Some(idx) => {
                self.container_pool.update(idx, self.frame);
                idx
            }
            None => self.create_container(id),
        }
    }

    fn create_container(&mut self, id: Id) -> usize {
        let idx = self.container_pool.init(id, self.frame);
        self.containers[idx] = Container { open: true, ..Container::default() };
        self.bring_to_front(idx);
        debug!(slot = idx, id = id.0, zindex = self.last_zindex, "container created");
        idx
    }

    /// The container named `name` under the current ID scope, created on
    /// first use.
    pub fn container_mut<'a>(&mut self, name: impl Into<IdKey<'a>>) -> &mut Container {
        let id = self.id(name);
        let idx = self.ensure_container(id);
        &mut self.containers[idx]
    }

    /// Read a container by pool slot.
    pub fn container(&self, idx: usize) -> &Container {
        &self.containers[idx]
    }

    /// Give a container the highest z-index so far.
    pub fn bring_to_front(&mut self, idx: usize) {
        self.last_zindex += 1;
        self.containers[idx].zindex = self.last_zindex;
    }

    /// Pool slot of the innermost open container.
    ///
    /// # Panics
    ///
    /// Panics outside a window, popup or panel.
    pub fn current_container_index(&self) -> usize {
        match self.container_stack.last() {
            Some(idx) => *idx,
            None => panic!("container requested with an empty container stack"),
        }
    }

    /// The innermost open container.
    pub fn current_container(&self) -> &Container {
        &self.containers[self.current_container_index()]
    }

    pub fn current_container_mut(&mut self) -> &mut Container {
        let idx = self.current_container_index();
        &mut self.containers[idx]
    }

    // -- root containers ----------------------------------------------------

    pub(crate) fn begin_root_container(&mut self, idx: usize) {
        self.container_stack.push(idx);
        self.root_list.push(idx);
        self.containers[idx].head = Some(self.commands.push_jump(None));

        let cnt = &self.containers[idx];
        let above = match self.next_hover_root {
            Some(h) => cnt.zindex > self.containers[h].zindex,
            None => true,
        };
        if cnt.rect.contains(self.input.mouse_pos) && above {
            self.next_hover_root = Some(idx);
        }

        // A root opened inside another must not be clipped to its parent.
        self.clips.push_unclipped(Rect::UNCLIPPED);
    }

    pub(crate) fn end_root_container(&mut self) {
        let idx = self.current_container_index();
        let tail = self.commands.push_jump(None);
        let len = self.commands.len();
        let cnt = &mut self.containers[idx];
        cnt.tail = Some(tail);
        if let Some(head) = cnt.head {
            // Until linked, the head skips the whole region.
            self.commands.patch_jump(head, len);
        }
        self.clips.pop();
        self.pop_container();
    }

    // -- bodies -------------------------------------------------------------

    pub(crate) fn push_container_body(&mut self, idx: usize, body: Rect, opt: Opt) {
        let body = if opt.contains(Opt::NO_SCROLL) { body } else { self.scrollbars(idx, body) };
        let scroll = self.containers[idx].scroll;
        self.layouts.push(body.inset(self.style.padding), scroll);
        self.containers[idx].body = body;
    }

    /// Close the innermost container: record its content size and pop its
    /// container, layout and ID scope.
    pub(crate) fn pop_container(&mut self) {
        let idx = self.current_container_index();
        let layout = self.layouts.pop();
        self.containers[idx].content_size = layout.content_size();
        self.container_stack.pop();
        self.ids.pop();
    }

    /// Whether the innermost containers up to the enclosing root include
    /// the hover root.
    pub(crate) fn in_hover_root(&self) -> bool {
        for &idx in self.container_stack.iter().rev() {
            if Some(idx) == self.hover_root {
                return true;
            }
            // Only roots carry a head; stop at the enclosing one.
            if self.containers[idx].head.is_some() {
                break;
            }
        }
        false
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::geometry::Rect;
    use crate::metrics::FixedMetrics;
    use crate::options::Opt;
    use crate::Context;

    #[test]
    fn container_mut_creates_once() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.begin();
        ctx.container_mut("win").rect = Rect::new(1, 2, 3, 4);
        assert_eq!(ctx.container_mut("win").rect, Rect::new(1, 2, 3, 4));
        assert!(ctx.container_mut("win").open);
        ctx.end().unwrap();
    }

    #[test]
    fn new_containers_stack_upwards() {
        let mut ctx = Context::new(FixedMetrics::default());
        let a = ctx.container_mut("a").zindex;
        let b = ctx.container_mut("b").zindex;
        assert!(b > a);
        assert_eq!(ctx.container_mut("a").zindex, a);
    }

    #[test]
    fn geometry_set_before_first_frame_is_kept() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.container_mut("left").rect = Rect::new(0, 0, 50, 50);
        ctx.container_mut("right").rect = Rect::new(60, 0, 50, 50);
        assert_eq!(ctx.container_mut("left").rect, Rect::new(0, 0, 50, 50));

        ctx.begin();
        assert!(ctx.window("left", Rect::new(5, 5, 5, 5), Opt::empty(), |_| ()).is_some());
        assert!(ctx.window("right", Rect::new(5, 5, 5, 5), Opt::empty(), |_| ()).is_some());
        ctx.end().unwrap();

        assert_eq!(ctx.container_mut("left").rect, Rect::new(0, 0, 50, 50));
        assert_eq!(ctx.container_mut("right").rect, Rect::new(60, 0, 50, 50));
    }

    #[test]
    fn closed_lookup_does_not_create() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.begin();
        assert!(!ctx.begin_popup("menu"));
        ctx.end().unwrap();
    }

    #[test]
    fn closed_window_keeps_geometry() {
        let mut ctx = Context::new(FixedMetrics::default());
        ctx.begin();
        assert!(ctx.begin_window("w", Rect::new(10, 10, 100, 100), Opt::empty()));
        ctx.end_window();
        ctx.end().unwrap();

        ctx.container_mut("w").rect = Rect::new(30, 30, 120, 90);
        ctx.container_mut("w").open = false;

        ctx.begin();
        assert!(!ctx.begin_window("w", Rect::new(10, 10, 100, 100), Opt::empty()));
        ctx.end().unwrap();

        ctx.container_mut("w").open = true;
        ctx.begin();
        assert!(ctx.begin_window("w", Rect::new(10, 10, 100, 100), Opt::empty()));
        assert_eq!(ctx.current_container().rect, Rect::new(30, 30, 120, 90));
        ctx.end_window();
        ctx.end().unwrap();
    }

    #[test]
    fn pool_pressure_recycles_oldest_window() {
        let config = Config::default().with_container_pool_size(2);
        let mut ctx = Context::with_config(FixedMetrics::default(), config);
        let opt = Opt::NO_FRAME;
        for name in ["one", "two", "three"] {
            ctx.begin();
            ctx.begin_window(name, Rect::new(0, 0, 10, 10), opt);
            ctx.end_window();
            ctx.end().unwrap();
        }
        // "one" was evicted; referencing it again yields a fresh container.
        ctx.begin();
        let before = ctx.last_zindex;
        ctx.begin_window("one", Rect::new(5, 5, 10, 10), opt);
        assert_eq!(ctx.current_container().rect, Rect::new(5, 5, 10, 10));
        assert!(ctx.current_container().zindex > before);
        ctx.end_window();
        ctx.end().unwrap();
    }
}
