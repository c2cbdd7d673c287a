//! Headless horizontally paged card list.
//!
//! The view owns its adapter and decides when, within an insertion or
//! deletion animation, the adapter's data-changed signal fires:
//!
//! * insertion: when the animation starts, then the view scrolls to the new
//!   card;
//! * deletion: when the animation ends, then the selection lands on
//!   `min(position, count - 1)`;
//! * navigation: never.

use std::cell::RefCell;
use std::rc::Rc;

use glass_animation::{AnimationSpec, Easing, ValueAnimator};
use glass_cards::{AnimationKind, CardScrollAdapter, CardView, PendingChange};
use glass_core::RuntimeHandle;
use indexmap::IndexMap;

/// Animation timing per [`AnimationKind`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollerConfig {
    pub insertion: AnimationSpec,
    pub deletion: AnimationSpec,
    pub navigation: AnimationSpec,
}

impl ScrollerConfig {
    pub fn spec_for(&self, kind: AnimationKind) -> AnimationSpec {
        match kind {
            AnimationKind::Insertion => self.insertion,
            AnimationKind::Deletion => self.deletion,
            AnimationKind::Navigation => self.navigation,
        }
    }
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            insertion: AnimationSpec::tween(300, Easing::FastOutSlowIn),
            deletion: AnimationSpec::tween(300, Easing::FastOutSlowIn),
            navigation: AnimationSpec::tween(250, Easing::FastOutSlowIn),
        }
    }
}

struct RunningAnimation {
    id: u64,
    change: PendingChange,
    from: f32,
    animator: ValueAnimator,
}

struct ScrollViewInner<A> {
    runtime: RuntimeHandle,
    config: ScrollerConfig,
    adapter: Option<A>,
    active: bool,
    selected: Option<usize>,
    scroll_position: f32,
    progress: f32,
    animation: Option<RunningAnimation>,
    next_animation_id: u64,
    current_view: Option<CardView>,
    // One parked view per view type.
    recycled: IndexMap<usize, CardView>,
}

impl<A: CardScrollAdapter> ScrollViewInner<A> {
    fn count(&self) -> usize {
        self.adapter.as_ref().map_or(0, CardScrollAdapter::count)
    }

    fn select(&mut self, position: Option<usize>) {
        let count = self.count();
        self.selected = match position {
            _ if count == 0 => None,
            Some(position) => Some(position.min(count - 1)),
            None => Some(0),
        };
        self.scroll_position = self.selected.map_or(0.0, |position| position as f32);
    }

    fn rebind(&mut self) {
        if let Some(view) = self.current_view.take() {
            self.recycled.insert(view.view_type(), view);
        }
        let (Some(adapter), Some(position)) = (self.adapter.as_ref(), self.selected) else {
            return;
        };
        let recycled = self.recycled.shift_remove(&adapter.item_view_type(position));
        self.current_view = adapter.view(position, recycled);
        if self.current_view.is_none() {
            log::error!("adapter produced no view for position {position}");
        }
    }

    /// Signals data-changed on the adapter and re-reads the selected card.
    fn data_changed(&mut self) {
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.notify_data_set_changed();
        }
        self.select(self.selected);
        self.rebind();
    }

    fn on_animation_update(&mut self, id: u64, value: f32) {
        let Some((change, from)) = self
            .animation
            .as_ref()
            .filter(|running| running.id == id)
            .map(|running| (running.change, running.from))
        else {
            return;
        };
        self.progress = value;
        if change.kind != AnimationKind::Deletion {
            let to = change.position as f32;
            self.scroll_position = from + (to - from) * value;
        }
    }

    fn on_animation_end(&mut self, id: u64) {
        if !matches!(&self.animation, Some(running) if running.id == id) {
            return;
        }
        let Some(running) = self.animation.take() else {
            return;
        };
        self.progress = 0.0;
        let change = running.change;
        match change.kind {
            AnimationKind::Insertion | AnimationKind::Navigation => {
                self.select(Some(change.position));
                self.rebind();
            }
            AnimationKind::Deletion => {
                self.selected = Some(change.position);
                self.data_changed();
            }
        }
        log::debug!("{change} finished, selected {:?}", self.selected);
    }
}

/// Host view for a [`CardScrollAdapter`].
///
/// Input (`tap`, swipes) is accepted only while the view is active and no
/// animation is running. Adapter observers run while the view is borrowed
/// and must not call back into it.
pub struct CardScrollView<A> {
    inner: Rc<RefCell<ScrollViewInner<A>>>,
}

impl<A> Clone for CardScrollView<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: CardScrollAdapter + 'static> CardScrollView<A> {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self::with_config(runtime, ScrollerConfig::default())
    }

    pub fn with_config(runtime: RuntimeHandle, config: ScrollerConfig) -> Self {
        let inner = ScrollViewInner {
            runtime,
            config,
            adapter: None,
            active: false,
            selected: None,
            scroll_position: 0.0,
            progress: 0.0,
            animation: None,
            next_animation_id: 0,
            current_view: None,
            recycled: IndexMap::new(),
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Binds `adapter`, selects the first card and signals data-changed once.
    ///
    /// An animation in flight is cancelled without firing its deferred
    /// notification. Returns the previously bound adapter.
    pub fn set_adapter(&self, adapter: A) -> Option<A> {
        let in_flight = self
            .inner
            .borrow_mut()
            .animation
            .take()
            .map(|running| running.animator);
        if let Some(animator) = in_flight {
            animator.cancel();
        }

        let mut inner = self.inner.borrow_mut();
        let previous = inner.adapter.replace(adapter);
        inner.current_view = None;
        inner.recycled.clear();
        inner.selected = None;
        inner.progress = 0.0;
        inner.data_changed();
        log::debug!("adapter bound with {} cards", inner.count());
        previous
    }

    /// Starts the `kind` animation at `position`.
    ///
    /// For insertion and deletion the adapter must already reflect the
    /// change. An animation still in flight is first run to its end.
    ///
    /// # Panics
    ///
    /// Panics if no adapter is bound, if a navigation or insertion targets a
    /// position outside `0..count`, if a deletion targets a position past
    /// `count`, or if the adapter rejects the change.
    pub fn animate(&self, position: usize, kind: AnimationKind) {
        self.finish_in_flight();

        let animator = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            let count = inner.count();
            let Some(adapter) = inner.adapter.as_mut() else {
                panic!("cannot animate {kind} at {position}: no adapter is bound");
            };
            match kind {
                AnimationKind::Navigation => assert!(
                    position < count,
                    "cannot navigate to {position}: view holds {count} cards"
                ),
                // The store already holds the inserted card.
                AnimationKind::Insertion => assert!(
                    position < count,
                    "cannot animate {kind} at {position}: view holds {count} cards"
                ),
                AnimationKind::Deletion => assert!(
                    position <= count,
                    "cannot animate {kind} at {position}: view holds {count} cards"
                ),
            }
            adapter.on_animation_started(position, kind);

            if kind == AnimationKind::Insertion {
                // The selection follows the card it showed before the insert.
                let selected = match inner.selected {
                    Some(selected) if position <= selected => Some(selected + 1),
                    selected => selected,
                };
                inner.selected = selected;
                inner.data_changed();
            }

            let id = inner.next_animation_id;
            inner.next_animation_id += 1;
            let change = PendingChange::new(position, kind);
            let animator =
                ValueAnimator::of_float(inner.runtime.clone(), 0.0, 1.0, inner.config.spec_for(kind));
            let weak = Rc::downgrade(&self.inner);
            animator.on_update({
                let weak = weak.clone();
                move |value| {
                    if let Some(inner) = weak.upgrade() {
                        inner.borrow_mut().on_animation_update(id, value);
                    }
                }
            });
            animator.on_end(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().on_animation_end(id);
                }
            });
            inner.progress = 0.0;
            inner.animation = Some(RunningAnimation {
                id,
                change,
                from: inner.scroll_position,
                animator: animator.clone(),
            });
            log::debug!("animating {change}");
            animator
        };
        animator.start();
    }

    fn finish_in_flight(&self) {
        let in_flight = self
            .inner
            .borrow()
            .animation
            .as_ref()
            .map(|running| (running.change, running.animator.clone()));
        if let Some((change, animator)) = in_flight {
            log::debug!("fast-forwarding {change}");
            animator.end();
        }
    }

    /// Enables input; called when the hosting screen becomes visible.
    pub fn activate(&self) {
        self.inner.borrow_mut().active = true;
    }

    /// Disables input; called when the hosting screen is hidden.
    pub fn deactivate(&self) {
        self.inner.borrow_mut().active = false;
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    /// Returns the selected position, or `None` if the tap is ignored.
    pub fn tap(&self) -> Option<usize> {
        let (position, _) = self.accept_input("tap")?;
        log::debug!("tap on card {position}");
        Some(position)
    }

    /// Navigates to the next card. Returns `false` at the last card or when
    /// input is ignored.
    pub fn swipe_forward(&self) -> bool {
        match self.accept_input("swipe forward") {
            Some((position, count)) if position + 1 < count => {
                self.animate(position + 1, AnimationKind::Navigation);
                true
            }
            _ => false,
        }
    }

    /// Navigates to the previous card. Returns `false` at the first card or
    /// when input is ignored.
    pub fn swipe_back(&self) -> bool {
        match self.accept_input("swipe back") {
            Some((position, _)) if position > 0 => {
                self.animate(position - 1, AnimationKind::Navigation);
                true
            }
            _ => false,
        }
    }

    fn accept_input(&self, what: &str) -> Option<(usize, usize)> {
        let inner = self.inner.borrow();
        if !inner.active {
            log::warn!("{what} ignored: view is not active");
            return None;
        }
        if let Some(running) = &inner.animation {
            log::warn!("{what} ignored: {} in flight", running.change);
            return None;
        }
        let Some(position) = inner.selected else {
            log::warn!("{what} ignored: no cards");
            return None;
        };
        Some((position, inner.count()))
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.inner.borrow().selected
    }

    /// Card count as last read by the view.
    pub fn count(&self) -> usize {
        self.inner.borrow().count()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().animation.is_some()
    }

    /// The animation in flight and its progress in `0.0..=1.0`.
    pub fn animation_progress(&self) -> Option<(PendingChange, f32)> {
        let inner = self.inner.borrow();
        inner
            .animation
            .as_ref()
            .map(|running| (running.change, inner.progress))
    }

    /// Fractional card position currently on screen.
    pub fn scroll_position(&self) -> f32 {
        self.inner.borrow().scroll_position
    }

    pub fn current_view(&self) -> Option<CardView> {
        self.inner.borrow().current_view.clone()
    }

    pub fn with_adapter<R>(&self, f: impl FnOnce(&A) -> R) -> Option<R> {
        self.inner.borrow().adapter.as_ref().map(f)
    }

    /// Gives mutable access to the adapter, e.g. to mutate it before
    /// calling [`CardScrollView::animate`].
    pub fn with_adapter_mut<R>(&self, f: impl FnOnce(&mut A) -> R) -> Option<R> {
        self.inner.borrow_mut().adapter.as_mut().map(f)
    }
}
