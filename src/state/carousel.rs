//! Popup gallery state: which slide is showing and how far the strip is dragged.
//!
//! The state is `Idle` (`is_dragging == false`, `drag_offset == 0`) or
//! `Dragging`. Pointer input drives it through [`CarouselAction`]; the
//! layout helpers turn it into the strip's CSS.

use std::rc::Rc;
use yew::Reducible;

use super::gesture::{GestureTracker, SwipeDecision};

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    pub current_index: usize,
    pub drag_offset: f64,
    pub is_dragging: bool,
    pub slide_count: usize,
    pub slide_width: f64,
    /// How the last swipe ended; `None` after a dot selection.
    pub last_decision: Option<SwipeDecision>,
    tracker: GestureTracker,
}

impl Carousel {
    pub fn new(slide_count: usize, slide_width: f64) -> Self {
        Self {
            current_index: 0,
            drag_offset: 0.0,
            is_dragging: false,
            slide_count,
            slide_width,
            last_decision: None,
            tracker: GestureTracker::new(slide_width),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    pub fn strip_width(&self) -> f64 {
        self.slide_count as f64 * self.slide_width
    }

    /// Horizontal strip translation: committed slide plus the live drag.
    pub fn translate_x(&self) -> f64 {
        -(self.current_index as f64 * self.slide_width) + self.drag_offset
    }

    pub fn transition(&self) -> &'static str {
        if self.is_dragging {
            "none"
        } else {
            "transform 0.4s ease"
        }
    }

    pub fn cursor(&self) -> &'static str {
        if self.is_dragging { "grabbing" } else { "grab" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselAction {
    Begin(f64),
    Move(f64),
    End,
    /// Jump straight to a slide (indicator dot).
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use CarouselAction::*;
        let mut new = (*self).clone();
        match action {
            Begin(x) => {
                if new.is_empty() {
                    return self;
                }
                new.tracker.begin(x);
                new.is_dragging = true;
                new.drag_offset = 0.0;
            }
            Move(x) => {
                if !new.tracker.is_dragging() {
                    return self;
                }
                new.drag_offset = new.tracker.move_to(x);
            }
            End => {
                if !new.tracker.is_dragging() {
                    return self;
                }
                let out = new
                    .tracker
                    .end(new.drag_offset, new.current_index, new.slide_count);
                new.current_index = out.new_index;
                new.last_decision = Some(out.decision);
                new.drag_offset = 0.0;
                new.is_dragging = false;
            }
            Select(i) => {
                if i >= new.slide_count {
                    return self;
                }
                new.current_index = i;
                new.last_decision = None;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn carousel(count: usize) -> Rc<Carousel> {
        Rc::new(Carousel::new(count, 250.0))
    }

    fn swipe(c: Rc<Carousel>, from: f64, to: f64) -> Rc<Carousel> {
        c.reduce(CarouselAction::Begin(from))
            .reduce(CarouselAction::Move(to))
            .reduce(CarouselAction::End)
    }

    #[test]
    fn starts_idle_on_first_slide() {
        let c = carousel(3);
        assert_eq!((c.current_index, c.drag_offset, c.is_dragging), (0, 0.0, false));
        assert_eq!(c.transition(), "transform 0.4s ease");
        assert_eq!(c.cursor(), "grab");
    }

    #[test]
    fn dragging_tracks_offset_without_animation() {
        let c = carousel(3)
            .reduce(CarouselAction::Begin(100.0))
            .reduce(CarouselAction::Move(40.0));
        assert!(c.is_dragging);
        assert_eq!(c.drag_offset, -60.0);
        assert_eq!(c.translate_x(), -60.0);
        assert_eq!(c.transition(), "none");
        assert_eq!(c.cursor(), "grabbing");
    }

    #[test]
    fn end_resets_offset_and_commits() {
        let c = swipe(carousel(3), 100.0, 10.0);
        assert_eq!((c.current_index, c.drag_offset, c.is_dragging), (1, 0.0, false));
        assert_eq!(c.last_decision, Some(SwipeDecision::Advance));
        assert_eq!(c.translate_x(), -250.0);
        assert_eq!(c.transition(), "transform 0.4s ease");
    }

    #[test]
    fn swipe_right_goes_back() {
        let c = swipe(swipe(carousel(3), 100.0, 10.0), 10.0, 110.0);
        assert_eq!(c.current_index, 0);
        assert_eq!(c.last_decision, Some(SwipeDecision::Retreat));
    }

    #[test]
    fn last_slide_does_not_overshoot() {
        let c = carousel(3).reduce(CarouselAction::Select(2));
        let c = swipe(c, 200.0, 0.0);
        assert_eq!(c.current_index, 2);
        assert_eq!(c.drag_offset, 0.0);
    }

    #[test]
    fn move_while_idle_changes_nothing() {
        let c = carousel(3);
        let after = c.clone().reduce(CarouselAction::Move(500.0));
        assert!(Rc::ptr_eq(&c, &after));
        let after = c.clone().reduce(CarouselAction::End);
        assert!(Rc::ptr_eq(&c, &after));
    }

    #[test]
    fn select_is_unconditional_within_range() {
        let c = carousel(4)
            .reduce(CarouselAction::Begin(0.0))
            .reduce(CarouselAction::Move(-30.0))
            .reduce(CarouselAction::Select(3));
        assert_eq!(c.current_index, 3);
        assert_eq!(c.last_decision, None);
        let c = c.reduce(CarouselAction::Select(0));
        assert_eq!(c.current_index, 0);
    }

    #[test]
    fn dot_selection_forgets_last_swipe() {
        let c = swipe(carousel(3), 100.0, 10.0);
        assert_eq!(c.last_decision, Some(SwipeDecision::Advance));
        let c = c.reduce(CarouselAction::Select(0));
        assert_eq!((c.current_index, c.last_decision), (0, None));
        assert_eq!(c.transition(), "transform 0.4s ease");
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let c = carousel(2);
        let after = c.clone().reduce(CarouselAction::Select(2));
        assert!(Rc::ptr_eq(&c, &after));
    }

    #[test]
    fn empty_gallery_never_drags() {
        let c = carousel(0).reduce(CarouselAction::Begin(10.0));
        assert!(!c.is_dragging);
        assert_eq!(c.strip_width(), 0.0);
    }

    #[test]
    fn strip_layout() {
        let c = carousel(3).reduce(CarouselAction::Select(2));
        assert_eq!(c.strip_width(), 750.0);
        assert_eq!(c.translate_x(), -500.0);
    }
}
