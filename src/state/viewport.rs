// Map viewport: zoom level and how far the user has dragged away from the
// followed position.
use std::rc::Rc;
use yew::Reducible;

use crate::model::Coordinate;
use crate::tiles::{TilePlacement, WorldPoint, project, visible_tiles};

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// World-pixel offset of the view center from the followed position.
    pub pan_x: f64,
    pub pan_y: f64,
    pub panning: bool,
    /// The current or last press moved the map; suppresses the click that follows.
    pub moved: bool,
    pub last_x: f64,
    pub last_y: f64,
}

impl Viewport {
    pub fn new(zoom: u8, min_zoom: u8, max_zoom: u8) -> Self {
        Self {
            zoom: zoom.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
            pan_x: 0.0,
            pan_y: 0.0,
            panning: false,
            moved: false,
            last_x: 0.0,
            last_y: 0.0,
        }
    }

    pub fn is_following(&self) -> bool {
        self.pan_x == 0.0 && self.pan_y == 0.0
    }

    /// Returns false when the zoom is already at the bound.
    fn set_zoom(&mut self, zoom: u8) -> bool {
        let zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        if zoom == self.zoom {
            return false;
        }
        let scale = 2f64.powi(i32::from(zoom) - i32::from(self.zoom));
        self.pan_x *= scale;
        self.pan_y *= scale;
        self.zoom = zoom;
        true
    }

    pub fn center(&self, followed: Coordinate) -> WorldPoint {
        let p = project(followed, self.zoom);
        WorldPoint {
            x: p.x + self.pan_x,
            y: p.y + self.pan_y,
        }
    }

    /// Position of `coord` in viewport pixels.
    pub fn screen_point(&self, coord: Coordinate, followed: Coordinate, width: f64, height: f64) -> (f64, f64) {
        let c = self.center(followed);
        let p = project(coord, self.zoom);
        (p.x - c.x + width / 2.0, p.y - c.y + height / 2.0)
    }

    pub fn tiles(&self, followed: Coordinate, width: f64, height: f64) -> Vec<TilePlacement> {
        visible_tiles(self.center(followed), self.zoom, width, height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportAction {
    ZoomIn,
    ZoomOut,
    PanStart { x: f64, y: f64 },
    PanMove { x: f64, y: f64 },
    PanEnd,
    /// Follow the current position again.
    Recenter,
}

impl Reducible for Viewport {
    type Action = ViewportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ViewportAction::*;
        let mut new = (*self).clone();
        match action {
            ZoomIn => {
                if !new.set_zoom(new.zoom.saturating_add(1)) {
                    return self;
                }
            }
            ZoomOut => {
                if !new.set_zoom(new.zoom.saturating_sub(1)) {
                    return self;
                }
            }
            PanStart { x, y } => {
                new.panning = true;
                new.moved = false;
                new.last_x = x;
                new.last_y = y;
            }
            PanMove { x, y } => {
                if !new.panning {
                    return self;
                }
                if x == new.last_x && y == new.last_y {
                    return self;
                }
                // Dragging the map right moves the view center left.
                new.pan_x -= x - new.last_x;
                new.pan_y -= y - new.last_y;
                new.last_x = x;
                new.last_y = y;
                new.moved = true;
            }
            PanEnd => {
                if !new.panning {
                    return self;
                }
                new.panning = false;
            }
            Recenter => {
                new.pan_x = 0.0;
                new.pan_y = 0.0;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vp() -> Rc<Viewport> {
        Rc::new(Viewport::new(13, 2, 20))
    }

    #[test]
    fn zoom_is_clamped() {
        let v = Rc::new(Viewport::new(20, 2, 20));
        let after = v.clone().reduce(ViewportAction::ZoomIn);
        assert!(Rc::ptr_eq(&v, &after));
        let v = Rc::new(Viewport::new(0, 2, 20));
        assert_eq!(v.zoom, 2);
        assert_eq!(v.reduce(ViewportAction::ZoomOut).zoom, 2);
    }

    #[test]
    fn drag_pans_opposite_to_pointer() {
        let v = vp()
            .reduce(ViewportAction::PanStart { x: 100.0, y: 100.0 })
            .reduce(ViewportAction::PanMove { x: 130.0, y: 90.0 })
            .reduce(ViewportAction::PanEnd);
        assert_eq!((v.pan_x, v.pan_y, v.panning), (-30.0, 10.0, false));
        assert!(v.moved);
        assert!(!v.is_following());
    }

    #[test]
    fn move_without_press_is_ignored() {
        let v = vp();
        let after = v.clone().reduce(ViewportAction::PanMove { x: 5.0, y: 5.0 });
        assert!(Rc::ptr_eq(&v, &after));
    }

    #[test]
    fn press_without_motion_is_a_click() {
        let v = vp()
            .reduce(ViewportAction::PanStart { x: 3.0, y: 3.0 })
            .reduce(ViewportAction::PanMove { x: 3.0, y: 3.0 })
            .reduce(ViewportAction::PanEnd);
        assert!(!v.moved);
        assert!(v.is_following());
    }

    #[test]
    fn zoom_scales_pan() {
        let v = vp()
            .reduce(ViewportAction::PanStart { x: 0.0, y: 0.0 })
            .reduce(ViewportAction::PanMove { x: -10.0, y: 4.0 })
            .reduce(ViewportAction::PanEnd)
            .reduce(ViewportAction::ZoomIn);
        assert_eq!((v.zoom, v.pan_x, v.pan_y), (14, 20.0, -8.0));
        let v = v.reduce(ViewportAction::ZoomOut).reduce(ViewportAction::ZoomOut);
        assert_eq!((v.zoom, v.pan_x, v.pan_y), (12, 5.0, -2.0));
    }

    #[test]
    fn recenter_follows_position_again() {
        let v = vp()
            .reduce(ViewportAction::PanStart { x: 0.0, y: 0.0 })
            .reduce(ViewportAction::PanMove { x: 50.0, y: 50.0 })
            .reduce(ViewportAction::Recenter);
        assert!(v.is_following());
    }

    #[test]
    fn followed_position_sits_in_the_middle() {
        let here = Coordinate::new(45.4384, 10.9916).unwrap();
        let (x, y) = vp().screen_point(here, here, 800.0, 600.0);
        assert!((x - 400.0).abs() < 1e-9 && (y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn west_is_left_north_is_up() {
        let here = Coordinate::new(45.4384, 10.9916).unwrap();
        let milano = Coordinate::new(45.4642, 9.19).unwrap();
        let (x, y) = vp().screen_point(milano, here, 800.0, 600.0);
        assert!(x < 400.0);
        assert!(y < 300.0);
    }
}
