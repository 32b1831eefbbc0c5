use iced::event::{self, Event};
use iced::mouse;
use iced::touch;
use iced::{Point, Rectangle, Size, Subscription};

use crate::state::session::Session;

/// Answers whether a pointer target lies inside the zoomed item's wrapper
pub trait ZoomRegion {
    fn is_inside(&self, target: Point) -> bool;
}

impl ZoomRegion for Rectangle {
    fn is_inside(&self, target: Point) -> bool {
        self.contains(target)
    }
}

/// Bounds of the zoomed wrapper: a `zoom_size` square centred in the
/// viewport, shrunk to fit on small windows.
///
/// The gallery lays the zoomed view out with the same numbers, so this
/// is exactly where it is drawn.
pub fn zoom_region(viewport: Size, zoom_size: f32) -> Rectangle {
    let width = zoom_size.min(viewport.width).max(0.0);
    let height = zoom_size.min(viewport.height).max(0.0);

    Rectangle {
        x: (viewport.width - width) / 2.0,
        y: (viewport.height - height) / 2.0,
        width,
        height,
    }
}

/// Pointer events the detector cares about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Point),
    Pressed,
    Touched(Point),
}

/// Process-wide pointer listener.
///
/// Only subscribe while something is zoomed: iced installs the listener
/// when the subscription appears and drops it when it goes away.
pub fn subscription() -> Subscription<PointerEvent> {
    event::listen_with(|event, _status, _window| match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(PointerEvent::Moved(position)),
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(PointerEvent::Pressed),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(PointerEvent::Touched(position))
        }
        _ => None,
    })
}

/// Collapse the zoom if `target` falls outside `region`.
///
/// With nothing zoomed this does nothing. Never touches the selection.
/// Returns true when the zoom was collapsed.
pub fn collapse_if_outside(target: Point, region: &impl ZoomRegion, session: &mut Session) -> bool {
    if session.zoomed().is_none() || region.is_inside(target) {
        return false;
    }
    session.collapse_zoom();
    true
}

/// Tracks where the pointer is and how big the window is, so a bare
/// button press can be tested against the zoom region.
#[derive(Debug, Clone)]
pub struct OutsideInteractionDetector {
    cursor: Option<Point>,
    viewport: Size,
    zoom_size: f32,
}

impl OutsideInteractionDetector {
    pub fn new(viewport: Size, zoom_size: f32) -> Self {
        Self {
            cursor: None,
            viewport,
            zoom_size,
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Forget the pointer position. Called whenever the zoom ends, since
    /// moves are only observed while the listener is installed.
    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn region(&self) -> Rectangle {
        zoom_region(self.viewport, self.zoom_size)
    }

    /// Feed one pointer event. Returns true when the zoom was collapsed.
    pub fn handle(&mut self, event: PointerEvent, session: &mut Session) -> bool {
        match event {
            PointerEvent::Moved(position) => {
                self.cursor = Some(position);
                false
            }
            PointerEvent::Pressed => match self.cursor {
                Some(target) => collapse_if_outside(target, &self.region(), session),
                // Pointer position unknown since the listener was installed
                None => false,
            },
            PointerEvent::Touched(position) => {
                self.cursor = Some(position);
                collapse_if_outside(position, &self.region(), session)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::FileEntry;

    struct Outside;

    impl ZoomRegion for Outside {
        fn is_inside(&self, _target: Point) -> bool {
            false
        }
    }

    fn session_with(count: usize) -> Session {
        let mut session = Session::new();
        session.append((0..count).map(|i| FileEntry::new(format!("{i}.png"), "image/png", vec![0u8])));
        session
    }

    #[test]
    fn test_zoom_region_centred() {
        let region = zoom_region(Size::new(1000.0, 800.0), 600.0);
        assert_eq!(region, Rectangle { x: 200.0, y: 100.0, width: 600.0, height: 600.0 });
    }

    #[test]
    fn test_zoom_region_clamped_to_viewport() {
        let region = zoom_region(Size::new(400.0, 300.0), 600.0);
        assert_eq!(region, Rectangle { x: 0.0, y: 0.0, width: 400.0, height: 300.0 });
    }

    #[test]
    fn test_outside_press_collapses_zoom_only() {
        let mut session = session_with(2);
        session.select_toggle(0);
        session.zoom_toggle(1);

        assert!(collapse_if_outside(Point::ORIGIN, &Outside, &mut session));
        assert_eq!(session.zoomed(), None);
        assert_eq!(session.selected(), Some(0));
    }

    #[test]
    fn test_noop_when_nothing_zoomed() {
        let mut session = session_with(2);
        session.select_toggle(1);

        assert!(!collapse_if_outside(Point::ORIGIN, &Outside, &mut session));
        assert_eq!(session.selected(), Some(1));
    }

    #[test]
    fn test_detector_uses_last_cursor_position() {
        let mut session = session_with(1);
        session.zoom_toggle(0);
        let mut detector = OutsideInteractionDetector::new(Size::new(1000.0, 800.0), 600.0);

        // Unknown position: leave the zoom alone
        assert!(!detector.handle(PointerEvent::Pressed, &mut session));

        detector.handle(PointerEvent::Moved(Point::new(500.0, 400.0)), &mut session);
        assert!(!detector.handle(PointerEvent::Pressed, &mut session));
        assert_eq!(session.zoomed(), Some(0));

        detector.handle(PointerEvent::Moved(Point::new(50.0, 50.0)), &mut session);
        assert!(detector.handle(PointerEvent::Pressed, &mut session));
        assert_eq!(session.zoomed(), None);
    }

    #[test]
    fn test_cleared_cursor_ignores_press() {
        let mut session = session_with(1);
        session.zoom_toggle(0);
        let mut detector = OutsideInteractionDetector::new(Size::new(1000.0, 800.0), 600.0);

        detector.handle(PointerEvent::Moved(Point::new(10.0, 10.0)), &mut session);
        detector.clear_cursor();

        assert!(!detector.handle(PointerEvent::Pressed, &mut session));
        assert_eq!(session.zoomed(), Some(0));
    }

    #[test]
    fn test_touch_outside_collapses() {
        let mut session = session_with(1);
        session.zoom_toggle(0);
        let mut detector = OutsideInteractionDetector::new(Size::new(1000.0, 800.0), 600.0);

        assert!(detector.handle(PointerEvent::Touched(Point::new(990.0, 10.0)), &mut session));
        assert_eq!(session.zoomed(), None);
    }
}
