//! Map view model and its canvas rendering.
//!
//! [`MapView`] is the state a screen builds (markers, polylines, camera);
//! [`MapWidget`] draws it as a Braille canvas with longitude on the x axis and
//! latitude on the y axis. No tiles are drawn.

use crate::services::location::Position;
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Widget};

/// Zoom used when nothing called [`MapView::center_on`]
pub const DEFAULT_ZOOM: f64 = 12.0;

/// A labelled point on the map
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: Position,
    pub label: String,
}

/// Visible lat/lon window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

impl Viewport {
    /// Whether `position` falls inside the viewport
    pub fn contains(&self, position: Position) -> bool {
        (self.west..=self.east).contains(&position.longitude)
            && (self.south..=self.north).contains(&position.latitude)
    }
}

/// Markers, polylines and camera for one map
#[derive(Debug, Clone, Default)]
pub struct MapView {
    markers: Vec<MapMarker>,
    polylines: Vec<Vec<Position>>,
    camera: Option<(Position, f64)>,
}

impl MapView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker; markers with the same label may coexist
    pub fn place_marker(&mut self, position: Position, label: impl Into<String>) {
        self.markers.push(MapMarker {
            position,
            label: label.into(),
        });
    }

    /// Move the marker with `label`, placing it if it does not exist yet
    pub fn move_marker(&mut self, label: &str, position: Position) {
        match self.markers.iter_mut().find(|m| m.label == label) {
            Some(marker) => marker.position = position,
            None => self.place_marker(position, label),
        }
    }

    /// A polyline needs at least two points; shorter input is ignored
    pub fn draw_polyline(&mut self, points: Vec<Position>) {
        if points.len() >= 2 {
            self.polylines.push(points);
        }
    }

    /// Move the camera; higher zoom shows a smaller area
    pub fn center_on(&mut self, position: Position, zoom: f64) {
        self.camera = Some((position, zoom.clamp(0.0, 21.0)));
    }

    /// Markers in placement order
    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    /// Polylines in drawing order
    pub fn polylines(&self) -> &[Vec<Position>] {
        &self.polylines
    }

    /// Camera center: explicit, else the first marker, else 0,0
    pub fn center(&self) -> Position {
        match self.camera {
            Some((position, _)) => position,
            None => self
                .markers
                .first()
                .map_or(Position::new(0.0, 0.0), |m| m.position),
        }
    }

    /// Current zoom level
    pub fn zoom(&self) -> f64 {
        self.camera.map_or(DEFAULT_ZOOM, |(_, zoom)| zoom)
    }

    /// Each zoom level halves the span: 360° of longitude at zoom 0.
    /// Terminal cells are about twice as tall as wide, so latitude gets half.
    pub fn viewport(&self) -> Viewport {
        let center = self.center();
        let lon_span = 360.0 / 2f64.powf(self.zoom());
        let lat_span = lon_span / 2.0;
        Viewport {
            west: center.longitude - lon_span / 2.0,
            east: center.longitude + lon_span / 2.0,
            south: center.latitude - lat_span / 2.0,
            north: center.latitude + lat_span / 2.0,
        }
    }
}

/// Renders a [`MapView`] on a braille canvas
pub struct MapWidget<'a> {
    map: &'a MapView,
    block: Option<Block<'a>>,
}

impl<'a> MapWidget<'a> {
    pub fn new(map: &'a MapView) -> Self {
        Self { map, block: None }
    }

    /// Wrap the canvas in a block
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let viewport = self.map.viewport();
        let route_color = t.route_color();
        let marker_color = t.marker_color();
        let label_style = t.accent_style();

        let mut canvas = Canvas::default()
            .marker(symbols::Marker::Braille)
            .x_bounds([viewport.west, viewport.east])
            .y_bounds([viewport.south, viewport.north])
            .paint(|ctx| {
                for line in self.map.polylines() {
                    for pair in line.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: pair[0].longitude,
                            y1: pair[0].latitude,
                            x2: pair[1].longitude,
                            y2: pair[1].latitude,
                            color: route_color,
                        });
                    }
                }
                ctx.layer();
                for marker in self.map.markers() {
                    let point = (marker.position.longitude, marker.position.latitude);
                    ctx.draw(&Points {
                        coords: &[point],
                        color: marker_color,
                    });
                    ctx.print(
                        point.0,
                        point.1,
                        Span::styled(format!("● {}", marker.label), label_style),
                    );
                }
            });
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UCATOLICA: Position = Position::new(4.634_00, -74.066_98);
    const ANDINO: Position = Position::new(4.667_09, -74.053_27);

    #[test]
    fn test_viewport_span_halves_per_zoom_level() {
        let mut map = MapView::new();
        map.center_on(UCATOLICA, 12.0);
        let wide = map.viewport();
        map.center_on(UCATOLICA, 13.0);
        let narrow = map.viewport();
        let wide_span = wide.east - wide.west;
        let narrow_span = narrow.east - narrow.west;
        assert!((wide_span / narrow_span - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_route_endpoints_visible_at_zoom_12() {
        let mut map = MapView::new();
        map.place_marker(UCATOLICA, "U. Católica");
        map.place_marker(ANDINO, "Centro Comercial Andino");
        map.draw_polyline(vec![UCATOLICA, ANDINO]);
        map.center_on(UCATOLICA, 12.0);
        let viewport = map.viewport();
        assert!(viewport.contains(UCATOLICA));
        assert!(viewport.contains(ANDINO));
        assert_eq!(map.polylines().len(), 1);
    }

    #[test]
    fn test_single_point_polyline_ignored() {
        let mut map = MapView::new();
        map.draw_polyline(vec![UCATOLICA]);
        assert!(map.polylines().is_empty());
    }

    #[test]
    fn test_center_defaults_to_first_marker() {
        let mut map = MapView::new();
        assert_eq!(map.center(), Position::new(0.0, 0.0));
        map.place_marker(ANDINO, "Andino");
        assert_eq!(map.center(), ANDINO);
        assert!((map.zoom() - DEFAULT_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_marker_upserts() {
        let mut map = MapView::new();
        map.move_marker("Ubicación actual", UCATOLICA);
        map.move_marker("Ubicación actual", ANDINO);
        assert_eq!(map.markers().len(), 1);
        assert_eq!(map.markers()[0].position, ANDINO);
    }

    #[test]
    fn test_render_prints_marker_label() {
        let mut map = MapView::new();
        map.place_marker(UCATOLICA, "Conductor");
        map.center_on(UCATOLICA, 15.0);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        MapWidget::new(&map).render(area, &mut buf);
        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Conductor"));
    }
}
