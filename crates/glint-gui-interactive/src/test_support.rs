//! Recording backend for unit tests

use glint_gui::{Backend, Color, Corners, Error, IVec2, Rect, Surface, TextMetrics, Vec2};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread::{self, ThreadId};

pub const CHAR_WIDTH: i32 = 8;
pub const LINE_HEIGHT: i32 = 16;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Fill(Color),
    Rect(Rect, Color, Corners),
    Circle(Vec2, f32, Color),
    Line(Vec2, Vec2, Color),
    Blit(IVec2, MockSurface),
    ColorKey(Color),
}

/// Surface that records draw calls instead of rasterising
#[derive(Debug, Clone, PartialEq)]
pub struct MockSurface {
    pub size: IVec2,
    /// Text content for surfaces made by `render_text`, path for images
    pub label: Option<String>,
    pub ops: Vec<Op>,
}

impl MockSurface {
    pub fn new(size: IVec2) -> Self {
        Self {
            size,
            label: None,
            ops: Vec::new(),
        }
    }

    pub fn blits(&self) -> impl Iterator<Item = (IVec2, &MockSurface)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Blit(pos, source) => Some((*pos, source)),
            _ => None,
        })
    }

    /// Labels of blitted text surfaces, in draw order
    pub fn texts(&self) -> Vec<String> {
        self.blits()
            .filter_map(|(_, source)| source.label.clone())
            .collect()
    }

    /// Color of the first rectangle drawn on this surface
    pub fn frame_color(&self) -> Option<Color> {
        self.ops.iter().find_map(|op| match op {
            Op::Rect(_, color, _) => Some(*color),
            _ => None,
        })
    }

    pub fn rects(&self) -> Vec<(Rect, Color, Corners)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect(rect, color, corners) => Some((*rect, *color, *corners)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle(center, radius, color) => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(from, to, color) => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for MockSurface {
    fn size(&self) -> IVec2 {
        self.size
    }

    fn fill(&mut self, color: Color) {
        self.ops.push(Op::Fill(color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, corners: Corners) {
        self.ops.push(Op::Rect(rect, color, corners));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(Op::Circle(center, radius, color));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Color) {
        self.ops.push(Op::Line(from, to, color));
    }

    fn blit(&mut self, source: &Self, pos: IVec2) {
        self.ops.push(Op::Blit(pos, source.clone()));
    }

    fn set_color_key(&mut self, key: Color) {
        self.ops.push(Op::ColorKey(key));
    }
}

/// Backend with fixed-width text and an in-memory image table
#[derive(Debug, Default)]
pub struct MockBackend {
    pub images: HashMap<PathBuf, IVec2>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>, size: IVec2) -> Self {
        self.images.insert(path.into(), size);
        self
    }
}

impl Backend for MockBackend {
    type Surface = MockSurface;

    fn create_surface(&mut self, size: IVec2) -> MockSurface {
        MockSurface::new(size)
    }

    fn load_image(&mut self, path: &Path) -> glint_gui::Result<MockSurface> {
        let size = self
            .images
            .get(path)
            .copied()
            .ok_or_else(|| Error::asset(path, "not found"))?;
        let mut image = MockSurface::new(size);
        image.label = Some(path.display().to_string());
        Ok(image)
    }

    fn scale_image(&mut self, image: &MockSurface, size: IVec2) -> MockSurface {
        MockSurface {
            size,
            ..image.clone()
        }
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        TextMetrics::new(text.chars().count() as i32 * CHAR_WIDTH, LINE_HEIGHT)
    }

    fn render_text(&mut self, text: &str, color: Color) -> (MockSurface, TextMetrics) {
        let metrics = self.measure_text(text);
        let mut surface = MockSurface::new(metrics.size());
        surface.label = Some(text.to_string());
        surface.ops.push(Op::Fill(color));
        (surface, metrics)
    }
}

/// Logger keeping every record, tagged with the thread that emitted it
struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((
                thread::current().id(),
                record.level(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

/// Install the capturing logger; safe to call from every test
pub fn capture_logs() {
    let _ = log::set_logger(&CAPTURE_LOGGER);
    log::set_max_level(LevelFilter::Trace);
}

/// Messages logged at `level` by the calling test's thread
pub fn logged(level: Level) -> Vec<String> {
    let id = thread::current().id();
    CAPTURE_LOGGER
        .records
        .lock()
        .map(|records| {
            records
                .iter()
                .filter(|(thread, lvl, _)| *thread == id && *lvl == level)
                .map(|(_, _, message)| message.clone())
                .collect()
        })
        .unwrap_or_default()
}
