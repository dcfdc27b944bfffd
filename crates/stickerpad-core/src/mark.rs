//! Committed drawing actions.
//!
//! A `Mark` is one undoable unit on the pad: either a freehand stroke that
//! grows while its gesture is open, or a stamped symbol fixed at its anchor.
//! Marks carry no behavior of their own beyond extension; painting them is
//! the render crate's job.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// ─── Point ───────────────────────────────────────────────────────────────

/// Surface-local coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ─── Identity ────────────────────────────────────────────────────────────

/// Process-unique identity of a mark, assigned when it is created.
///
/// Two marks with identical content still have different ids, which is what
/// lets history tell a stale in-progress handle apart from the current tail.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(u64);

impl MarkId {
    /// Allocate the next id.
    pub fn fresh() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        MarkId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for MarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mark#{}", self.0)
    }
}

// ─── Marks ───────────────────────────────────────────────────────────────

/// A polyline drawn with the pen. Always holds at least one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStroke")]
pub struct FreehandStroke {
    points: Vec<Point>,
    width: f32,
}

/// Unchecked wire form of a stroke.
#[derive(Deserialize)]
struct RawStroke {
    points: Vec<Point>,
    width: f32,
}

impl TryFrom<RawStroke> for FreehandStroke {
    type Error = &'static str;

    fn try_from(raw: RawStroke) -> Result<Self, Self::Error> {
        FreehandStroke::from_points(raw.points, raw.width).ok_or("stroke has no points")
    }
}

impl FreehandStroke {
    /// Start a stroke at `origin`.
    pub fn new(origin: Point, width: f32) -> Self {
        Self {
            points: vec![origin],
            width,
        }
    }

    /// Build a stroke from an existing point list. Returns `None` when
    /// `points` is empty.
    pub fn from_points(points: Vec<Point>, width: f32) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points, width })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    fn push(&mut self, point: Point) {
        self.points.push(point);
    }
}

/// A symbol stamped once at its anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampMark {
    anchor: Point,
    symbol: String,
}

impl StampMark {
    pub fn new(anchor: Point, symbol: impl Into<String>) -> Self {
        Self {
            anchor,
            symbol: symbol.into(),
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// One committed drawing action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mark {
    Freehand(FreehandStroke),
    Stamp(StampMark),
}

impl Mark {
    /// Append `point` to a freehand stroke.
    ///
    /// Stamps have no extension phase; the call is ignored and `false` is
    /// returned.
    pub fn extend(&mut self, point: Point) -> bool {
        match self {
            Mark::Freehand(stroke) => {
                stroke.push(point);
                true
            }
            Mark::Stamp(_) => false,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Mark::Freehand(_) => "stroke",
            Mark::Stamp(_) => "stamp",
        }
    }

    pub fn as_freehand(&self) -> Option<&FreehandStroke> {
        match self {
            Mark::Freehand(stroke) => Some(stroke),
            Mark::Stamp(_) => None,
        }
    }

    pub fn as_stamp(&self) -> Option<&StampMark> {
        match self {
            Mark::Stamp(stamp) => Some(stamp),
            Mark::Freehand(_) => None,
        }
    }
}

impl From<FreehandStroke> for Mark {
    fn from(stroke: FreehandStroke) -> Self {
        Mark::Freehand(stroke)
    }
}

impl From<StampMark> for Mark {
    fn from(stamp: StampMark) -> Self {
        Mark::Stamp(stamp)
    }
}
