//! PathSpec - line/cubic paths parsed from SVG path data
//!
//! Only the subset the page's artwork uses is supported: `M L H V C Z`,
//! absolute and relative. Positions along a path are taken by arc length
//! (progress 0.5 is half way along the drawn length, not half way through
//! the segment list), which is what the page's motion-path tweens do.

use std::fmt;

use crate::core::vec2::{Vec2, EPSILON};

use super::error::SceneError;

/// Chords per segment in the arc-length table.
pub const FLATTEN_STEPS: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line { from: Vec2, to: Vec2 },
    Cubic { from: Vec2, c1: Vec2, c2: Vec2, to: Vec2 },
}

impl Segment {
    pub fn start(&self) -> Vec2 {
        match *self {
            Segment::Line { from, .. } | Segment::Cubic { from, .. } => from,
        }
    }

    pub fn end(&self) -> Vec2 {
        match *self {
            Segment::Line { to, .. } | Segment::Cubic { to, .. } => to,
        }
    }

    /// Point at curve parameter `t` in [0, 1]
    pub fn point_at(&self, t: f32) -> Vec2 {
        match *self {
            Segment::Line { from, to } => from.lerp(to, t),
            Segment::Cubic { from, c1, c2, to } => {
                let u = 1.0 - t;
                let b0 = u * u * u;
                let b1 = 3.0 * u * u * t;
                let b2 = 3.0 * u * t * t;
                let b3 = t * t * t;
                from * b0 + c1 * b1 + c2 * b2 + to * b3
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathParseError {
    /// A command letter outside the supported set
    UnknownCommand { offset: usize, command: char },
    /// Expected a number (missing argument or malformed literal)
    BadNumber { offset: usize },
    /// Drawing command before the first `M`
    MissingMoveTo { offset: usize },
    /// Bare numbers with no command to repeat (e.g. right after `Z`)
    ExpectedCommand { offset: usize },
}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathParseError::UnknownCommand { offset, command } => {
                write!(f, "unsupported command '{}' at byte {}", command, offset)
            }
            PathParseError::BadNumber { offset } => write!(f, "expected number at byte {}", offset),
            PathParseError::MissingMoveTo { offset } => {
                write!(f, "path must start with M (byte {})", offset)
            }
            PathParseError::ExpectedCommand { offset } => {
                write!(f, "expected command at byte {}", offset)
            }
        }
    }
}

impl std::error::Error for PathParseError {}

/// A sequence of segments, optionally closed by `Z`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathSpec {
    segments: Vec<Segment>,
    closed: bool,
}

impl PathSpec {
    /// Parse SVG path data (`d` attribute)
    pub fn parse(d: &str) -> Result<Self, PathParseError> {
        Parser::new(d).run()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn arc_length_table(&self) -> Result<ArcLengthTable, SceneError> {
        ArcLengthTable::new(self, FLATTEN_STEPS)
    }
}


struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
    segments: Vec<Segment>,
    closed: bool,
    current: Vec2,
    subpath_start: Vec2,
    has_move: bool,
    /// Command repeated when bare numbers follow
    repeat: Option<u8>,
}

impl<'a> Parser<'a> {
    fn new(d: &'a str) -> Self {
        Self {
            src: d.as_bytes(),
            pos: 0,
            segments: Vec::new(),
            closed: false,
            current: Vec2::ZERO,
            subpath_start: Vec2::ZERO,
            has_move: false,
            repeat: None,
        }
    }

    fn run(mut self) -> Result<PathSpec, PathParseError> {
        loop {
            self.skip_separators();
            let Some(&c) = self.src.get(self.pos) else {
                break;
            };
            let offset = self.pos;

            let cmd = if c.is_ascii_alphabetic() {
                self.pos += 1;
                c
            } else if let Some(prev) = self.repeat {
                prev
            } else {
                return Err(PathParseError::ExpectedCommand { offset });
            };

            if !matches!(cmd, b'M' | b'm') && !self.has_move {
                return Err(PathParseError::MissingMoveTo { offset });
            }

            let relative = cmd.is_ascii_lowercase();
            let base = if relative { self.current } else { Vec2::ZERO };

            match cmd.to_ascii_uppercase() {
                b'M' => {
                    let p = self.point()? + base;
                    self.current = p;
                    self.subpath_start = p;
                    self.has_move = true;
                    // Pairs after a move are implicit line-tos.
                    self.repeat = Some(if relative { b'l' } else { b'L' });
                }
                b'L' => {
                    let p = self.point()? + base;
                    self.line_to(p);
                    self.repeat = Some(cmd);
                }
                b'H' => {
                    let x = self.number()? + base.x;
                    self.line_to(Vec2::new(x, self.current.y));
                    self.repeat = Some(cmd);
                }
                b'V' => {
                    let y = self.number()? + base.y;
                    self.line_to(Vec2::new(self.current.x, y));
                    self.repeat = Some(cmd);
                }
                b'C' => {
                    let c1 = self.point()? + base;
                    let c2 = self.point()? + base;
                    let to = self.point()? + base;
                    self.segments.push(Segment::Cubic { from: self.current, c1, c2, to });
                    self.current = to;
                    self.repeat = Some(cmd);
                }
                b'Z' => {
                    if self.current.distance(self.subpath_start) > EPSILON {
                        self.line_to(self.subpath_start);
                    }
                    self.current = self.subpath_start;
                    self.closed = true;
                    self.repeat = None;
                }
                _ => {
                    return Err(PathParseError::UnknownCommand { offset, command: cmd as char });
                }
            }
        }

        Ok(PathSpec { segments: self.segments, closed: self.closed })
    }

    fn line_to(&mut self, p: Vec2) {
        self.segments.push(Segment::Line { from: self.current, to: p });
        self.current = p;
    }

    fn skip_separators(&mut self) {
        while let Some(&c) = self.src.get(self.pos) {
            if c.is_ascii_whitespace() || c == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn point(&mut self) -> Result<Vec2, PathParseError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Vec2::new(x, y))
    }

    fn number(&mut self) -> Result<f32, PathParseError> {
        self.skip_separators();
        let start = self.pos;
        let bad = PathParseError::BadNumber { offset: start };

        if matches!(self.src.get(self.pos), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut digits = self.eat_digits();
        if self.src.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            digits += self.eat_digits();
        }
        if digits == 0 {
            self.pos = start;
            return Err(bad);
        }
        if matches!(self.src.get(self.pos), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.src.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.eat_digits() == 0 {
                // Not an exponent after all.
                self.pos = mark;
            }
        }

        std::str::from_utf8(&self.src[start..self.pos])
            .ok()
            .and_then(|s| s.parse::<f32>().ok())
            .ok_or(bad)
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.src.get(self.pos), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }
}

#[derive(Clone, Copy, Debug)]
struct Chord {
    from: Vec2,
    to: Vec2,
    start_len: f32,
    end_len: f32,
}

/// Flattened path with cumulative chord lengths, for sampling by arc length.
#[derive(Clone, Debug)]
pub struct ArcLengthTable {
    chords: Vec<Chord>,
    total: f32,
}

impl ArcLengthTable {
    pub fn new(path: &PathSpec, steps_per_segment: usize) -> Result<Self, SceneError> {
        let steps = steps_per_segment.max(1);
        let mut chords = Vec::with_capacity(path.segments().len() * steps);
        let mut total = 0.0f32;

        for seg in path.segments() {
            let mut prev = seg.point_at(0.0);
            for k in 1..=steps {
                let p = seg.point_at(k as f32 / steps as f32);
                let len = prev.distance(p);
                // Zero-length chords would stall the search below.
                if len > 0.0 {
                    chords.push(Chord { from: prev, to: p, start_len: total, end_len: total + len });
                    total += len;
                }
                prev = p;
            }
        }

        if chords.is_empty() || !(total > EPSILON) || !total.is_finite() {
            return Err(SceneError::DegeneratePath);
        }

        Ok(Self { chords, total })
    }

    pub fn total_length(&self) -> f32 {
        self.total
    }

    /// Point at `progress` of the total length; progress is clamped to [0, 1].
    pub fn point_at_progress(&self, progress: f32) -> Vec2 {
        let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let target = p * self.total;

        let idx = self
            .chords
            .partition_point(|c| c.end_len < target)
            .min(self.chords.len() - 1);
        let chord = self.chords[idx];
        let span = chord.end_len - chord.start_len;
        let t = ((target - chord.start_len) / span).clamp(0.0, 1.0);
        chord.from.lerp(chord.to, t)
    }

    pub fn start(&self) -> Vec2 {
        self.chords[0].from
    }

    pub fn end(&self) -> Vec2 {
        self.chords[self.chords.len() - 1].to
    }
}
