//! Line queue and typewriter scheduler.
//!
//! Lines arrive in batches through `enqueue` and are revealed strictly in
//! FIFO order. At most one line animates at a time; every other rendered
//! line is fully revealed.
//!
//! ```text
//! Idle ──tick (pop, animate)──▶ Animating ──tick (last char)──▶ Idle
//!   ▲                               │
//!   └────────── skip / reset ───────┘
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use termfolio_core::line::OutputLine;

/// Lines longer than this are shown at once.
pub const MAX_ANIMATED_CHARS: usize = 150;

/// With more lines than this waiting, new lines are shown at once.
pub const MAX_ANIMATED_BACKLOG: usize = 20;

/// Lines longer than this use the fastest tier.
const FAST_LINE_CHARS: usize = 80;

/// With more lines than this waiting, the brisk tier is used.
const BRISK_BACKLOG: usize = 10;

/// Reveal speed tier.
///
/// Each tier is a multiplier of the base character interval, so fewer units
/// means faster typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Fast,
    Brisk,
    Normal,
}

impl Speed {
    /// Picks the tier for a line of `chars` characters with `backlog` lines
    /// still waiting behind it.
    pub fn for_line(chars: usize, backlog: usize) -> Self {
        if chars > FAST_LINE_CHARS {
            Speed::Fast
        } else if backlog > BRISK_BACKLOG {
            Speed::Brisk
        } else {
            Speed::Normal
        }
    }

    pub fn units(self) -> u32 {
        match self {
            Speed::Fast => 1,
            Speed::Brisk => 2,
            Speed::Normal => 4,
        }
    }
}

/// Sound cue requested by the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Keystroke,
}

/// Timer the queue needs to keep making progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSchedule {
    /// Queue epoch the ticks belong to.
    pub epoch: u64,
    pub interval: Duration,
}

/// An output line plus how much of it is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    pub line: OutputLine,
    revealed: usize,
}

impl RenderLine {
    fn revealed(line: OutputLine) -> Self {
        let revealed = line.char_len();
        Self { line, revealed }
    }

    fn hidden(line: OutputLine) -> Self {
        Self { line, revealed: 0 }
    }

    /// Number of visible characters.
    pub fn revealed_chars(&self) -> usize {
        self.revealed
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed >= self.line.char_len()
    }

    /// The visible prefix of the text.
    pub fn visible_text(&self) -> &str {
        let text = &self.line.text;
        match text.char_indices().nth(self.revealed) {
            Some((byte_idx, _)) => &text[..byte_idx],
            None => text,
        }
    }

    fn reveal_all(&mut self) {
        self.revealed = self.line.char_len();
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    Idle,
    Animating {
        index: usize,
        char_pos: usize,
        speed: Speed,
    },
}

/// Rendered lines plus the FIFO of lines waiting to be revealed.
#[derive(Debug, Clone)]
pub struct LineQueue {
    rendered: Vec<RenderLine>,
    pending: VecDeque<OutputLine>,
    state: QueueState,
    epoch: u64,
    char_interval: Duration,
}

impl LineQueue {
    pub fn new(char_interval: Duration) -> Self {
        Self {
            rendered: Vec::new(),
            pending: VecDeque::new(),
            state: QueueState::Idle,
            epoch: 0,
            char_interval,
        }
    }

    pub fn lines(&self) -> &[RenderLine] {
        &self.rendered
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Lines waiting to be revealed, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &OutputLine> {
        self.pending.iter()
    }

    pub fn state(&self) -> QueueState {
        self.state
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, QueueState::Animating { .. })
    }

    /// True when nothing is animating and nothing is waiting.
    pub fn is_settled(&self) -> bool {
        !self.is_animating() && self.pending.is_empty()
    }

    /// Appends a batch to the pending FIFO. Does not start animating.
    pub fn enqueue(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.pending.extend(lines);
    }

    /// Advances the queue by one step.
    ///
    /// While idle this pops the next pending line; while animating it
    /// reveals one more character of the active line.
    pub fn tick(&mut self) -> Option<Cue> {
        match self.state {
            QueueState::Idle => {
                self.start_next();
                None
            }
            QueueState::Animating {
                index,
                char_pos,
                speed,
            } => self.advance(index, char_pos, speed),
        }
    }

    fn start_next(&mut self) {
        let Some(line) = self.pending.pop_front() else {
            return;
        };

        let chars = line.char_len();
        let backlog = self.pending.len();
        if chars == 0 || chars > MAX_ANIMATED_CHARS || backlog > MAX_ANIMATED_BACKLOG {
            self.rendered.push(RenderLine::revealed(line));
            return;
        }

        let index = self.rendered.len();
        self.rendered.push(RenderLine::hidden(line));
        self.state = QueueState::Animating {
            index,
            char_pos: 0,
            speed: Speed::for_line(chars, backlog),
        };
        self.epoch += 1;
    }

    fn advance(&mut self, index: usize, char_pos: usize, speed: Speed) -> Option<Cue> {
        let Some(active) = self.rendered.get_mut(index) else {
            self.finish();
            return None;
        };

        let next_pos = char_pos + 1;
        let revealed_char = active.line.text.chars().nth(char_pos);
        active.revealed = next_pos;

        if next_pos >= active.line.char_len() {
            active.reveal_all();
            self.finish();
        } else {
            self.state = QueueState::Animating {
                index,
                char_pos: next_pos,
                speed,
            };
        }

        match revealed_char {
            Some(ch) if ch != ' ' && speed == Speed::Fast => Some(Cue::Keystroke),
            _ => None,
        }
    }

    fn finish(&mut self) {
        self.state = QueueState::Idle;
        self.epoch += 1;
    }

    /// Reveals the active line fully. No-op while idle.
    pub fn skip(&mut self) {
        if let QueueState::Animating { index, .. } = self.state {
            if let Some(active) = self.rendered.get_mut(index) {
                active.reveal_all();
            }
            self.finish();
        }
    }

    /// Drops every rendered and pending line.
    pub fn reset(&mut self) {
        self.rendered.clear();
        self.pending.clear();
        self.state = QueueState::Idle;
        self.epoch += 1;
    }

    /// Reveals everything at once, pending lines included.
    pub fn flush(&mut self) {
        self.skip();
        while let Some(line) = self.pending.pop_front() {
            self.rendered.push(RenderLine::revealed(line));
        }
    }

    /// Timer the queue needs, if any.
    pub fn schedule(&self) -> Option<RevealSchedule> {
        match self.state {
            QueueState::Animating { speed, .. } => Some(RevealSchedule {
                epoch: self.epoch,
                interval: self.char_interval * speed.units(),
            }),
            QueueState::Idle if !self.pending.is_empty() => Some(RevealSchedule {
                epoch: self.epoch,
                interval: self.char_interval,
            }),
            QueueState::Idle => None,
        }
    }
}
