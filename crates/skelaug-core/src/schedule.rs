//! Active-window scheduling over a timeline.
//!
//! A schedule walks a cursor from frame 0, alternately emitting a randomly
//! sized active window and skipping a randomly sized gap, until fewer than
//! `min_len` frames remain. Windows come out in increasing order and never
//! overlap.

use std::iter::FusedIterator;
use std::ops::Range;

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shortest gap drawn between two consecutive windows.
pub const MIN_SKIP: usize = 3;

/// Bounds on the length of scheduled windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentOptions {
    /// Minimum window length (inclusive).
    pub min_len: usize,
    /// Maximum window length (inclusive).
    pub max_len: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            min_len: 5,
            max_len: 10,
        }
    }
}

impl SegmentOptions {
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }
}

/// Lazy iterator over the active windows of one schedule.
///
/// Created by [`schedule`]. Each window is drawn on demand from the borrowed
/// RNG; a new schedule needs a new call.
#[derive(Debug)]
pub struct Segments<'r, R: ?Sized> {
    rng: &'r mut R,
    num_frames: usize,
    min_len: usize,
    max_len: usize,
    cursor: usize,
}

/// Schedule randomized active windows over `num_frames` frames.
///
/// Every window `w` satisfies `opts.min_len <= w.len() <= opts.max_len` and
/// `w.end <= num_frames`. If `num_frames < opts.min_len` the schedule is
/// empty.
///
/// # Panics
/// Iterating panics if `opts.min_len > opts.max_len`; callers validate
/// segment bounds before scheduling.
pub fn schedule<'r, R>(
    rng: &'r mut R,
    num_frames: usize,
    opts: &SegmentOptions,
) -> Segments<'r, R>
where
    R: Rng + ?Sized,
{
    Segments {
        rng,
        num_frames,
        min_len: opts.min_len,
        max_len: opts.max_len,
        cursor: 0,
    }
}

/// Length of the untouched gap that follows a window, given the number of
/// frames left after it.
///
/// Up to [`MIN_SKIP`] remaining frames are skipped entirely. Exactly
/// [`MIN_SKIP`] remaining is its own case because the general draw over
/// `[MIN_SKIP, remaining)` would be empty there.
pub fn skip_gap<R>(rng: &mut R, remaining: usize) -> usize
where
    R: Rng + ?Sized,
{
    match remaining.cmp(&MIN_SKIP) {
        std::cmp::Ordering::Less => remaining,
        std::cmp::Ordering::Equal => MIN_SKIP,
        std::cmp::Ordering::Greater => rng.random_range(MIN_SKIP..remaining),
    }
}

impl<R> Iterator for Segments<'_, R>
where
    R: Rng + ?Sized,
{
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.num_frames {
            return None;
        }
        let remaining = self.num_frames - self.cursor;
        if remaining < self.min_len {
            self.cursor = self.num_frames;
            return None;
        }

        let upper = self.max_len.min(remaining);
        let seg_len = self.rng.random_range(self.min_len..=upper);
        let window = self.cursor..self.cursor + seg_len;
        self.cursor = window.end;

        if self.cursor < self.num_frames {
            let skip = skip_gap(&mut *self.rng, self.num_frames - self.cursor);
            self.cursor += skip;
        }

        trace!("scheduled window {:?} of {} frames", window, self.num_frames);
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_frames.saturating_sub(self.cursor);
        if self.min_len == 0 {
            return (0, None);
        }
        if remaining < self.min_len {
            return (0, Some(0));
        }
        (1, Some(remaining / self.min_len))
    }
}

impl<R> FusedIterator for Segments<'_, R> where R: Rng + ?Sized {}
