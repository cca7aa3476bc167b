//! Candidate-staircase maintenance for the dual density sweep.
//!
//! This module implements the per-objective machinery behind the finder:
//! 1. A forward pass over stop indices, pushing each start index into a
//!    monotone candidate deque as the window ceiling reaches it, evicting
//!    dominated back entries as it goes.
//! 2. A localized rebuild whenever the window floor overtakes the deque
//!    front: retired dominators can strand mid-range candidates that were
//!    evicted under them, so the affected prefix is recomputed from the raw
//!    index range by a reverse sweep.
//! 3. A front scan per stop extracting the best start, relying on the
//!    figure of merit being unimodal along the staircase.
//!
//! The same routines serve both objectives; [`Direction`] flips every
//! comparison. Candidates are prefix-point indices, and a candidate link
//! `a -> b` has the density of the element range `a..b`, so the staircase
//! invariant is a convexity condition on the prefix points: link densities
//! strictly increase along the deque when maximizing and strictly decrease
//! when minimizing.

use crate::deque::CandidateDeque;
use crate::prefix::PrefixSums;

/// Which extreme of the density objective a sweep chases.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    #[cfg(feature = "tracing")]
    fn as_str(self) -> &'static str {
        match self {
            Direction::Maximize => "maximize",
            Direction::Minimize => "minimize",
        }
    }
}

/// One objective's sweep state: the candidate deque plus the push cursor.
#[derive(Debug)]
pub(crate) struct ObjectiveSweep {
    direction: Direction,
    deque: CandidateDeque,
    /// Next start index to push; everything below it has been offered to
    /// the deque already.
    next_candidate: usize,
}

impl ObjectiveSweep {
    pub(crate) fn new(direction: Direction) -> Self {
        Self {
            direction,
            deque: CandidateDeque::new(),
            next_candidate: 0,
        }
    }

    /// Middle candidate `b` can never beat both neighbours `a < b < c` for
    /// any future stop once the link densities sit on the wrong side of
    /// each other; equality evicts too, since `b` then never does strictly
    /// better than its neighbours.
    #[inline]
    fn dominated(&self, prefix: &PrefixSums, a: usize, b: usize, c: usize) -> bool {
        let ab = prefix.slope(a, b);
        let bc = prefix.slope(b, c);
        match self.direction {
            Direction::Maximize => ab >= bc,
            Direction::Minimize => ab <= bc,
        }
    }

    #[inline]
    fn at_least_as_good(&self, candidate: f64, incumbent: f64) -> bool {
        match self.direction {
            Direction::Maximize => candidate >= incumbent,
            Direction::Minimize => candidate <= incumbent,
        }
    }

    /// Push every start up to and including `hi`, evicting dominated back
    /// entries first. Amortized O(1) per candidate.
    pub(crate) fn extend(&mut self, prefix: &PrefixSums, hi: usize) {
        while self.next_candidate <= hi {
            let c = self.next_candidate;
            while self.deque.len() >= 2 {
                let b = self.deque.get(self.deque.len() - 1).unwrap();
                let a = self.deque.get(self.deque.len() - 2).unwrap();
                if self.dominated(prefix, a, b, c) {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(c);
            self.next_candidate += 1;
        }
    }

    /// Drop candidates the window floor has passed and repair the deque.
    ///
    /// Evictions performed by [`extend`](Self::extend) are justified by a
    /// dominating pair of surviving neighbours; once the left neighbour
    /// retires, the evicted candidate may become viable again. The repair
    /// therefore recomputes the staircase of the raw range from `lo` up to
    /// the first surviving entry and splices it in place of the front.
    pub(crate) fn retire(&mut self, prefix: &PrefixSums, lo: usize) {
        match self.deque.front() {
            Some(front) if front < lo => {}
            _ => return,
        }
        while matches!(self.deque.front(), Some(front) if front < lo) {
            self.deque.pop_front();
        }
        // The back of the deque is always the most recent candidate, which
        // the caller keeps inside the window, so survivors exist.
        debug_assert!(!self.deque.is_empty());
        let survivor = match self.deque.front() {
            Some(s) => s,
            None => return,
        };
        if survivor == lo {
            return;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!(
            "staircase_rebuild",
            objective = self.direction.as_str(),
            lo,
            survivor
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let chain = self.staircase_chain(prefix, lo, survivor);
        self.deque.pop_front();
        self.deque.splice_front(&chain);
    }

    /// Reverse sweep over `[lo, upper]` computing, for every start `s`, its
    /// successor on the staircase of `[s, upper]`, then materializing the
    /// chain from `lo`. Already-bypassed links are never revisited, so the
    /// sweep is amortized linear in the range length.
    fn staircase_chain(&self, prefix: &PrefixSums, lo: usize, upper: usize) -> Vec<usize> {
        debug_assert!(lo < upper);
        const NONE: usize = usize::MAX;
        let m = upper - lo + 1;
        let mut next = vec![NONE; m];
        for s in (lo..upper).rev() {
            let mut t = s + 1;
            loop {
                let nt = next[t - lo];
                if nt == NONE || !self.dominated(prefix, s, t, nt) {
                    break;
                }
                t = nt;
            }
            next[s - lo] = t;
        }

        let mut chain = Vec::with_capacity(m);
        let mut cur = lo;
        chain.push(cur);
        while next[cur - lo] != NONE {
            cur = next[cur - lo];
            chain.push(cur);
        }
        debug_assert_eq!(chain.last(), Some(&upper));
        chain
    }

    /// Best start for stop `j` over the current deque.
    ///
    /// Walks from the front while the next candidate is at least as good.
    /// The walk is a read-only cursor: a candidate passed over here can be
    /// the right answer again for a later stop, so nothing is discarded.
    pub(crate) fn best_start(&self, prefix: &PrefixSums, j: usize) -> usize {
        debug_assert!(!self.deque.is_empty());
        let q = j + 1;
        let mut iter = self.deque.iter();
        let mut best = iter.next().unwrap();
        let mut best_density = prefix.slope(best, q);
        for candidate in iter {
            let density = prefix.slope(candidate, q);
            if !self.at_least_as_good(density, best_density) {
                break;
            }
            best = candidate;
            best_density = density;
        }
        best
    }

    #[cfg(test)]
    fn candidates(&self) -> Vec<usize> {
        self.deque.iter().collect()
    }
}
