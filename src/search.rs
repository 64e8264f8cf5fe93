//! Ladder distance search.
//!
//! Two passes over the word graph: a greedy direct-edit checker that tries to
//! walk straight from source to target in one left-to-right sweep, and a
//! complete bidirectional breadth-first search that expands one depth level
//! per round from each end and stops at the first meeting point.

use std::collections::{HashMap, VecDeque};

use crate::dictionary::Dictionary;
use crate::error::LadderError;
use crate::FREQUENCY_ALPHABET;

/// Outcome of a ladder distance computation.
///
/// "No such path" is a valid result of a complete search over disconnected
/// word-graph components, so it gets its own variant instead of overloading a
/// zero distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderResult {
    /// Shortest ladder length in substitutions. `Found(0)` means source and
    /// target are already the same word.
    Found(usize),
    /// Source and target lie in disconnected components of the word graph.
    Unreachable,
}

impl LadderResult {
    /// The step count, if a ladder exists.
    pub fn steps(self) -> Option<usize> {
        match self {
            LadderResult::Found(steps) => Some(steps),
            LadderResult::Unreachable => None,
        }
    }
}

/// One direction of the bidirectional search: the queue of words awaiting
/// expansion, the depth each word was first reached at, and the level
/// counter. Each side mutates only its own state; the opposite side's visited
/// map is read to detect the meeting point.
struct Frontier {
    queue: VecDeque<Vec<u8>>,
    visited: HashMap<Vec<u8>, usize>,
    level: usize,
}

impl Frontier {
    fn seeded(origin: &str) -> Self {
        let origin = origin.as_bytes().to_vec();
        let mut visited = HashMap::new();
        visited.insert(origin.clone(), 0);
        let mut queue = VecDeque::new();
        queue.push_back(origin);
        Self {
            queue,
            visited,
            level: 0,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Expand every word queued at the current depth by one substitution.
    /// Returns the total distance as soon as a candidate reaches `goal` or a
    /// word the opposite side already visited.
    fn advance(
        &mut self,
        dictionary: &Dictionary,
        alphabet: &[u8],
        goal: &[u8],
        opposite: &HashMap<Vec<u8>, usize>,
    ) -> Option<usize> {
        self.level += 1;

        // Only expand words queued before this round started; candidates
        // pushed mid-round belong to the next depth level.
        let round_size = self.queue.len();
        for _ in 0..round_size {
            let Some(mut word) = self.queue.pop_front() else {
                break;
            };
            for i in 0..word.len() {
                let original = word[i];
                for &letter in alphabet {
                    word[i] = letter;
                    if !dictionary.contains_bytes(&word)
                        || self.visited.contains_key(word.as_slice())
                    {
                        continue;
                    }
                    if word.as_slice() == goal {
                        return Some(self.level);
                    }
                    if let Some(&depth) = opposite.get(word.as_slice()) {
                        return Some(self.level + depth);
                    }
                    self.visited.insert(word.clone(), self.level);
                    self.queue.push_back(word.clone());
                }
                word[i] = original;
            }
        }
        None
    }
}

/// The ladder distance solver.
///
/// Borrows an immutable [`Dictionary`] and carries the alphabet traversal
/// order used by the complete search.
#[derive(Debug, Clone)]
pub struct LadderSolver<'a> {
    dictionary: &'a Dictionary,
    alphabet: Vec<u8>,
}

impl<'a> LadderSolver<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_alphabet(dictionary, FREQUENCY_ALPHABET)
    }

    /// Use a custom alphabet traversal order, e.g. a synthetic alphabet in
    /// tests. The order changes which equally-short path is found first,
    /// never the returned distance.
    pub fn with_alphabet(dictionary: &'a Dictionary, alphabet: &[u8]) -> Self {
        Self {
            dictionary,
            alphabet: alphabet.to_vec(),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.dictionary
    }

    /// Greedy left-to-right direct-edit pass from `source` towards `target`.
    ///
    /// Walks the positions once, substituting each mismatched letter with the
    /// target's letter whenever the mutated word stays in the dictionary, and
    /// reverting the position otherwise. Returns the number of substitutions
    /// performed, counting the final one that completes the match, or `None`
    /// when the single pass does not reach the target.
    ///
    /// Direction-sensitive: callers try both source->target and
    /// target->source before falling back to the complete search. `None` is
    /// an expected outcome, not a failure, and is distinct from a zero-step
    /// result (equal inputs never reach the final-substitution check and
    /// return `None`).
    pub fn greedy_steps(&self, source: &str, target: &str) -> Option<usize> {
        debug_assert_eq!(source.len(), target.len());

        let target = target.as_bytes();
        let mut word = source.as_bytes().to_vec();
        let mut steps = 0;

        for i in 0..word.len() {
            if word[i] == target[i] {
                continue;
            }

            let original = word[i];
            word[i] = target[i];

            if word.as_slice() == target {
                return Some(steps + 1);
            }

            if self.dictionary.contains_bytes(&word) {
                steps += 1;
            } else {
                word[i] = original;
            }
        }
        None
    }

    /// Complete bidirectional breadth-first search for the shortest ladder.
    ///
    /// Expands one full depth level per round from each end; the first
    /// candidate found in the opposite side's visited map yields the
    /// meeting-point distance, which is minimal because every edge costs one
    /// substitution and both sides advance level by level. `Unreachable` when
    /// both frontiers empty out without meeting.
    ///
    /// Callers handle `source == target` upstream; the search assumes
    /// distinct endpoints.
    pub fn shortest_ladder(&self, source: &str, target: &str) -> LadderResult {
        debug_assert_eq!(source.len(), target.len());

        let mut start = Frontier::seeded(source);
        let mut end = Frontier::seeded(target);
        let source = source.as_bytes();
        let target = target.as_bytes();

        while !start.is_exhausted() && !end.is_exhausted() {
            if let Some(steps) = start.advance(self.dictionary, &self.alphabet, target, &end.visited)
            {
                return LadderResult::Found(steps);
            }
            if let Some(steps) = end.advance(self.dictionary, &self.alphabet, source, &start.visited)
            {
                return LadderResult::Found(steps);
            }
        }
        LadderResult::Unreachable
    }

    /// Full solve sequence: validate the preconditions, short-circuit equal
    /// words, try the greedy pass in both directions, then fall back to the
    /// complete search.
    pub fn solve(&self, source: &str, target: &str) -> Result<LadderResult, LadderError> {
        if source.len() != target.len() {
            return Err(LadderError::UnequalLengths {
                source_len: source.len(),
                target_len: target.len(),
            });
        }
        if source.len() != self.dictionary.word_len() {
            return Err(LadderError::WrongLength {
                expected: self.dictionary.word_len(),
                actual: source.len(),
            });
        }
        if !self.dictionary.contains(target) {
            return Err(LadderError::TargetNotInDictionary(target.to_string()));
        }
        if source == target {
            return Ok(LadderResult::Found(0));
        }

        if let Some(steps) = self.greedy_steps(source, target) {
            return Ok(LadderResult::Found(steps));
        }
        if let Some(steps) = self.greedy_steps(target, source) {
            return Ok(LadderResult::Found(steps));
        }

        Ok(self.shortest_ladder(source, target))
    }
}
