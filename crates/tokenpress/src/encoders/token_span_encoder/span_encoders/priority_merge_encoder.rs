//! # Priority-merge [`SpanEncoder`].
//!
//! Pending merges wait in a min-heap keyed on ``(rank, left position)``;
//! the span itself is an index-linked list which shrinks as merges apply.
//! `O(n log n)` per span, against the `O(n^2)` rescans of
//! [`super::TailSweepSpanEncoder`].

use core::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{
    encoders::token_span_encoder::SpanEncoder,
    types::TokenType,
    vocab::{ByteMapVocab, Vocabulary},
};

/// End-of-list marker for [`Link::prev`] and [`Link::next`].
const END: u32 = u32::MAX;

#[derive(Debug, Clone, Copy)]
struct Link<T> {
    token: T,
    prev: u32,
    next: u32,
}

/// ``(rank, left, left_token, right_token)``.
///
/// Tuple order pops the lowest rank first, then the leftmost position.
/// The two tokens identify the pair the entry was queued for; once either
/// side merges the entry no longer matches and is dropped on pop.
type Candidate<T> = Reverse<(T, u32, T, T)>;

/// A [`SpanEncoder`] using a binary min-heap over a linked list of tokens.
///
/// Both buffers are scratch space, reset at the start of every span.
#[derive(Debug)]
pub struct PriorityMergeSpanEncoder<T: TokenType> {
    links: Vec<Link<T>>,
    queue: BinaryHeap<Candidate<T>>,
}

impl<T: TokenType> Default for PriorityMergeSpanEncoder<T> {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            queue: BinaryHeap::new(),
        }
    }
}

impl<T: TokenType> Clone for PriorityMergeSpanEncoder<T> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<T: TokenType> PriorityMergeSpanEncoder<T> {
    /// Lay out one link per byte, and empty the queue.
    fn reset(
        &mut self,
        byte_vocab: &ByteMapVocab<T>,
        span: &[u8],
    ) {
        let last = span.len() - 1;
        self.links.clear();
        self.links
            .extend(span.iter().enumerate().map(|(pos, &byte)| Link {
                token: byte_vocab.get_token(byte),
                prev: pos.checked_sub(1).map_or(END, |p| p as u32),
                next: if pos == last { END } else { pos as u32 + 1 },
            }));
        self.queue.clear();
    }

    /// Queue the pair starting at `left`, if it has a right neighbor and a rank.
    fn offer(
        &mut self,
        vocab: &Vocabulary<T>,
        left: u32,
    ) {
        let link = self.links[left as usize];
        if link.next == END {
            return;
        }
        let right_token = self.links[link.next as usize].token;
        if let Some(rank) = vocab.lookup_pair(&(link.token, right_token)) {
            self.queue
                .push(Reverse((rank, left, link.token, right_token)));
        }
    }

    /// The right neighbor of `left`, if the queued pair is still in place.
    fn live_right(
        &self,
        left: u32,
        left_token: T,
        right_token: T,
    ) -> Option<u32> {
        let link = &self.links[left as usize];
        if link.next == END || link.token != left_token {
            return None;
        }
        let right = &self.links[link.next as usize];
        (right.prev == left && right.token == right_token).then_some(link.next)
    }

    /// Replace `left` and its right neighbor `right` with `merged`.
    ///
    /// The left link survives; the right link is unhooked.
    fn absorb(
        &mut self,
        left: u32,
        right: u32,
        merged: T,
    ) {
        let after = self.links[right as usize].next;
        let link = &mut self.links[left as usize];
        link.token = merged;
        link.next = after;
        if after != END {
            self.links[after as usize].prev = left;
        }
    }
}

impl<T: TokenType> SpanEncoder<T> for PriorityMergeSpanEncoder<T> {
    fn encode_append_compound_span(
        &mut self,
        vocab: &Vocabulary<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        if span.len() < 2 {
            vocab.byte_vocab().append_tokens(span, tokens);
            return;
        }

        self.reset(vocab.byte_vocab(), span);
        for left in 0..(span.len() - 1) as u32 {
            self.offer(vocab, left);
        }

        while let Some(Reverse((merged, left, left_token, right_token))) = self.queue.pop() {
            let Some(right) = self.live_right(left, left_token, right_token) else {
                continue;
            };
            self.absorb(left, right, merged);

            let before = self.links[left as usize].prev;
            if before != END {
                self.offer(vocab, before);
            }
            self.offer(vocab, left);
        }

        // Position 0 only ever absorbs; it heads the list.
        let mut pos = 0;
        while pos != END {
            let link = &self.links[pos as usize];
            tokens.push(link.token);
            pos = link.next;
        }
    }
}
