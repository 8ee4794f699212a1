use std::collections::VecDeque;

use log::{debug, trace, warn};

use crate::models::{Block, Section, Slide, SlideHeading};
use crate::split::{SplitLimits, expand_blocks};

use super::Measure;

/// Fits one section at a time into slides of at most `budget` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub budget: usize,
    pub limits: SplitLimits,
}

impl Paginator {
    pub fn new(budget: usize, limits: SplitLimits) -> Self {
        Self { budget, limits }
    }

    /// Paginates one section. Slides are numbered from `first_index`.
    ///
    /// An empty section yields no slides. Every slide holds at least one
    /// block; a lone block that still overflows is emitted as it is.
    pub fn paginate_section<M>(
        &self,
        section: &Section,
        first_index: usize,
        oracle: &mut M,
    ) -> Vec<Slide>
    where
        M: Measure + ?Sized,
    {
        let mut remaining = expand_blocks(&section.blocks, &self.limits);
        let mut slides = vec![];
        let mut part = 1usize;
        let mut calls = 0usize;

        while !remaining.is_empty() {
            let heading = SlideHeading::new(section.heading.as_str(), part);
            let mut attempt = std::mem::take(&mut remaining);
            let mut overflow: VecDeque<Block> = VecDeque::new();

            loop {
                let extent = oracle.measure(&heading, &attempt);
                calls += 1;
                trace!(
                    "measured '{}' with {} blocks: {extent}/{}",
                    heading.display(),
                    attempt.len(),
                    self.budget
                );
                if extent <= self.budget {
                    break;
                }
                if attempt.len() == 1 {
                    warn!(
                        "slide '{}' holds a single block of extent {extent} over budget {}",
                        heading.display(),
                        self.budget
                    );
                    break;
                }
                // A trailing list travels with the block before it, so an
                // intro line is not left behind on its own.
                let peel = if attempt.last().is_some_and(Block::is_list) {
                    2
                } else {
                    1
                };
                let cut = attempt.len() - peel;
                for block in attempt.drain(cut..).rev() {
                    overflow.push_front(block);
                }
                if attempt.is_empty() {
                    break;
                }
            }

            if attempt.is_empty() {
                attempt.extend(overflow.pop_front());
            }

            slides.push(Slide {
                index: first_index + slides.len(),
                heading,
                blocks: attempt,
            });
            part += 1;
            remaining = overflow.into();
        }

        debug!(
            "section '{}': {} blocks -> {} slides, {calls} measurements",
            section.heading,
            slides.iter().map(|s| s.blocks.len()).sum::<usize>(),
            slides.len()
        );
        slides
    }
}
