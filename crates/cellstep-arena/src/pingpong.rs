//! Double-buffered ping-pong storage.
//!
//! [`PingPongBuffers`] keeps two row-major cell buffers that alternate
//! between "source" (read-only) and "destination" (write-only) roles. The
//! lifecycle per generation is:
//!
//! 1. `begin_generation()`: split the buffers into a [`GenerationPass`]
//! 2. The engine fills `pass.dest` from `pass.source`
//! 3. `publish()`: advance the generation counter, swapping roles
//! 4. `published()`: borrow the authoritative buffer

use cellstep_core::Grid;

use crate::error::ArenaError;

/// Borrowed view of one generation's buffers.
///
/// Created by [`PingPongBuffers::begin_generation()`] and dropped before
/// [`PingPongBuffers::publish()`]. Holds the source immutably and the
/// destination mutably, preventing any other access to the arena while the
/// generation is computed.
#[must_use]
#[derive(Debug)]
pub struct GenerationPass<'a> {
    /// Zero-based index of the generation being computed.
    pub generation: u64,
    /// Grid side length.
    pub side: usize,
    /// State at the start of the generation.
    pub source: &'a [u8],
    /// Buffer receiving the next state. Same length as `source`.
    pub dest: &'a mut [u8],
}

/// Two same-sized cell buffers with parity-based role assignment.
///
/// # Buffer layout
///
/// ```text
/// buffers[0]: read on even generations, written on odd ones
/// buffers[1]: written on even generations, read on odd ones
/// ```
///
/// The initial grid is loaded into `buffers[0]`; with zero generations
/// published it is also the result.
#[derive(Clone, Debug)]
pub struct PingPongBuffers {
    buffers: [Vec<u8>; 2],
    side: usize,
    /// Number of published generations.
    generation: u64,
    /// Whether `begin_generation()` has been called without `publish()`.
    pass_in_progress: bool,
}

impl PingPongBuffers {
    /// Allocate both buffers at the side length of `initial` and load it as
    /// generation 0.
    pub fn new(initial: &Grid) -> Self {
        let front = initial.as_bytes().to_vec();
        let back = vec![0u8; front.len()];
        Self {
            buffers: [front, back],
            side: initial.side(),
            generation: 0,
            pass_in_progress: false,
        }
    }

    /// Grid side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of published generations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Index of the buffer holding the state after `generation` published
    /// generations.
    pub fn result_index(generation: u64) -> usize {
        (generation % 2) as usize
    }

    /// Split the buffers for computing the next generation.
    ///
    /// The source is `buffers[g % 2]` and the destination the other one,
    /// where `g` is the number of generations published so far.
    pub fn begin_generation(&mut self) -> Result<GenerationPass<'_>, ArenaError> {
        if self.generation == u64::MAX {
            return Err(ArenaError::GenerationOverflow);
        }
        self.pass_in_progress = true;

        let generation = self.generation;
        let (front, back) = self.buffers.split_at_mut(1);
        let (source, dest) = if Self::result_index(generation) == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };
        Ok(GenerationPass {
            generation,
            side: self.side,
            source,
            dest,
        })
    }

    /// Publish the destination of the current pass as the new state.
    ///
    /// Returns `Err` if no pass is in progress.
    pub fn publish(&mut self) -> Result<(), ArenaError> {
        if !self.pass_in_progress {
            return Err(ArenaError::PublishWithoutPass);
        }
        self.pass_in_progress = false;
        self.generation += 1;
        Ok(())
    }

    /// Row-major state after the last published generation.
    pub fn published(&self) -> &[u8] {
        &self.buffers[Self::result_index(self.generation)]
    }

    /// Consume the arena, returning the authoritative buffer.
    pub fn into_published(self) -> Vec<u8> {
        let index = Self::result_index(self.generation);
        let [front, back] = self.buffers;
        if index == 0 {
            front
        } else {
            back
        }
    }

    /// Replace the state with `grid` and rewind to generation 0.
    ///
    /// Both buffers keep their allocation; `grid` must have the same side.
    pub fn reset(&mut self, grid: &Grid) -> Result<(), ArenaError> {
        if grid.side() != self.side {
            return Err(ArenaError::SideMismatch {
                expected: self.side,
                actual: grid.side(),
            });
        }
        self.buffers[0].copy_from_slice(grid.as_bytes());
        self.buffers[1].fill(0);
        self.generation = 0;
        self.pass_in_progress = false;
        Ok(())
    }

    /// Bytes held by both buffers.
    pub fn memory_bytes(&self) -> usize {
        self.buffers.iter().map(Vec::capacity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(rows: &[[u8; 3]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn initial_state_is_published() {
        let g = grid(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
        let arena = PingPongBuffers::new(&g);
        assert_eq!(arena.generation(), 0);
        assert_eq!(arena.published(), g.as_bytes());
        assert_eq!(arena.side(), 3);
    }

    #[test]
    fn even_generation_reads_front_writes_back() {
        let g = grid(&[[1, 1, 1], [0, 0, 0], [0, 0, 0]]);
        let mut arena = PingPongBuffers::new(&g);
        let pass = arena.begin_generation().unwrap();
        assert_eq!(pass.generation, 0);
        assert_eq!(pass.source, g.as_bytes());
        pass.dest.fill(1);
        arena.publish().unwrap();
        assert_eq!(arena.generation(), 1);
        assert_eq!(arena.published(), &[1u8; 9][..]);
    }

    #[test]
    fn odd_generation_reads_back_writes_front() {
        let g = Grid::dead(3).unwrap();
        let mut arena = PingPongBuffers::new(&g);

        let pass = arena.begin_generation().unwrap();
        pass.dest.fill(1);
        arena.publish().unwrap();

        let pass = arena.begin_generation().unwrap();
        assert_eq!(pass.generation, 1);
        assert_eq!(pass.source, &[1u8; 9][..]);
        // The destination is the front buffer, still holding gen 0.
        assert_eq!(&*pass.dest, &[0u8; 9][..]);
        arena.publish().unwrap();
        assert_eq!(arena.published(), &[0u8; 9][..]);
    }

    #[test]
    fn publish_without_pass_is_rejected() {
        let mut arena = PingPongBuffers::new(&Grid::dead(2).unwrap());
        assert_eq!(arena.publish(), Err(ArenaError::PublishWithoutPass));
        let _ = arena.begin_generation().unwrap();
        arena.publish().unwrap();
        assert_eq!(arena.publish(), Err(ArenaError::PublishWithoutPass));
    }

    #[test]
    fn reset_rewinds_and_checks_side() {
        let mut arena = PingPongBuffers::new(&Grid::dead(3).unwrap());
        let pass = arena.begin_generation().unwrap();
        pass.dest.fill(1);
        arena.publish().unwrap();

        let g = grid(&[[0, 1, 0], [0, 1, 0], [0, 1, 0]]);
        arena.reset(&g).unwrap();
        assert_eq!(arena.generation(), 0);
        assert_eq!(arena.published(), g.as_bytes());

        assert_eq!(
            arena.reset(&Grid::dead(4).unwrap()),
            Err(ArenaError::SideMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn into_published_takes_result_buffer() {
        let g = grid(&[[0, 0, 0], [1, 1, 1], [0, 0, 0]]);
        let arena = PingPongBuffers::new(&g);
        assert_eq!(arena.into_published(), g.as_bytes());

        let mut arena = PingPongBuffers::new(&g);
        let pass = arena.begin_generation().unwrap();
        pass.dest.fill(1);
        arena.publish().unwrap();
        assert_eq!(arena.into_published(), vec![1u8; 9]);
    }

    #[test]
    fn memory_covers_both_buffers() {
        let arena = PingPongBuffers::new(&Grid::dead(8).unwrap());
        assert!(arena.memory_bytes() >= 2 * 64);
    }

    proptest! {
        #[test]
        fn result_index_follows_parity(generations in 0u64..64) {
            let mut arena = PingPongBuffers::new(&Grid::dead(2).unwrap());
            // Tag each destination with the generation that wrote it.
            for g in 0..generations {
                let pass = arena.begin_generation().unwrap();
                pass.dest.fill((g % 2) as u8);
                arena.publish().unwrap();
            }
            prop_assert_eq!(PingPongBuffers::result_index(generations), (generations % 2) as usize);
            if generations > 0 {
                let last = ((generations - 1) % 2) as u8;
                prop_assert!(arena.published().iter().all(|&v| v == last));
            }
        }
    }
}
