use crate::*;

/// A tree or simple path has no cell with more than two open neighbors; anything above this after
/// erosion means a cycle survives.
const LOOP_FREE_MAX_ADJACENCY: i32 = 2_i32;

/// The orchestration states. `Breaking` carries the distance value whose cells are about to
/// become walls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Eroding,
    MeasuringAdjacency,
    PropagatingDistance,
    MeasuringDistance,
    Breaking(u32),
    Done,
}

/// Grid snapshot checkpoints reported to observers during a reduction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Checkpoint {
    Initial,
    LoopCut { iteration: usize },
    Final,
}

#[derive(Debug, PartialEq)]
pub enum ReduceError {
    /// Distance propagation labeled no cell, so breaking could never add a wall: some loopy
    /// region is unreachable from the start.
    StalledDistanceLabeling,
}

/// Turns every cell holding the target distance into a wall, and resets every other labeled cell
/// to open. This cuts the farthest-reached frontier of the relaxation and clears the labeling so
/// the next erosion starts clean.
pub fn cut_longest_paths(grid: &mut Grid2D<Cell>, target: u32) {
    for cell in grid.cells_mut() {
        match *cell {
            Cell::Distance(distance) if distance == target => *cell = Cell::Wall,
            Cell::Distance(_) => *cell = Cell::Open,
            _ => {}
        }
    }
}

impl Maze {
    /// Advances the phase machine by one transition.
    pub fn step(&mut self, phase: Phase) -> Result<Phase, ReduceError> {
        Ok(match phase {
            Phase::Eroding => {
                relax_to_fixed_point(&mut self.grid, Rule::DeadEnd);

                Phase::MeasuringAdjacency
            }
            Phase::MeasuringAdjacency => {
                if scan_for_max(&mut self.grid, Rule::Adjacency) > LOOP_FREE_MAX_ADJACENCY {
                    Phase::PropagatingDistance
                } else {
                    Phase::Done
                }
            }
            Phase::PropagatingDistance => {
                relax_to_fixed_point(&mut self.grid, Rule::Distance);

                Phase::MeasuringDistance
            }
            Phase::MeasuringDistance => {
                let max_distance: i32 = scan_for_max(&mut self.grid, Rule::RawDistance);

                if max_distance <= 0_i32 {
                    return Err(ReduceError::StalledDistanceLabeling);
                }

                Phase::Breaking(max_distance as u32)
            }
            Phase::Breaking(target) => {
                cut_longest_paths(&mut self.grid, target);

                Phase::Eroding
            }
            Phase::Done => Phase::Done,
        })
    }

    /// Reduces the maze to a loop-free state. Returns the number of loop cuts performed.
    pub fn reduce(&mut self) -> Result<usize, ReduceError> {
        self.reduce_with(|_, _| ())
    }

    /// Runs the phase machine to completion, handing the observer a read-only grid snapshot at
    /// each checkpoint: before processing, after every completed loop cut, and once done.
    ///
    /// Every completed `Breaking` turns at least one labeled cell into a wall, so the wall count
    /// strictly increases each cut and the outer loop is bounded by the grid area.
    pub fn reduce_with<F: FnMut(Checkpoint, &Grid2D<Cell>)>(
        &mut self,
        mut observer: F,
    ) -> Result<usize, ReduceError> {
        let mut iteration: usize = 0_usize;
        let mut phase: Phase = Phase::Eroding;

        observer(Checkpoint::Initial, &self.grid);

        while phase != Phase::Done {
            let was_breaking: bool = matches!(phase, Phase::Breaking(_));

            phase = self.step(phase)?;

            if was_breaking {
                iteration += 1_usize;
                observer(Checkpoint::LoopCut { iteration }, &self.grid);
            }
        }

        observer(Checkpoint::Final, &self.grid);

        Ok(iteration)
    }
}
