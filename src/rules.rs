use {crate::*, glam::IVec2, strum::IntoEnumIterator};

/// The closed set of per-cell update rules. Each one reads at most the four orthogonal neighbors
/// of the visited cell, and mutates at most that one cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    /// Counts open-like neighbors; off-grid edges count as open. Pure.
    Adjacency,
    /// Seals cells with exactly one open neighbor.
    DeadEnd,
    /// Assigns an open cell the minimum neighbor distance plus one.
    Distance,
    /// Reads a cell's distance label back as an integer, `-1` for anything else. Pure.
    RawDistance,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub value: i32,
    pub changed: bool,
}

impl Outcome {
    const fn pure(value: i32) -> Self {
        Self {
            value,
            changed: false,
        }
    }
}

impl Rule {
    pub fn is_pure(self) -> bool {
        matches!(self, Self::Adjacency | Self::RawDistance)
    }

    pub fn apply(self, grid: &mut Grid2D<Cell>, pos: IVec2) -> Outcome {
        match self {
            Self::Adjacency => Outcome::pure(open_adjacency(grid, pos) as i32),
            Self::DeadEnd => seal_dead_end(grid, pos),
            Self::Distance => label_distance(grid, pos),
            Self::RawDistance => Outcome::pure(raw_distance(grid, pos)),
        }
    }
}

/// Number of orthogonal directions in 0..=4 that are either off-grid or hold a start, end, or
/// open cell. A wall has adjacency 0 regardless of its neighbors.
fn open_adjacency(grid: &Grid2D<Cell>, pos: IVec2) -> u32 {
    if grid.get(pos) == Some(&Cell::Wall) {
        0_u32
    } else {
        Direction::iter()
            .filter(|dir| {
                grid.get(pos + dir.vec())
                    .map_or(true, |cell| cell.is_open_passage())
            })
            .count() as u32
    }
}

/// A cell with a single open neighbor cannot lie on a cycle, so it is safe to seal. Landmarks
/// survive even as dead ends.
fn seal_dead_end(grid: &mut Grid2D<Cell>, pos: IVec2) -> Outcome {
    let adjacency: u32 = open_adjacency(grid, pos);
    let changed: bool = adjacency == 1_u32
        && grid
            .get(pos)
            .map_or(false, |cell| !cell.is_permanent());

    if changed {
        *grid.get_mut(pos).unwrap() = Cell::Wall;
    }

    Outcome {
        value: adjacency as i32,
        changed,
    }
}

/// First assignment wins: a cell already holding a distance label is never recomputed, even if a
/// shorter path would be discovered later in the pass ordering.
fn label_distance(grid: &mut Grid2D<Cell>, pos: IVec2) -> Outcome {
    if grid.get(pos) != Some(&Cell::Open) {
        return Outcome::pure(0_i32);
    }

    let candidate: Option<u32> = Direction::iter()
        .filter_map(|dir| match grid.get(pos + dir.vec()) {
            Some(Cell::Start) => Some(1_u32),
            Some(&Cell::Distance(distance)) => Some(distance + 1_u32),
            _ => None,
        })
        .min();

    match candidate {
        Some(distance) => {
            *grid.get_mut(pos).unwrap() = Cell::Distance(distance);

            Outcome {
                value: distance as i32,
                changed: true,
            }
        }
        None => Outcome::pure(0_i32),
    }
}

fn raw_distance(grid: &Grid2D<Cell>, pos: IVec2) -> i32 {
    match grid.get(pos) {
        Some(&Cell::Distance(distance)) => distance as i32,
        _ => -1_i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(input: &str) -> Grid2D<Cell> {
        parse_cell_grid(input).unwrap()
    }

    fn pos(x: i32, y: i32) -> IVec2 {
        IVec2::new(x, y)
    }

    #[test]
    fn test_adjacency_counts_open_neighbors() {
        let mut grid: Grid2D<Cell> = grid(
            "X,X,X\n\
             X,S, \n\
             X, ,X\n",
        );

        // Two open-like neighbors (east and south)
        assert_eq!(
            Rule::Adjacency.apply(&mut grid, pos(1_i32, 1_i32)),
            Outcome {
                value: 2_i32,
                changed: false,
            }
        );
        // East edge: off-grid counts as open, plus the start to the west
        assert_eq!(
            Rule::Adjacency.apply(&mut grid, pos(2_i32, 1_i32)).value,
            2_i32
        );
    }

    #[test]
    fn test_adjacency_of_wall_is_zero() {
        let mut grid: Grid2D<Cell> = grid(concat!(" , , \n", " ,X, \n", " , , \n"));

        // Walls read 0 even when surrounded by open cells
        assert_eq!(
            Rule::Adjacency.apply(&mut grid, pos(1_i32, 1_i32)).value,
            0_i32
        );
    }

    #[test]
    fn test_adjacency_ignores_distance_labels() {
        let mut grid: Grid2D<Cell> = grid("1,S,2\n");

        // Both labeled neighbors read as closed; only the off-grid north and south edges count
        assert_eq!(
            Rule::Adjacency.apply(&mut grid, pos(1_i32, 0_i32)).value,
            2_i32
        );
    }

    #[test]
    fn test_dead_end_is_sealed() {
        let mut grid: Grid2D<Cell> = grid(
            "X,X,X,X\n\
             X, , ,X\n\
             X,X,X,X\n",
        );

        assert_eq!(
            Rule::DeadEnd.apply(&mut grid, pos(1_i32, 1_i32)),
            Outcome {
                value: 1_i32,
                changed: true,
            }
        );
        assert_eq!(grid.get(pos(1_i32, 1_i32)), Some(&Cell::Wall));
    }

    #[test]
    fn test_dead_end_spares_landmarks() {
        let mut grid: Grid2D<Cell> = grid(
            "X,X,X,X\n\
             X,S,E,X\n\
             X,X,X,X\n",
        );

        assert_eq!(
            Rule::DeadEnd.apply(&mut grid, pos(1_i32, 1_i32)),
            Outcome {
                value: 1_i32,
                changed: false,
            }
        );
        assert_eq!(grid.get(pos(1_i32, 1_i32)), Some(&Cell::Start));
    }

    #[test]
    fn test_dead_end_leaves_junctions() {
        let mut grid: Grid2D<Cell> = grid(concat!("X, ,X\n", " , , \n", "X,X,X\n"));

        assert_eq!(
            Rule::DeadEnd.apply(&mut grid, pos(1_i32, 1_i32)),
            Outcome {
                value: 3_i32,
                changed: false,
            }
        );
    }

    #[test]
    fn test_distance_takes_minimum_candidate() {
        let mut grid: Grid2D<Cell> = grid(
            "X,5,X\n\
             S, ,2\n\
             X,9,X\n",
        );

        // Start offers 1, the labels offer 3, 6, and 10
        assert_eq!(
            Rule::Distance.apply(&mut grid, pos(1_i32, 1_i32)),
            Outcome {
                value: 1_i32,
                changed: true,
            }
        );
        assert_eq!(grid.get(pos(1_i32, 1_i32)), Some(&Cell::Distance(1_u32)));
    }

    #[test]
    fn test_distance_without_candidates_is_unchanged() {
        let mut grid: Grid2D<Cell> = grid(concat!("X, ,X\n", " , , \n", "X, ,X\n"));

        assert!(!Rule::Distance.apply(&mut grid, pos(1_i32, 1_i32)).changed);
        assert_eq!(grid.get(pos(1_i32, 1_i32)), Some(&Cell::Open));
    }

    #[test]
    fn test_distance_never_relabels() {
        let mut grid: Grid2D<Cell> = grid("S,9,1\n");

        // 9 keeps its label even though the start would now offer 1
        assert!(!Rule::Distance.apply(&mut grid, pos(1_i32, 0_i32)).changed);
        assert_eq!(grid.get(pos(1_i32, 0_i32)), Some(&Cell::Distance(9_u32)));
    }

    #[test]
    fn test_raw_distance_sentinel() {
        let mut grid: Grid2D<Cell> = grid("S,14, \n");

        assert_eq!(
            Rule::RawDistance.apply(&mut grid, pos(0_i32, 0_i32)),
            Outcome {
                value: -1_i32,
                changed: false,
            }
        );
        assert_eq!(
            Rule::RawDistance.apply(&mut grid, pos(1_i32, 0_i32)).value,
            14_i32
        );
        assert_eq!(
            Rule::RawDistance.apply(&mut grid, pos(2_i32, 0_i32)).value,
            -1_i32
        );
    }
}
