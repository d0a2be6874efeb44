use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::char,
        combinator::all_consuming,
        multi::separated_list1,
    },
};

#[derive(Debug, PartialEq)]
pub enum MazeError {
    EmptyGrid,
    InvalidCell {
        row: usize,
    },
    RaggedRow {
        row: usize,
        len: usize,
        expected_len: usize,
    },
    NoStart,
    MultipleStarts,
    NoEnd,
    MultipleEnds,
}

/// Parses a comma-delimited grid of cell labels, one row per line. Rows must be non-empty and of
/// equal length; any unrecognized field is an error. Only line endings separate rows, so an open
/// cell at a row edge is preserved.
pub fn parse_cell_grid(input: &str) -> Result<Grid2D<Cell>, MazeError> {
    let mut cells: Vec<Cell> = Vec::new();
    let mut expected_len: Option<usize> = None;

    for (row, line) in input.lines().enumerate() {
        let (_, row_cells) = all_consuming(separated_list1(char(','), Cell::parse))(line)
            .map_err(|_| MazeError::InvalidCell { row })?;

        match expected_len {
            None => expected_len = Some(row_cells.len()),
            Some(expected_len) if row_cells.len() != expected_len => {
                return Err(MazeError::RaggedRow {
                    row,
                    len: row_cells.len(),
                    expected_len,
                });
            }
            _ => {}
        }

        cells.extend(row_cells);
    }

    let width: usize = expected_len.ok_or(MazeError::EmptyGrid)?;

    Ok(Grid2D::try_from_cells_and_width(cells, width).unwrap())
}

/// A validated grid: rectangular, with exactly one start and exactly one end cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Maze {
    pub(crate) grid: Grid2D<Cell>,
    start: IVec2,
    end: IVec2,
}

impl Maze {
    #[inline]
    pub fn grid(&self) -> &Grid2D<Cell> {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> IVec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> IVec2 {
        self.end
    }
}

impl TryFrom<Grid2D<Cell>> for Maze {
    type Error = MazeError;

    fn try_from(grid: Grid2D<Cell>) -> Result<Self, Self::Error> {
        let start: IVec2 = grid
            .try_find_single_position_with_cell(&Cell::Start)
            .ok_or_else(|| {
                if grid.iter_positions_with_cell(&Cell::Start).next().is_none() {
                    MazeError::NoStart
                } else {
                    MazeError::MultipleStarts
                }
            })?;
        let end: IVec2 = grid
            .try_find_single_position_with_cell(&Cell::End)
            .ok_or_else(|| {
                if grid.iter_positions_with_cell(&Cell::End).next().is_none() {
                    MazeError::NoEnd
                } else {
                    MazeError::MultipleEnds
                }
            })?;

        Ok(Self { grid, start, end })
    }
}

impl<'i> TryFrom<&'i str> for Maze {
    type Error = MazeError;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        parse_cell_grid(input)?.try_into()
    }
}
