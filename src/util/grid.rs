pub use direction::*;

use {
    glam::IVec2,
    std::{
        fmt::{Debug, DebugList, Formatter, Result as FmtResult},
        ops::Range,
    },
};

mod direction {
    use {
        glam::IVec2,
        static_assertions::const_assert,
        std::{mem::transmute, ops::Range},
        strum::{EnumCount, EnumIter},
    };

    macro_rules! define_direction {
        {
            $( #[$meta:meta] )*
            $vis:vis enum $direction:ident {
                $( $( #[$variant_meta:meta] )* $variant:ident, )*
            }
        } => {
            $(#[$meta])*
            $vis enum $direction {
                $( $( #[$variant_meta] )* $variant, )*
            }

            const VECS: [IVec2; $direction::COUNT] = [
                $( $direction::$variant.vec_internal(), )*
            ];
        };
    }

    define_direction! {
        #[derive(Copy, Clone, Debug, Default, EnumCount, EnumIter, Eq, Hash, PartialEq)]
        #[repr(u8)]
        pub enum Direction {
            #[default]
            North,
            East,
            South,
            West,
        }
    }

    // This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2
    // bits, which is the same as masking by `MASK`
    const_assert!(Direction::COUNT == 4_usize);

    impl Direction {
        pub const COUNT_U8: u8 = Self::COUNT as u8;
        pub const MASK: u8 = Self::COUNT_U8 - 1_u8;

        #[inline]
        pub const fn vec(self) -> IVec2 {
            VECS[self as usize]
        }

        #[inline]
        pub const fn from_u8(value: u8) -> Self {
            // SAFETY: See `const_assert` above
            unsafe { transmute(value & Self::MASK) }
        }

        const fn vec_internal(self) -> IVec2 {
            match self {
                Self::North => IVec2::NEG_Y,
                Self::East => IVec2::X,
                Self::South => IVec2::Y,
                Self::West => IVec2::NEG_X,
            }
        }
    }

    impl From<Direction> for IVec2 {
        fn from(value: Direction) -> Self {
            value.vec()
        }
    }

    impl From<u8> for Direction {
        fn from(value: u8) -> Self {
            Self::from_u8(value)
        }
    }

    impl TryFrom<IVec2> for Direction {
        type Error = ();

        fn try_from(value: IVec2) -> Result<Self, Self::Error> {
            VECS.iter()
                .position(|vec| *vec == value)
                .map(|index| (index as u8).into())
                .ok_or(())
        }
    }

    impl TryFrom<Range<IVec2>> for Direction {
        type Error = super::CellIterFromRangeError;

        fn try_from(Range { start, end }: Range<IVec2>) -> Result<Self, Self::Error> {
            use super::CellIterFromRangeError::*;

            let delta: IVec2 = end - start;

            if delta == IVec2::ZERO {
                Err(PositionsIdentical)
            } else if delta.x != 0_i32 && delta.y != 0_i32 {
                Err(PositionsNotAligned)
            } else {
                let abs: IVec2 = delta.abs();

                Ok((delta / (abs.x + abs.y)).try_into().unwrap())
            }
        }
    }
}

pub fn grid_2d_contains(pos: IVec2, dimensions: IVec2) -> bool {
    (pos.cmpge(IVec2::ZERO) & pos.cmplt(dimensions)).all()
}

pub fn grid_2d_pos_from_index_and_dimensions(index: usize, dimensions: IVec2) -> IVec2 {
    let x: usize = dimensions.x as usize;

    IVec2::new((index % x) as i32, (index / x) as i32)
}

pub fn grid_2d_try_index_from_pos_and_dimensions(pos: IVec2, dimensions: IVec2) -> Option<usize> {
    grid_2d_contains(pos, dimensions)
        .then(|| pos.y as usize * dimensions.x as usize + pos.x as usize)
}

pub struct Grid2D<T> {
    cells: Vec<T>,

    /// Should only contain unsigned values, but is signed for ease of use for iterating
    dimensions: IVec2,
}

impl<T> Grid2D<T> {
    pub fn try_from_cells_and_dimensions(cells: Vec<T>, dimensions: IVec2) -> Option<Self> {
        (dimensions.cmpge(IVec2::ZERO).all()
            && cells.len() == dimensions.x as usize * dimensions.y as usize)
            .then_some(Self { cells, dimensions })
    }

    pub fn try_from_cells_and_width(cells: Vec<T>, width: usize) -> Option<Self> {
        let cells_len: usize = cells.len();

        if cells_len % width != 0_usize {
            None
        } else {
            Some(Self {
                cells,
                dimensions: IVec2::new(width as i32, (cells_len / width) as i32),
            })
        }
    }

    pub fn empty(dimensions: IVec2) -> Self {
        Self {
            cells: Vec::new(),
            dimensions,
        }
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        grid_2d_contains(pos, self.dimensions)
    }

    #[inline]
    pub fn index_from_pos(&self, pos: IVec2) -> usize {
        pos.y as usize * self.dimensions.x as usize + pos.x as usize
    }

    pub fn try_index_from_pos(&self, pos: IVec2) -> Option<usize> {
        grid_2d_try_index_from_pos_and_dimensions(pos, self.dimensions)
    }

    pub fn pos_from_index(&self, index: usize) -> IVec2 {
        grid_2d_pos_from_index_and_dimensions(index, self.dimensions)
    }

    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &self.cells[index])
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &mut self.cells[index])
    }

    /// Iterates all positions in row-major order. The iterator captures only the dimensions, so
    /// the grid may be mutated while it is live.
    pub fn iter_positions(&self) -> impl Iterator<Item = IVec2> {
        let dimensions: IVec2 = self.dimensions;

        CellIter2D::try_from(IVec2::ZERO..IVec2::new(0_i32, dimensions.y))
            .unwrap()
            .flat_map(move |pos| {
                CellIter2D::try_from(pos..IVec2::new(dimensions.x, pos.y)).unwrap()
            })
    }

    pub fn iter_filtered_positions<'a, P: Fn(&T) -> bool + 'a>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = IVec2> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| predicate(cell).then(|| self.pos_from_index(index)))
    }

    pub fn iter_positions_with_cell<'a>(&'a self, target: &'a T) -> impl Iterator<Item = IVec2> + 'a
    where
        T: PartialEq,
    {
        self.iter_filtered_positions(|cell| *cell == *target)
    }

    pub fn try_find_single_position_with_cell(&self, target: &T) -> Option<IVec2>
    where
        T: PartialEq,
    {
        self.iter_positions_with_cell(target)
            .try_fold(None, |prev_pos, curr_pos| {
                prev_pos.is_none().then_some(Some(curr_pos))
            })
            .flatten()
    }
}

impl<T: Clone> Clone for Grid2D<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            dimensions: self.dimensions,
        }
    }
}

impl<T: Debug> Debug for Grid2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Grid2D")?;
        let mut y_list: DebugList = f.debug_list();

        for y in 0_i32..self.dimensions.y {
            let start: usize = (y * self.dimensions.x) as usize;

            y_list.entry(&&self.cells[start..(start + self.dimensions.x as usize)]);
        }

        y_list.finish()
    }
}

impl<T: PartialEq> PartialEq for Grid2D<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions && self.cells == other.cells
    }
}

#[derive(Debug)]
pub enum CellIterFromRangeError {
    PositionsIdentical,
    PositionsNotAligned,
}

pub struct CellIter2D {
    curr: IVec2,
    end: IVec2,
    dir: Direction,
}

impl Iterator for CellIter2D {
    type Item = IVec2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr != self.end {
            let prev: IVec2 = self.curr;

            self.curr += self.dir.vec();

            Some(prev)
        } else {
            None
        }
    }
}

impl TryFrom<Range<IVec2>> for CellIter2D {
    type Error = CellIterFromRangeError;

    fn try_from(range: Range<IVec2>) -> Result<Self, Self::Error> {
        let curr: IVec2 = range.start;
        let end: IVec2 = range.end;

        Direction::try_from(range).map(|dir| Self { curr, end, dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_iter_from_range() {
        assert_eq!(
            CellIter2D::try_from(IVec2::ZERO..IVec2::new(3_i32, 0_i32))
                .unwrap()
                .collect::<Vec<IVec2>>(),
            vec![
                IVec2::new(0_i32, 0_i32),
                IVec2::new(1_i32, 0_i32),
                IVec2::new(2_i32, 0_i32)
            ]
        );
        assert_eq!(
            CellIter2D::try_from(IVec2::new(0_i32, 2_i32)..IVec2::ZERO)
                .unwrap()
                .collect::<Vec<IVec2>>(),
            vec![IVec2::new(0_i32, 2_i32), IVec2::new(0_i32, 1_i32)]
        );
        assert!(matches!(
            CellIter2D::try_from(IVec2::ZERO..IVec2::ZERO),
            Err(CellIterFromRangeError::PositionsIdentical)
        ));
        assert!(matches!(
            CellIter2D::try_from(IVec2::ZERO..IVec2::ONE),
            Err(CellIterFromRangeError::PositionsNotAligned)
        ));
    }

    #[test]
    fn test_iter_positions() {
        let grid: Grid2D<()> = Grid2D::empty(IVec2::new(3_i32, 2_i32));

        assert_eq!(
            grid.iter_positions()
                .map(|pos: IVec2| -> usize { grid.index_from_pos(pos) })
                .collect::<Vec<usize>>(),
            vec![0, 1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_try_find_single_position_with_cell() {
        let grid: Grid2D<u8> =
            Grid2D::try_from_cells_and_width(vec![0_u8, 1_u8, 0_u8, 1_u8], 2_usize).unwrap();

        assert_eq!(grid.try_find_single_position_with_cell(&0_u8), None);
        assert_eq!(grid.try_find_single_position_with_cell(&2_u8), None);

        let grid: Grid2D<u8> =
            Grid2D::try_from_cells_and_width(vec![0_u8, 1_u8, 0_u8, 0_u8], 2_usize).unwrap();

        assert_eq!(
            grid.try_find_single_position_with_cell(&1_u8),
            Some(IVec2::new(1_i32, 0_i32))
        );
    }
}
