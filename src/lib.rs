pub use {
    self::{cell::*, maze::*, rules::*, scan::*, solver::*, util::*},
    clap::Parser,
};

pub mod cell;
pub mod maze;
pub mod render;
pub mod rules;
pub mod scan;
pub mod solver;

mod util;
