//! Data access port trait.

use crate::domain::error::PortfelError;
use crate::domain::operation::Operation;
use crate::domain::position::Position;
use std::path::Path;

/// Source of the two input tables. Loading is the only phase that touches
/// I/O; everything downstream works on the returned rows.
pub trait DataPort {
    fn load_operations(&self, path: &Path) -> Result<Vec<Operation>, PortfelError>;

    fn load_positions(&self, path: &Path) -> Result<Vec<Position>, PortfelError>;
}
