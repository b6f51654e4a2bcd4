use derive_more::{Display, Error};

/// Why a group move was rejected.
///
/// An infeasible move is an expected outcome of drag-and-drop play, not a
/// fault: the state is left completely unchanged and the caller typically
/// snaps the dragged tiles back to where they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GroupMoveError {
    /// Part of the translated unit would land outside the grid.
    #[display("destination extends outside the grid")]
    OutOfBounds,
    /// A multi-tile group may only trade places with another tracked group,
    /// never with loose tiles.
    #[display("multi-tile groups can only swap with another group")]
    LooseDestination,
    /// The source and target groups hold different numbers of tiles.
    #[display("source and target groups differ in size")]
    SizeMismatch,
    /// A destination cell belongs to a tracked group other than the target.
    #[display("destination overlaps an unrelated group")]
    ForeignGroupOverlap,
    /// The destination region partially overlaps the moved tiles themselves,
    /// which has no coherent rigid-exchange outcome.
    #[display("destination partially overlaps the moved tiles")]
    SelfOverlap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_rejection() {
        assert_eq!(
            GroupMoveError::OutOfBounds.to_string(),
            "destination extends outside the grid"
        );
        assert_eq!(
            GroupMoveError::SizeMismatch.to_string(),
            "source and target groups differ in size"
        );
    }
}
