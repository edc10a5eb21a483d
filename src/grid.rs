/// Container (viewport) extent in pixels, as reported by the host.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

/// Logical grid dimensions in cells.
///
/// Replaces the anonymous `(u16, u16)` tuple that would otherwise be used
/// for bounds, making rows vs. cols unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub rows: u16,
    pub cols: u16,
}

impl GridSize {
    /// Derives grid dimensions from a container size and a cell size.
    ///
    /// Each axis is the container extent divided by `cell_size`, floored,
    /// and clamped to at least 1 so a degenerate container yields a 1×1
    /// grid rather than an empty one.
    #[must_use]
    pub fn from_container(container: ContainerSize, cell_size: u32) -> Self {
        debug_assert!(cell_size > 0);

        Self {
            rows: axis_cells(container.height, cell_size),
            cols: axis_cells(container.width, cell_size),
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }
}

fn axis_cells(extent: u32, cell_size: u32) -> u16 {
    let cells = (extent / cell_size).max(1);
    u16::try_from(cells).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::{ContainerSize, GridSize};

    #[test]
    fn container_divides_into_floored_cells() {
        let grid = GridSize::from_container(
            ContainerSize {
                width: 520,
                height: 370,
            },
            50,
        );

        assert_eq!(grid.cols, 10);
        assert_eq!(grid.rows, 7);
    }

    #[test]
    fn tiny_container_degenerates_to_one_by_one() {
        let grid = GridSize::from_container(
            ContainerSize {
                width: 12,
                height: 0,
            },
            50,
        );

        assert_eq!(grid, GridSize { rows: 1, cols: 1 });
        assert_eq!(grid.total_cells(), 1);
    }

    #[test]
    fn total_cells_is_rows_times_cols() {
        let grid = GridSize { rows: 4, cols: 6 };
        assert_eq!(grid.total_cells(), 24);
    }
}
