use crate::GridError;
use pagescript_types::{Color, Point, Rect, color};

/// Stroke/fill styling for the drawn grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub line_color: Color,
    pub fill_color: Color,
    pub thickness: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            line_color: color::BLACK,
            fill_color: color::WHITE,
            thickness: 2.0,
        }
    }
}

/// Column/row geometry for the active table.
///
/// The anchor is the table's top-left corner; rows grow downward from
/// it (page space has y growing upward). Column and row counts are
/// fixed by the width/height lists.
#[derive(Debug, Clone, PartialEq)]
pub struct TableGrid {
    pub anchor: Point,
    widths: Vec<f32>,
    heights: Vec<f32>,
    pub style: GridStyle,
}

impl TableGrid {
    pub fn new(
        anchor: Point,
        widths: Vec<f32>,
        heights: Vec<f32>,
        style: GridStyle,
    ) -> Result<Self, GridError> {
        if widths.is_empty() || heights.is_empty() {
            return Err(GridError::Empty);
        }
        if widths.iter().chain(heights.iter()).any(|&v| v <= 0.0) {
            return Err(GridError::NonPositive);
        }
        Ok(Self { anchor, widths, heights, style })
    }

    pub fn cols(&self) -> usize {
        self.widths.len()
    }

    pub fn rows(&self) -> usize {
        self.heights.len()
    }

    pub fn widths(&self) -> &[f32] {
        &self.widths
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn total_width(&self) -> f32 {
        self.widths.iter().sum()
    }

    pub fn total_height(&self) -> f32 {
        self.heights.iter().sum()
    }

    pub fn col_width(&self, col: usize) -> Result<f32, GridError> {
        self.check(col, 0)?;
        Ok(self.widths[col])
    }

    pub fn row_height(&self, row: usize) -> Result<f32, GridError> {
        self.check(0, row)?;
        Ok(self.heights[row])
    }

    /// Left edge of column `col`.
    pub fn column_x(&self, col: usize) -> Result<f32, GridError> {
        self.check(col, 0)?;
        Ok(self.anchor.x + self.widths[..col].iter().sum::<f32>())
    }

    /// Top edge of row `row`.
    pub fn row_top_y(&self, row: usize) -> Result<f32, GridError> {
        self.check(0, row)?;
        Ok(self.anchor.y - self.heights[..row].iter().sum::<f32>())
    }

    /// The cell's rectangle; `y` is its bottom edge, as in page space.
    pub fn cell_rect(&self, col: usize, row: usize) -> Result<Rect, GridError> {
        self.check(col, row)?;
        Ok(Rect::new(
            self.column_x(col)?,
            self.row_top_y(row)? - self.heights[row],
            self.widths[col],
            self.heights[row],
        ))
    }

    /// Drawing origin for text inside a cell: `inset` points in from the
    /// left edge, and just under the top edge so the baseline sits near
    /// the top of the cell.
    pub fn cell_text_anchor(&self, col: usize, row: usize, inset: f32) -> Result<Point, GridError> {
        self.check(col, row)?;
        Ok(Point::new(
            self.column_x(col)? + inset,
            self.row_top_y(row)? - inset - 2.0,
        ))
    }

    /// Scale all column widths proportionally down so the table fits
    /// `max_width`. Returns true when scaling was applied.
    pub fn fit_width(&mut self, max_width: f32) -> bool {
        let total = self.total_width();
        if total <= max_width {
            return false;
        }
        let scale = max_width / total;
        log::debug!(
            "table wider than printable area ({:.1} > {:.1}), scaling columns by {:.3}",
            total,
            max_width,
            scale
        );
        for w in &mut self.widths {
            *w *= scale;
        }
        true
    }

    fn check(&self, col: usize, row: usize) -> Result<(), GridError> {
        if col >= self.cols() || row >= self.rows() {
            return Err(GridError::OutOfBounds {
                col,
                row,
                cols: self.cols(),
                rows: self.rows(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TableGrid {
        TableGrid::new(
            Point::new(50.0, 800.0),
            vec![80.0, 110.0, 110.0],
            vec![28.0, 34.0, 34.0],
            GridStyle::default(),
        )
        .unwrap()
    }

    #[test]
    fn totals() {
        let g = grid();
        assert_eq!(g.total_width(), 300.0);
        assert_eq!(g.total_height(), 96.0);
    }

    #[test]
    fn cell_rect_geometry() {
        let g = grid();
        let rect = g.cell_rect(1, 1).unwrap();
        assert_eq!(rect, Rect::new(130.0, 738.0, 110.0, 34.0));
    }

    #[test]
    fn text_anchor_is_inset_from_cell_top_left() {
        let g = grid();
        let p = g.cell_text_anchor(1, 1, 3.0).unwrap();
        assert_eq!(p, Point::new(133.0, 767.0));
    }

    #[test]
    fn out_of_range_cell_is_an_error() {
        let g = grid();
        assert!(matches!(
            g.cell_rect(3, 0),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(g.cell_text_anchor(0, 3, 3.0).is_err());
    }

    #[test]
    fn fit_width_scales_proportionally() {
        let mut g = grid();
        assert!(g.fit_width(150.0));
        assert_eq!(g.widths(), &[40.0, 55.0, 55.0]);
        assert_eq!(g.total_width(), 150.0);

        let mut g = grid();
        assert!(!g.fit_width(495.0));
        assert_eq!(g.total_width(), 300.0);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert_eq!(
            TableGrid::new(Point::default(), vec![], vec![10.0], GridStyle::default()),
            Err(GridError::Empty)
        );
        assert_eq!(
            TableGrid::new(
                Point::default(),
                vec![10.0, 0.0],
                vec![10.0],
                GridStyle::default()
            ),
            Err(GridError::NonPositive)
        );
    }
}
