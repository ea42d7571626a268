/// Knobs for the table page-fit behavior, which earlier revisions of
/// the language disagreed on. Both default to on; scripts that want a
/// table to overflow exactly as written can switch them off.
#[derive(Debug, Clone, Copy)]
pub struct InterpreterConfig {
    /// Page margin in points, also the cursor's home offset.
    pub margin: f32,
    /// Scale column widths down proportionally when the table is wider
    /// than the printable area.
    pub fit_table_width: bool,
    /// Force a page break before a table that would cross the bottom
    /// margin.
    pub break_oversize_table: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            margin: 50.0,
            fit_table_width: true,
            break_oversize_table: true,
        }
    }
}
