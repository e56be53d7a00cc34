/// How the carver asks for seams.  A deliberately small interface:
/// anything that can hand back a column-per-row path qualifies, which
/// leaves room for alternative cost models (forward energy, cached
/// partial grids) without touching the carver itself.
pub trait SeamFinder {
    /// The next top-to-bottom seam: one column index per row, with
    /// consecutive entries never more than one column apart.
    fn find_vertical_seam(&self) -> Vec<u32>;

    /// The next left-to-right seam.  Unimplemented in the baseline
    /// finder, which returns an empty path; see the note on
    /// [`Silbert`](crate::silbert::Silbert).
    fn find_horizontal_seam(&self) -> Vec<u32>;
}
