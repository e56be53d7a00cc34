// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The minimum-cost seam search, after Jillian Silbert's carver.
//!
//! A straightforward dynamic program over the energy field: build a
//! cumulative cost grid row by row from a synthetic zero row above
//! the image, pick the cheapest landing column along the bottom, then
//! walk back up choosing whichever parent actually produced each
//! recorded cost.  Every removal rebuilds the whole grid; no attempt
//! is made to patch costs incrementally around the previous seam.

use crate::cq;
use crate::gridmap::GridMap;
use crate::seamfinder::SeamFinder;

/// Tunables for the seam search.
///
/// `edge_margin` keeps the seam *origin* away from the left and right
/// borders: the bottom-row scan is restricted to columns
/// `[margin, width - margin)`.  The margin is clamped to
/// `(width - 1) / 2` so the scan range can never be empty; on an
/// image too narrow for the requested margin this degrades to a scan
/// of the whole bottom row.  Note the margin constrains only where
/// the seam *lands*; the backtrace is free to wander all the way to
/// a border on its way up.
///
/// `epsilon` is the tolerance below which a candidate parent's cost
/// is considered an exact match during the backtrace.
#[derive(Debug, Copy, Clone)]
pub struct CarveOptions {
    /// Columns excluded from each end of the seam-origin scan.
    pub edge_margin: u32,
    /// Cost-match tolerance for the backtrace.
    pub epsilon: f64,
}

impl Default for CarveOptions {
    fn default() -> Self {
        CarveOptions {
            edge_margin: 50,
            epsilon: 1e-6,
        }
    }
}

/// The baseline seam finder: borrows an energy field, owns nothing.
/// Built fresh for every seam, used once, discarded.
pub struct Silbert<'a> {
    energy: &'a GridMap<u8>,
    options: CarveOptions,
}

impl<'a> Silbert<'a> {
    /// Takes a reference to an energy field, and holds onto it.
    pub fn new(energy: &'a GridMap<u8>, options: CarveOptions) -> Self {
        Silbert { energy, options }
    }

    // The cumulative cost grid has one more row than the image.  Row
    // 0 is the synthetic boundary above the image and stays all
    // zeros; row r holds, per column, the cheapest cumulative energy
    // of any path from the boundary down to that pixel; the final
    // synthetic row (index == height) adds in the last image row's
    // own energy, so it holds the total cost of every complete
    // top-to-bottom path by landing column.
    fn cost_grid(&self) -> GridMap<f64> {
        let (width, height) = (self.energy.width, self.energy.height);
        let mut cost: GridMap<f64> = GridMap::new(width, height + 1);
        let mw = width - 1;

        for y in 1..height {
            let up = y - 1;
            let e = |x: u32| f64::from(self.energy[(x, up)]);

            // Leftmost column: a 2-way minimum, straight up or up-right.
            cost[(0, y)] = (cost[(0, up)] + e(0)).min(cost[(1, up)] + e(1));

            // Interior columns: the full 3-way minimum.
            for x in 1..mw {
                cost[(x, y)] = (cost[(x - 1, up)] + e(x - 1))
                    .min(cost[(x, up)] + e(x))
                    .min(cost[(x + 1, up)] + e(x + 1));
            }

            // Rightmost column: 2-way again, up-left or straight up.
            cost[(mw, y)] = (cost[(mw - 1, up)] + e(mw - 1)).min(cost[(mw, up)] + e(mw));
        }

        // The synthetic bottom row closes out every path with the
        // last image row's own energy.
        for x in 0..width {
            cost[(x, height)] = cost[(x, height - 1)] + f64::from(self.energy[(x, height - 1)]);
        }

        cost
    }

    // Scan the synthetic bottom row for the cheapest landing column,
    // the outermost `edge_margin` columns on each side excluded.
    // Strict less-than, so exact ties go to the leftmost candidate.
    fn seam_origin(&self, cost: &GridMap<f64>) -> u32 {
        let (width, height) = (self.energy.width, self.energy.height);
        let margin = self.options.edge_margin.min((width - 1) / 2);

        let mut best = margin;
        for x in margin..(width - margin) {
            if cost[(x, height)] < cost[(best, height)] {
                best = x;
            }
        }
        best
    }

    // One step of the upward walk: given the chosen column in row
    // y + 1, find which of its up-to-three parents in row y produced
    // the recorded cost.  The first candidate (in increasing column
    // order) within epsilon of an exact match wins; if rounding left
    // no exact match, fall back to the candidate with the smallest
    // absolute difference, which always exists and keeps the seam
    // connected.
    fn backtrace_step(&self, cost: &GridMap<f64>, y: u32, prev: u32) -> u32 {
        let mw = self.energy.width - 1;
        let target = cost[(prev, y + 1)];

        let lo = cq!(prev == 0, 0, prev - 1);
        let hi = cq!(prev >= mw, mw, prev + 1);

        let mut best = lo;
        let mut best_diff = std::f64::INFINITY;
        for x in lo..=hi {
            let diff = (cost[(x, y)] + f64::from(self.energy[(x, y)]) - target).abs();
            if diff < self.options.epsilon {
                return x;
            }
            if diff < best_diff {
                best_diff = diff;
                best = x;
            }
        }
        best
    }
}

impl<'a> SeamFinder for Silbert<'a> {
    /// Find the cheapest top-to-bottom seam in the energy field.
    fn find_vertical_seam(&self) -> Vec<u32> {
        let (width, height) = (self.energy.width, self.energy.height);
        let mut seam = vec![0u32; height as usize];

        // Width one degenerates to the single column for every row;
        // the recurrence would index column 1, so don't run it.
        if width == 1 {
            return seam;
        }

        let cost = self.cost_grid();
        seam[height as usize - 1] = self.seam_origin(&cost);
        for y in (0..height - 1).rev() {
            seam[y as usize] = self.backtrace_step(&cost, y, seam[y as usize + 1]);
        }
        seam
    }

    /// Left-to-right seams are not implemented in this finder; the
    /// empty path is the documented placeholder.  Callers who need
    /// horizontal carving can transpose the image, carve vertically,
    /// and transpose back.
    fn find_horizontal_seam(&self) -> Vec<u32> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    const NO_MARGIN: CarveOptions = CarveOptions {
        edge_margin: 0,
        epsilon: 1e-6,
    };

    const ENERGY_DATA: [u8; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energy = GridMap::from_raw(5, 4, ENERGY_DATA.to_vec());
        let seam = Silbert::new(&energy, NO_MARGIN).find_vertical_seam();
        assert_eq!(seam, [2, 3, 4, 3]);
    }

    #[test]
    fn seams_are_connected() {
        let energy = GridMap::from_raw(5, 4, ENERGY_DATA.to_vec());
        let seam = Silbert::new(&energy, NO_MARGIN).find_vertical_seam();
        assert!(seam
            .iter()
            .tuple_windows()
            .all(|(a, b)| (i64::from(*a) - i64::from(*b)).abs() <= 1));
    }

    #[test]
    fn width_one_degenerates_to_the_single_column() {
        let energy = GridMap::from_raw(1, 5, vec![3, 1, 4, 1, 5]);
        let seam = Silbert::new(&energy, CarveOptions::default()).find_vertical_seam();
        assert_eq!(seam, [0, 0, 0, 0, 0]);
    }

    #[test]
    fn flat_energy_ties_break_deterministically() {
        // Every path costs zero.  The margin (50, clamped to 4 on a
        // width of 10) pins the origin scan to [4, 6); strict
        // less-than keeps column 4; and the backtrace's
        // increasing-column preference walks the seam to the left
        // border, one column per row.
        let energy = GridMap::from_raw(10, 10, vec![0; 100]);
        let seam = Silbert::new(&energy, CarveOptions::default()).find_vertical_seam();
        assert_eq!(seam, [0, 0, 0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn margin_clamps_on_narrow_images() {
        // Cheapest landing is column 0, but a margin of 2 (well under
        // the clamp) excludes it; next-cheapest inside [2, 4) is 3.
        let energy = GridMap::from_raw(
            6,
            2,
            vec![
                0, 9, 9, 2, 9, 9, //
                0, 9, 9, 2, 9, 9,
            ],
        );
        let options = CarveOptions {
            edge_margin: 2,
            ..CarveOptions::default()
        };
        let seam = Silbert::new(&energy, options).find_vertical_seam();
        assert_eq!(seam[1], 3);

        // A margin wider than the image clamps to (width - 1) / 2 and
        // the scan still covers at least one column.
        let options = CarveOptions {
            edge_margin: 500,
            ..CarveOptions::default()
        };
        let seam = Silbert::new(&energy, options).find_vertical_seam();
        assert!(seam[1] >= 2 && seam[1] < 4);
    }

    #[test]
    fn seam_follows_the_valley() {
        // A zero-cost corridor down column 1 in an otherwise
        // expensive field.
        let energy = GridMap::from_raw(
            4,
            4,
            vec![
                9, 0, 9, 9, //
                9, 0, 9, 9, //
                9, 0, 9, 9, //
                9, 0, 9, 9,
            ],
        );
        let seam = Silbert::new(&energy, NO_MARGIN).find_vertical_seam();
        assert_eq!(seam, [1, 1, 1, 1]);
    }

    #[test]
    fn horizontal_seams_are_a_placeholder() {
        let energy = GridMap::from_raw(5, 4, ENERGY_DATA.to_vec());
        assert!(Silbert::new(&energy, NO_MARGIN).find_horizontal_seam().is_empty());
    }
}
