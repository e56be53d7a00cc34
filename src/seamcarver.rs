// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carving session.
//!
//! A `SeamCarver` owns two copies of the image: the original, which
//! is never touched and exists only so the session can be reset, and
//! the current grid, which shrinks by one column every time a
//! vertical seam is removed.  Each removal is a complete round trip:
//! estimate the energy fresh, run the seam search, then rebuild the
//! current grid one column narrower.  The intermediate products live
//! and die inside the call.

use failure::Fail;

use crate::cq;
use crate::energy::estimate_energy;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::SeamFinder;
use crate::silbert::{CarveOptions, Silbert};

/// Everything that can go wrong while carving.  Deterministic
/// algorithm, deterministic failures: retrying an identical call
/// yields an identical error, so none of these are transient.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// The seam handed to the removal step doesn't have one entry
    /// per image row.
    #[fail(
        display = "seam length {} does not match the image height {}",
        actual, expected
    )]
    InvalidSeam {
        /// The current image height.
        expected: u32,
        /// The length of the offending seam.
        actual: usize,
    },

    /// The image is one pixel wide; there is nothing left to carve.
    #[fail(display = "the image cannot be cropped any further: its width is already 1 pixel")]
    AtMinimumWidth,

    /// A seam entry points at a column the current image doesn't
    /// have.  Caught before any pixel is copied; the flat index math
    /// in the destination grid would otherwise alias the entry into
    /// the next row instead of failing.
    #[fail(
        display = "seam column {} is out of range for an image {} pixels wide",
        column, width
    )]
    SeamOutOfRange {
        /// The offending column index.
        column: u32,
        /// The current image width.
        width: u32,
    },

    /// The requested target width is zero or larger than the current
    /// width (seam carving only ever shrinks).
    #[fail(
        display = "cannot carve an image of width {} to width {}",
        current, requested
    )]
    BadTargetWidth {
        /// The current image width.
        current: u32,
        /// The width that was asked for.
        requested: u32,
    },
}

/// A carving session over one image.
pub struct SeamCarver {
    original: PixelGrid,
    current: PixelGrid,
    options: CarveOptions,
}

impl SeamCarver {
    /// Start a session with the default options.  The grid is moved
    /// in as the original and cloned once for the working copy.
    pub fn new(image: PixelGrid) -> Self {
        SeamCarver::with_options(image, CarveOptions::default())
    }

    /// Start a session with explicit seam-search options.
    pub fn with_options(image: PixelGrid, options: CarveOptions) -> Self {
        SeamCarver {
            current: image.clone(),
            original: image,
            options,
        }
    }

    /// The working image, as carved so far.
    pub fn current(&self) -> &PixelGrid {
        &self.current
    }

    /// The image as it was when the session started.
    pub fn original(&self) -> &PixelGrid {
        &self.original
    }

    /// Current width in pixels.
    pub fn width(&self) -> u32 {
        self.current.width()
    }

    /// Current height in pixels.
    pub fn height(&self) -> u32 {
        self.current.height()
    }

    /// Find and remove the next vertical seam, shrinking the current
    /// image's width by exactly one.
    pub fn remove_vertical_seam(&mut self) -> Result<(), CarveError> {
        let energy = estimate_energy(&self.current);
        let seam = Silbert::new(&energy, self.options).find_vertical_seam();
        self.remove_seam(&seam)
    }

    /// Remove a horizontal seam.  Intentionally a placeholder: it
    /// validates nothing and removes nothing.  Carve a transposed
    /// copy of the image if you need this today.
    pub fn remove_horizontal_seam(&mut self) -> Result<(), CarveError> {
        Ok(())
    }

    /// Remove the given vertical seam from the current image.
    ///
    /// The seam must hold one column index per row, each less than
    /// the current width.  On any precondition failure the current
    /// image is left exactly as it was.
    pub fn remove_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        let (width, height) = (self.current.width(), self.current.height());
        if seam.len() != height as usize {
            return Err(CarveError::InvalidSeam {
                expected: height,
                actual: seam.len(),
            });
        }
        if width == 1 {
            return Err(CarveError::AtMinimumWidth);
        }
        if let Some(&column) = seam.iter().find(|&&c| c >= width) {
            return Err(CarveError::SeamOutOfRange { column, width });
        }

        // Row by row: everything left of the seam column is copied
        // straight across, the seam column is skipped, and everything
        // right of it slides one column left.
        let mut next = PixelGrid::new(width - 1, height);
        for y in 0..height {
            let cut = seam[y as usize];
            for x in 0..width {
                if x == cut {
                    continue;
                }
                next.put(cq!(x < cut, x, x - 1), y, self.current.get(x, y));
            }
        }
        self.current = next;
        Ok(())
    }

    /// Repeatedly remove vertical seams until the current width
    /// equals `target`.
    pub fn carve_to_width(&mut self, target: u32) -> Result<(), CarveError> {
        if target == 0 || target > self.current.width() {
            return Err(CarveError::BadTargetWidth {
                current: self.current.width(),
                requested: target,
            });
        }
        while self.current.width() > target {
            self.remove_vertical_seam()?;
        }
        Ok(())
    }

    /// Throw away all carving done so far and restore the original
    /// image.  Idempotent.
    pub fn reset_image(&mut self) {
        self.current = self.original.clone();
    }
}
