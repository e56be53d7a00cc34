// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The owned pixel store for a carving session.
//!
//! A carving session works on its own private copy of the image: the
//! pixels are copied in at construction and copied out on demand, so
//! nothing the caller does to the source image afterward can reach
//! into the middle of a carve.  Samples are RGB, 8 bits per channel,
//! row-major, exactly the shape the rest of the carver expects.

use image::{ImageBuffer, Pixel, Rgb, RgbImage};
use itertools::iproduct;

use crate::gridmap::GridMap;

/// A height×width grid of RGB samples.  This is the only pixel
/// representation the carver ever touches; decoding and encoding live
/// entirely on the other side of the `from_image`/`to_image` fence.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    samples: GridMap<[u8; 3]>,
}

impl PixelGrid {
    /// An all-black grid of the given dimensions.  The seam-removal
    /// step uses this as the destination it copies surviving pixels
    /// into.
    pub fn new(width: u32, height: u32) -> Self {
        PixelGrid {
            samples: GridMap::new(width, height),
        }
    }

    /// Copy the pixels out of a decoded image.  The image is only
    /// borrowed; after this returns the grid and the image share
    /// nothing.
    pub fn from_image(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let c = image.get_pixel(x, y).channels();
                [c[0], c[1], c[2]]
            })
            .collect();
        PixelGrid {
            samples: GridMap::from_raw(width, height, cells),
        }
    }

    /// Copy the pixels back out into an image the `image` crate can
    /// encode.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            let s = self.get(x, y);
            *Rgb::from_slice(&s)
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.samples.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.samples.height
    }

    /// The RGB sample at a single pixel's address.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.samples.get_pt(x, y)
    }

    /// Set the RGB sample at a single pixel's address.
    pub fn put(&mut self, x: u32, y: u32, sample: [u8; 3]) {
        self.samples.put_pt(x, y, sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            *Rgb::from_slice(&[x as u8, y as u8, (x + y) as u8])
        })
    }

    #[test]
    fn image_round_trip() {
        let image = gradient_image(7, 5);
        let grid = PixelGrid::from_image(&image);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.get(3, 2), [3, 2, 5]);
        // ImageBuffer has no PartialEq; compare the raw samples.
        assert_eq!(grid.to_image().into_raw(), image.into_raw());
    }

    #[test]
    fn construction_copies_the_pixels() {
        let mut image = gradient_image(4, 4);
        let grid = PixelGrid::from_image(&image);
        image.put_pixel(1, 1, *Rgb::from_slice(&[255, 255, 255]));
        // The session's copy is unaffected by the caller's mutation.
        assert_eq!(grid.get(1, 1), [1, 1, 2]);
    }
}
