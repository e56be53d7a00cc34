// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Estimate the energy of every pixel in an image.
//!
//! "Energy" here is the importance of a pixel to the image's visual
//! content: the magnitude of the local luminance gradient, so edges
//! and high-frequency detail score high and flat regions score low.
//! The estimator is a pure function of the current pixel grid; the
//! carver calls it fresh before every seam search rather than trying
//! to patch up a cached field around the previous seam.

use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb};
use itertools::iproduct;
use num_traits::NumCast;

use crate::cq;
use crate::gridmap::GridMap;
use crate::pixelgrid::PixelGrid;

// The classic Sobel pair.  Gx is the transpose of Gy, but writing
// both out keeps the convolution below honest.
//
//        -1  0  1           -1 -2 -1
//   Gx = -2  0  2      Gy =   0  0  0
//        -1  0  1            1  2  1

#[inline]
fn lumachannel(sample: [u8; 3]) -> i32 {
    let p: &Rgb<u8> = Pixel::from_slice(&sample);
    let c = p.to_luma().channels().to_owned();
    NumCast::from(c[0]).unwrap()
}

// Combine the two directional derivatives into one non-negative
// magnitude, quantized back into the luminance channel's range.  The
// default is the cheap |Gx|+|Gy| approximation; the `square_root`
// feature buys the Euclidean magnitude instead.
#[cfg(not(feature = "square_root"))]
#[inline]
fn magnitude(gx: i32, gy: i32) -> u8 {
    NumCast::from((gx.abs() + gy.abs()).min(255)).unwrap()
}

#[cfg(feature = "square_root")]
#[inline]
fn magnitude(gx: i32, gy: i32) -> u8 {
    // Plain casts here: with NumCast in scope, `f64::from` is
    // ambiguous between the two traits.
    let m = ((gx * gx + gy * gy) as f64).sqrt();
    NumCast::from(m.min(255.0)).unwrap()
}

/// Compute the energy of every pixel in a grid: convert to luminance,
/// convolve with the Sobel pair, and clamp the combined magnitude to
/// the 0..=255 range of the luminance channel itself.
///
/// Border policy is pixel replication: a sample address that falls
/// off the grid is clamped back onto its nearest edge pixel.  This
/// matters; any other policy would halo the borders with artificial
/// energy and the carver would never trim an edge.
pub fn estimate_energy(grid: &PixelGrid) -> GridMap<u8> {
    let (width, height) = (grid.width(), grid.height());
    let (mw, mh) = (width - 1, height - 1);

    let luma = GridMap::from_raw(
        width,
        height,
        iproduct!(0..height, 0..width)
            .map(|(y, x)| lumachannel(grid.get(x, y)))
            .collect(),
    );

    let cells = iproduct!(0..height, 0..width)
        .map(|(y, x)| {
            let xl = cq!(x == 0, 0, x - 1);
            let xr = cq!(x >= mw, mw, x + 1);
            let yu = cq!(y == 0, 0, y - 1);
            let yd = cq!(y >= mh, mh, y + 1);

            // The 3x3 neighborhood, borders replicated.
            let (a, b, c) = (luma[(xl, yu)], luma[(x, yu)], luma[(xr, yu)]);
            let (d, f) = (luma[(xl, y)], luma[(xr, y)]);
            let (g, h, i) = (luma[(xl, yd)], luma[(x, yd)], luma[(xr, yd)]);

            let gx = (c + 2 * f + i) - (a + 2 * d + g);
            let gy = (g + 2 * h + i) - (a + 2 * b + c);
            magnitude(gx, gy)
        })
        .collect();

    GridMap::from_raw(width, height, cells)
}

/// Render an energy field as a grayscale image, normalized so the
/// hottest cell maps to white.  Purely a debugging aid for eyeballing
/// what the carver considers important.
pub fn energy_to_image(energy: &GridMap<u8>) -> GrayImage {
    let mut out: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(energy.width, energy.height);
    // Plain casts here: with NumCast in scope, `u32::from` is
    // ambiguous between the two traits.
    let factor = energy.cells().iter().cloned().max().unwrap_or(1).max(1) as u32;
    iproduct!(0..energy.height, 0..energy.width).for_each(|(y, x)| {
        let c = energy[(x, y)] as u32 * 255 / factor;
        let cs = [NumCast::from(c).unwrap()];
        out.put_pixel(x, y, *Luma::from_slice(&cs));
    });
    out
}
