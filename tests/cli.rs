// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end tests of the command-line binary: real files in, real
//! files out, via a temporary directory.

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use image::{ImageBuffer, Pixel, Rgb, RgbImage};
use predicates::prelude::*;

fn write_test_image(path: &Path, width: u32, height: u32) {
    let image: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        *Rgb::from_slice(&[(x * 8) as u8, (y * 8) as u8, 64])
    });
    image.save(path).unwrap();
}

#[test]
fn carves_the_requested_number_of_seams() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_test_image(&input, 30, 12);

    Command::cargo_bin("seamstress")
        .unwrap()
        .arg(&input)
        .args(&["-n", "5"])
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb();
    assert_eq!(carved.dimensions(), (25, 12));
}

#[test]
fn energy_flag_dumps_the_energy_map() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("energy.png");
    write_test_image(&input, 16, 16);

    Command::cargo_bin("seamstress")
        .unwrap()
        .arg(&input)
        .arg("--energy")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    // Same dimensions as the input; no carving happened.
    let energy = image::open(&output).unwrap();
    use image::GenericImageView;
    assert_eq!(energy.dimensions(), (16, 16));
}

#[test]
fn a_missing_input_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("seamstress")
        .unwrap()
        .arg(dir.path().join("no-such-image.png"))
        .arg("-o")
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("seamstress:"));
}

#[test]
fn carving_past_the_minimum_width_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    write_test_image(&input, 3, 8);

    Command::cargo_bin("seamstress")
        .unwrap()
        .arg(&input)
        .args(&["-n", "5"])
        .arg("-o")
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("width is already 1 pixel"));
}
