// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The command-line front end: decode, carve n seams, encode.
//!
//! All of the interesting work happens in the library; this binary
//! only decides how many seams to remove and where the bytes go.

use std::process;

use clap::{App, Arg};
use failure::Error;

use seamstress::{energy_to_image, estimate_energy, PixelGrid, SeamCarver};

fn run() -> Result<(), Error> {
    let matches = App::new("seamstress")
        .version("0.1.0")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .help("Where to write the result")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("seams")
                .short("n")
                .long("seams")
                .help("How many vertical seams to remove")
                .takes_value(true)
                .default_value("1"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the normalized energy map instead of carving"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Report progress on stderr"),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();
    let seams: u32 = matches.value_of("seams").unwrap().parse()?;
    let verbose = matches.is_present("verbose");

    let image = image::open(input)?.to_rgb();
    let grid = PixelGrid::from_image(&image);

    if matches.is_present("energy") {
        energy_to_image(&estimate_energy(&grid)).save(output)?;
        return Ok(());
    }

    let mut carver = SeamCarver::new(grid);
    for n in 0..seams {
        carver.remove_vertical_seam()?;
        if verbose {
            eprintln!(
                "removed seam {} of {}, width now {}",
                n + 1,
                seams,
                carver.width()
            );
        }
    }
    carver.current().to_image().save(output)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("seamstress: {}", e);
        process::exit(1);
    }
}
