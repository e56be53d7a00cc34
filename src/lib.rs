// #![deny(missing_docs)]

pub mod ternary;

pub mod gridmap;
pub use gridmap::GridMap;

pub mod pixelgrid;
pub use pixelgrid::PixelGrid;

pub mod energy;
pub use energy::{energy_to_image, estimate_energy};

pub mod seamfinder;
pub use seamfinder::SeamFinder;

pub mod silbert;
pub use silbert::{CarveOptions, Silbert};

pub mod seamcarver;
pub use seamcarver::{CarveError, SeamCarver};
