//! Resolution-based representation selection.
//!
//! Comparisons are per dimension and strict: a candidate replaces the current
//! pick only when BOTH width and height beat it. Area is never used.

use crate::media::{ImageRepresentation, PixelDimensions};

fn both_smaller(a: PixelDimensions, b: PixelDimensions) -> bool {
    a.width < b.width && a.height < b.height
}

fn both_larger(a: PixelDimensions, b: PixelDimensions) -> bool {
    a.width > b.width && a.height > b.height
}

/// Scan from the first element, replacing the pick when `better(candidate, pick)`.
fn scan_best(
    representations: &[ImageRepresentation],
    better: impl Fn(PixelDimensions, PixelDimensions) -> bool,
) -> Option<&ImageRepresentation> {
    let (first, rest) = representations.split_first()?;
    Some(rest.iter().fold(first, |best, candidate| {
        if better(candidate.dimensions, best.dimensions) {
            candidate
        } else {
            best
        }
    }))
}

pub fn smallest_image_representation(
    representations: &[ImageRepresentation],
) -> Option<&ImageRepresentation> {
    scan_best(representations, both_smaller)
}

pub fn largest_image_representation(
    representations: &[ImageRepresentation],
) -> Option<&ImageRepresentation> {
    scan_best(representations, both_larger)
}

/// Smallest representation exceeding `size` in both dimensions, else the largest.
pub fn image_representation_larger_than(
    representations: &[ImageRepresentation],
    size: PixelDimensions,
) -> Option<&ImageRepresentation> {
    let mut pick: Option<&ImageRepresentation> = None;

    for candidate in representations {
        if !both_larger(candidate.dimensions, size) {
            continue;
        }
        match pick {
            Some(current) if !both_smaller(candidate.dimensions, current.dimensions) => {}
            _ => pick = Some(candidate),
        }
    }

    pick.or_else(|| largest_image_representation(representations))
}
