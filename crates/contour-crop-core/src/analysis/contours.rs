//! Outer-border tracing over a foreground mask.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

use super::OutlineFinder;

/// Closed border of one blob, as traced pixel positions.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Point<i32>>,
}

impl Outline {
    /// Wrap traced points, rejecting an empty list.
    pub fn new(points: Vec<Point<i32>>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[Point<i32>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// How traced border points are reduced before fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainApproximation {
    /// Keep every traced border pixel.
    None,
    /// Collapse straight horizontal, vertical and diagonal runs to their
    /// endpoints.
    #[default]
    Simple,
}

/// [`OutlineFinder`] backed by `imageproc` border following.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContourFinder {
    pub approximation: ChainApproximation,
}

impl ContourFinder {
    pub fn new(approximation: ChainApproximation) -> Self {
        Self { approximation }
    }
}

impl OutlineFinder for ContourFinder {
    fn find_outlines(&self, mask: &GrayImage) -> Vec<Outline> {
        // Border following only starts an outer border after a background
        // pixel, so blobs touching column 0 need a background frame.
        let padded = pad_with_background(mask);

        find_contours::<i32>(&padded)
            .into_iter()
            .filter(|c| c.parent.is_none() && matches!(c.border_type, BorderType::Outer))
            .filter_map(|c| {
                let points: Vec<Point<i32>> = c
                    .points
                    .into_iter()
                    .map(|p| Point::new(p.x - 1, p.y - 1))
                    .collect();
                let points = match self.approximation {
                    ChainApproximation::None => points,
                    ChainApproximation::Simple => approximate_simple(&points),
                };
                Outline::new(points)
            })
            .collect()
    }
}

/// Copy `mask` into a zeroed image one pixel larger on every side.
fn pad_with_background(mask: &GrayImage) -> GrayImage {
    let (width, height) = mask.dimensions();
    let mut padded = GrayImage::new(width + 2, height + 2);
    image::imageops::replace(&mut padded, mask, 1, 1);
    padded
}

/// Drop points that sit in the middle of a straight run of a closed chain.
///
/// A point is kept when the step arriving at it differs in direction from
/// the step leaving it. Repeated points are merged first, and chains of two
/// points or fewer are returned as-is.
pub fn approximate_simple(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let mut points = points.to_vec();
    points.dedup();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    let n = points.len();
    if n <= 2 {
        return points;
    }

    let step = |from: Point<i32>, to: Point<i32>| {
        ((to.x - from.x).signum(), (to.y - from.y).signum())
    };

    let kept: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            step(prev, cur) != step(cur, next)
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        points
    } else {
        kept
    }
}
