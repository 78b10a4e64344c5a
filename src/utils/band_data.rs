// src/utils/band_data.rs
use std::sync::Arc;

/// A single band's pixel values with its raster shape (width, height).
///
/// Cloning is cheap: the pixel vector is shared behind an `Arc`, so a
/// `BandData` works as a handle that can sit in several output slots at
/// once (e.g. a band that is both an evaluation input and a retained
/// output band).
#[derive(Debug, Clone)]
pub struct BandData {
    shape: (usize, usize),
    values: Arc<Vec<f32>>,
}

impl BandData {
    /// Wrap pixel values. `values.len()` must equal `shape.0 * shape.1`.
    pub fn new(shape: (usize, usize), values: Vec<f32>) -> Self {
        assert_eq!(
            shape.0 * shape.1,
            values.len(),
            "band buffer length does not match shape {}x{}",
            shape.0,
            shape.1
        );
        Self {
            shape,
            values: Arc::new(values),
        }
    }

    /// A band filled with a constant value, handy in tests.
    pub fn filled(shape: (usize, usize), value: f32) -> Self {
        Self::new(shape, vec![value; shape.0 * shape.1])
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn data(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
