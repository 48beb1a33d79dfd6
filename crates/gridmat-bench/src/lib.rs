//! Benchmark profiles and utilities for the gridmat workspace.
//!
//! Provides pre-built container profiles for the criterion benches:
//!
//! - [`reference_matrix`]: a 3D container grown to 16K elements in
//!   1024-element blocks
//! - [`grown_matrix`]: arbitrary block-count and block-size profiles

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridmat_matrix::GrowableMatrix;

/// Build a 3D container grown to `blocks * block_len` elements of `f32`.
pub fn grown_matrix(blocks: usize, block_len: usize) -> GrowableMatrix<f32> {
    let mut matrix = GrowableMatrix::new(3).expect("dimension 3 is valid");
    for _ in 0..blocks {
        let _ = matrix
            .expand(block_len)
            .expect("growth enabled and demand nonzero");
    }
    matrix
}

/// Build the reference benchmark profile: 16 blocks of 1024 elements.
pub fn reference_matrix() -> GrowableMatrix<f32> {
    grown_matrix(16, 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_has_expected_capacity() {
        let matrix = reference_matrix();
        assert_eq!(matrix.capacity(), 16 * 1024);
        assert_eq!(matrix.handles().len(), 16);
    }

    #[test]
    fn grown_matrix_tracks_every_block() {
        let matrix = grown_matrix(4, 256);
        assert_eq!(matrix.arena().block_count(), 4);
        assert_eq!(matrix.arena().total_allocated(), 1024);
    }
}
