/// Reduced-precision float types used by the matrix math-op paths.
pub mod float;
