//! Library crate for dyn_tensor
//!

use smallvec::SmallVec;

mod activation;
mod aggregate;
mod config;
mod constructive;
mod display;
mod error;
mod index;
mod iterator;
mod math;
mod matmul;
mod misc;
pub mod slicing;
mod view;

pub use crate::aggregate::aggregators;
pub use crate::config::ExecutionConfig;
pub use crate::constructive::kronecker_delta;
pub use crate::display::{format_index, format_shape};
pub use crate::error::TensorError;
pub use crate::index::{
    MultiIndex, Shape, combine_indexes, concat_indexes, indexes_row_major,
    multi_index_legality_test, row_major_offset,
};
pub use crate::iterator::{RowMajorIndexes, TensorIter};
pub use crate::matmul::matmul_shape;
pub use crate::slicing::{MultiRange, Range};

use crate::index::{check_axis, remove_axis, unit_index};

pub type Result<T> = std::result::Result<T, error::TensorError>;

/// Represents a dense tensor of a fixed element type T with a shape known only at runtime.
///
/// The tensor exclusively owns a flat buffer of `product(shape)` elements laid out in row-major order
/// (the last axis varies fastest). An empty shape denotes a scalar holding exactly one element, while
/// a zero-sized axis makes the tensor empty.
///
/// All operations except explicit entry accessors and [`Tensor::clear`] return newly allocated tensors,
/// operands are never mutated. Cloning a tensor duplicates both shape and data.
#[derive(Clone)]
pub struct Tensor<T> {
    shape: Shape,
    data: Vec<T>,
}

/// Product of dimensions, which is 1 for the scalar shape. Saturates at `usize::MAX` on overflow.
fn shape_size(shape: &[usize]) -> usize {
    shape.iter().fold(1, |size: usize, &dim| size.saturating_mul(dim))
}

/// Product of dimensions, or `None` if it does not fit into `usize`.
fn checked_shape_size(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }

    shape.iter().try_fold(1, |size: usize, &dim| size.checked_mul(dim))
}

fn to_shape(shape: &[usize]) -> Shape {
    SmallVec::from_slice(shape)
}
