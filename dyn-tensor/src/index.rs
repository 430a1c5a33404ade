use super::*;

/// Sizes of tensor axes, the length is the rank. An empty shape denotes a scalar.
pub type Shape = SmallVec<[usize; 4]>;

/// 0-based position of an entry, one component per axis.
pub type MultiIndex = SmallVec<[usize; 4]>;

/// Checks whether `index` addresses an entry of a tensor with the given `shape`.
pub fn multi_index_legality_test(shape: &[usize], index: &[usize]) -> bool {
    shape.len() == index.len() && index.iter().zip(shape.iter()).all(|(&i, &dim)| i < dim)
}

/// Maps a multi index to its linear offset in row-major order.
/// The index is assumed to be legal for the shape.
pub fn row_major_offset(shape: &[usize], index: &[usize]) -> usize {
    index
        .iter()
        .zip(shape.iter())
        .fold(0, |offset, (&i, &dim)| offset * dim + i)
}

/// Returns every valid multi index of `shape` in row-major order.
pub fn indexes_row_major(shape: &[usize]) -> Vec<MultiIndex> {
    RowMajorIndexes::new(shape).collect()
}

/// Appends the components of `j` after the components of `i`.
pub fn concat_indexes(i: &[usize], j: &[usize]) -> MultiIndex {
    i.iter().chain(j.iter()).copied().collect()
}

/// Combines two indexes of equal rank by adding them component-wise.
///
/// Used to place an index relative to an origin, e.g. a kept position with a zero on the reduced axis
/// and a unit offset along that axis.
pub fn combine_indexes(i: &[usize], j: &[usize]) -> Result<MultiIndex> {
    if i.len() != j.len() {
        return Err(TensorError::ShapeMismatch(format!(
            "Cannot combine indexes of different rank: {i:?} and {j:?}"
        )));
    }

    Ok(i.iter().zip(j.iter()).map(|(&a, &b)| a + b).collect())
}

/// Returns an error unless `axis` is a valid axis for a shape of given rank.
pub(crate) fn check_axis(axis: usize, rank: usize) -> Result<()> {
    if axis >= rank {
        return Err(TensorError::IndexOutOfBounds(format!(
            "Axis {axis} out of bounds for tensor of rank {rank}"
        )));
    }
    Ok(())
}

pub(crate) fn remove_axis(shape: &[usize], axis: usize) -> Shape {
    let mut result = to_shape(shape);
    result.remove(axis);
    result
}

/// Index with a single component set along `axis`.
pub(crate) fn unit_index(rank: usize, axis: usize, value: usize) -> MultiIndex {
    let mut index: MultiIndex = smallvec::smallvec![0; rank];
    index[axis] = value;
    index
}
