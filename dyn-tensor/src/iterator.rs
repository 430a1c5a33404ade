use super::*;

/// A cursor over all multi indexes of a shape in a row-major order.
///
/// Each call of [`RowMajorIndexes::new`] starts a fresh traversal yielding exactly `product(shape)` indexes.
pub struct RowMajorIndexes {
    shape: Shape,
    current_index: MultiIndex,
    remaining: usize,
}

impl RowMajorIndexes {
    pub fn new(shape: &[usize]) -> Self {
        Self {
            shape: to_shape(shape),
            current_index: smallvec::smallvec![0; shape.len()],
            remaining: shape_size(shape),
        }
    }
}

impl Iterator for RowMajorIndexes {
    type Item = MultiIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.current_index.clone();
        self.remaining -= 1;

        // last axis varies fastest
        for dim in (0..self.shape.len()).rev() {
            self.current_index[dim] += 1;
            if self.current_index[dim] < self.shape[dim] {
                break;
            }
            self.current_index[dim] = 0;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RowMajorIndexes {}

/// An iterator over the sub-tensors along the first axis of a tensor.
pub struct TensorIter<'a, T> {
    tensor: &'a Tensor<T>,
    current_index: usize,
}

impl<'a, T: Clone> IntoIterator for &'a Tensor<T> {
    type Item = Tensor<T>;
    type IntoIter = TensorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        TensorIter {
            tensor: self,
            current_index: 0,
        }
    }
}

impl<'a, T: Clone> Iterator for TensorIter<'a, T> {
    type Item = Tensor<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tensor.shape.is_empty() || self.current_index >= self.tensor.shape[0] {
            return None;
        }
        let sub_tensor = self.tensor.sub_tensor(0, self.current_index);
        self.current_index += 1;
        Some(sub_tensor)
    }
}

impl<T> Tensor<T> {
    /// Returns an iterator over the elements of the tensor in a row-major order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns an iterator over the multi indexes of the tensor in a row-major order.
    pub fn indexes(&self) -> RowMajorIndexes {
        RowMajorIndexes::new(&self.shape)
    }
}
