use super::*;

/// Half-open interval `[from, to)` on a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub from: usize,
    pub to: usize,
}

impl Range {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Number of coordinates covered, zero for an inverted range (`from > to`) which `slice` rejects.
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self, axis: usize, dim_size: usize) -> Result<()> {
        if self.from > self.to {
            return Err(TensorError::RangeInvalid(format!(
                "Range [{}, {}) on axis {axis} has from > to",
                self.from, self.to
            )));
        }

        if self.to > dim_size {
            return Err(TensorError::RangeInvalid(format!(
                "Range [{}, {}) out of bounds for axis {axis} with size {dim_size}",
                self.from, self.to
            )));
        }

        Ok(())
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Hyper-rectangular region of a tensor, one range per axis.
pub type MultiRange = Vec<Range>;

/// Macro for creating a multi range from `std::ops::Range<usize>` values
#[macro_export]
macro_rules! ranges {
    () => {
        $crate::slicing::MultiRange::new()
    };
    ($($range:expr),+ $(,)?) => {
        vec![$($crate::slicing::Range::from($range)),+]
    };
}

impl<T: Clone> Tensor<T> {
    /// Copies the hyper-rectangular region described by `multi_range` into a new tensor indexed from zero.
    /// Returns an error if the range rank differs from the tensor rank or any range does not fit its axis.
    pub fn slice(&self, multi_range: &[Range]) -> Result<Tensor<T>> {
        if multi_range.len() != self.shape.len() {
            return Err(TensorError::RangeInvalid(format!(
                "Multi range of rank {} does not match tensor of rank {}",
                multi_range.len(),
                self.shape.len()
            )));
        }

        for (axis, range) in multi_range.iter().enumerate() {
            range.validate(axis, self.shape[axis])?;
        }

        let new_shape: Shape = multi_range.iter().map(Range::len).collect();
        let origin: MultiIndex = multi_range.iter().map(|range| range.from).collect();

        let data = RowMajorIndexes::new(&new_shape)
            .map(|index| -> Result<T> {
                let source = combine_indexes(&index, &origin)?;
                Ok(self.data[row_major_offset(&self.shape, &source)].clone())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Tensor {
            shape: new_shape,
            data,
        })
    }

    /// Splits the tensor along `axis` into `shape[axis]` tensors of rank reduced by one.
    pub fn unstack(&self, axis: usize) -> Result<Vec<Tensor<T>>> {
        check_axis(axis, self.shape.len())?;

        Ok((0..self.shape[axis])
            .map(|coordinate| self.sub_tensor(axis, coordinate))
            .collect())
    }

    /// Joins equally shaped tensors along a new `axis`, the inverse of [`Tensor::unstack`].
    pub fn stack(parts: &[Tensor<T>], axis: usize) -> Result<Tensor<T>> {
        let first = parts.first().ok_or_else(|| {
            TensorError::UnsupportedOperation("Cannot stack an empty list of tensors".to_string())
        })?;

        if let Some(part) = parts.iter().find(|part| !part.shape_equal(first)) {
            return Err(TensorError::ShapeMismatch(format!(
                "Cannot stack tensors of shapes {:?} and {:?}",
                first.shape, part.shape
            )));
        }

        check_axis(axis, first.shape.len() + 1)?;

        let mut new_shape = first.shape.clone();
        new_shape.insert(axis, parts.len());

        let data = RowMajorIndexes::new(&new_shape)
            .map(|mut index| {
                let part = &parts[index.remove(axis)];
                part.data[row_major_offset(&part.shape, &index)].clone()
            })
            .collect();

        Ok(Tensor {
            shape: new_shape,
            data,
        })
    }

    /// Returns the tensor at `coordinate` along `axis` with that axis removed.
    /// Both arguments are assumed to be in bounds.
    pub(crate) fn sub_tensor(&self, axis: usize, coordinate: usize) -> Tensor<T> {
        let shape = remove_axis(&self.shape, axis);
        let data = RowMajorIndexes::new(&shape)
            .map(|mut index| {
                index.insert(axis, coordinate);
                self.data[row_major_offset(&self.shape, &index)].clone()
            })
            .collect();

        Tensor { shape, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_3d_test_tensor() -> Tensor<i32> {
        Tensor::iota(&[2, 2, 3])
    }

    #[test]
    fn test_basic_slicing() -> Result<()> {
        let tensor = create_3d_test_tensor();

        let slice = tensor.slice(&ranges![0..1, 0..2, 0..3])?;
        assert_eq!(slice, Tensor::new((1..=6).collect(), &[1, 2, 3])?);

        let slice = tensor.slice(&ranges![0..2, 0..2, 0..1])?;
        assert_eq!(slice, Tensor::new(vec![1, 4, 7, 10], &[2, 2, 1])?);

        let slice = tensor.slice(&ranges![1..2, 0..1, 2..3])?;
        assert_eq!(slice, Tensor::new(vec![9], &[1, 1, 1])?);

        Ok(())
    }

    #[test]
    fn test_full_slice() -> Result<()> {
        let tensor = Tensor::<i32>::iota(&[4, 6]);
        assert_eq!(tensor.slice(&ranges![0..4, 0..6])?, tensor);

        let scalar = Tensor::scalar(1);
        assert_eq!(scalar.slice(&ranges![])?, scalar);

        Ok(())
    }

    #[test]
    fn test_inner_region() -> Result<()> {
        let tensor = Tensor::<i32>::iota(&[4, 6]);
        let slice = tensor.slice(&[Range::new(1, 3), Range::new(2, 5)])?;
        assert_eq!(slice, Tensor::try_from(vec![[9, 10, 11], [15, 16, 17]])?);

        Ok(())
    }

    #[test]
    fn test_empty_slice() -> Result<()> {
        let tensor = Tensor::<i32>::iota(&[4, 6]);
        let empty = tensor.slice(&ranges![1..1, 0..6])?;
        assert_eq!(empty.shape(), &[0, 6]);
        assert_eq!(empty.size(), 0);

        Ok(())
    }

    #[test]
    fn test_range_len() {
        assert_eq!(Range::new(2, 5).len(), 3);
        assert!(Range::from(4..4).is_empty());

        let inverted = Range::new(3, 2);
        assert_eq!(inverted.len(), 0);
        assert!(inverted.is_empty());
    }

    #[test]
    fn test_slice_errors() {
        let tensor = Tensor::<i32>::iota(&[4, 6]);

        // rank mismatch
        assert!(matches!(
            tensor.slice(&ranges![0..4]),
            Err(TensorError::RangeInvalid(_))
        ));
        // out of bounds
        assert!(matches!(
            tensor.slice(&ranges![0..5, 0..6]),
            Err(TensorError::RangeInvalid(_))
        ));
        // from > to
        assert!(matches!(
            tensor.slice(&[Range::new(3, 2), Range::new(0, 6)]),
            Err(TensorError::RangeInvalid(_))
        ));
    }

    #[test]
    fn test_unstack_last_axis() -> Result<()> {
        let tensor = create_3d_test_tensor();
        let parts = tensor.unstack(2)?;

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], Tensor::try_from(vec![[1, 4], [7, 10]])?);
        assert_eq!(parts[1], Tensor::try_from(vec![[2, 5], [8, 11]])?);
        assert_eq!(parts[2], Tensor::try_from(vec![[3, 6], [9, 12]])?);

        Ok(())
    }

    #[test]
    fn test_unstack_first_axis() -> Result<()> {
        let tensor = create_3d_test_tensor();
        let parts = tensor.unstack(0)?;

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], Tensor::try_from(vec![[1, 2, 3], [4, 5, 6]])?);
        assert_eq!(parts[1], Tensor::try_from(vec![[7, 8, 9], [10, 11, 12]])?);

        Ok(())
    }

    #[test]
    fn test_unstack_matches_squeezed_slice() -> Result<()> {
        let tensor = create_3d_test_tensor();
        for (i, part) in tensor.unstack(1)?.iter().enumerate() {
            let slice = tensor.slice(&ranges![0..2, i..i + 1, 0..3])?;
            assert_eq!(part.data(), slice.data());
            assert_eq!(part.shape(), &[2, 3]);
        }

        assert!(matches!(
            tensor.unstack(3),
            Err(TensorError::IndexOutOfBounds(_))
        ));

        Ok(())
    }

    #[test]
    fn test_unstack_empty_axis() -> Result<()> {
        assert!(Tensor::<i32>::zeros(&[0, 3]).unstack(0)?.is_empty());
        assert!(Tensor::<i32>::zeros(&[2, 0]).unstack(1)?.is_empty());

        let parts = Tensor::<i32>::zeros(&[2, 0]).unstack(0)?;
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|part| part.shape() == [0]));

        Ok(())
    }

    #[test]
    fn test_stack() -> Result<()> {
        let tensor = create_3d_test_tensor();
        for axis in 0..3 {
            assert_eq!(Tensor::stack(&tensor.unstack(axis)?, axis)?, tensor);
        }

        let a = Tensor::<i32>::ones(&[2]);
        let b = Tensor::<i32>::ones(&[3]);
        assert!(matches!(
            Tensor::stack(&[a.clone(), b], 0),
            Err(TensorError::ShapeMismatch(_))
        ));
        assert!(matches!(
            Tensor::stack(&[a.clone(), a], 2),
            Err(TensorError::IndexOutOfBounds(_))
        ));
        assert!(Tensor::<i32>::stack(&[], 0).is_err());

        Ok(())
    }
}
