use super::*;
use num_traits::Zero;

impl<T> Tensor<T> {
    fn check_index(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.shape.len() {
            return Err(TensorError::IndexOutOfBounds(format!(
                "Index dimension mismatch: {} != {}",
                index.len(),
                self.shape.len()
            )));
        }

        if let Some(dim) = (0..index.len()).find(|&dim| index[dim] >= self.shape[dim]) {
            return Err(TensorError::IndexOutOfBounds(format!(
                "Index {} out of bounds for dimension {dim} with size {}",
                index[dim], self.shape[dim]
            )));
        }

        Ok(row_major_offset(&self.shape, index))
    }

    /// Returns the entry at `index`, or an error if the index fails the legality test.
    pub fn get_entry_safe(&self, index: &[usize]) -> Result<&T> {
        let offset = self.check_index(index)?;
        Ok(&self.data[offset])
    }

    /// Mutable counterpart of [`Tensor::get_entry_safe`].
    pub fn get_entry_safe_mut(&mut self, index: &[usize]) -> Result<&mut T> {
        let offset = self.check_index(index)?;
        Ok(&mut self.data[offset])
    }

    /// Returns the entry at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must pass [`multi_index_legality_test`] for the shape of this tensor.
    pub unsafe fn get_entry_unsafe(&self, index: &[usize]) -> &T {
        // SAFETY: a legal index maps to an offset below product(shape) == data.len()
        unsafe { self.data.get_unchecked(row_major_offset(&self.shape, index)) }
    }

    /// Mutable counterpart of [`Tensor::get_entry_unsafe`].
    ///
    /// # Safety
    /// `index` must pass [`multi_index_legality_test`] for the shape of this tensor.
    pub unsafe fn get_entry_unsafe_mut(&mut self, index: &[usize]) -> &mut T {
        let offset = row_major_offset(&self.shape, index);
        // SAFETY: see get_entry_unsafe
        unsafe { self.data.get_unchecked_mut(offset) }
    }

    // Get shape
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements, the product of the shape.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Row-major backing data.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the backing data; the length cannot be changed through it.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Checks whether both tensors have the same shape, regardless of their values.
    pub fn shape_equal<U>(&self, other: &Tensor<U>) -> bool {
        self.shape == other.shape
    }
}

impl<T: Zero> Tensor<T> {
    /// Zeroes the data in place, keeping the shape.
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = T::zero());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_access() -> Result<()> {
        let mut tensor = Tensor::<i32>::iota(&[2, 3, 4]);
        assert_eq!(*tensor.get_entry_safe(&[0, 0, 0])?, 1);
        assert_eq!(*tensor.get_entry_safe(&[1, 0, 0])?, 13);
        assert_eq!(*tensor.get_entry_safe(&[1, 2, 3])?, 24);

        *tensor.get_entry_safe_mut(&[0, 1, 0])? = 100;
        assert_eq!(tensor.data()[4], 100);

        Ok(())
    }

    #[test]
    fn test_safe_access_errors() {
        let tensor = Tensor::<i32>::iota(&[2, 3]);
        assert!(matches!(
            tensor.get_entry_safe(&[2, 0]),
            Err(TensorError::IndexOutOfBounds(_))
        ));
        assert!(matches!(
            tensor.get_entry_safe(&[0, 3]),
            Err(TensorError::IndexOutOfBounds(_))
        ));
        assert!(matches!(
            tensor.get_entry_safe(&[0]),
            Err(TensorError::IndexOutOfBounds(_))
        ));
    }

    #[test]
    fn test_unsafe_access() {
        let mut tensor = Tensor::<i32>::iota(&[3, 3]);
        for index in indexes_row_major(tensor.shape()) {
            let safe = *tensor.get_entry_safe(&index).unwrap();
            assert_eq!(unsafe { *tensor.get_entry_unsafe(&index) }, safe);
        }

        unsafe { *tensor.get_entry_unsafe_mut(&[2, 2]) = 0 };
        assert_eq!(tensor.data()[8], 0);
    }

    #[test]
    fn test_scalar_access() -> Result<()> {
        let scalar = Tensor::scalar(5);
        assert_eq!(scalar.rank(), 0);
        assert_eq!(*scalar.get_entry_safe(&[])?, 5);

        Ok(())
    }

    #[test]
    fn test_clear() {
        let mut tensor = Tensor::<f64>::iota(&[2, 2]);
        tensor.clear();
        assert_eq!(tensor, Tensor::zeros(&[2, 2]));
    }

    #[test]
    fn test_shape_equal() {
        let a = Tensor::<i32>::ones(&[2, 3]);
        let b = Tensor::<f64>::zeros(&[2, 3]);
        let c = Tensor::<i32>::ones(&[3, 2]);
        assert!(a.shape_equal(&b));
        assert!(!a.shape_equal(&c));
    }
}
