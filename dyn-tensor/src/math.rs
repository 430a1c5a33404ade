use super::*;
use num_traits::{Float, Zero};
use std::ops::{Add, Mul, Neg};

impl<T> Tensor<T> {
    /// Applies `op` to every entry, producing a tensor of the same shape.
    pub fn apply_unary_op<U, F>(&self, op: F) -> Tensor<U>
    where
        F: Fn(&T) -> U,
    {
        Tensor {
            shape: self.shape.clone(),
            data: self.data.iter().map(op).collect(),
        }
    }

    /// Combines entries at equal positions of two tensors with `op`.
    /// Returns an error if the shapes differ.
    pub fn apply_binary_op<U, V, F>(&self, other: &Tensor<U>, op: F) -> Result<Tensor<V>>
    where
        F: Fn(&T, &U) -> V,
    {
        if !self.shape_equal(other) {
            return Err(TensorError::ShapeMismatch(format!(
                "Elementwise operation requires equal shapes: {:?} != {:?}",
                self.shape, other.shape
            )));
        }

        Ok(Tensor {
            shape: self.shape.clone(),
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| op(a, b))
                .collect(),
        })
    }
}

impl<T: Clone + Neg<Output = T>> Tensor<T> {
    pub fn neg(&self) -> Tensor<T> {
        self.apply_unary_op(|v| -v.clone())
    }
}

impl<T: Float> Tensor<T> {
    /// Elementwise multiplicative inverse. Zero entries map to infinity of the same sign.
    pub fn inv(&self) -> Tensor<T> {
        let zeros = self.data.iter().filter(|v| v.is_zero()).count();
        if zeros > 0 {
            log::warn!("inverting tensor with {zeros} zero entries, result contains infinities");
        }

        self.apply_unary_op(|v| v.recip())
    }
}

impl<T: Clone + Add<Output = T>> Tensor<T> {
    /// Elementwise sum of two tensors of equal shape.
    pub fn add(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.apply_binary_op(other, |a, b| a.clone() + b.clone())
    }
}

impl<T: Clone + Mul<Output = T>> Tensor<T> {
    /// Elementwise (Hadamard) product of two tensors of equal shape.
    pub fn mul(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.apply_binary_op(other, |a, b| a.clone() * b.clone())
    }
}

impl<T: Clone + Zero + Mul<Output = T>> Tensor<T> {
    /// Computes the dot product of two 1D tensors.
    /// Returns an error if the tensors are not 1D or have different sizes.
    pub fn dot(&self, other: &Tensor<T>) -> Result<T> {
        if self.shape.len() != 1 || other.shape.len() != 1 {
            return Err(TensorError::UnsupportedOperation(format!(
                "Dot product requires 1D tensors, but got shapes {:?} and {:?}",
                self.shape, other.shape
            )));
        }

        if self.shape[0] != other.shape[0] {
            return Err(TensorError::ShapeMismatch(format!(
                "Tensors must have the same size for dot product: {} != {}",
                self.shape[0], other.shape[0]
            )));
        }

        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }
}
