use super::*;
use num_traits::{Float, One, Zero};
use rand::Rng;
use rand::distributions::{Distribution, Uniform, uniform::SampleUniform};
use std::fmt;
use std::ops::Add;

impl<T> Tensor<T> {
    /// Creates a tensor from row-major `data` and `shape`.
    /// Returns an error if the data length differs from the product of the shape.
    pub fn new(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let expected = checked_shape_size(shape).ok_or_else(|| {
            TensorError::MalformedConstruction(format!("Size of shape {shape:?} overflows usize"))
        })?;
        if data.len() != expected {
            return Err(TensorError::MalformedConstruction(format!(
                "Shape {shape:?} requires {expected} elements, got {}",
                data.len()
            )));
        }

        Ok(Self {
            shape: to_shape(shape),
            data,
        })
    }

    /// Creates a scalar tensor (empty shape, one element).
    pub fn scalar(value: T) -> Self {
        Self {
            shape: Shape::new(),
            data: vec![value],
        }
    }

    /// Creates a tensor by calling `generator` for each multi index visited in row-major order.
    pub fn initialize_with_generator<F>(shape: &[usize], generator: F) -> Self
    where
        F: FnMut(MultiIndex) -> T,
    {
        Self {
            shape: to_shape(shape),
            data: RowMajorIndexes::new(shape).map(generator).collect(),
        }
    }
}

impl<T: Clone> Tensor<T> {
    /// Creates a tensor with every entry set to `value`.
    ///
    /// # Panics
    ///
    /// Like every infallible generator, panics with a capacity overflow when the shape size exceeds
    /// `usize`. Use [`Tensor::new`] for shapes coming from untrusted input.
    pub fn constant(shape: &[usize], value: T) -> Self {
        Self {
            shape: to_shape(shape),
            data: vec![value; shape_size(shape)],
        }
    }
}

impl<T: Clone + Zero> Tensor<T> {
    /// Creates a zero-filled tensor of given shape.
    pub fn from_shape(shape: &[usize]) -> Self {
        Self::zeros(shape)
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self::constant(shape, T::zero())
    }
}

impl<T: Clone + One> Tensor<T> {
    pub fn ones(shape: &[usize]) -> Self {
        Self::constant(shape, T::one())
    }
}

impl<T: Clone + One + Add<Output = T>> Tensor<T> {
    /// Creates a tensor filled with consecutive values 1, 2, 3, ... in row-major order.
    pub fn iota(shape: &[usize]) -> Self {
        let size = shape_size(shape);
        let mut data = Vec::with_capacity(size);
        let mut value = T::one();
        for _ in 0..size {
            data.push(value.clone());
            value = value + T::one();
        }

        Self {
            shape: to_shape(shape),
            data,
        }
    }
}

impl<T: Zero + One> Tensor<T> {
    /// Creates a generalized identity: an entry is one iff all its index components are equal.
    /// `id_left(&[n, n])` is the left identity of square matrix contraction.
    pub fn id_left(shape: &[usize]) -> Self {
        Self::initialize_with_generator(shape, |index| kronecker_delta(&index))
    }
}

impl<T: Float + SampleUniform + fmt::Debug> Tensor<T> {
    /// Creates a tensor with entries drawn independently from the uniform distribution over `[lower, upper)`.
    pub fn real_uniform(shape: &[usize], lower: T, upper: T) -> Result<Self> {
        Self::real_uniform_with_rng(shape, lower, upper, &mut rand::thread_rng())
    }

    /// Same as [`Tensor::real_uniform`], but with an explicit source of randomness.
    pub fn real_uniform_with_rng<R: Rng + ?Sized>(
        shape: &[usize],
        lower: T,
        upper: T,
        rng: &mut R,
    ) -> Result<Self> {
        if !(lower < upper) {
            return Err(TensorError::RangeInvalid(format!(
                "Uniform distribution requires lower < upper, got [{lower:?}, {upper:?})"
            )));
        }

        // the sampler scales by the width of the range, which must stay finite
        if !(upper - lower).is_finite() {
            return Err(TensorError::RangeInvalid(format!(
                "Uniform distribution requires a finite range width, got [{lower:?}, {upper:?})"
            )));
        }

        let distribution = Uniform::new(lower, upper);

        Ok(Self::initialize_with_generator(shape, |_| {
            distribution.sample(&mut *rng)
        }))
    }
}

/// Returns one if all components of `index` are equal, zero otherwise.
pub fn kronecker_delta<T: Zero + One>(index: &[usize]) -> T {
    match index.split_first() {
        Some((first, rest)) if rest.iter().any(|i| i != first) => T::zero(),
        _ => T::one(),
    }
}

impl<T: Default> Default for Tensor<T> {
    fn default() -> Self {
        Self::scalar(T::default())
    }
}

impl<T> From<Vec<T>> for Tensor<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            shape: smallvec::smallvec![data.len()],
            data,
        }
    }
}

impl<T, const M: usize> TryFrom<Vec<[T; M]>> for Tensor<T> {
    type Error = TensorError;

    fn try_from(rows: Vec<[T; M]>) -> Result<Self> {
        let shape = [rows.len(), M];
        Tensor::new(rows.into_iter().flatten().collect(), &shape)
    }
}
