use super::*;
use num_traits::Zero;
use rayon::prelude::*;
use std::ops::Mul;

/// Computes the shape of contracting the last axis of `a_shape` with the first axis of `b_shape`:
/// `{a_1, .., a_k} x {a_k, b_1, .., b_m} -> {a_1, .., a_k-1, b_1, .., b_m}`.
/// Returns an error whenever [`Tensor::matmul`] would fail for tensors of these shapes.
pub fn matmul_shape(a_shape: &[usize], b_shape: &[usize]) -> Result<Shape> {
    let (Some((&k, a_rest)), Some((&k2, b_rest))) = (a_shape.split_last(), b_shape.split_first())
    else {
        return Err(TensorError::ShapeMismatch(format!(
            "Contraction requires tensors of rank >= 1, got shapes {a_shape:?} and {b_shape:?}"
        )));
    };

    if k != k2 {
        return Err(TensorError::ShapeMismatch(format!(
            "Shared dimension incompatible for contraction: {a_shape:?} x {b_shape:?} ({k} != {k2})"
        )));
    }

    Ok(concat_indexes(a_rest, b_rest))
}

/// Sizes of the flattened `[rows, shared] x [shared, cols]` problem.
struct Contraction {
    rows: usize,
    shared: usize,
    cols: usize,
    shape: Shape,
}

impl Contraction {
    fn new(a_shape: &[usize], b_shape: &[usize]) -> Result<Self> {
        let shape = matmul_shape(a_shape, b_shape)?;
        let shared = b_shape[0];
        let rows = shape_size(&a_shape[..a_shape.len() - 1]);
        let cols = shape_size(&b_shape[1..]);

        log::debug!("contracting {a_shape:?} x {b_shape:?} -> {shape:?}");

        Ok(Self {
            rows,
            shared,
            cols,
            shape,
        })
    }
}

/// Computes one output row: `row[j] = sum_c lhs[c] * rhs[c * cols + j]`.
fn contract_row<T>(row: &mut [T], lhs: &[T], rhs: &[T], cols: usize)
where
    T: Clone + Zero + Mul<Output = T>,
{
    for (j, value) in row.iter_mut().enumerate() {
        *value = lhs
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (c, a)| acc + a.clone() * rhs[c * cols + j].clone());
    }
}

impl<T> Tensor<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    /// Contracts the last axis of `self` with the first axis of `other` on a single thread.
    ///
    /// The entry at `(i_1, .., i_k-1, j_1, .., j_m)` is the sum over `c` of
    /// `self[i_1, .., i_k-1, c] * other[c, j_1, .., j_m]`. This covers dot products (rank 1 x rank 1
    /// gives a scalar), matrix-vector, vector-matrix and matrix products as well as higher ranks.
    pub fn matmul(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        let contraction = Contraction::new(&self.shape, &other.shape)?;
        let (shared, cols) = (contraction.shared, contraction.cols);

        let mut result_data = vec![T::zero(); contraction.rows * cols];
        if cols > 0 {
            for (i, row) in result_data.chunks_mut(cols).enumerate() {
                contract_row(row, &self.data[i * shared..(i + 1) * shared], &other.data, cols);
            }
        }

        Ok(Tensor {
            shape: contraction.shape,
            data: result_data,
        })
    }

    /// Evaluates the differential `differential` at `x`.
    ///
    /// The first `gradient_dim` axes of the differential are its input axes and must equal the shape
    /// of `x`, the remaining axes form the shape of the result. Every input coordinate is contracted:
    /// `result[o] = sum_i differential[i, o] * x[i]`.
    pub fn evaluate_differential(
        x: &Tensor<T>,
        differential: &Tensor<T>,
        gradient_dim: usize,
    ) -> Result<Tensor<T>> {
        if gradient_dim > differential.shape.len()
            || differential.shape[..gradient_dim] != x.shape[..]
        {
            return Err(TensorError::ShapeMismatch(format!(
                "Input of shape {:?} does not match first {gradient_dim} axes of differential {:?}",
                x.shape, differential.shape
            )));
        }

        let shape = to_shape(&differential.shape[gradient_dim..]);
        let cols = shape_size(&shape);

        let mut data = vec![T::zero(); cols];
        contract_row(&mut data, &x.data, &differential.data, cols);

        Ok(Tensor { shape, data })
    }
}

impl<T> Tensor<T>
where
    T: Clone + Send + Sync + Zero + Mul<Output = T>,
{
    /// Performs the same contraction as [`Tensor::matmul`] on multiple threads using default configuration.
    pub fn matmul_par(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.matmul_par_with(other, &ExecutionConfig::default())
    }

    /// Performs the same contraction as [`Tensor::matmul`], distributing output rows across threads.
    pub fn matmul_par_with(&self, other: &Tensor<T>, config: &ExecutionConfig) -> Result<Tensor<T>> {
        let contraction = Contraction::new(&self.shape, &other.shape)?;
        let (rows, shared, cols) = (contraction.rows, contraction.shared, contraction.cols);

        let mut result_data = vec![T::zero(); rows * cols];
        if !result_data.is_empty() {
            let min_rows = config.get_min_rows_per_task(rows);
            let run = |data: &mut [T]| {
                data.par_chunks_mut(cols)
                    .with_min_len(min_rows)
                    .enumerate()
                    .for_each(|(i, row)| {
                        contract_row(row, &self.data[i * shared..(i + 1) * shared], &other.data, cols)
                    })
            };

            match config.build_pool()? {
                Some(pool) => pool.install(|| run(&mut result_data)),
                None => run(&mut result_data),
            }
        }

        Ok(Tensor {
            shape: contraction.shape,
            data: result_data,
        })
    }
}
