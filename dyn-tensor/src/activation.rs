use super::*;
use num_traits::{Float, Zero};

impl<T: Clone + Zero + PartialOrd> Tensor<T> {
    /// Elementwise `max(0, x)`.
    pub fn relu(&self) -> Tensor<T> {
        self.apply_unary_op(|v| {
            if *v > T::zero() {
                v.clone()
            } else {
                T::zero()
            }
        })
    }
}

impl<T: Float> Tensor<T> {
    /// Elementwise logistic function `1 / (1 + e^-x)`.
    pub fn sigmoid(&self) -> Tensor<T> {
        self.apply_unary_op(|&v| T::one() / (T::one() + (-v).exp()))
    }

    /// Normalizes every row along the last axis to `exp(x_i - max) / sum_j exp(x_j - max)`.
    /// A scalar is treated as a single row of one element.
    pub fn softmax(&self) -> Tensor<T> {
        let mut data = self.data.clone();
        for row in self.rows_mut(&mut data) {
            let max = row_max(row);
            row.iter_mut().for_each(|v| *v = (*v - max).exp());
            let total = row.iter().fold(T::zero(), |acc, &v| acc + v);
            row.iter_mut().for_each(|v| *v = *v / total);
        }

        Tensor {
            shape: self.shape.clone(),
            data,
        }
    }

    /// Softmax cross entropy of `logits` against `target` (usually one-hot or a distribution) of the
    /// same shape.
    ///
    /// For every row along the last axis the loss is `-sum_i target_i * log_softmax(logits)_i`, the
    /// result is a scalar tensor holding the mean loss over all rows (zero when there are no rows).
    pub fn cross_entropy(logits: &Tensor<T>, target: &Tensor<T>) -> Result<Tensor<T>> {
        if !logits.shape_equal(target) {
            return Err(TensorError::ShapeMismatch(format!(
                "Cross entropy requires equal shapes for logits and target: {:?} != {:?}",
                logits.shape, target.shape
            )));
        }

        let width = logits.row_width();
        if width == 0 {
            return Ok(Tensor::scalar(T::zero()));
        }

        let (total, rows) = logits
            .data
            .chunks(width)
            .zip(target.data.chunks(width))
            .fold((T::zero(), T::zero()), |(total, rows), (row, expected)| {
                let max = row_max(row);
                let log_sum_exp = max
                    + row
                        .iter()
                        .fold(T::zero(), |acc, &v| acc + (v - max).exp())
                        .ln();
                let loss = row
                    .iter()
                    .zip(expected.iter())
                    .fold(T::zero(), |acc, (&x, &t)| acc - t * (x - log_sum_exp));

                (total + loss, rows + T::one())
            });

        if rows.is_zero() {
            return Ok(Tensor::scalar(T::zero()));
        }

        Ok(Tensor::scalar(total / rows))
    }

    /// Length of the last axis, or one for a scalar.
    fn row_width(&self) -> usize {
        self.shape.last().copied().unwrap_or(1)
    }

    fn rows_mut<'a>(&self, data: &'a mut [T]) -> impl Iterator<Item = &'a mut [T]> {
        // chunks of zero length are not allowed, an empty last axis has no data anyway
        data.chunks_mut(self.row_width().max(1))
    }
}

fn row_max<T: Float>(row: &[T]) -> T {
    row.iter().fold(T::neg_infinity(), |max, &v| max.max(v))
}
