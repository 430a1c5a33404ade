use super::*;

/// Common aggregators reducing an ordered sequence of values to a single value.
pub mod aggregators {
    use num_traits::{One, Zero};
    use std::ops::Div;

    pub fn sum<T: Clone + Zero>(values: &[T]) -> T {
        values.iter().fold(T::zero(), |acc, v| acc + v.clone())
    }

    /// Arithmetic mean. An empty sequence has no mean, zero is returned for it.
    pub fn mean<T: Clone + Zero + One + Div<Output = T>>(values: &[T]) -> T {
        if values.is_empty() {
            log::warn!("mean of an empty sequence is undefined, returning zero");
            return T::zero();
        }

        let (total, count) = values
            .iter()
            .fold((T::zero(), T::zero()), |(total, count), v| {
                (total + v.clone(), count + T::one())
            });

        total / count
    }
}

impl<T: Clone> Tensor<T> {
    /// Reduces the tensor along `axis` with `aggregator`, removing that axis from the shape.
    ///
    /// Remaining positions are visited in row-major order of the reduced shape, and for each of them the
    /// aggregator receives the values along `axis` in ascending coordinate order.
    pub fn aggregate<F>(&self, axis: usize, aggregator: F) -> Result<Tensor<T>>
    where
        F: Fn(&[T]) -> T,
    {
        let rank = self.shape.len();
        check_axis(axis, rank)?;

        let shape = remove_axis(&self.shape, axis);
        let axis_size = self.shape[axis];
        let offsets: Vec<MultiIndex> = (0..axis_size)
            .map(|coordinate| unit_index(rank, axis, coordinate))
            .collect();

        let data = RowMajorIndexes::new(&shape)
            .map(|mut origin| -> Result<T> {
                origin.insert(axis, 0);
                let values = offsets
                    .iter()
                    .map(|offset| -> Result<T> {
                        let index = combine_indexes(&origin, offset)?;
                        Ok(self.data[row_major_offset(&self.shape, &index)].clone())
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(aggregator(&values))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Tensor { shape, data })
    }
}

#[cfg(test)]
mod tests {
    use super::aggregators::{mean, sum};
    use super::*;

    #[test]
    fn test_aggregators() {
        assert_eq!(sum(&[1, 2, 3, 4]), 10);
        assert_eq!(sum::<i32>(&[]), 0);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
        assert_eq!(mean(&[4, 5, 6]), 5);
        assert_eq!(mean::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_aggregate_sum() -> Result<()> {
        let tensor = Tensor::<i32>::iota(&[2, 2, 3]);

        assert_eq!(
            tensor.aggregate(0, sum)?,
            Tensor::try_from(vec![[8, 10, 12], [14, 16, 18]])?
        );
        assert_eq!(
            tensor.aggregate(1, sum)?,
            Tensor::try_from(vec![[5, 7, 9], [17, 19, 21]])?
        );
        assert_eq!(
            tensor.aggregate(2, sum)?,
            Tensor::try_from(vec![[6, 15], [24, 33]])?
        );

        Ok(())
    }

    #[test]
    fn test_aggregate_sum_matches_slab_addition() -> Result<()> {
        let tensor = Tensor::<i32>::iota(&[2, 2, 3]);
        let slabs = tensor.unstack(0)?;

        assert_eq!(tensor.aggregate(0, sum)?, slabs[0].add(&slabs[1])?);

        Ok(())
    }

    #[test]
    fn test_aggregate_mean() -> Result<()> {
        let tensor = Tensor::<i32>::iota(&[2, 2, 3]);
        assert_eq!(
            tensor.aggregate(2, mean)?,
            Tensor::try_from(vec![[2, 5], [8, 11]])?
        );

        Ok(())
    }

    #[test]
    fn test_aggregate_feeds_values_in_ascending_order() -> Result<()> {
        let tensor = Tensor::<i64>::iota(&[3, 2]);
        let digits = |values: &[i64]| values.iter().fold(0, |acc, v| acc * 10 + v);

        assert_eq!(tensor.aggregate(0, digits)?, Tensor::from(vec![135, 246]));
        assert_eq!(tensor.aggregate(1, digits)?, Tensor::from(vec![12, 34, 56]));

        Ok(())
    }

    #[test]
    fn test_aggregate_over_empty_axis() -> Result<()> {
        let tensor = Tensor::<f64>::zeros(&[2, 0]);

        assert_eq!(tensor.aggregate(1, sum)?, Tensor::zeros(&[2]));
        assert_eq!(tensor.aggregate(1, mean)?, Tensor::zeros(&[2]));

        let reduced = tensor.aggregate(0, sum)?;
        assert_eq!(reduced.shape(), &[0]);
        assert_eq!(reduced.size(), 0);

        Ok(())
    }

    #[test]
    fn test_aggregate_to_scalar_and_errors() -> Result<()> {
        let vector = Tensor::<i32>::iota(&[4]);
        assert_eq!(vector.aggregate(0, sum)?, Tensor::scalar(10));

        assert!(matches!(
            vector.aggregate(1, sum),
            Err(TensorError::IndexOutOfBounds(_))
        ));
        assert!(Tensor::scalar(1).aggregate(0, sum).is_err());

        Ok(())
    }
}
