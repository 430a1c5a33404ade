use super::*;
use std::fmt;

/// Renders a shape as `{2, 3, 4}`.
pub fn format_shape(shape: &[usize]) -> String {
    format_sequence(shape)
}

/// Renders a multi index as `{0, 1, 2}`.
pub fn format_index(index: &[usize]) -> String {
    format_sequence(index)
}

fn format_sequence(values: &[usize]) -> String {
    let items = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{items}}}")
}

/// Writes `data` laid out by `shape` as nested brackets, one level per axis.
fn write_nested<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    shape: &[usize],
    data: &[T],
) -> fmt::Result {
    let Some((&dim, inner_shape)) = shape.split_first() else {
        return write!(f, "{}", data[0]);
    };

    let inner_size = shape_size(inner_shape);
    write!(f, "[")?;
    for i in 0..dim {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_nested(f, inner_shape, &data[i * inner_size..(i + 1) * inner_size])?;
    }
    write!(f, "]")
}

impl<T: fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, &self.shape, &self.data)
    }
}
