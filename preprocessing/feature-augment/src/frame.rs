use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use sensorplot_helpers::Float;

use crate::AugmentError;

/// A table of float columns addressed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<F> {
    columns: Vec<String>,
    data: Array2<F>,
}

impl<F: Float> Frame<F> {
    /// Names the columns of `data`, left to right.
    ///
    /// # Errors
    ///
    /// `ColumnCount` if the number of names differs from the number of columns,
    /// `DuplicateColumn` if a name repeats.
    pub fn new(columns: Vec<String>, data: Array2<F>) -> Result<Self, AugmentError> {
        if columns.len() != data.ncols() {
            return Err(AugmentError::ColumnCount {
                names: columns.len(),
                columns: data.ncols(),
            });
        }
        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(AugmentError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self { columns, data })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn data(&self) -> ArrayView2<'_, F> {
        self.data.view()
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, F>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.data.column(idx))
    }

    pub(crate) fn require(&self, name: &str) -> Result<ArrayView1<'_, F>, AugmentError> {
        self.column(name)
            .ok_or_else(|| AugmentError::MissingColumn(name.to_string()))
    }

    /// Appends `values` as a new rightmost column.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Array1<F>,
    ) -> Result<Self, AugmentError> {
        let name = name.into();
        if self.columns.contains(&name) {
            return Err(AugmentError::DuplicateColumn(name));
        }
        self.data.push_column(values.view())?;
        self.columns.push(name);
        Ok(self)
    }

    pub fn into_parts(self) -> (Vec<String>, Array2<F>) {
        (self.columns, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_column_lookup() {
        let frame = Frame::new(names(&["a", "b"]), array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(frame.column("b").unwrap(), array![2.0, 4.0]);
        assert!(frame.column("c").is_none());
    }

    #[test]
    fn test_with_column_appends_right() {
        let frame = Frame::new(names(&["a"]), array![[1.0], [3.0]])
            .unwrap()
            .with_column("b", array![5.0, 6.0])
            .unwrap();
        assert_eq!(frame.columns(), ["a", "b"]);
        assert_eq!(frame.data(), array![[1.0, 5.0], [3.0, 6.0]]);
    }

    #[test]
    fn test_with_column_rejects_wrong_length() {
        let frame = Frame::new(names(&["a"]), array![[1.0], [3.0]]).unwrap();
        assert!(matches!(
            frame.with_column("b", array![5.0]),
            Err(AugmentError::Shape(_))
        ));
    }

    #[test]
    fn test_name_count_must_match() {
        let result = Frame::new(names(&["a", "b", "c"]), array![[1.0, 2.0]]);
        assert!(matches!(
            result,
            Err(AugmentError::ColumnCount {
                names: 3,
                columns: 2
            })
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Frame::new(names(&["a", "a"]), array![[1.0, 2.0]]);
        assert!(matches!(result, Err(AugmentError::DuplicateColumn(name)) if name == "a"));
    }
}
