use pyo3::{
    Bound, PyErr, PyResult,
    exceptions::{PyKeyError, PyValueError},
    pymethods,
    types::PyType,
};

use crate::{datasets::DatasetOption, error::DatasetError};

impl From<DatasetError> for PyErr {
    fn from(err: DatasetError) -> Self {
        // mirrors Enum["X"] and Enum("x") on the Python side
        match err {
            DatasetError::UnknownLabel { .. } => PyKeyError::new_err(err.to_string()),
            DatasetError::UnknownValue { .. } => PyValueError::new_err(err.to_string()),
        }
    }
}

#[pymethods]
impl DatasetOption {
    #[getter]
    pub fn get_name(&self) -> &'static str {
        self.label()
    }

    #[getter]
    pub fn get_value(&self) -> &'static str {
        self.value()
    }

    #[staticmethod]
    #[pyo3(name = "from_label")]
    pub fn py_from_label(label: &str) -> PyResult<Self> {
        Ok(DatasetOption::from_label(label)?)
    }

    #[staticmethod]
    #[pyo3(name = "from_value")]
    pub fn py_from_value(value: &str) -> PyResult<Self> {
        Ok(DatasetOption::from_value(value)?)
    }

    /// `DataBaseOptions["DIC"]`, as on a Python `Enum`.
    #[classmethod]
    pub fn __class_getitem__(_cls: &Bound<'_, PyType>, label: &str) -> PyResult<Self> {
        Ok(DatasetOption::from_label(label)?)
    }

    #[staticmethod]
    pub fn members() -> Vec<DatasetOption> {
        DatasetOption::all().collect()
    }

    pub fn __str__(&self) -> String {
        format!("DataBaseOptions.{}", self.label())
    }

    pub fn __repr__(&self) -> String {
        format!("<DataBaseOptions.{}: '{}'>", self.label(), self.value())
    }
}
