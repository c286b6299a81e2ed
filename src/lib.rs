use pyo3::prelude::*;

pub mod cli;
pub mod datasets;
pub mod error;
pub mod paths;
pub mod python_interface;

pub use datasets::{DATASETS, DatasetOption};
pub use error::DatasetError;

#[pymodule]
pub mod dataset_options {
    #[pymodule_export]
    use super::datasets::DatasetOption;
}
