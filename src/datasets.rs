use std::{path::Path, str::FromStr, sync::LazyLock};

use indexmap::IndexMap;
use pyo3::pyclass;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{
    error::DatasetError,
    paths::{DIC_C2DH_HELA, FLUO_N2DL_HELA, PHC_C2DH_U373},
};

/// The cell-tracking datasets, each naming the directory its files live in.
///
/// Labels keep the spelling the datasets are known by on the Python side
/// (`DIC`, `FLuo`, `Phc`), which is also what `Display`, `FromStr` and serde use.
#[pyclass(name = "DataBaseOptions", eq, eq_int, frozen, hash)]
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
pub enum DatasetOption {
    #[pyo3(name = "DIC")]
    #[strum(serialize = "DIC")]
    #[serde(rename = "DIC")]
    Dic,
    #[pyo3(name = "FLuo")]
    #[strum(serialize = "FLuo")]
    #[serde(rename = "FLuo")]
    Fluo,
    #[pyo3(name = "Phc")]
    #[strum(serialize = "Phc")]
    #[serde(rename = "Phc")]
    Phc,
}

/// Label -> option, in declaration order.
pub static DATASETS: LazyLock<IndexMap<&'static str, DatasetOption>> =
    LazyLock::new(|| DatasetOption::iter().map(|option| (option.label(), option)).collect());

impl DatasetOption {
    pub fn all() -> impl Iterator<Item = DatasetOption> {
        DatasetOption::iter()
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Relative directory of the dataset, e.g. `DataSet/DIC-C2DH-HeLa`.
    pub fn value(&self) -> &'static str {
        match self {
            DatasetOption::Dic => DIC_C2DH_HELA,
            DatasetOption::Fluo => FLUO_N2DL_HELA,
            DatasetOption::Phc => PHC_C2DH_U373,
        }
    }

    pub fn as_path(&self) -> &'static Path {
        Path::new(self.value())
    }

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Result<Self, DatasetError> {
        DATASETS
            .get(label)
            .copied()
            .ok_or_else(|| DatasetError::UnknownLabel {
                label: label.to_string(),
                expected: expected_labels(),
            })
    }

    pub fn from_value(value: &str) -> Result<Self, DatasetError> {
        DatasetOption::all()
            .find(|option| option.value() == value)
            .ok_or_else(|| DatasetError::UnknownValue {
                value: value.to_string(),
            })
    }
}

impl FromStr for DatasetOption {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetOption::from_label(s)
    }
}

pub fn expected_labels() -> String {
    DATASETS.keys().copied().collect::<Vec<_>>().join(", ")
}
