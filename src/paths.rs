//! Relative path fragments of the dataset directories.

/// `under_dataset_dir!()` is the parent directory itself,
/// `under_dataset_dir!("name")` a child of it.
macro_rules! under_dataset_dir {
    ($($name:literal)?) => {
        concat!("DataSet" $(, "/", $name)?)
    };
}

pub const DATASET_DIR: &str = under_dataset_dir!();

pub const DIC_C2DH_HELA: &str = under_dataset_dir!("DIC-C2DH-HeLa");
pub const FLUO_N2DL_HELA: &str = under_dataset_dir!("Fluo-N2DL-HeLa");
pub const PHC_C2DH_U373: &str = under_dataset_dir!("PhC-C2DH-U373");
