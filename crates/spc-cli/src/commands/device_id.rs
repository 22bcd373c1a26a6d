use std::path::Path;

use spc_core::device_id::resolve_device_id;
use spc_core::storage::FileKeyValueStore;

use crate::error::CliError;

pub fn run_device_id(data_dir: &Path) -> Result<(), CliError> {
    println!("{}", load_device_id(data_dir)?);
    Ok(())
}

pub fn load_device_id(data_dir: &Path) -> Result<String, CliError> {
    let store = FileKeyValueStore::in_dir(data_dir);
    Ok(resolve_device_id(&store)?)
}
