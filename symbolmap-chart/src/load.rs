//! Reading chart inputs from disk

use std::fs::{self, File};
use std::path::Path;

use log::info;
use symbolmap_geo::Topology;

use crate::error::LoadError;
use crate::record::{read_state_names, StateRecord};
use crate::values::{read_values, ValueRecord};

pub fn load_topology(path: impl AsRef<Path>) -> Result<Topology, LoadError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;
    let topology = Topology::from_json_str(&content)?;
    info!(
        "Loaded topology {} with {} arcs",
        path.display(),
        topology.arcs.len()
    );
    Ok(topology)
}

pub fn load_state_names(path: impl AsRef<Path>) -> Result<Vec<StateRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;
    let records = read_state_names(file)?;
    info!("Loaded {} state names from {}", records.len(), path.display());
    Ok(records)
}

pub fn load_values(path: impl AsRef<Path>) -> Result<Vec<ValueRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;
    let values = read_values(file)?;
    info!("Loaded {} values from {}", values.len(), path.display());
    Ok(values)
}
