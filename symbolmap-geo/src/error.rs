use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymbolMapGeoError {
    #[error("Topology has no object named `{0}`")]
    MissingObject(String),

    #[error("Arc index {0} is out of bounds")]
    InvalidArcIndex(i64),

    #[error("Invalid topology: `{0}`")]
    InvalidTopology(String),

    #[error("Error parsing TopoJSON: `{0}`")]
    ParseError(#[from] serde_json::Error),
}
