use std::path::PathBuf;

use symbolmap_geo::error::SymbolMapGeoError;
use symbolmap_scenegraph::error::SymbolMapSceneGraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymbolMapChartError {
    #[error("No svg element with id `{0}`")]
    SvgNotFound(String),

    #[error("Geo error: `{0}`")]
    GeoError(#[from] SymbolMapGeoError),

    #[error("SceneGraph error: `{0}`")]
    SceneGraphError(#[from] SymbolMapSceneGraphError),
}

/// Failure to read one of the chart's input files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: `{}`", .0.display())]
    NotFound(PathBuf),

    #[error("Error reading `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing delimited data: `{0}`")]
    CsvError(#[from] csv::Error),

    #[error("Missing column `{0}`")]
    MissingColumn(String),

    #[error("Error decoding topology: `{0}`")]
    TopologyError(#[from] SymbolMapGeoError),
}

impl LoadError {
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io { path, source }
        }
    }
}
