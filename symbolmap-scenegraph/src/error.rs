use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymbolMapSceneGraphError {
    #[error("No mark at path {0:?}")]
    InvalidMarkPath(Vec<usize>),

    #[error("Mark at path {0:?} does not carry classes")]
    UnclassedMark(Vec<usize>),
}
