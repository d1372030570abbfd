pub mod chart;
pub mod document;
pub mod error;
pub mod load;
pub mod lookup;
pub mod number;
pub mod record;
pub mod report;
pub mod values;

pub use chart::{SymbolMap, DEFAULT_LOG_TEXT};
pub use document::{Document, Paragraph};
pub use error::{LoadError, SymbolMapChartError};
pub use lookup::Lookup;
pub use record::{parse_state_name, read_state_names, StateId, StateRecord, StateRow};
pub use report::{process_error, ReportableError};
pub use values::{read_values, ValueRecord};
