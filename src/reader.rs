pub mod gtf;
pub use crate::t2g_utils::GTFFIELDS;
pub use gtf::{FieldValue, GtfError, GtfParser, GtfRecord, InfallibleLines, RawLine};
