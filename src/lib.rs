//! t2g streams a [GTF](https://www.ensembl.org/info/website/upload/gff.html) annotation and
//! writes, for every transcript record, a tab-separated row mapping the transcript to its gene
//! (and, optionally, the gene name). The GTF record parser it is built on is exposed as well,
//! so that other tools can pull records one at a time from any line source, text or bytes,
//! and look their fields up by name.

pub mod options;
pub mod reader;
pub mod t2g;
pub mod t2g_utils;
pub use options::T2gOptions;
pub use reader::{GtfError, GtfParser, GtfRecord};
pub use t2g::{run, write_t2g, T2gError, T2gSummary};
pub use t2g_utils::TextEncoding;
