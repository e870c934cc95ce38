use crate::options::T2gOptions;
use crate::reader::{GtfError, GtfParser, GtfRecord};
use crate::t2g_utils::get_reader_from_reader;
use anyhow::Context;
use std::io::{Read, Write};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
/// Configuration errors of a transcript-to-gene run. These are detected once,
/// on the first selected record, or at the end of the input.
pub enum T2gError {
    #[error("No {feature} records found in the GTF input")]
    NoTranscripts { feature: String },
    #[error(
        "Missing transcript version ({transcript_field:?}) or gene version ({gene_field:?}) attribute on the first transcript"
    )]
    MissingVersionFields {
        transcript_field: String,
        gene_field: String,
    },
    #[error("Missing gene name attribute {field:?} on the first transcript")]
    MissingGeneNameField { field: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Counts collected over a run.
///
/// * `records`: the number of GTF records parsed, of any feature type.
/// * `transcripts`: the number of rows written.
pub struct T2gSummary {
    pub records: usize,
    pub transcripts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One output row. It is displayed as `transcript_id<TAB>gene_id[<TAB>gene_name]`.
pub struct T2gRow<'a> {
    pub transcript_id: String,
    pub gene_id: String,
    pub gene_name: Option<&'a str>,
}

impl<'a> T2gRow<'a> {
    /// Builds the row of `rec`. Every attribute the options ask for must be
    /// present, otherwise a [GtfError::FieldNotFound] is returned.
    pub fn from_record(rec: &'a GtfRecord, opts: &T2gOptions) -> Result<T2gRow<'a>, GtfError> {
        let mut transcript_id = rec.transcript_id()?.to_string();
        let mut gene_id = rec.gene_id()?.to_string();

        if opts.use_version {
            transcript_id = versioned(
                &transcript_id,
                rec.required_attribute(&opts.transcript_version_field)?,
            );
            gene_id = versioned(&gene_id, rec.required_attribute(&opts.gene_version_field)?);
        }

        let gene_name = if opts.skip_gene_names {
            None
        } else {
            Some(rec.required_attribute(&opts.gene_name_field)?)
        };

        Ok(T2gRow {
            transcript_id,
            gene_id,
            gene_name,
        })
    }
}

impl std::fmt::Display for T2gRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.transcript_id, self.gene_id)?;
        if let Some(gene_name) = self.gene_name {
            write!(f, "\t{}", gene_name)?;
        }
        Ok(())
    }
}

fn versioned(id: &str, version: &str) -> String {
    format!("{}.{}", id, version)
}

/// Checks that the first selected record carries every attribute the options
/// ask for. Later records are not checked this way.
fn check_first_record(rec: &GtfRecord, opts: &T2gOptions) -> Result<(), T2gError> {
    if opts.use_version
        && !(rec.has_attribute(&opts.transcript_version_field)
            && rec.has_attribute(&opts.gene_version_field))
    {
        return Err(T2gError::MissingVersionFields {
            transcript_field: opts.transcript_version_field.clone(),
            gene_field: opts.gene_version_field.clone(),
        });
    }

    if !opts.skip_gene_names && !rec.has_attribute(&opts.gene_name_field) {
        return Err(T2gError::MissingGeneNameField {
            field: opts.gene_name_field.clone(),
        });
    }
    Ok(())
}

/// Writes one row per record of feature type `opts.feature` to `out`.
///
/// ### Arguments
///
/// * `records`: a stream of parsed records, typically a [GtfParser].
/// * `opts`: the run configuration.
/// * `out`: the sink of the tab-separated rows.
///
/// ### Returns
///
/// A [T2gSummary] on success. Parse errors from `records` abort the run, as does
/// any [T2gError] or missing attribute. Rows written before the failure stay written.
pub fn write_t2g<I, W>(records: I, opts: &T2gOptions, out: &mut W) -> anyhow::Result<T2gSummary>
where
    I: IntoIterator<Item = Result<GtfRecord, GtfError>>,
    W: Write,
{
    let mut summary = T2gSummary::default();

    for rec in records {
        let rec = rec.context("Could not parse the GTF input")?;
        summary.records += 1;

        if rec.feature() != opts.feature {
            continue;
        }

        if summary.transcripts == 0 {
            check_first_record(&rec, opts)?;
            debug!("first {} record passed the attribute checks", opts.feature);
        }

        let row = T2gRow::from_record(&rec, opts).with_context(|| {
            format!(
                "Could not build the output row of {} record #{}",
                opts.feature,
                summary.transcripts + 1
            )
        })?;
        writeln!(out, "{}", row)?;
        summary.transcripts += 1;
    }
    out.flush()?;

    if summary.transcripts == 0 {
        return Err(T2gError::NoTranscripts {
            feature: opts.feature.clone(),
        }
        .into());
    }

    info!(
        "Parsed {} GTF records and wrote {} {} rows.",
        summary.records, summary.transcripts, opts.feature
    );
    Ok(summary)
}

/// Parses the GTF stream `input`, gzipped or not, and writes its transcript-to-gene
/// rows to `out`. See [write_t2g].
pub fn run<R, W>(input: R, opts: &T2gOptions, out: &mut W) -> anyhow::Result<T2gSummary>
where
    R: Read + 'static,
    W: Write,
{
    opts.validate()?;
    let rdr = get_reader_from_reader(input)?;
    let parser = GtfParser::from_reader(rdr).with_encoding(opts.encoding);
    write_t2g(parser, opts, out)
}
