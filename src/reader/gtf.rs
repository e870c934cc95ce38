use crate::t2g_utils::{
    TextEncoding, ATTRIBUTES_FIELD, COMMENTS_FIELD, GENE_ID, GTFFIELDS, TRANSCRIPT_ID,
};
use std::collections::HashMap;
use std::io::{self, BufRead};
use tracing::trace;

/// The minimal number of tab-delimited columns in the content part of a GTF line:
/// the eight positional fields plus the attribute column.
const MIN_COLUMNS: usize = GTFFIELDS.len() + 1;

#[derive(Debug, thiserror::Error)]
/// Errors raised while parsing GTF records or looking up their fields.
///
/// Every variant but [GtfError::FieldNotFound] is fatal for the parser that
/// produced it: once a [GtfParser] yields one of them, it yields nothing more.
/// Line numbers are 1-based and count every physical line of the source,
/// including skipped comment lines.
pub enum GtfError {
    /// The line source itself failed. This is never reported as end-of-input.
    #[error("failed to read GTF line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("GTF line {line} is not valid {encoding}")]
    Decode { line: usize, encoding: TextEncoding },
    #[error("GTF line {line} has {found} tab-delimited column(s); at least 9 are required")]
    MalformedLine { line: usize, found: usize },
    #[error("GTF line {line}: attribute {piece:?} has no key/value separator")]
    MalformedAttribute { line: usize, piece: String },
    /// A lookup miss; the record itself is fine.
    #[error("field {name:?} is neither a GTF column nor an attribute of this record")]
    FieldNotFound { name: String },
}

impl GtfError {
    /// Returns `true` if this error is a lookup miss rather than a parse failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GtfError::FieldNotFound { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One raw line handed to the [GtfParser], either already decoded or as bytes
/// still to be decoded under the parser's [TextEncoding].
pub enum RawLine {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<String> for RawLine {
    fn from(s: String) -> RawLine {
        RawLine::Text(s)
    }
}

impl From<&str> for RawLine {
    fn from(s: &str) -> RawLine {
        RawLine::Text(s.to_string())
    }
}

impl From<Vec<u8>> for RawLine {
    fn from(b: Vec<u8>) -> RawLine {
        RawLine::Bytes(b)
    }
}

impl From<&[u8]> for RawLine {
    fn from(b: &[u8]) -> RawLine {
        RawLine::Bytes(b.to_vec())
    }
}

/// The result of resolving a field name against a [GtfRecord].
///
/// Lookup is two-tiered: the eight GTF columns and the `attributes`/`comments`
/// pseudo-fields are checked first, and only then the attribute map.
///
/// # Variants
///
/// * `Column` - one of the eight positional columns, or the trailing comment.
/// * `Attributes` - the whole attribute map, for the name `attributes`.
/// * `Attribute` - the value of a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Column(&'a str),
    Attributes(&'a HashMap<String, String>),
    Attribute(&'a str),
}

impl<'a> FieldValue<'a> {
    /// Returns the text of this value, or `None` for the attribute map.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Column(s) | FieldValue::Attribute(s) => Some(s),
            FieldValue::Attributes(_) => None,
        }
    }

    /// Returns `true` if the value was resolved from the fixed fields of the record.
    pub fn is_fixed(&self) -> bool {
        !matches!(self, FieldValue::Attribute(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single parsed GTF line.
///
/// The positional columns are kept as the exact text found in the file; no
/// trimming or numeric conversion is done. A record is immutable once built.
///
/// # Fields
///
/// * `fields`: the eight positional columns, in the order of [GTFFIELDS].
/// * `attributes`: the attribute map. If a key occurs more than once, the last value wins.
/// * `comments`: everything after the first `#` on the line, or an empty string.
pub struct GtfRecord {
    fields: [String; 8],
    attributes: HashMap<String, String>,
    comments: String,
}

impl GtfRecord {
    /// Parses one GTF line, already stripped of its line terminator.
    ///
    /// The line is split at its first `#` into a content part and a comment part.
    /// If the content part is empty the line carries no record and `Ok(None)` is
    /// returned. Note that the content part is not trimmed, so a line made of
    /// whitespace before a `#` is *not* skipped and will fail to parse.
    ///
    /// ### Arguments
    ///
    /// * `line`: the text of the line.
    /// * `line_no`: the 1-based line number, used in error reports only.
    ///
    /// ### Returns
    ///
    /// `Ok(Some(record))` for a record line, `Ok(None)` for a content-less line,
    /// or a [GtfError::MalformedLine] / [GtfError::MalformedAttribute].
    pub fn parse(line: &str, line_no: usize) -> Result<Option<GtfRecord>, GtfError> {
        let (content, comments) = line.split_once('#').unwrap_or((line, ""));
        if content.is_empty() {
            return Ok(None);
        }

        let columns: Vec<&str> = content.split('\t').collect();
        if columns.len() < MIN_COLUMNS {
            return Err(GtfError::MalformedLine {
                line: line_no,
                found: columns.len(),
            });
        }

        let fields = std::array::from_fn(|i| columns[i].to_string());
        let attributes = parse_attributes(columns[GTFFIELDS.len()], line_no)?;

        Ok(Some(GtfRecord {
            fields,
            attributes,
            comments: comments.to_string(),
        }))
    }

    /// Resolves `name` against this record, without failing.
    ///
    /// Positional columns and the `attributes`/`comments` pseudo-fields take
    /// precedence over attributes of the same name.
    pub fn lookup(&self, name: &str) -> Option<FieldValue<'_>> {
        if let Some(idx) = GTFFIELDS.iter().position(|&f| f == name) {
            Some(FieldValue::Column(&self.fields[idx]))
        } else if name == ATTRIBUTES_FIELD {
            Some(FieldValue::Attributes(&self.attributes))
        } else if name == COMMENTS_FIELD {
            Some(FieldValue::Column(&self.comments))
        } else {
            self.attributes
                .get(name)
                .map(|v| FieldValue::Attribute(v.as_str()))
        }
    }

    /// Like [GtfRecord::lookup], but a miss is a [GtfError::FieldNotFound].
    pub fn get(&self, name: &str) -> Result<FieldValue<'_>, GtfError> {
        self.lookup(name).ok_or_else(|| GtfError::FieldNotFound {
            name: name.to_string(),
        })
    }

    /// The sequence (chromosome or contig) name, column 1.
    pub fn seqname(&self) -> &str {
        &self.fields[0]
    }

    /// The annotation source, column 2.
    pub fn source(&self) -> &str {
        &self.fields[1]
    }

    /// The feature type, e.g. `transcript` or `exon`, column 3.
    pub fn feature(&self) -> &str {
        &self.fields[2]
    }

    /// The start position as written in the file, column 4.
    pub fn start(&self) -> &str {
        &self.fields[3]
    }

    /// The end position as written in the file, column 5.
    pub fn end(&self) -> &str {
        &self.fields[4]
    }

    /// The score, column 6. Usually `.`.
    pub fn score(&self) -> &str {
        &self.fields[5]
    }

    /// The strand, column 7.
    pub fn strand(&self) -> &str {
        &self.fields[6]
    }

    /// The frame (phase), column 8.
    pub fn frame(&self) -> &str {
        &self.fields[7]
    }

    /// The eight positional columns, in file order.
    pub fn fields(&self) -> &[String; 8] {
        &self.fields
    }

    /// A read-only view of the attribute map.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// The text after the first `#` of the line, or an empty string.
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Returns the value of attribute `key`, if the record has it.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|v| v.as_str())
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Returns the value of a required attribute, failing with
    /// [GtfError::FieldNotFound] if the record lacks it.
    pub fn required_attribute(&self, key: &str) -> Result<&str, GtfError> {
        self.attribute(key).ok_or_else(|| GtfError::FieldNotFound {
            name: key.to_string(),
        })
    }

    /// The `gene_id` attribute. There is no fallback if it is missing.
    pub fn gene_id(&self) -> Result<&str, GtfError> {
        self.required_attribute(GENE_ID)
    }

    /// The `transcript_id` attribute. There is no fallback if it is missing.
    pub fn transcript_id(&self) -> Result<&str, GtfError> {
        self.required_attribute(TRANSCRIPT_ID)
    }
}

impl std::fmt::Display for GtfRecord {
    /// Renders the record as a GTF-like line for diagnostics. Attributes are
    /// written sorted by key, so the output is not necessarily the input line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for field in self.fields.iter() {
            write!(f, "{}\t", field)?;
        }
        let mut keys: Vec<&String> = self.attributes.keys().collect();
        keys.sort_unstable();
        let attrs: Vec<String> = keys
            .into_iter()
            .map(|k| format!("{} \"{}\";", k, self.attributes[k]))
            .collect();
        write!(f, "{}", attrs.join(" "))?;
        if !self.comments.is_empty() {
            write!(f, "#{}", self.comments)?;
        }
        Ok(())
    }
}

/// Parses a GTF attribute column into a key/value map.
///
/// All double quotes are removed and leading whitespace is stripped before the
/// column is split on `;`. The piece after the final `;` is always dropped, so
/// a column that does not end in `;` loses its last pair. Each remaining piece,
/// once stripped of leading whitespace, is split at its first space into key and
/// value; the value may itself contain spaces.
fn parse_attributes(column: &str, line_no: usize) -> Result<HashMap<String, String>, GtfError> {
    let unquoted = column.replace('"', "");
    let mut pieces: Vec<&str> = unquoted.trim_start().split(';').collect();
    // split always yields at least one piece
    pieces.pop();

    let mut attributes = HashMap::with_capacity(pieces.len());
    for piece in pieces {
        let piece = piece.trim_start();
        match piece.split_once(' ') {
            Some((key, value)) => {
                attributes.insert(key.to_string(), value.to_string());
            }
            None => {
                return Err(GtfError::MalformedAttribute {
                    line: line_no,
                    piece: piece.to_string(),
                })
            }
        }
    }
    Ok(attributes)
}

/// Adapts an iterator of plain lines to the fallible line source expected by [GtfParser].
pub struct InfallibleLines<I>(I);

impl<I: Iterator> Iterator for InfallibleLines<I> {
    type Item = io::Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Ok)
    }
}

/// A lazy, forward-only parser producing one [GtfRecord] per record line of a
/// line source.
///
/// The line source is any iterator of `io::Result<L>` where `L` converts into a
/// [RawLine], i.e. text or bytes. Byte lines are decoded with the parser's
/// [TextEncoding] (UTF-8 unless changed with [GtfParser::with_encoding]).
/// A trailing `\n`, `\r\n` or `\r` is removed from every line. Lines without content
/// before their first `#` are skipped.
///
/// The first error ends the iteration: after yielding an `Err`, the parser
/// only returns `None`. Exhausting the source ends it cleanly.
///
/// # Examples
///
/// ```rust
/// use t2g::reader::GtfParser;
///
/// let gtf = "#!genome-build GRCh38\nchr1\tHAVANA\ttranscript\t1\t100\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";\n";
/// let mut parser = GtfParser::from_reader(gtf.as_bytes());
/// let record = parser.next().unwrap().unwrap();
/// assert_eq!(record.transcript_id().unwrap(), "T1");
/// assert!(parser.next().is_none());
/// ```
pub struct GtfParser<I> {
    lines: I,
    encoding: TextEncoding,
    line_no: usize,
    failed: bool,
}

impl<R: BufRead> GtfParser<io::Split<R>> {
    /// Creates a parser reading raw byte lines from `reader`.
    pub fn from_reader(reader: R) -> Self {
        GtfParser::new(reader.split(b'\n'))
    }
}

impl<J: Iterator> GtfParser<InfallibleLines<J>> {
    /// Creates a parser over lines that cannot fail to be read, such as an
    /// in-memory collection.
    pub fn from_lines<T: IntoIterator<IntoIter = J>>(lines: T) -> Self {
        GtfParser::new(InfallibleLines(lines.into_iter()))
    }
}

impl<I> GtfParser<I> {
    pub fn new(lines: I) -> Self {
        GtfParser {
            lines,
            encoding: TextEncoding::default(),
            line_no: 0,
            failed: false,
        }
    }

    /// Sets the encoding used to decode byte lines.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// The number of lines consumed from the source so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    fn fail(&mut self, err: GtfError) -> Option<Result<GtfRecord, GtfError>> {
        self.failed = true;
        Some(Err(err))
    }
}

impl<I, L> Iterator for GtfParser<I>
where
    I: Iterator<Item = io::Result<L>>,
    L: Into<RawLine>,
{
    type Item = Result<GtfRecord, GtfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let raw = self.lines.next()?;
            self.line_no += 1;

            let raw: RawLine = match raw {
                Ok(raw) => raw.into(),
                Err(source) => {
                    return self.fail(GtfError::Io {
                        line: self.line_no,
                        source,
                    })
                }
            };

            let text = match raw {
                RawLine::Text(text) => text,
                RawLine::Bytes(bytes) => match self.encoding.decode(bytes) {
                    Some(text) => text,
                    None => {
                        return self.fail(GtfError::Decode {
                            line: self.line_no,
                            encoding: self.encoding,
                        })
                    }
                },
            };

            let line = text.strip_suffix('\n').unwrap_or(&text);
            let line = line.strip_suffix('\r').unwrap_or(line);

            match GtfRecord::parse(line, self.line_no) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => trace!("skipping content-less GTF line {}", self.line_no),
                Err(e) => return self.fail(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GTF_RECORD: &[u8] = b"#!genome-build GRCh38.p13\n\nchr1\tHAVANA\tgene\t29554\t31109\t.\t+\t.\tgene_id \"ENSG00000243485\"; gene_version \"5\"; gene_name \"MIR1302-2HG\"; level 2;\nchr1\tHAVANA\ttranscript\t29554\t31097\t.\t+\t.\tgene_id \"ENSG00000243485\"; gene_version \"5\"; transcript_id \"ENST00000473358\"; transcript_version \"1\"; gene_name \"MIR1302-2HG\"; transcript_name \"MIR1302-2HG-202\";#first transcript\nchr1\tHAVANA\texon\t29554\t30039\t.\t+\t.\tgene_id \"ENSG00000243485\"; transcript_id \"ENST00000473358\"; exon_number 1;\r\n";

    fn parse_one(line: &str) -> Result<GtfRecord, GtfError> {
        GtfParser::from_lines([line]).next().unwrap()
    }

    #[test]
    fn test_from_reader() {
        let records = GtfParser::from_reader(GTF_RECORD)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records.iter().map(|r| r.feature()).collect::<Vec<_>>(),
            vec!["gene", "transcript", "exon"]
        );

        let gene = &records[0];
        assert!(gene.transcript_id().unwrap_err().is_not_found());
        assert_eq!(gene.attribute("level"), Some("2"));
        assert_eq!(gene.comments(), "");

        let txp = &records[1];
        assert_eq!(txp.seqname(), "chr1");
        assert_eq!(txp.source(), "HAVANA");
        assert_eq!(txp.start(), "29554");
        assert_eq!(txp.end(), "31097");
        assert_eq!(txp.score(), ".");
        assert_eq!(txp.strand(), "+");
        assert_eq!(txp.frame(), ".");
        assert_eq!(txp.gene_id().unwrap(), "ENSG00000243485");
        assert_eq!(txp.transcript_id().unwrap(), "ENST00000473358");
        assert_eq!(txp.attribute("transcript_version"), Some("1"));
        assert_eq!(txp.attributes().len(), 6);
        assert_eq!(txp.comments(), "first transcript");

        // the CRLF terminator is not part of the attribute column
        let exon = &records[2];
        assert_eq!(exon.attribute("exon_number"), Some("1"));
        assert_eq!(exon.attributes().len(), 3);
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let input = "\n#comment\nchr1\tA\ttranscript\t1\t100\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";\n";
        let mut parser = GtfParser::from_reader(input.as_bytes());
        let record = parser.next().unwrap().unwrap();
        assert_eq!(record.gene_id().unwrap(), "G1");
        assert!(parser.next().is_none());
        assert_eq!(parser.line_no(), 3);
    }

    #[test]
    fn test_whitespace_before_comment_is_content() {
        let err = parse_one("  #foo").unwrap_err();
        assert!(matches!(err, GtfError::MalformedLine { line: 1, found: 1 }));
    }

    #[test]
    fn test_positional_fields_are_not_trimmed() {
        let rec = parse_one(" chr1 \t src\tgene\t 1\t2 \t.\t-\t0\tgene_id \"G\";").unwrap();
        assert_eq!(
            rec.fields(),
            &[" chr1 ", " src", "gene", " 1", "2 ", ".", "-", "0"].map(String::from)
        );
    }

    #[test]
    fn test_attribute_parsing() {
        let rec = parse_one("c\ts\tf\t1\t2\t.\t+\t.\t  k1 \"v1\"; k2 \"v2\";").unwrap();
        let expected: HashMap<String, String> = [("k1", "v1"), ("k2", "v2")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(rec.attributes(), &expected);

        // values keep inner spaces, later duplicates win
        let rec = parse_one("c\ts\tf\t1\t2\t.\t+\t.\tnote \"a b c\"; tag x; tag y;").unwrap();
        assert_eq!(rec.attribute("note"), Some("a b c"));
        assert_eq!(rec.attribute("tag"), Some("y"));

        // without a trailing ';' the last pair is dropped
        let rec = parse_one("c\ts\tf\t1\t2\t.\t+\t.\tgene_id \"G\"; transcript_id \"T\"").unwrap();
        assert_eq!(rec.gene_id().unwrap(), "G");
        assert!(rec.transcript_id().is_err());

        let rec = parse_one("c\ts\tf\t1\t2\t.\t+\t.\t").unwrap();
        assert!(rec.attributes().is_empty());
    }

    #[test]
    fn test_malformed_attribute() {
        let err = parse_one("c\ts\tf\t1\t2\t.\t+\t.\tgene_id \"G\"; geneid;").unwrap_err();
        match err {
            GtfError::MalformedAttribute { line, piece } => {
                assert_eq!(line, 1);
                assert_eq!(piece, "geneid");
            }
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn test_columns_after_attributes_are_ignored() {
        let rec = parse_one("c\ts\tf\t1\t2\t.\t+\t.\tgene_id \"G\";\textra col;").unwrap();
        let expected: HashMap<String, String> =
            [("gene_id".to_string(), "G".to_string())].into_iter().collect();
        assert_eq!(rec.attributes(), &expected);
        assert_eq!(rec.comments(), "");
    }

    #[test]
    fn test_unterminated_pair_before_comment_is_dropped() {
        let rec = parse_one("c\ts\tf\t1\t2\t.\t+\t.\tgene_id \"G\"; x y#c").unwrap();
        assert_eq!(rec.gene_id().unwrap(), "G");
        assert!(rec.lookup("x").is_none());
        assert_eq!(rec.attributes().len(), 1);
        assert_eq!(rec.comments(), "c");

        // whitespace after the final ';' is the discarded piece
        let rec = parse_one("c\ts\tf\t1\t2\t.\t+\t.\tgene_id \"G\";  #c").unwrap();
        assert_eq!(rec.attributes().len(), 1);
        assert_eq!(rec.comments(), "c");
    }

    #[test]
    fn test_field_names() {
        let rec = parse_one("c\ts\tf\t1\t2\t.\t+\t.\tgene_id \"G\";").unwrap();
        for (name, value) in GTFFIELDS.iter().zip(rec.fields().iter()) {
            assert_eq!(rec.get(name).unwrap(), FieldValue::Column(value.as_str()));
        }
    }

    #[test]
    fn test_missing_attribute_column() {
        let err = parse_one("chr1\tA\ttranscript\t1\t100\t.\t+\t.").unwrap_err();
        assert!(matches!(err, GtfError::MalformedLine { line: 1, found: 8 }));
    }

    #[test]
    fn test_errors_end_iteration() {
        let lines = [
            "c\ts\tf\t1\t2\t.\t+\t.\tgene_id \"G1\";",
            "broken",
            "c\ts\tf\t1\t2\t.\t+\t.\tgene_id \"G2\";",
        ];
        let mut parser = GtfParser::from_lines(lines);
        assert!(parser.next().unwrap().is_ok());
        assert!(matches!(
            parser.next().unwrap(),
            Err(GtfError::MalformedLine { line: 2, .. })
        ));
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_read_errors_are_not_end_of_input() {
        let lines: Vec<io::Result<&str>> = vec![
            Ok("c\ts\tf\t1\t2\t.\t+\t.\tgene_id \"G1\";"),
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire")),
        ];
        let mut parser = GtfParser::new(lines.into_iter());
        assert!(parser.next().unwrap().is_ok());
        assert!(matches!(
            parser.next().unwrap(),
            Err(GtfError::Io { line: 2, .. })
        ));
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_byte_decoding() {
        let line: &[u8] = b"c\ts\tf\t1\t2\t.\t+\t.\tgene_name \"G\xe8ne\";";
        let err = GtfParser::from_lines([line]).next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            GtfError::Decode {
                line: 1,
                encoding: TextEncoding::Utf8
            }
        ));

        let rec = GtfParser::from_lines([line])
            .with_encoding(TextEncoding::Latin1)
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(rec.attribute("gene_name"), Some("Gène"));
    }

    #[test]
    fn test_lookup() {
        let rec = parse_one(
            "chr1\tA\ttranscript\t1\t100\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\"; feature \"shadowed\";#note",
        )
        .unwrap();

        assert_eq!(rec.get("feature").unwrap(), FieldValue::Column("transcript"));
        assert!(rec.get("feature").unwrap().is_fixed());
        assert_eq!(rec.get("comments").unwrap().as_str(), Some("note"));
        assert_eq!(
            rec.get("attributes").unwrap(),
            FieldValue::Attributes(rec.attributes())
        );
        assert_eq!(rec.get("attributes").unwrap().as_str(), None);

        let gid = rec.get("gene_id").unwrap();
        assert!(!gid.is_fixed());
        assert_eq!(gid.as_str(), Some(rec.gene_id().unwrap()));
        assert_eq!(
            rec.get("transcript_id").unwrap().as_str(),
            Some(rec.transcript_id().unwrap())
        );

        assert!(rec.lookup("exon_number").is_none());
        let err = rec.get("exon_number").unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, GtfError::FieldNotFound { name } if name == "exon_number"));
    }

    #[test]
    fn test_display() {
        let rec = parse_one("chr1\tA\ttranscript\t1\t100\t.\t+\t.\ttranscript_id \"T1\"; gene_id \"G1\";#x")
            .unwrap();
        assert_eq!(
            rec.to_string(),
            "chr1\tA\ttranscript\t1\t100\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";#x"
        );
    }
}
