use flate2::bufread::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::info;

/// Type alias for a boxed line-oriented reader. It is used to allow reading
/// GTF input from either a compressed or an uncompressed source.
pub type GtfInput = Box<dyn BufRead>;

/// The names of the eight positional GTF columns, in file order.
pub const GTFFIELDS: [&str; 8] = [
    "seqname", "source", "feature", "start", "end", "score", "strand", "frame",
];

/// The pseudo-field holding the full attribute map of a record.
pub const ATTRIBUTES_FIELD: &str = "attributes";
/// The pseudo-field holding the trailing comment of a record.
pub const COMMENTS_FIELD: &str = "comments";

pub(crate) const GENE_ID: &str = "gene_id";
pub(crate) const TRANSCRIPT_ID: &str = "transcript_id";

pub const DEFAULT_TRANSCRIPT_VERSION_FIELD: &str = "transcript_version";
pub const DEFAULT_GENE_VERSION_FIELD: &str = "gene_version";
pub const DEFAULT_GENE_NAME_FIELD: &str = "gene_name";
pub const DEFAULT_FEATURE: &str = "transcript";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// The text encoding used to decode raw byte lines into text.
///
/// # Variants
///
/// * `Utf8` - Strict UTF-8. Invalid sequences are a decoding error. This is the default.
/// * `Latin1` - ISO-8859-1. Every byte maps to the code point of the same value, so
///   decoding never fails.
/// * `Ascii` - 7-bit ASCII. Any byte `>= 0x80` is a decoding error.
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
    Ascii,
}

impl TextEncoding {
    /// Decodes `bytes` under this encoding, returning `None` if the bytes are
    /// not valid in it.
    pub fn decode(&self, bytes: Vec<u8>) -> Option<String> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes).ok(),
            TextEncoding::Latin1 => Some(bytes.into_iter().map(char::from).collect()),
            TextEncoding::Ascii => {
                if bytes.is_ascii() {
                    // ASCII is a subset of UTF-8
                    String::from_utf8(bytes).ok()
                } else {
                    None
                }
            }
        }
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = anyhow::Error;

    /// Converts from a [&str] to a [TextEncoding]. Matching is case-insensitive
    /// and accepts the common aliases of each encoding.
    fn from_str(s: &str) -> anyhow::Result<TextEncoding> {
        let enc = match s.to_lowercase().as_str() {
            "utf-8" | "utf8" => TextEncoding::Utf8,
            "latin1" | "latin-1" | "iso-8859-1" => TextEncoding::Latin1,
            "ascii" | "us-ascii" => TextEncoding::Ascii,
            _ => anyhow::bail!("Cannot parse the text encoding {:?}.", s),
        };
        Ok(enc)
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Latin1 => write!(f, "latin1"),
            TextEncoding::Ascii => write!(f, "ascii"),
        }
    }
}

/// Tests if the stream underlying the [BufRead] `reader` is gzipped or not by examining the
/// first 2 bytes for the magic header.  This function *requires*, but does not check, that
/// none of the stream has yet been consumed. It will fill the buffer to examine the first
/// two bytes, but will not consume them.
///
/// Notes: implementation taken from
/// <https://github.com/zaeleus/noodles/blob/ba1b34ce22e72c2df277b20ce4c5c7b75d75a199/noodles-util/src/variant/reader/builder.rs#L131>
pub fn is_gzipped<T: BufRead>(reader: &mut T) -> std::io::Result<bool> {
    const GZIP_MAGIC_NUMBER: [u8; 2] = [0x1f, 0x8b];

    let src = reader.fill_buf()?;
    Ok(src.get(..2) == Some(&GZIP_MAGIC_NUMBER[..]))
}

/// Creates a [GtfInput] from the provided path, decompressing on the fly if the
/// file is gzipped.
pub fn get_reader_from_path<T: AsRef<Path>>(p: T) -> anyhow::Result<GtfInput> {
    let file = File::open(p.as_ref())?;
    get_reader_from_reader(file)
}

/// Creates a [GtfInput] from the provided reader, decompressing on the fly if the
/// stream is gzipped.
///
/// **Note** : this function *takes ownership* of the underlying reader, which
/// is the reason behind the `'static` lifetime bound.
pub fn get_reader_from_reader(r: impl Read + 'static) -> anyhow::Result<GtfInput> {
    let mut inner_rdr = BufReader::new(r);
    if is_gzipped(&mut inner_rdr)? {
        info!("auto-detected gzipped input - reading via decompression");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(inner_rdr))))
    } else {
        Ok(Box::new(inner_rdr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_decode() {
        let utf8 = "gène".as_bytes().to_vec();
        assert_eq!(TextEncoding::Utf8.decode(utf8.clone()).unwrap(), "gène");
        assert!(TextEncoding::Ascii.decode(utf8).is_none());

        // 0xE8 is 'è' in latin1 but starts an incomplete sequence in UTF-8
        let latin1 = vec![b'g', 0xE8, b'n', b'e'];
        assert!(TextEncoding::Utf8.decode(latin1.clone()).is_none());
        assert_eq!(TextEncoding::Latin1.decode(latin1).unwrap(), "gène");
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("UTF-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!(
            "iso-8859-1".parse::<TextEncoding>().unwrap(),
            TextEncoding::Latin1
        );
        assert_eq!("ascii".parse::<TextEncoding>().unwrap(), TextEncoding::Ascii);
        assert!("utf-16".parse::<TextEncoding>().is_err());
        assert_eq!(TextEncoding::default().to_string(), "utf-8");
    }

    #[test]
    fn test_gzip_detection() {
        let plain = b"chr1\tA\ttranscript\n".to_vec();
        let mut rdr = BufReader::new(plain.as_slice());
        assert!(!is_gzipped(&mut rdr).unwrap());

        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(&plain).unwrap();
        let gz = enc.finish().unwrap();
        let mut rdr = BufReader::new(gz.as_slice());
        assert!(is_gzipped(&mut rdr).unwrap());

        let mut decoded = String::new();
        get_reader_from_reader(std::io::Cursor::new(gz))
            .unwrap()
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded.as_bytes(), plain.as_slice());
    }
}
