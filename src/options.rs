use crate::t2g_utils::{
    TextEncoding, DEFAULT_FEATURE, DEFAULT_GENE_NAME_FIELD, DEFAULT_GENE_VERSION_FIELD,
    DEFAULT_TRANSCRIPT_VERSION_FIELD, GTFFIELDS,
};
use anyhow::bail;
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Configuration of a transcript-to-gene extraction run.
///
/// # Fields
///
/// * `use_version`: if `true`, append `.<version>` to transcript and gene ids, reading the
///   versions from the `transcript_version_field` and `gene_version_field` attributes.
/// * `skip_gene_names`: if `true`, write two columns only and never read `gene_name_field`.
/// * `transcript_version_field`: the attribute holding the transcript version.
/// * `gene_version_field`: the attribute holding the gene version.
/// * `gene_name_field`: the attribute holding the gene name.
/// * `feature`: the feature type of the records that produce output rows.
/// * `encoding`: the encoding of the GTF input.
///
/// # Examples
///
/// ```rust
/// use t2g::options::T2gOptions;
///
/// let opts = T2gOptions::default()
///     .use_version(true)
///     .gene_name_field("gene_symbol");
/// assert_eq!(opts.transcript_version_field, "transcript_version");
/// assert_eq!(opts.gene_name_field, "gene_symbol");
/// ```
pub struct T2gOptions {
    pub use_version: bool,
    pub skip_gene_names: bool,
    pub transcript_version_field: String,
    pub gene_version_field: String,
    pub gene_name_field: String,
    pub feature: String,
    pub encoding: TextEncoding,
}

impl Default for T2gOptions {
    fn default() -> T2gOptions {
        T2gOptions {
            use_version: false,
            skip_gene_names: false,
            transcript_version_field: DEFAULT_TRANSCRIPT_VERSION_FIELD.to_string(),
            gene_version_field: DEFAULT_GENE_VERSION_FIELD.to_string(),
            gene_name_field: DEFAULT_GENE_NAME_FIELD.to_string(),
            feature: DEFAULT_FEATURE.to_string(),
            encoding: TextEncoding::default(),
        }
    }
}

impl T2gOptions {
    pub fn use_version(mut self, use_version: bool) -> Self {
        self.use_version = use_version;
        self
    }

    pub fn skip_gene_names(mut self, skip_gene_names: bool) -> Self {
        self.skip_gene_names = skip_gene_names;
        self
    }

    pub fn transcript_version_field<T: ToString>(mut self, field: T) -> Self {
        self.transcript_version_field = field.to_string();
        self
    }

    pub fn gene_version_field<T: ToString>(mut self, field: T) -> Self {
        self.gene_version_field = field.to_string();
        self
    }

    pub fn gene_name_field<T: ToString>(mut self, field: T) -> Self {
        self.gene_name_field = field.to_string();
        self
    }

    pub fn feature<T: ToString>(mut self, feature: T) -> Self {
        self.feature = feature.to_string();
        self
    }

    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Checks that the options can describe a meaningful run.
    ///
    /// Only the attribute keys that will actually be read are checked: the version
    /// keys when `use_version` is set, and the gene name key unless `skip_gene_names`
    /// is set. Keys must be non-empty and free of whitespace. A key that is also
    /// a GTF column name is accepted with a warning.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.feature.is_empty() {
            bail!("The feature type to select cannot be empty.");
        }

        let mut keys: Vec<(&str, &str)> = Vec::with_capacity(3);
        if self.use_version {
            keys.push(("transcript version", self.transcript_version_field.as_str()));
            keys.push(("gene version", self.gene_version_field.as_str()));
        }
        if !self.skip_gene_names {
            keys.push(("gene name", self.gene_name_field.as_str()));
        }

        for (what, key) in keys {
            if key.is_empty() || key.contains(char::is_whitespace) {
                bail!(
                    "The {} attribute key {:?} is empty or contains whitespace.",
                    what,
                    key
                );
            }
            if GTFFIELDS.contains(&key) {
                warn!(
                    "The {} attribute key {:?} is also the name of a GTF column.",
                    what, key
                );
            }
        }
        Ok(())
    }
}
