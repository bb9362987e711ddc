use std::io::Write;

use indexmap::{IndexMap, IndexSet};

/// A one-to-many lookup table that remembers insertion order.
///
/// Keys are emitted in the order they were first seen and each key's values
/// in the order they were first added to it. Adding a value a key already
/// holds is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: IndexMap<String, IndexSet<String>>,
}

impl MappingTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `value` with `key`. Returns `true` if the pair was new.
    pub fn insert(&mut self, key: &str, value: &str) -> bool {
        if let Some(values) = self.entries.get_mut(key) {
            if values.contains(value) {
                return false;
            }
            values.insert(value.to_string());
            true
        } else {
            self.entries
                .insert(key.to_string(), IndexSet::from([value.to_string()]));
            true
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&IndexSet<String>> {
        self.entries.get(key)
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Write one `key<TAB>v1;v2;...` line per key, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `writer`.
    pub fn write_tsv<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (key, values) in self.iter() {
            let joined = values
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(";");
            writeln!(writer, "{key}\t{joined}")?;
        }
        Ok(())
    }
}

/// The two inverse tables built from one pass over bowtie output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeLocusMappings {
    /// Probe name to gene IDs it aligned to
    pub probe_to_locus: MappingTable,

    /// Gene ID to probe names aligned to it
    pub locus_to_probe: MappingTable,

    /// Number of alignment records consumed
    pub records: usize,
}

impl ProbeLocusMappings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `probe` aligned to a model of `locus`
    pub fn add(&mut self, probe: &str, locus: &str) {
        self.records += 1;
        self.locus_to_probe.insert(locus, probe);
        self.probe_to_locus.insert(probe, locus);
    }
}
