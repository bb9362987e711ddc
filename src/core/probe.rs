use serde::{Deserialize, Serialize};

/// A named probe sequence, as read from a probe table or written as a FASTA record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeRecord {
    /// Probe name, written as the FASTA definition line
    pub name: String,

    /// Probe sequence, written verbatim on a single line
    pub sequence: String,
}

impl ProbeRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

impl std::fmt::Display for ProbeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ">{}\n{}", self.name, self.sequence)
    }
}
