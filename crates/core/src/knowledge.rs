//! The ordered question/answer table behind the bot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error that occurred while building a [`KnowledgeTable`].
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// The table file could not be read.
    #[error("failed to read knowledge table from {}", .path.display())]
    Io {
        /// Path of the table file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The table is not a JSON array of `{trigger, reply}` objects.
    #[error("malformed knowledge table")]
    Parse(#[from] serde_json::Error),
    /// A trigger is empty, which would match every input.
    #[error("entry {index} has an empty trigger")]
    EmptyTrigger {
        /// Position of the offending entry.
        index: usize,
    },
}

/// One (trigger phrase, reply) pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    trigger: String,
    reply: String,
}

impl Entry {
    /// Returns the lowercase trigger phrase.
    #[inline]
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Returns the reply given when the trigger matches.
    #[inline]
    pub fn reply(&self) -> &str {
        &self.reply
    }
}

/// An ordered sequence of (trigger phrase, reply) pairs.
///
/// Lookups scan entries in order and the first trigger contained in the
/// input wins, so the order of entries is part of the table's behavior.
/// Near-duplicate entries are kept on purpose: dropping one could change
/// which reply wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeTable {
    entries: Vec<Entry>,
}

impl KnowledgeTable {
    /// Creates an empty table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table the product ships with.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|(trigger, reply)| Entry {
                trigger: trigger.to_lowercase(),
                reply: (*reply).to_owned(),
            })
            .collect();
        Self { entries }
    }

    /// Builds a table from pairs, keeping their order.
    pub fn from_pairs<I, T, R>(pairs: I) -> Result<Self, KnowledgeError>
    where
        I: IntoIterator<Item = (T, R)>,
        T: Into<String>,
        R: Into<String>,
    {
        let mut table = Self::new();
        for (trigger, reply) in pairs {
            table.push(trigger, reply)?;
        }
        Ok(table)
    }

    /// Parses a table from a JSON array of `{"trigger", "reply"}` objects.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Self::from_pairs(entries.into_iter().map(|e| (e.trigger, e.reply)))
    }

    /// Reads and parses a table file. See [`KnowledgeTable::from_json`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| {
            KnowledgeError::Io {
                path: path.to_owned(),
                source,
            }
        })?;
        let table = Self::from_json(&json)?;
        debug!("loaded {} entries from {}", table.len(), path.display());
        Ok(table)
    }

    /// Appends an entry. The trigger is lowercased.
    pub fn push<T: Into<String>, R: Into<String>>(
        &mut self,
        trigger: T,
        reply: R,
    ) -> Result<(), KnowledgeError> {
        let trigger = trigger.into();
        if trigger.trim().is_empty() {
            return Err(KnowledgeError::EmptyTrigger {
                index: self.entries.len(),
            });
        }
        self.entries.push(Entry {
            trigger: trigger.to_lowercase(),
            reply: reply.into(),
        });
        Ok(())
    }

    /// Returns the reply of the first entry whose trigger occurs in
    /// `question`. `question` must already be lowercase.
    pub fn lookup(&self, question: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| question.contains(e.trigger.as_str()))
            .map(|e| e.reply.as_str())
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in scan order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

#[rustfmt::skip]
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    (
        "what is ai in medical imaging",
        "AI in medical imaging refers to the use of artificial intelligence algorithms to analyze medical images for diagnosis and treatment.",
    ),
    (
        "how accurate is the detection",
        "Our system achieves over 95% detection accuracy using advanced deep learning models.",
    ),
    (
        "can you help me upload images",
        "Yes, you can upload medical images using the upload section on the main page.",
    ),
    (
        "what types of images are supported",
        "We support various medical image formats including X-rays, MRIs, CT scans, and DICOM files.",
    ),
    (
        "how to contact support",
        "You can contact support via the contact form available in the footer section of the website.",
    ),
    (
        "What is the primary purpose of this AI-based system?",
        "The system is designed to analyze medical images like X-rays, MRIs, and CT scans to detect early signs of diseases such as cancer, heart conditions, or neurological disorders with a high degree of accuracy. It provides real-time diagnostic suggestions to assist healthcare professionals in making timely and accurate decisions.",
    ),
    (
        "What types of diseases can the system detect?",
        "The system can identify signs of diseases such as cancer, heart conditions, and neurological disorders.",
    ),
    (
        "What functionalities does the system offer?",
        "The system analyzes medical images to detect diseases, provides real-time diagnosis suggestions, supports various image formats, integrates with existing medical software, and incorporates diagnostic accuracy checks to improve reliability.",
    ),
    (
        "How does the system handle various image formats?",
        "It supports multiple medical image formats, including X-rays, MRIs, and CT scans, ensuring compatibility with a wide range of medical imaging equipment.",
    ),
    (
        "How are diagnostic accuracy checks performed?",
        "Diagnostic accuracy checks are implemented using advanced algorithms to validate the reliability of the AI's analysis, ensuring accurate and consistent diagnoses.",
    ),
    (
        "What is the systems expected response time for diagnosis suggestions?",
        "The system is designed to provide diagnosis suggestions within less than 5 seconds.",
    ),
    (
        "Can the system operate in offline mode?",
        "Yes, the system can run in offline mode under certain conditions to ensure functionality even in areas with limited internet access.",
    ),
    (
        "Is the system compatible with low-specification devices?",
        "Yes, the system is optimized to run on low-spec devices like mobile phones and laptops to ensure accessibility.",
    ),
    (
        "How accurate is the system in detecting medical conditions?",
        "The system is designed to achieve diagnostic accuracy of 95% or higher.",
    ),
    (
        "How is real-time diagnosis achieved?",
        "The system utilizes high-speed AI algorithms and powerful computing to analyze medical images instantaneously, providing real-time diagnostic suggestions.",
    ),
    (
        "Does the system integrate with existing medical software?",
        "Yes, it is built to integrate seamlessly with current medical software platforms, allowing for smooth workflow integration.",
    ),
    (
        "What precautions ensure data security and privacy?",
        "The system follows strict data security protocols, ensuring patient information is encrypted and handled with confidentiality.",
    ),
    (
        "Can this AI-based system be used in rural areas with limited resources?",
        "Absolutely! The offline mode and compatibility with low-spec devices make it ideal for deployment in resource-constrained environments.",
    ),
];

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_builtin_order() {
        let table = KnowledgeTable::builtin();
        assert_eq!(table.len(), 18);
        assert_eq!(
            table.iter().next().unwrap().trigger(),
            "what is ai in medical imaging"
        );
        assert!(
            table
                .iter()
                .all(|e| e.trigger() == e.trigger().to_lowercase())
        );
    }

    #[test]
    fn test_first_match_wins() {
        let table = KnowledgeTable::from_pairs([
            ("accurate", "short"),
            ("how accurate is the detection", "long"),
        ])
        .unwrap();
        assert_eq!(
            table.lookup("how accurate is the detection"),
            Some("short")
        );
        assert_eq!(table.lookup("banana"), None);
    }

    #[test]
    fn test_mixed_case_trigger() {
        let table = KnowledgeTable::builtin();
        let reply = table
            .lookup("can the system operate in offline mode? just curious")
            .unwrap();
        assert!(reply.starts_with("Yes, the system can run in offline mode"));
    }

    #[test]
    fn test_empty_trigger() {
        let err = KnowledgeTable::from_pairs([("ok", "fine"), ("   ", "bad")])
            .unwrap_err();
        assert!(matches!(err, KnowledgeError::EmptyTrigger { index: 1 }));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"trigger": "Opening Hours", "reply": "We never close."}},
                {{"trigger": "hours", "reply": "unreachable"}}
            ]"#
        )
        .unwrap();

        let table = KnowledgeTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("opening hours?"), Some("We never close."));
    }

    #[test]
    fn test_load_errors() {
        let err = KnowledgeTable::from_json(r#"{"trigger": "x"}"#).unwrap_err();
        assert!(matches!(err, KnowledgeError::Parse(_)));

        let err =
            KnowledgeTable::load("/definitely/not/a/table.json").unwrap_err();
        assert!(matches!(err, KnowledgeError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/a/table.json"));
    }
}
