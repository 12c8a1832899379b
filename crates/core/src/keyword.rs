use medscan_chat_model::{Reply, Responder};

use crate::knowledge::KnowledgeTable;
use crate::navigation::NavigationRules;

/// The reply used when nothing in the table matches.
pub const FALLBACK_REPLY: &str = "Sorry, I don't have an answer for that. \
    You can try asking about medical imaging or site navigation.";

/// Answers from a [`KnowledgeTable`], with [`NavigationRules`] taking
/// precedence over any table match.
#[derive(Clone, Debug)]
pub struct KeywordResponder {
    table: KnowledgeTable,
    navigation: NavigationRules,
    fallback: String,
}

impl KeywordResponder {
    /// Creates a responder over the given table and rules.
    #[inline]
    pub fn new(table: KnowledgeTable, navigation: NavigationRules) -> Self {
        Self {
            table,
            navigation,
            fallback: FALLBACK_REPLY.to_owned(),
        }
    }

    /// Replaces the fallback reply.
    #[inline]
    pub fn with_fallback<S: Into<String>>(mut self, fallback: S) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Returns the knowledge table.
    #[inline]
    pub fn table(&self) -> &KnowledgeTable {
        &self.table
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(KnowledgeTable::builtin(), NavigationRules::default())
    }
}

impl Responder for KeywordResponder {
    fn respond(&self, input: &str) -> Reply {
        let question = input.to_lowercase();
        let answer = self.table.lookup(&question);
        trace!(matched = answer.is_some(), "table lookup");

        if let Some(rule) = self.navigation.detect(&question) {
            return Reply::navigate(rule.confirmation(), rule.target());
        }
        Reply::plain(answer.unwrap_or(&self.fallback))
    }
}
