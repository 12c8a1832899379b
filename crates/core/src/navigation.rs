//! Navigation overrides.

use medscan_chat_model::{NavigationTarget, Navigator};

/// A set of phrases that send the visitor somewhere else on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRule {
    target: NavigationTarget,
    triggers: Vec<String>,
    confirmation: String,
}

impl NavigationRule {
    /// Creates a rule. Triggers are lowercased; blank ones are skipped.
    pub fn new<I, T, C>(
        target: NavigationTarget,
        triggers: I,
        confirmation: C,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
        C: Into<String>,
    {
        let triggers = triggers
            .into_iter()
            .filter(|t| !t.as_ref().trim().is_empty())
            .map(|t| t.as_ref().to_lowercase())
            .collect();
        Self {
            target,
            triggers,
            confirmation: confirmation.into(),
        }
    }

    /// Returns where this rule navigates to.
    #[inline]
    pub fn target(&self) -> NavigationTarget {
        self.target
    }

    /// Returns the reply that replaces any table answer.
    #[inline]
    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }

    /// Returns `true` if any trigger occurs in the lowercase `question`.
    pub fn matches(&self, question: &str) -> bool {
        self.triggers.iter().any(|t| question.contains(t.as_str()))
    }
}

/// Navigation rules, checked in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRules {
    rules: Vec<NavigationRule>,
}

impl NavigationRules {
    /// Creates an empty rule set that never navigates.
    #[inline]
    pub fn none() -> Self {
        Self { rules: vec![] }
    }

    /// Appends a rule, checked after the existing ones.
    #[inline]
    pub fn with_rule(mut self, rule: NavigationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the first rule that matches the lowercase `question`.
    ///
    /// This is plain substring matching, so "support" inside an unrelated
    /// sentence still navigates.
    pub fn detect(&self, question: &str) -> Option<&NavigationRule> {
        self.rules.iter().find(|r| r.matches(question))
    }
}

impl Default for NavigationRules {
    fn default() -> Self {
        Self::none()
            .with_rule(NavigationRule::new(
                NavigationTarget::Home,
                ["go to home", "navigate home"],
                "Navigating to Home page.",
            ))
            .with_rule(NavigationRule::new(
                NavigationTarget::Features,
                ["go to features", "show features"],
                "Navigating to Features section.",
            ))
            .with_rule(NavigationRule::new(
                NavigationTarget::Contact,
                ["contact", "support"],
                "Navigating to Contact/Support section.",
            ))
    }
}

/// A navigator that only records the request in the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, target: NavigationTarget) {
        info!(href = target.href(), "navigation requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let rules = NavigationRules::default();
        let rule = rules
            .detect("go to features, or go to home, or contact me")
            .unwrap();
        assert_eq!(rule.target(), NavigationTarget::Home);

        let rule = rules.detect("show features").unwrap();
        assert_eq!(rule.target(), NavigationTarget::Features);
        assert_eq!(rule.confirmation(), "Navigating to Features section.");
    }

    #[test]
    fn test_false_positive() {
        let rules = NavigationRules::default();
        let rule = rules
            .detect("does the model support dicom files?")
            .unwrap();
        assert_eq!(rule.target(), NavigationTarget::Contact);
        assert!(rules.detect("what is ai in medical imaging").is_none());
        assert!(NavigationRules::none().detect("go to home").is_none());
    }
}
