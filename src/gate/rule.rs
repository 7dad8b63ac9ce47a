use std::fmt;

/// How a rule's needle is compared against the normalized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Needle appears anywhere in the command.
    Contains,
    /// Command begins with the needle.
    StartsWith,
}

/// A lowercase needle plus the way it is compared.
///
/// Constructed only through [`Matcher::contains`] and [`Matcher::starts_with`],
/// which lowercase the needle so it lines up with normalized commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    kind: MatchKind,
    needle: String,
}

impl Matcher {
    pub fn contains(needle: &str) -> Self {
        Matcher {
            kind: MatchKind::Contains,
            needle: needle.to_lowercase(),
        }
    }

    pub fn starts_with(prefix: &str) -> Self {
        Matcher {
            kind: MatchKind::StartsWith,
            needle: prefix.to_lowercase(),
        }
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Test an already-normalized command.
    pub fn is_match(&self, normalized: &str) -> bool {
        match self.kind {
            MatchKind::Contains => normalized.contains(&self.needle),
            MatchKind::StartsWith => normalized.starts_with(&self.needle),
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MatchKind::Contains => write!(f, "contains {:?}", self.needle),
            MatchKind::StartsWith => write!(f, "starts-with {:?}", self.needle),
        }
    }
}

/// A single gate rule: when `matcher` fires, the command is blocked with `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub matcher: Matcher,
    pub message: String,
}

impl Rule {
    pub fn new(name: impl Into<String>, matcher: Matcher, message: impl Into<String>) -> Self {
        Rule {
            name: name.into(),
            matcher,
            message: message.into(),
        }
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.matcher.is_match(normalized)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.matcher, self.message)
    }
}

/// Ordered list of rules. Order is evaluation order; the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSet { rules }
    }

    /// Append rules after the existing ones.
    pub fn extend(&mut self, rules: impl IntoIterator<Item = Rule>) {
        self.rules.extend(rules);
    }

    /// First rule matching the normalized command.
    pub fn first_match(&self, normalized: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.matches(normalized))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
