//! Record types for the site's authored content. Everything is `'static` and read-only.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PainPoint {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseCase {
    pub title: &'static str,
    pub description: &'static str,
}

/// An audience segment in "who it's for". The description carries inline emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tier {
    pub label: &'static str,
    pub description: &'static [Inline],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostLine {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostColumn {
    pub title: &'static str,
    /// Whether this is the option being recommended.
    pub favourable: bool,
    pub lines: &'static [CostLine],
    pub total: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub label: &'static str,
    pub headline: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub result: &'static str,
    pub quote: &'static str,
    pub attribution: &'static str,
}

/// A headline figure animated by a counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

/// Inline run of article text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static str),
    Link {
        text: &'static str,
        href: &'static str,
    },
    Break,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static [Inline]),
    List(&'static [&'static [Inline]]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArticleSection {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}
