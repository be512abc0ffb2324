use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Kind {
    Project,
    Tool,
    Experience,
    Outcome,
    Leadership,
    Tag,
    Unrecognized(String),
}

pub const KIND_ORDER: [Kind; 6] = [
    Kind::Experience,
    Kind::Project,
    Kind::Tool,
    Kind::Outcome,
    Kind::Leadership,
    Kind::Tag,
];

impl Kind {
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Project => "project",
            Kind::Tool => "tool",
            Kind::Experience => "experience",
            Kind::Outcome => "outcome",
            Kind::Leadership => "leadership",
            Kind::Tag => "tag",
            Kind::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Kind::Unrecognized(_))
    }

    pub fn is_dated(&self) -> bool {
        matches!(self, Kind::Project | Kind::Experience)
    }

    pub fn is_unconditional(&self) -> bool {
        matches!(self, Kind::Leadership | Kind::Tag)
    }

    pub fn is_expansion_target(&self) -> bool {
        matches!(self, Kind::Tool | Kind::Outcome)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        kind.as_str().to_string()
    }
}

impl From<String> for Kind {
    fn from(raw: String) -> Self {
        normalize_kind(&raw)
    }
}

impl From<&str> for Kind {
    fn from(raw: &str) -> Self {
        normalize_kind(raw)
    }
}

pub fn normalize_kind(raw: &str) -> Kind {
    let s = raw.trim().to_lowercase();
    match s.as_str() {
        "project" | "projects" => Kind::Project,
        "tool" | "tools" | "tech" | "technology" | "technologies" => Kind::Tool,
        "outcome" | "outcomes" | "metric" | "metrics" | "result" | "results" => Kind::Outcome,
        "experience" | "experiences" | "work" | "job" => Kind::Experience,
        "leadership" | "leaderships" => Kind::Leadership,
        "tag" | "tags" | "label" | "labels" => Kind::Tag,
        _ => Kind::Unrecognized(s),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub kind: Kind,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub metric: String,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    // display only, never consulted for visibility
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: &str) -> Self {
        Self {
            id: NodeId::new(id),
            label: label.into(),
            kind: normalize_kind(kind),
            subtitle: String::new(),
            metric: String::new(),
            start: None,
            end: None,
            url: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = metric.into();
        self
    }

    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn sort_label(&self) -> String {
        self.label.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub rel: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            source: NodeId::new(source),
            target: NodeId::new(target),
            rel: rel.into(),
            weight: default_weight(),
        }
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn other(&self, id: &NodeId) -> Option<&NodeId> {
        if &self.source == id {
            Some(&self.target)
        } else if &self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub rel: String,
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_map_onto_closed_kinds() {
        assert_eq!(normalize_kind("Projects"), Kind::Project);
        assert_eq!(normalize_kind(" tech "), Kind::Tool);
        assert_eq!(normalize_kind("TECHNOLOGIES"), Kind::Tool);
        assert_eq!(normalize_kind("results"), Kind::Outcome);
        assert_eq!(normalize_kind("metric"), Kind::Outcome);
        assert_eq!(normalize_kind("job"), Kind::Experience);
        assert_eq!(normalize_kind("Labels"), Kind::Tag);
        assert_eq!(normalize_kind("leaderships"), Kind::Leadership);
    }

    #[test]
    fn unknown_kind_passes_through_lowercased() {
        assert_eq!(
            normalize_kind("  Skill "),
            Kind::Unrecognized("skill".to_string())
        );
        assert!(!normalize_kind("skill").is_recognized());
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs = [
            "project", "Projects", "tech", "metrics", "work", "label", "leadership", "Skill",
            "", "  Results  ",
        ];
        for raw in inputs {
            let once = normalize_kind(raw);
            let twice = normalize_kind(once.as_str());
            assert_eq!(once, twice, "input {raw:?}");
        }
    }

    #[test]
    fn kind_serializes_as_plain_string() {
        let json = serde_json::to_string(&Kind::Outcome).expect("serialize kind");
        assert_eq!(json, "\"outcome\"");
        let back: Kind = serde_json::from_str("\"Metrics\"").expect("deserialize kind");
        assert_eq!(back, Kind::Outcome);
    }

    #[test]
    fn edge_other_endpoint() {
        let e = Edge::new("a", "b", "uses");
        assert_eq!(e.other(&NodeId::new("a")), Some(&NodeId::new("b")));
        assert_eq!(e.other(&NodeId::new("b")), Some(&NodeId::new("a")));
        assert_eq!(e.other(&NodeId::new("c")), None);
        assert_eq!(e.weight, 1.0);
    }
}
