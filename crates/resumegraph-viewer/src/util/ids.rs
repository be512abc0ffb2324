use resumegraph_core::{Kind, Node};

pub fn kind_prefix(kind: &Kind) -> &'static str {
    match kind {
        Kind::Experience => "🏢 ",
        Kind::Project => "📁 ",
        Kind::Tool => "🧰 ",
        Kind::Outcome => "📊 ",
        Kind::Leadership => "🎯 ",
        Kind::Tag => "🏷️ ",
        Kind::Unrecognized(_) => "",
    }
}

// picker entry
pub fn display_label(node: &Node) -> String {
    format!("{}{}", kind_prefix(&node.kind), node.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_follow_kind() {
        let n = Node::new("p", "Vision", "project");
        assert_eq!(display_label(&n), "📁 Vision");
        let odd = Node::new("s", "Rust", "skill");
        assert_eq!(display_label(&odd), "Rust");
    }
}
