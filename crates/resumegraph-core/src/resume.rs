use chrono::NaiveDate;

use crate::dataset::Dataset;
use crate::model::{Edge, Node};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("résumé date literal out of range")
}

pub fn resume_dataset() -> Dataset {
    let mut ds = Dataset::new();

    // Projects carry no end so they persist once revealed.
    ds.add(
        Node::new("proj_smpbed", "SMPBED", "project")
            .subtitle("S&P 500 next-day direction from macro signals")
            .metric("2010–2024 macro coverage • AUC vs always-up baseline")
            .start(date(2023, 10, 1)),
    );
    ds.add(
        Node::new("proj_disease", "Disease Simulation", "project")
            .subtitle("SIR simulation on synthetic graphs + interventions")
            .metric("50k nodes • 4 strategies • 22% peak infection reduction")
            .start(date(2024, 2, 1)),
    );
    ds.add(
        Node::new("proj_vision", "Vision", "project")
            .subtitle("Low-latency Streamlit image classifier")
            .metric("10 classes • 45ms latency • 6× faster GPU vs CPU")
            .start(date(2024, 9, 1)),
    );
    ds.add(
        Node::new("proj_genomesage", "GenomeSage", "project")
            .subtitle("DNA sequence modeling + error-slice dashboards")
            .metric("0.91 AUC • 120k sequences • 35% faster interpretation")
            .start(date(2025, 3, 1)),
    );
    ds.add(
        Node::new("proj_catering", "Catering Leftovers App", "project")
            .subtitle("Campus app to surface leftover food drops + notifications")
            .metric("Product build • Firebase + web/app stack")
            .start(date(2025, 11, 1)),
    );

    ds.add(
        Node::new("exp_barnes", "Barnes Research Group", "experience")
            .subtitle("Undergraduate Researcher")
            .metric(
                "150GB+ climate pipelines • +14% vs baseline • 8 model variants • regime-sliced error analysis",
            )
            .start(date(2025, 11, 1)),
    );
    ds.add(
        Node::new("exp_ventura", "Ventura Securities", "experience")
            .subtitle("Data Analysis Intern")
            .metric("20+ briefs • $10–15M allocation discussions • DCF/comps/sensitivity • 25+ companies")
            .start(date(2025, 5, 1))
            .end(date(2025, 8, 31)),
    );

    ds.add(
        Node::new("lead_oxmun", "Oxford MUN", "leadership")
            .subtitle("Director")
            .metric("Led 2,000+ delegates"),
    );
    ds.add(
        Node::new("lead_pitun", "PIT-UN", "leadership")
            .subtitle("Logistics Lead")
            .metric("Cross-sector convening"),
    );
    ds.add(
        Node::new("lead_fysop", "FYSOP Mentor", "leadership")
            .subtitle("Mentor")
            .metric("Nonprofit team scoping + timelines"),
    );

    let tools = [
        ("tool_python", "Python"),
        ("tool_pytorch", "PyTorch"),
        ("tool_tensorflow", "TensorFlow"),
        ("tool_rust", "Rust"),
        ("tool_r", "R"),
        ("tool_sql", "SQL"),
        ("tool_tableau", "Tableau"),
        ("tool_streamlit", "Streamlit"),
        ("tool_docker", "Docker"),
        ("tool_git", "Git/GitHub"),
        ("tool_aws", "AWS"),
        ("tool_firebase", "Firebase"),
        ("tool_mongo", "MongoDB"),
        ("tool_javascript", "JavaScript"),
        ("tool_rest", "REST APIs"),
        ("tool_html", "HTML5"),
    ];
    for (id, label) in tools {
        ds.add(Node::new(id, label, "tool"));
    }

    let tags = [
        ("tag_bio", "Bio"),
        ("tag_ml", "ML"),
        ("tag_finance", "Finance"),
        ("tag_data", "Data"),
        ("tag_systems", "Systems"),
        ("tag_product", "Product"),
        ("tag_research", "Research"),
        ("tag_viz", "Viz"),
        ("tag_deploy", "Deployment"),
    ];
    for (id, label) in tags {
        ds.add(Node::new(id, label, "tag"));
    }

    let outcomes = [
        ("out_auc091", "0.91 AUC"),
        ("out_35pct", "35% faster interpretation"),
        ("out_45ms", "45 ms latency"),
        ("out_6x", "6× GPU speedup"),
        ("out_22pct", "22% peak reduction"),
        ("out_14pct", "+14% vs baseline"),
        ("out_150gb", "150 GB processed"),
    ];
    for (id, label) in outcomes {
        ds.add(Node::new(id, label, "outcome"));
    }

    let uses = [
        ("proj_genomesage", "tool_pytorch"),
        ("proj_genomesage", "tool_python"),
        ("proj_genomesage", "tool_tableau"),
        ("proj_smpbed", "tool_python"),
        ("proj_smpbed", "tool_tableau"),
        ("proj_smpbed", "tool_sql"),
        ("proj_disease", "tool_rust"),
        ("proj_disease", "tool_git"),
        ("proj_vision", "tool_tensorflow"),
        ("proj_vision", "tool_streamlit"),
        ("proj_vision", "tool_docker"),
        ("proj_vision", "tool_git"),
        ("proj_catering", "tool_firebase"),
        ("proj_catering", "tool_javascript"),
        ("proj_catering", "tool_rest"),
        ("proj_catering", "tool_git"),
        ("proj_catering", "tool_html"),
        ("proj_catering", "tool_mongo"),
    ];
    for (a, b) in uses {
        ds.link(Edge::new(a, b, "uses"));
    }

    let tagged = [
        ("proj_genomesage", "tag_bio"),
        ("proj_genomesage", "tag_ml"),
        ("proj_genomesage", "tag_viz"),
        ("proj_smpbed", "tag_finance"),
        ("proj_smpbed", "tag_data"),
        ("proj_smpbed", "tag_viz"),
        ("proj_disease", "tag_systems"),
        ("proj_disease", "tag_research"),
        ("proj_vision", "tag_product"),
        ("proj_vision", "tag_ml"),
        ("proj_vision", "tag_deploy"),
        ("proj_catering", "tag_product"),
        ("proj_catering", "tag_systems"),
        ("proj_catering", "tag_deploy"),
    ];
    for (a, b) in tagged {
        ds.link(Edge::new(a, b, "tagged"));
    }

    let achieves = [
        ("proj_genomesage", "out_auc091", 2.0),
        ("proj_genomesage", "out_35pct", 1.5),
        ("proj_vision", "out_45ms", 2.0),
        ("proj_vision", "out_6x", 1.8),
        ("proj_disease", "out_22pct", 1.8),
        ("exp_barnes", "out_14pct", 1.6),
        ("exp_barnes", "out_150gb", 1.6),
    ];
    for (a, b, w) in achieves {
        ds.link(Edge::new(a, b, "achieves").weight(w));
    }

    ds.link(Edge::new("exp_barnes", "tool_pytorch", "uses"));
    ds.link(Edge::new("exp_barnes", "tool_python", "uses"));
    ds.link(Edge::new("exp_ventura", "tag_finance", "focuses"));
    ds.link(Edge::new("exp_ventura", "tool_python", "uses"));
    ds.link(Edge::new("exp_ventura", "tool_sql", "uses"));

    ds.link(Edge::new("exp_barnes", "proj_genomesage", "related"));
    ds.link(Edge::new("exp_ventura", "proj_smpbed", "related"));

    ds.link(Edge::new("lead_oxmun", "tag_research", "organizes"));
    ds.link(Edge::new("lead_pitun", "tag_data", "coordinates"));
    ds.link(Edge::new("lead_fysop", "tag_finance", "supports"));

    ds
}
