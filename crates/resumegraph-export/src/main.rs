mod config;
mod output;

use anyhow::{Context, Result};
use config::{parse_args, Output};
use resumegraph_core::resume::resume_dataset;
use resumegraph_core::{build_view, describe, Graph, LayoutCache};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_writer(std::io::stderr).try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let config = parse_args()?;
    let today = config
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let dataset = resume_dataset();
    let (graph, report) = Graph::from_dataset(&dataset);

    let value = match &config.output {
        Output::Scene => {
            tracing::info!(
                layers = ?config.filter.layers.kinds(),
                tool_focus = ?config.filter.tool_focus,
                label_mode = config.filter.label_mode.as_str(),
                %today,
                "building scene"
            );
            let mut cache = LayoutCache::default();
            let view = build_view(&graph, &config.filter, today, &mut cache);
            json!({
                "integrity": report,
                "filter": config.filter,
                "stops": view.stops,
                "scene": view.scene,
            })
        }
        Output::Describe(id) => match describe(&graph, id) {
            Some(info) => serde_json::to_value(&info).context("failed to serialize description")?,
            None => {
                tracing::warn!(id = %id, "no such node");
                json!({})
            }
        },
    };

    output::write_json(&value, config.out_path.as_deref())
}
