use anyhow::Result;
use chrono::NaiveDate;
use resumegraph_core::{FilterState, LabelMode, LayerSet, NodeId, ToolFocus};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Scene,
    Describe(NodeId),
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub filter: FilterState,
    pub today: Option<NaiveDate>,
    pub output: Output,
    pub out_path: Option<PathBuf>,
}

pub fn parse_args() -> Result<ExportConfig> {
    parse_args_from(std::env::args_os().skip(1))
}

fn next_value<I>(args: &mut I, flag: &str, expects: &str) -> Result<String>
where
    I: Iterator<Item = OsString>,
{
    let Some(value) = args.next() else {
        anyhow::bail!("{flag} expects {expects}");
    };
    Ok(value.to_string_lossy().into_owned())
}

fn parse_spacing(flag: &str, value: &str) -> Result<f64> {
    let v: f64 = value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("{flag}: not a number: {value}"))?;
    if !v.is_finite() || v <= 0.0 {
        anyhow::bail!("{flag} must be positive, got {value}");
    }
    Ok(v)
}

fn parse_args_from<I>(args: I) -> Result<ExportConfig>
where
    I: IntoIterator<Item = OsString>,
{
    let mut filter = FilterState::default();
    let mut today = None;
    let mut output = Output::Scene;
    let mut out_path = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let Some(flag) = arg.to_str() else {
            anyhow::bail!("unknown argument: {:?}", arg);
        };
        match flag {
            "--layers" => {
                let value = next_value(&mut args, flag, "a comma-separated kind list")?;
                filter.layers = LayerSet::from_raw(value.split(',').filter(|s| !s.trim().is_empty()));
            }
            "--tool" => {
                let value = next_value(&mut args, flag, "a tool id")?;
                filter.tool_focus = if value == "all" {
                    ToolFocus::All
                } else {
                    ToolFocus::Tool(NodeId::new(value))
                };
            }
            "--labels" => {
                let value = next_value(&mut args, flag, "smart|all|none")?;
                let Some(mode) = LabelMode::parse(&value) else {
                    anyhow::bail!("invalid label mode: {value} (expected smart|all|none)");
                };
                filter.label_mode = mode;
            }
            "--select" => {
                let value = next_value(&mut args, flag, "a node id")?;
                filter.selection = Some(NodeId::new(value));
            }
            "--layer-gap" => {
                let value = next_value(&mut args, flag, "a number")?;
                filter.layer_gap = parse_spacing(flag, &value)?;
            }
            "--y-spread" => {
                let value = next_value(&mut args, flag, "a number")?;
                filter.y_spread = parse_spacing(flag, &value)?;
            }
            "--frame-ms" => {
                let value = next_value(&mut args, flag, "milliseconds")?;
                filter.frame_ms = value
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("--frame-ms: not a whole number: {value}"))?;
            }
            "--today" => {
                let value = next_value(&mut args, flag, "a date (YYYY-MM-DD)")?;
                let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("--today: {e}: {value}"))?;
                today = Some(date);
            }
            "--describe" => {
                let value = next_value(&mut args, flag, "a node id")?;
                output = Output::Describe(NodeId::new(value));
            }
            "--out" => {
                let value = next_value(&mut args, flag, "a path")?;
                out_path = Some(PathBuf::from(value));
            }
            _ => anyhow::bail!("unknown argument: {:?}", arg),
        }
    }

    Ok(ExportConfig {
        filter,
        today,
        output,
        out_path,
    })
}
