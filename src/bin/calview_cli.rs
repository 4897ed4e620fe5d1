//! CLI tool for calview - lays out a calendar grid and outputs JSON
//!
//! Usage:
//!   calview_cli week                                 # Week grid, 800x600 viewport
//!   calview_cli day --width 400 --height 900         # Day grid, custom viewport
//!   calview_cli week --config grid.json -o out.json  # Custom appearance, write to file

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::Serialize;

use calview::{CalendarMode, CalendarView, GridConfig, Rect, RenderItem, Size};

const USAGE: &str = "Usage: calview_cli <week|day> [--width W] [--height H] [--config file.json] [-o output.json]";

struct Options {
    mode: CalendarMode,
    width: f32,
    height: f32,
    config_path: Option<String>,
    output_path: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    mode: CalendarMode,
    content_size: Size,
    column_width: f32,
    items: Vec<RenderItem>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut iter = args.iter().skip(1);
    let mode = iter
        .next()
        .ok_or_else(|| USAGE.to_string())?
        .parse::<CalendarMode>()
        .map_err(|e| e.to_string())?;

    let mut options = Options {
        mode,
        width: 800.0,
        height: 600.0,
        config_path: None,
        output_path: None,
    };

    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("Missing value for {flag}\n{USAGE}"))?;
        match flag.as_str() {
            "--width" => options.width = parse_dimension(flag, value)?,
            "--height" => options.height = parse_dimension(flag, value)?,
            "--config" => options.config_path = Some(value.clone()),
            "-o" => options.output_path = Some(value.clone()),
            _ => return Err(format!("Unknown option {flag}\n{USAGE}")),
        }
    }

    Ok(options)
}

fn parse_dimension(flag: &str, value: &str) -> Result<f32, String> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(format!("Invalid value for {flag}: {value}")),
    }
}

fn load_config(path: Option<&str>) -> calview::Result<GridConfig> {
    match path {
        Some(path) => GridConfig::from_json(&fs::read_to_string(path)?),
        None => Ok(GridConfig::default()),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let config = match load_config(options.config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    let view = match CalendarView::new(options.mode, &config, options.width, options.height) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error building grid: {e}");
            std::process::exit(1);
        }
    };

    let content_size = view.content_size();
    let output = Output {
        mode: view.mode(),
        content_size,
        column_width: view.layout().column_width(),
        items: view.render(Rect::from_size(content_size)),
    };

    let json = match serde_json::to_string_pretty(&output) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {e}");
            std::process::exit(1);
        }
    };

    match options.output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {path}: {e}");
                std::process::exit(1);
            }
            eprintln!("Written: {path} ({} items)", output.items.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout
                .write_all(json.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
            {
                eprintln!("Error writing output: {e}");
                std::process::exit(1);
            }
        }
    }
}
