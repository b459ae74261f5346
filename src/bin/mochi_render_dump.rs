//! Mochi Render Data Dump
//!
//! Builds a session from a config, writes input text into it and prints
//! what a renderer would observe through the render data facade.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mochi_render_data::app::Config;
use mochi_render_data::console::Console;
use mochi_render_data::core::{CursorColor, CursorShape, Point, Rect, Selection, Viewport};
use mochi_render_data::render::{RenderData, RenderDataProvider};

#[derive(Parser, Debug)]
#[command(name = "mochi-render-dump", about = "Print the render data of a headless session")]
struct Args {
    /// Session config (JSON); defaults to ~/.config/mochi/render.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read input text from this file instead of stdin
    input: Option<PathBuf>,

    /// Select from row,col to row,col (e.g. 2,0,4,10)
    #[arg(short, long, value_parser = parse_selection)]
    select: Option<SelectionArg>,

    /// Make the selection rectangular
    #[arg(short, long)]
    block: bool,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,
}

/// Endpoints given with `--select`
#[derive(Debug, Clone, Copy)]
struct SelectionArg {
    from: Point,
    to: Point,
}

fn parse_selection(s: &str) -> Result<SelectionArg, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid selection '{}': {}", s, e))?;
    match parts.as_slice() {
        [r1, c1, r2, c2] => Ok(SelectionArg {
            from: Point::new(*r1, *c1),
            to: Point::new(*r2, *c2),
        }),
        _ => Err(format!("selection needs four numbers, got '{}'", s)),
    }
}

/// Everything the renderer saw during one locked frame
#[derive(Debug, Serialize)]
struct FrameDump {
    title: String,
    viewport: Viewport,
    cursor_position: Point,
    cursor_visible: bool,
    cursor_height: u32,
    cursor_style: CursorShape,
    cursor_color: CursorColor,
    cursor_double_width: bool,
    grid_lines_allowed: bool,
    color_count: usize,
    selection: Vec<Rect>,
    lines: Vec<String>,
}

fn capture(frame: &impl RenderData) -> FrameDump {
    let viewport = *frame.viewport();
    let buffer = frame.text_buffer();
    let lines = (viewport.top()..=viewport.bottom())
        .filter_map(|row| buffer.row_text(row))
        .collect();

    FrameDump {
        title: frame.console_title(),
        viewport,
        cursor_position: frame.cursor_position(),
        cursor_visible: frame.is_cursor_visible(),
        cursor_height: frame.cursor_height(),
        cursor_style: frame.cursor_style(),
        cursor_color: frame.cursor_color(),
        cursor_double_width: frame.is_cursor_double_width(),
        grid_lines_allowed: frame.is_grid_line_drawing_allowed(),
        color_count: frame.color_table().1,
        selection: frame.selection_rects(),
        lines,
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::load_or_default(),
    };

    let input = match &args.input {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut text = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut text) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            text
        }
    };

    let console = Arc::new(Console::new(config.build_session()));
    {
        let mut session = console.lock();
        session.active_output_buffer_mut().write_str(&input);
        if let Some(SelectionArg { from, to }) = args.select {
            let mut selection = if args.block {
                Selection::block(from.row, from.col)
            } else {
                Selection::stream(from.row, from.col)
            };
            selection.extend_to(to.row, to.col);
            session.start_selection(selection);
        }
    }
    tracing::info!(bytes = input.len(), "input written");

    let provider = RenderDataProvider::new(console);
    let frame = provider.lock_console();
    let dump = capture(&frame);
    frame.unlock_console();

    if args.json {
        match serde_json::to_string_pretty(&dump) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing frame: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_text(&dump);
    }

    ExitCode::SUCCESS
}

fn print_text(dump: &FrameDump) {
    println!("Title: {}", dump.title);
    println!(
        "Viewport: {}x{} at ({}, {})",
        dump.viewport.width(),
        dump.viewport.height(),
        dump.viewport.top(),
        dump.viewport.left()
    );
    println!(
        "Cursor: ({}, {}) {:?} height={} visible={} double_width={}",
        dump.cursor_position.row,
        dump.cursor_position.col,
        dump.cursor_style,
        dump.cursor_height,
        dump.cursor_visible,
        dump.cursor_double_width
    );
    match dump.cursor_color {
        CursorColor::Invert => println!("Cursor color: invert"),
        CursorColor::Rgb(c) => println!("Cursor color: #{:02x}{:02x}{:02x}", c.r, c.g, c.b),
    }
    println!("Grid lines allowed: {}", dump.grid_lines_allowed);
    println!("Colors: {}", dump.color_count);
    for rect in &dump.selection {
        println!("Selected: row {} cols {}..={}", rect.top, rect.left, rect.right);
    }
    println!("---");
    for line in &dump.lines {
        println!("{}", line);
    }
    println!("---");
}
