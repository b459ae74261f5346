//! Render data benchmarks

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mochi_render_data::console::Console;
use mochi_render_data::core::{OutputBuffer, Point, Selection, Session, TextAttribute};
use mochi_render_data::render::{RenderData, RenderDataProvider};

fn filled_provider() -> RenderDataProvider {
    let mut session = Session::new(OutputBuffer::new(120, 1000, 40, TextAttribute::default()));
    {
        let buffer = session.active_output_buffer_mut();
        for i in 0..1000 {
            buffer.write_str(&format!("Line {}: Some text content here 漢字\n", i));
        }
        buffer.set_viewport_origin(0, 960);
    }
    session.start_selection(Selection::stream(970, 5));
    session.extend_selection(Point::new(990, 40));
    RenderDataProvider::new(Arc::new(Console::new(session)))
}

fn bench_cursor_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_data");
    let provider = filled_provider();

    group.bench_function("cursor_queries", |b| {
        b.iter(|| {
            let frame = provider.lock_console();
            black_box((
                frame.cursor_position(),
                frame.is_cursor_visible(),
                frame.cursor_height(),
                frame.cursor_style(),
                frame.cursor_color(),
                frame.is_cursor_double_width(),
            ))
        })
    });

    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_data");
    let provider = filled_provider();

    // One frame: every visible cell resolved to its colors
    group.throughput(Throughput::Elements(120 * 40));

    group.bench_function("full_frame", |b| {
        b.iter(|| {
            let frame = provider.lock_console();
            let viewport = *frame.viewport();
            let buffer = frame.text_buffer();
            let mut checksum = 0u32;
            for row in viewport.top()..=viewport.bottom() {
                if let Some(line) = buffer.row(row) {
                    for cell in &line.cells {
                        let fg = frame.foreground_color(&cell.attr);
                        let bg = frame.background_color(&cell.attr);
                        checksum = checksum.wrapping_add(fg.r as u32 + bg.b as u32);
                    }
                }
            }
            black_box((checksum, frame.selection_rects(), frame.is_grid_line_drawing_allowed()))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_cursor_queries, bench_full_frame);

criterion_main!(benches);
