use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use imgtable_core::{
    ColumnPlacement, GrayView, Rect, TableSettings, TextBox, build_table, find_column_layout,
};

const COLUMNS: usize = 8;
const ROWS: usize = 40;

fn synthetic_words() -> Vec<TextBox> {
    let mut words = Vec::with_capacity(ROWS * COLUMNS);
    for row in 0..ROWS {
        for col in 0..COLUMNS {
            let x = (col * 90 + 10) as i32;
            let y = (row * 22 + 10) as i32;
            words.push(TextBox::new(
                format!("r{row}c{col}"),
                Rect::new(x, y, 60, 12),
            ));
        }
    }
    words
}

fn synthetic_placement() -> ColumnPlacement {
    let boundaries = (1..COLUMNS).map(|col| (col * 90 - 5) as i32).collect();
    ColumnPlacement::new(boundaries).expect("ascending boundaries")
}

fn synthetic_image(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = vec![255u8; width * height];
    for col in 0..COLUMNS {
        let x0 = col * 90 + 10;
        for y in 5..height - 5 {
            for x in x0..x0 + 60 {
                pixels[y * width + x] = 0;
            }
        }
    }
    pixels
}

fn bench_build_table(c: &mut Criterion) {
    let words = synthetic_words();
    let placement = synthetic_placement();
    let settings = TableSettings::default();

    c.bench_function("build_table_320_words", |b| {
        b.iter(|| build_table(black_box(words.clone()), &placement, &settings))
    });
}

fn bench_column_layout(c: &mut Criterion) {
    let (width, height) = (COLUMNS * 90 + 10, 200);
    let pixels = synthetic_image(width, height);
    let img = GrayView::new(width, height, &pixels).expect("buffer matches dimensions");

    c.bench_function("find_column_layout_730px", |b| {
        b.iter(|| find_column_layout(black_box(&img)))
    });
}

criterion_group!(benches, bench_build_table, bench_column_layout);
criterion_main!(benches);
