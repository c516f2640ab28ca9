use divan::{Bencher, black_box};
use htmlsmith::{Document, elements};

fn main() {
    divan::main();
}

/// A body with `rows` table rows of five cells and a paragraph per row.
fn build_document(rows: usize) -> Document {
    let mut doc = Document::new();
    doc.append_child(elements::head())
        .append_child(elements::title("Benchmark"));
    let body = doc.append_child(elements::body());

    let table = body.append_child(elements::table_with_caption("Data"));
    for row in 0..rows {
        let tr = table.append_child(elements::table_row());
        for col in 0..5 {
            tr.append_child(elements::table_cell_with_text(format!("{row}:{col}")));
        }
    }

    for row in 0..rows {
        let p = body.append_child(elements::paragraph_with_text("Row "));
        p.append_child(elements::link(format_args!("#row-{row}"), format!("{row}")));
        p.append_child(elements::line_break());
        p.append_child(elements::image("dot.png", "dot", 8, 8));
    }

    doc
}

#[divan::bench(args = [10, 100, 1000])]
fn build(rows: usize) -> Document {
    build_document(black_box(rows))
}

#[divan::bench(args = [10, 100, 1000])]
fn render(bencher: Bencher, rows: usize) {
    let doc = build_document(rows);
    bencher.bench_local(|| {
        let html = black_box(&doc).render();
        black_box(html);
    });
}
