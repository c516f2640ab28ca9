//! Builds a small page and writes it to the path given on the command line
//! (default: `ole_roemer.html`).

use htmlsmith::{Document, elements};
use std::fs::File;
use std::io::BufWriter;

fn main() -> std::io::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ole_roemer.html".to_string());

    build_page().write_to(BufWriter::new(File::create(&path)?))?;
    println!("wrote {path}");
    Ok(())
}

/// The page checked in as `tests/golden/ole_roemer.html`.
pub fn build_page() -> Document {
    let line_break = elements::line_break();
    let mut doc = Document::new();

    let head = doc.append_child(elements::head());
    head.append_child(elements::title("Title"));
    head.append_child(elements::stylesheet_link(
        "stylesheet",
        "http://www.w3schools.com/lib/w3.css",
    ));

    let body = doc.append_child(elements::body());
    body.append_child(elements::heading("Heading", 1))
        .append_id("lige_her");

    let paragraph = body.append_child(elements::paragraph_with_text("Hej med dig, "));
    paragraph.append_child(elements::link(
        "https://en.wikipedia.org/wiki/Ole_R%C3%B8mer",
        "Ole Roemer",
    ));
    paragraph.append_text(", min gode ven!");
    paragraph.append_child(line_break.clone());
    paragraph.append_text("Har du set noget til Tycho?");

    body.append_child(line_break.clone());
    body.append_child(elements::link("http://www.lmwindpower.com", "lm windpower"));
    body.append_child(line_break.clone());
    body.append_child(elements::image("plot.png", "hej", 256, 256));
    body.append_child(line_break.clone());
    body.append_child(elements::link("#lige_her", ""))
        .append_child(elements::image("plot.png", "hej", 64, 64));
    body.append_child(line_break);

    let list = body.append_child(elements::unordered_list());
    for item in ["item 1", "item 2", "item 3"] {
        list.append_child(elements::list_item_with_text(item));
    }

    let table = body.append_child(elements::table_with_caption("Hallo du der!!!"));
    let header = table.append_child(elements::table_row());
    for cell in ["A", "B", "C"] {
        header.append_child(elements::table_header_cell_with_text(cell));
    }
    for row in [["a", "b", "c"], ["1", "2", "3"]] {
        let tr = table.append_child(elements::table_row());
        for cell in row {
            tr.append_child(elements::table_cell_with_text(cell));
        }
    }

    doc
}
