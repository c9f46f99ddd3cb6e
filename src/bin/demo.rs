//! Demo page: composes the built-in components into a grid showcase and
//! prints the page HTML to stdout.

use gridweave::component::Component;
use gridweave::props::{Align, Gap, ParsePropError, Size};
use gridweave::widgets::{Grid, Item};

/// An item wrapping one `<p>` of content.
fn paragraph(text: &str) -> Item {
    Item::new().with_raw(format!("<p>{text}</p>"))
}

/// A sized item wrapping one `<p>` of content.
fn sized_paragraph(text: &str, size: Size) -> Item {
    paragraph(text).size(size)
}

fn push_heading(page: &mut String, title: &str) {
    page.push_str("<h2>");
    page.push_str(title);
    page.push_str("</h2>\n");
}

fn push_grid(page: &mut String, grid: &Grid) {
    page.push_str(&grid.to_html());
    page.push('\n');
}

fn main() -> Result<(), ParsePropError> {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<body>\n");
    page.push_str("<h1>Grid Demo</h1>\n");

    page.push_str(concat!(
        "<div class=\"info\">",
        "<strong>Please note -</strong><br /><br />",
        "All of the available options shown below can also be configured to ",
        "change responsively (not included in this demo).",
        "</div>\n",
    ));

    push_heading(&mut page, "Flexible columns");
    push_grid(
        &mut page,
        &Grid::new()
            .with_item(sized_paragraph("Shrink", Size::Shrink))
            .with_item(sized_paragraph("Grow", Size::Grow)),
    );

    push_heading(&mut page, "Even columns");
    push_grid(
        &mut page,
        &Grid::new()
            .size(Size::Even)
            .with_item(paragraph("Even"))
            .with_item(paragraph("Even"))
            .with_item(paragraph("Even")),
    );

    push_heading(&mut page, "12 grid size columns");
    let mut twelve_column = Grid::new();
    for span in [2, 4, 3, 3, 6, 6, 8, 4, 12] {
        let size = Size::columns(span)?;
        twelve_column = twelve_column.with_item(sized_paragraph(&span.to_string(), size));
    }
    push_grid(&mut page, &twelve_column);

    push_heading(&mut page, "Nested grids");
    push_grid(
        &mut page,
        &Grid::new()
            .with_item(
                sized_paragraph("4", Size::columns(4)?).with_grid(
                    Grid::new()
                        .with_item(sized_paragraph("6", Size::columns(6)?))
                        .with_item(sized_paragraph("6", Size::columns(6)?)),
                ),
            )
            .with_item(
                sized_paragraph("8", Size::columns(8)?).with_grid(
                    Grid::new()
                        .with_item(sized_paragraph("6", Size::columns(6)?))
                        .with_item(sized_paragraph("4", Size::columns(4)?))
                        .with_item(sized_paragraph("2", Size::columns(2)?)),
                ),
            ),
    );

    push_heading(&mut page, "Gap sizes");
    for gap in [Gap::Xl, Gap::L, Gap::M, Gap::S, Gap::Xs] {
        let label = gap.as_str().to_uppercase();
        push_grid(
            &mut page,
            &Grid::new()
                .col_gap(gap)
                .row_gap(gap)
                .with_item(paragraph(&format!("Column gap {label}")))
                .with_item(paragraph(&format!("Column gap {label}")))
                .with_item(sized_paragraph(&format!("Row gap {label}"), Size::columns(12)?)),
        );
    }

    push_heading(&mut page, "Column alignment");
    for (align, label) in [
        (Align::Center, "Center"),
        (Align::Left, "Left"),
        (Align::Right, "Right"),
    ] {
        push_grid(
            &mut page,
            &Grid::new()
                .align(align)
                .size(Size::Shrink)
                .with_item(paragraph(label))
                .with_item(paragraph(label)),
        );
    }

    page.push_str("</body>\n</html>\n");
    print!("{page}");
    Ok(())
}
