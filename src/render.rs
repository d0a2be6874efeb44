use {crate::*, glam::IVec2};

const CELL_STEP: i32 = 40_i32;
const GRID_X_START: i32 = 20_i32;
const GRID_Y_START: i32 = 40_i32;

/// Renders a grid back to its delimited text form, one comma-separated row per line. Distance
/// cells print their numeric label.
pub fn delimited(grid: &Grid2D<Cell>) -> String {
    let dimensions: IVec2 = grid.dimensions();
    let mut string: String = String::new();

    for y in 0_i32..dimensions.y {
        for x in 0_i32..dimensions.x {
            if x > 0_i32 {
                string.push(',');
            }

            string.push_str(&grid.get(IVec2::new(x, y)).unwrap().to_string());
        }

        string.push('\n');
    }

    string
}

/// Page header with the cell styling inlined, so the snapshots below it stay compact.
pub fn html_header(page: &mut String) {
    page.push_str(
        "<html>\n\
        \x20 <head>\n\
        \x20   <style>\n\
        rect.blocked { fill: black; stroke-width: 1; stroke: black; }\n\
        rect.destination { fill: green; stroke-width: 1; stroke: black; }\n\
        rect.start { fill: blue; stroke-width: 1; stroke: black; }\n\
        rect.empty { fill: white; stroke-width: 1; stroke: black; }\n\
        text.path { fill: red; text-anchor: middle; }\n\
        \x20   </style>\n\
        \x20 </head>\n\
        \x20 <body>\n",
    );
}

pub fn html_footer(page: &mut String) {
    page.push_str(
        "\x20 </body>\n\
        </html>\n",
    );
}

fn svg_class_and_label(cell: Cell) -> (&'static str, String) {
    match cell {
        // Walls draw as filled squares with no label
        Cell::Wall => ("blocked", Cell::OPEN.to_string()),
        Cell::Start => ("start", Cell::START.to_string()),
        Cell::End => ("destination", Cell::END.to_string()),
        Cell::Open => ("empty", Cell::OPEN.to_string()),
        Cell::Distance(distance) => ("empty", distance.to_string()),
    }
}

/// One `<svg>` block per snapshot: a square per cell, with the cell's label overlaid and the
/// heading anchored to the top right corner.
pub fn svg_snapshot(page: &mut String, grid: &Grid2D<Cell>, heading: &str) {
    let dimensions: IVec2 = grid.dimensions();
    let width: i32 = dimensions.x * CELL_STEP + 2_i32 * CELL_STEP;
    let height: i32 = dimensions.y * CELL_STEP + CELL_STEP;

    page.push_str(&format!("<p><svg width=\"{width}\" height=\"{height}\">\n"));
    page.push_str("<text x=\"5\" y=\"25\">(0,0)</text>\n");
    page.push_str(&format!(
        "<text x=\"{}\" y=\"25\" style=\"text-anchor: end\">{heading}</text>\n",
        dimensions.x * CELL_STEP + CELL_STEP - 10_i32
    ));

    for pos in grid.iter_positions() {
        let (class, label): (&str, String) = svg_class_and_label(*grid.get(pos).unwrap());
        let x: i32 = GRID_X_START + pos.x * CELL_STEP;
        let y: i32 = GRID_Y_START + pos.y * CELL_STEP;

        page.push_str(&format!(
            "<rect x=\"{x}\" y=\"{y}\" height=\"{CELL_STEP}\" width=\"{CELL_STEP}\" \
            class=\"{class}\"/>\n"
        ));
        page.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" class=\"path\">{label}</text>\n",
            x + CELL_STEP / 2_i32,
            y + 25_i32
        ));
    }

    page.push_str("</svg></p>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_round_trips() {
        let input: &str = "\
            X,X,X\n\
            X,S,E\n\
            X,7,X\n";
        let grid: Grid2D<Cell> = parse_cell_grid(input).unwrap();

        assert_eq!(delimited(&grid), input);
    }

    #[test]
    fn test_html_header_embeds_cell_styles() {
        let mut page: String = String::new();

        html_header(&mut page);

        for class in [
            "rect.blocked",
            "rect.destination",
            "rect.start",
            "rect.empty",
            "text.path",
        ] {
            assert!(page.contains(class), "missing style for {class}");
        }
    }

    #[test]
    fn test_svg_snapshot_classes() {
        let grid: Grid2D<Cell> = parse_cell_grid("S,E\nX,3\n").unwrap();
        let mut page: String = String::new();

        svg_snapshot(&mut page, &grid, "Starting");

        assert_eq!(page.matches("<rect ").count(), 4_usize);
        assert!(page.contains("class=\"start\""));
        assert!(page.contains("class=\"destination\""));
        assert!(page.contains("class=\"blocked\""));
        assert!(page.contains("class=\"empty\""));
        assert!(page.contains(">3</text>"));
        assert!(page.contains("Starting"));
    }
}
