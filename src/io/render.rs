//! Map serialization with selectable glyph mappings
//!
//! Two historical character sets exist for the same map body: a symbolic
//! one used for terminal dumps and a digit one used for saved files. Both
//! share the wall glyph `#` for empty cells. The serialized form is one
//! metadata header line followed by one line of glyphs per grid row.

use crate::spatial::grid::OccupancyGrid;
use clap::ValueEnum;
use std::io::Write;

/// Glyph mapping for serialized maps
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Charset {
    /// Symbolic glyphs for every code: `#` `.` `,` `:` `;`
    Symbols,
    /// `#` for empty cells, literal digits for codes 1..=4
    Digits,
}

impl Charset {
    /// Glyph for a single grid cell value
    ///
    /// Values outside 0..=4 cannot occur in a well-formed grid and render
    /// as `?`.
    pub const fn glyph(self, code: u8) -> char {
        match self {
            Self::Symbols => match code {
                0 => '#',
                1 => '.',
                2 => ',',
                3 => ':',
                4 => ';',
                _ => '?',
            },
            Self::Digits => match code {
                0 => '#',
                1..=4 => (b'0' + code) as char,
                _ => '?',
            },
        }
    }
}

/// Metadata reported on the map's header line
#[derive(Clone, Copy, Debug)]
pub struct MapHeader {
    /// Seed the run was generated with
    pub seed: u64,
    /// Accepted placement count
    pub blocks: usize,
    /// Place probability in percent
    pub probability: u8,
}

impl MapHeader {
    /// Format the single header line, without a trailing newline
    pub fn line(&self) -> String {
        format!(
            "# seed={} blocks={} prob={}%",
            self.seed, self.blocks, self.probability
        )
    }
}

/// Serialize the header and one glyph line per grid row
pub fn render_map(grid: &OccupancyGrid, header: MapHeader, charset: Charset) -> String {
    let side = grid.side();
    let mut out = String::with_capacity((side + 1) * (side + 1));
    out.push_str(&header.line());
    out.push('\n');

    for y in 0..side as i32 {
        for x in 0..side as i32 {
            out.push(charset.glyph(grid.get(x, y)));
        }
        out.push('\n');
    }
    out
}

/// Write a rendered map to the given sink
///
/// # Errors
///
/// Returns an error if the sink rejects the write
pub fn write_map<W: Write>(
    writer: &mut W,
    grid: &OccupancyGrid,
    header: MapHeader,
    charset: Charset,
) -> std::io::Result<()> {
    writer.write_all(render_map(grid, header, charset).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::configuration::{GRID_SIZE, TILE_SIZE};
    use crate::spatial::pattern::Stamp;

    const HEADER: MapHeader = MapHeader {
        seed: 12345,
        blocks: 7,
        probability: 70,
    };

    #[test]
    fn symbol_glyphs_cover_all_codes() {
        assert_eq!(Charset::Symbols.glyph(0), '#');
        assert_eq!(Charset::Symbols.glyph(1), '.');
        assert_eq!(Charset::Symbols.glyph(2), ',');
        assert_eq!(Charset::Symbols.glyph(3), ':');
        assert_eq!(Charset::Symbols.glyph(4), ';');
        assert_eq!(Charset::Symbols.glyph(9), '?');
    }

    #[test]
    fn digit_glyphs_use_literal_digits() {
        assert_eq!(Charset::Digits.glyph(0), '#');
        assert_eq!(Charset::Digits.glyph(1), '1');
        assert_eq!(Charset::Digits.glyph(4), '4');
        assert_eq!(Charset::Digits.glyph(9), '?');
    }

    #[test]
    fn header_line_matches_the_historical_format() {
        assert_eq!(HEADER.line(), "# seed=12345 blocks=7 prob=70%");
    }

    #[test]
    fn rendered_map_has_exact_dimensions() {
        let mut grid = OccupancyGrid::new();
        let stamp: Stamp = [[2; TILE_SIZE]; TILE_SIZE];
        grid.place([5, 5], &stamp);

        let rendered = render_map(&grid, HEADER, Charset::Symbols);
        let mut lines = rendered.lines();

        assert_eq!(lines.next(), Some("# seed=12345 blocks=7 prob=70%"));
        let body: Vec<&str> = lines.collect();
        assert_eq!(body.len(), GRID_SIZE);
        for line in &body {
            assert_eq!(line.len(), GRID_SIZE);
        }
        assert!(rendered.ends_with('\n'));

        // Row 5 carries the stamp glyphs at columns 5..9
        let row = body.get(5).copied().unwrap_or_default();
        assert_eq!(row.get(5..9), Some(",,,,"));
        assert_eq!(row.get(0..5), Some("#####"));
    }

    #[test]
    fn write_map_streams_the_rendered_bytes() {
        let grid = OccupancyGrid::new();
        let mut sink = Vec::new();
        write_map(&mut sink, &grid, HEADER, Charset::Digits).unwrap();
        assert_eq!(sink, render_map(&grid, HEADER, Charset::Digits).into_bytes());
    }
}
