//! Plain-text rendering of character grids.
//!
//! A grid is written one row per line, each terminated by `\n`. This is the
//! only output format; terminals and files get identical bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ascii::AsciiGrid;

/// Render a grid to a `String`, one `\n`-terminated line per row.
pub fn render_to_string(grid: &AsciiGrid) -> String {
    let mut output = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        output.extend(row.iter());
        output.push('\n');
    }
    output
}

/// Write a grid to any writer and flush it.
pub fn write_grid<W: Write>(grid: &AsciiGrid, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(render_to_string(grid).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a grid to `path`, creating or truncating the file.
pub fn write_grid_to_file(grid: &AsciiGrid, path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_grid(grid, &mut writer)?;
    log::info!(
        "Wrote {}x{} grid to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}
