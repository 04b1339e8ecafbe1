//! Grid writer.
//!
//! One line per row; every value is followed by a single space, so each
//! line ends in `" \n"`.

use std::io::Write;

use cellstep_core::Grid;

use crate::error::IoError;

/// Write `grid` to `writer` in the row format read back by
/// [`read_grid`](crate::read_grid).
///
/// Wrap a `File` in a `BufWriter` before passing it here; each value is a
/// separate small write.
pub fn write_grid<W: Write>(mut writer: W, grid: &Grid) -> Result<(), IoError> {
    for row in grid.rows() {
        for &value in row {
            write!(writer, "{value} ")?;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Render `grid` to a string in the same format as [`write_grid`].
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 2 + grid.side());
    for row in grid.rows() {
        for &value in row {
            out.push(if value == 0 { '0' } else { '1' });
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_end_with_trailing_space() {
        let g = Grid::from_rows(&[[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
        assert_eq!(render_grid(&g), "0 0 0 \n1 1 1 \n0 0 0 \n");
    }

    #[test]
    fn write_matches_render() {
        let g = Grid::from_alive(4, &[(0, 0), (3, 2)]).unwrap();
        let mut buf = Vec::new();
        write_grid(&mut buf, &g).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_grid(&g));
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::StorageFull, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_an_io_error() {
        let err = write_grid(FullDisk, &Grid::dead(2).unwrap()).unwrap_err();
        assert!(matches!(err, IoError::Io(ref e) if e.kind() == std::io::ErrorKind::StorageFull));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
