use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Console sink that buffers a rendered diff into the `minus` pager.
///
/// The binary hands a clone of the pager handle to this writer, prints the
/// whole unified or split view through the [`Console`](super::console::Console),
/// and only then calls `minus::page_all` on the original handle. Rows arrive
/// as UTF-8 text; anything else is rejected with `InvalidData`.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let rows = std::str::from_utf8(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.pager.push_str(rows).map_err(io::Error::other)?;

        Ok(buf.len())
    }

    // minus keeps everything in memory until paging starts
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
