use std::io::{self, Write};

use fibwatch_core::Measurement;

/// Print the computed value and elapsed time, each followed by a blank line.
///
/// `precise` prints fractional milliseconds with three decimals instead of whole ones.
pub fn print_measurement<W: Write>(out: &mut W, m: &Measurement, precise: bool) -> io::Result<()> {
    writeln!(out, "fibonacci({}) = {}", m.n, m.value)?;
    writeln!(out)?;
    if precise {
        writeln!(out, "elapsed time: {:.3} ms.", m.elapsed_ms_precise)?;
    } else {
        writeln!(out, "elapsed time: {} ms.", m.elapsed_ms)?;
    }
    writeln!(out)?;
    out.flush()
}
