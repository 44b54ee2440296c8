use std::io::{BufRead, Write};

use crate::eval_line;

/// The prompt shown before each input line.
const PROMPT: &str = "calc> ";

/// Runs the interactive read-eval-print loop.
///
/// Each iteration prompts on `output`, reads one line from `input`, evaluates
/// it, and writes either the resulting value or the error message back to
/// `output`. Parse and evaluation errors are terminal for that one line only;
/// the loop continues with the next line. The loop returns when the input is
/// exhausted.
///
/// The stream handles are explicit parameters, so tests can drive the loop
/// with in-memory buffers while the binary passes stdin and stdout.
///
/// # Parameters
/// - `input`: Line source, one expression per line.
/// - `output`: Sink for prompts, values, and error reports.
///
/// # Errors
/// Returns an error only if reading or writing a stream fails.
///
/// ## Example
/// ```
/// use std::io::Cursor;
///
/// use calclang::repl::read_eval_print_loop;
///
/// let mut output = Vec::new();
/// read_eval_print_loop(Cursor::new("add(2, mul(4, 6))\n"), &mut output).unwrap();
///
/// let printed = String::from_utf8(output).unwrap();
/// assert!(printed.contains("26"));
/// ```
pub fn read_eval_print_loop<R, W>(input: R, output: &mut W) -> std::io::Result<()>
    where R: BufRead,
          W: Write
{
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };

        match eval_line(&line?) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}
