
/// Writes a prompt without a newline and flushes it, propagating IO errors with `?`.
macro_rules! prompt {
    ($out:expr, $($arg:tt)*) => ({
        use std::io::Write as _;
        write!($out, $($arg)*)?;
        $out.flush()?;
    });
}
