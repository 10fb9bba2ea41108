use std::fmt;
use std::fmt::Write;

use crate::FormatError;

/// Safely create a formatted string.
///
/// The result is an owned `String`. Failures are reported instead of
/// aborting: a `Display` implementation returning `fmt::Error` yields
/// [FormatError::Format], a buffer that cannot grow yields
/// [FormatError::Alloc]. See also the [strdup_printf!] macro.
pub fn strdup_printf(args: fmt::Arguments<'_>) -> Result<String, FormatError> {
    let mut result = String::new();
    write_checked(&mut result, args)?;
    Ok(result)
}

/// Safely append a formatted string to `dest`.
///
/// Returns the number of characters in the resulting string. On error
/// `dest` keeps its previous content. See also the [strcat_printf!] macro.
pub fn strcat_printf(dest: &mut String, args: fmt::Arguments<'_>) -> Result<usize, FormatError> {
    let mut appendix = String::new();
    write_checked(&mut appendix, args)?;
    dest.try_reserve(appendix.len())?;
    dest.push_str(&appendix);
    Ok(dest.chars().count())
}

fn write_checked(buffer: &mut String, args: fmt::Arguments<'_>) -> Result<(), FormatError> {
    if let Some(s) = args.as_str() {
        buffer.try_reserve(s.len())?;
        buffer.push_str(s);
        return Ok(());
    }
    // Measure first, then allocate exactly once.
    let mut counter = ByteCounter(0);
    counter.write_fmt(args)?;
    buffer.try_reserve(counter.0)?;
    buffer.write_fmt(args)?;
    Ok(())
}

struct ByteCounter(usize);

impl Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// `format!`-like front end for [strdup_printf].
///
/// ```rust
/// use rf_sequence::strdup_printf;
/// let s = strdup_printf!("{} {:>6.2}", "GGGG&CCCC", -4.5).unwrap();
/// assert_eq!(s, "GGGG&CCCC  -4.50");
/// ```
#[macro_export]
macro_rules! strdup_printf {
    ($($arg:tt)*) => {
        $crate::strdup_printf(format_args!($($arg)*))
    };
}

/// `write!`-like front end for [strcat_printf].
///
/// ```rust
/// use rf_sequence::strcat_printf;
/// let mut s = String::from("ACGU");
/// let n = strcat_printf!(&mut s, " {:.1}", -1.5).unwrap();
/// assert_eq!(s, "ACGU -1.5");
/// assert_eq!(n, 9);
/// ```
#[macro_export]
macro_rules! strcat_printf {
    ($dest:expr, $($arg:tt)*) => {
        $crate::strcat_printf($dest, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_strdup_printf() {
        let s = strdup_printf(format_args!("{}-{}", "GG", 4)).unwrap();
        assert_eq!(s, "GG-4");
        let s = strdup_printf!("plain").unwrap();
        assert_eq!(s, "plain");
    }

    #[test]
    fn test_strdup_printf_failure() {
        let res = strdup_printf!("{}", Broken);
        assert_eq!(res, Err(FormatError::Format));
    }

    #[test]
    fn test_strcat_printf_appends() {
        let mut dest = String::new();
        assert_eq!(strcat_printf!(&mut dest, "{}", "GGGG").unwrap(), 4);
        assert_eq!(strcat_printf!(&mut dest, "&{}", "CCCC").unwrap(), 9);
        assert_eq!(dest, "GGGG&CCCC");
    }

    #[test]
    fn test_strcat_printf_failure_keeps_dest() {
        let mut dest = String::from("keep");
        let res = strcat_printf!(&mut dest, "{} {}", 1, Broken);
        assert_eq!(res, Err(FormatError::Format));
        assert_eq!(dest, "keep");
    }
}
