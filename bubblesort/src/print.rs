use std::fmt::{Display, Write as _};
use std::io;

/// Format items as one line: separated by single spaces and terminated by `\n`.
pub fn format_line<T: Display>(slice: &[T]) -> String {
    let mut line = String::new();
    for (i, item) in slice.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        // writing into a String can't fail
        let _ = write!(line, "{}", item);
    }
    line.push('\n');
    line
}

/// Write the line produced by [`format_line`] to `writer`.
pub fn write_line<W, T>(writer: &mut W, slice: &[T]) -> io::Result<()>
where
    W: io::Write,
    T: Display,
{
    writer.write_all(format_line(slice).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_literal() {
        let arr = [1, 7, 13, 21, 43, 66, 69, 69, 96, 99];
        assert_eq!(format_line(&arr), "1 7 13 21 43 66 69 69 96 99\n");
    }

    #[test]
    fn short_lines() {
        assert_eq!(format_line::<i32>(&[]), "\n");
        assert_eq!(format_line(&[5]), "5\n");
        assert_eq!(format_line(&[-1, 0]), "-1 0\n");
    }

    #[test]
    fn write_to_buffer() {
        let mut out = Vec::new();
        write_line(&mut out, &[3, 2, 1]).unwrap();
        assert_eq!(out, b"3 2 1\n");
    }

    #[test]
    fn write_error_propagates() {
        struct Closed;
        impl io::Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_line(&mut Closed, &[1]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        proptest!(
            #[test]
            fn no_trailing_space(
                vec in proptest::collection::vec(any::<i32>(), 0..100),
            ) {
                let line = format_line(&vec);
                prop_assert!(line.ends_with('\n'));
                prop_assert!(!line.ends_with(" \n"));
                prop_assert!(!line.starts_with(' '));
                let parsed: Vec<i32> = line
                    .split_whitespace()
                    .map(|s| s.parse().unwrap())
                    .collect();
                prop_assert_eq!(parsed, vec);
            }
        );
    }
}
