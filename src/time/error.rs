use std::fmt;
use std::iter::repeat;

/// An error that occurred while parsing a duration or its unit.
#[derive(Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    Syntax(String),
    UnitNotSupported(String),
}

impl ::std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Syntax(ref err) => err.fmt(f),
            Error::UnitNotSupported(ref err) => err.fmt(f),
        }
    }
}

// Framed output so a bad value from a settings file stands out in logs.
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (kind, err) = match *self {
            Error::Syntax(ref err) => ("Syntax", err),
            Error::UnitNotSupported(ref err) => ("UnitNotSupported", err),
        };
        let hr: String = repeat('~').take(79).collect();
        writeln!(f, "{}(", kind)?;
        writeln!(f, "{}", hr)?;
        writeln!(f, "{}", err)?;
        writeln!(f, "{}", hr)?;
        write!(f, ")")
    }
}
