use std::io;
use std::fmt;
use std::path::PathBuf;

pub type QuatResult<T> = Result<T, QuatError>;

#[derive(Debug)]
pub enum QuatError {
    FileOpen(PathBuf, io::Error),
    Read(io::Error),
    InvalidCoefficient(String),
    MissingCoefficients(usize),
    InvalidOption(String),
}
impl From<io::Error> for QuatError {
    fn from(err: io::Error) -> Self {
        Self::Read(err)
    }
}
impl fmt::Display for QuatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuatError::FileOpen(path, err) => {
                write!(f, "
                    \rError opening file {}:
                    \r{err}",
                    path.display(),
                )
            }
            QuatError::Read(err) => {
                write!(f, "
                    \rError reading input:
                    \r{err}",
                )
            }
            QuatError::InvalidCoefficient(token) => {
                write!(f, "
                    \rInvalid coefficient {token}",
                )
            }
            QuatError::MissingCoefficients(count) => {
                write!(f, "
                    \rExpected 4 coefficients, input ended after {count}",
                )
            }
            QuatError::InvalidOption(opt) => {
                write!(f, "
                    \rInvalid option {opt}",
                )
            }
        }
    }
}
