//! General error enum for the entire package, as well as helpful conversions.

use std::error::Error;
use std::fmt;
use std::io;

use csv;

use value::Value;

/// General tabula error enum.
#[derive(Debug)]
pub enum TabulaError {
    /// Invalid argument: wrong type or shape, out-of-range index, unknown column name, or a column
    /// name that already exists.
    InvalidArgument(String),
    /// A value could not be coerced to a number by a numeric operation.
    NumericCoercion {
        /// Operation which attempted the coercion.
        operation: String,
        /// Offending value.
        value: Value,
    },
    /// Column-set violation: duplicate column names, or a reorder which is not a permutation.
    StructuralViolation(String),
    /// CSV reading / writing error.
    Csv(csv::Error),
    /// IO error.
    Io(io::Error),
    /// Charset decoding error.
    Decode(String),
}

/// Wrapper for tabula-based results.
pub type Result<T> = ::std::result::Result<T, TabulaError>;

impl TabulaError {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> TabulaError {
        TabulaError::InvalidArgument(msg.into())
    }
    pub(crate) fn structural<S: Into<String>>(msg: S) -> TabulaError {
        TabulaError::StructuralViolation(msg.into())
    }
    pub(crate) fn coercion<S: Into<String>>(operation: S, value: &Value) -> TabulaError {
        TabulaError::NumericCoercion {
            operation: operation.into(),
            value: value.clone(),
        }
    }
    pub(crate) fn unknown_column(operation: &str, name: &str) -> TabulaError {
        TabulaError::InvalidArgument(format!("{}: unknown column '{}'", operation, name))
    }
}

impl fmt::Display for TabulaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TabulaError::InvalidArgument(ref s) => write!(f, "Invalid argument: {}", s),
            TabulaError::NumericCoercion {
                ref operation,
                ref value,
            } => write!(
                f,
                "Numeric coercion error: {}: value '{}' is not a number",
                operation, value
            ),
            TabulaError::StructuralViolation(ref s) => write!(f, "Structural violation: {}", s),
            TabulaError::Csv(ref err) => write!(f, "CSV error: {}", err),
            TabulaError::Io(ref err) => write!(f, "IO error: {}", err),
            TabulaError::Decode(ref s) => write!(f, "Decode error: {}", s),
        }
    }
}

impl Error for TabulaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            TabulaError::Csv(ref err) => Some(err),
            TabulaError::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TabulaError {
    fn from(err: io::Error) -> TabulaError {
        TabulaError::Io(err)
    }
}

impl From<csv::Error> for TabulaError {
    fn from(err: csv::Error) -> TabulaError {
        TabulaError::Csv(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_operation() {
        let err = TabulaError::unknown_column("sort", "Salary");
        assert_eq!(
            err.to_string(),
            "Invalid argument: sort: unknown column 'Salary'"
        );

        let err = TabulaError::coercion("sum", &Value::from("a"));
        assert_eq!(
            err.to_string(),
            "Numeric coercion error: sum: value 'a' is not a number"
        );
    }
}
