use std::fmt;

/// The result of evaluating a form.
///
/// Arithmetic errors are first-class values rather than `Err`s: once a
/// subexpression produces an [`ErrorKind`], every enclosing combination
/// passes it outward unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Error(ErrorKind),
}

/// What went wrong, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Division or remainder with a zero divisor.
    DivisionByZero,
    /// An operator symbol the table does not know.
    InvalidOperator,
    /// A literal outside the `i64` range, or a malformed tree shape.
    InvalidNumber,
    /// A function name the table does not know.
    InvalidFunction,
}

impl Value {
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(kind) => write!(f, "Error: {}", kind),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ErrorKind::DivisionByZero => "Division By Zero",
            ErrorKind::InvalidOperator => "Invalid Operator",
            ErrorKind::InvalidNumber => "Invalid Number",
            ErrorKind::InvalidFunction => "Invalid Function",
        };
        f.write_str(message)
    }
}
