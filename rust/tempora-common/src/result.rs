pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Unwraps an `Option` argument, returning `ErrorKind::MissingArgument` from the
/// enclosing function when it is `None`.
#[macro_export]
macro_rules! require_arg {
    ($name:ident) => {
        match $name {
            Some(value) => value,
            None => return Err($crate::error::Error::missing_arg(stringify!($name))),
        }
    };
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}
