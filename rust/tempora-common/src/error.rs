use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn missing_arg(name: impl Into<String>) -> Error {
        Error(ErrorKind::MissingArgument { name: name.into() }.into())
    }

    pub fn runtime<E>(context: impl Into<String>, source: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error(
            ErrorKind::Runtime {
                context: context.into(),
                source: Box::new(source),
            }
            .into(),
        )
    }

    pub fn out_of_range(value: impl Into<String>, source: StdErrorBoxed) -> Error {
        Error(
            ErrorKind::OutOfRange {
                value: value.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("missing argument {name}")]
    MissingArgument { name: String },

    #[error("runtime error: {context}")]
    Runtime {
        context: String,
        source: StdErrorBoxed,
    },

    #[error("value '{value}' is out of range: {source}")]
    OutOfRange {
        value: String,
        source: StdErrorBoxed,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
