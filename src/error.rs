use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input or output could not be opened.
    Setup,
    /// The JSON framing of the input stream is broken. Reading stops.
    Stream,
    /// A framed value is not a valid record.
    Record,
    Decompression,
    Deserialization,
    Encoding,
    /// Writing to an output sink failed.
    Output,
}

impl ErrorKind {
    /// Fatal kinds end the run; the rest only cost the current record.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorKind::Setup | ErrorKind::Output)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ErrorKind::Setup => "setup error",
            ErrorKind::Stream => "stream read error",
            ErrorKind::Record => "invalid record",
            ErrorKind::Decompression => "decompression error",
            ErrorKind::Deserialization => "deserialization error",
            ErrorKind::Encoding => "encoding error",
            ErrorKind::Output => "output error",
        };
        f.write_str(name)
    }
}

pub struct Error {
    kind: ErrorKind,
    message: String,
    source: Option<Box<dyn error::Error>>,
}

impl Error {
    pub fn with_kind(kind: ErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unexpected error: {}", self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(err) => write!(
                f,
                "{}: {}. Source error: {}",
                self.kind, self.message, err
            ),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.source {
            Some(ref err) => Some(&**err),
            None => None,
        }
    }
}

impl<E: error::Error + 'static> From<(ErrorKind, &str, E)> for Error {
    fn from((kind, message, err): (ErrorKind, &str, E)) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
