use std::error::Error;
use std::fmt;

/// The per-frame stacks whose balance is checked at the end of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackKind {
    Id,
    Container,
    Clip,
    Layout,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackKind::Id => "id",
            StackKind::Container => "container",
            StackKind::Clip => "clip",
            StackKind::Layout => "layout",
        };
        f.write_str(name)
    }
}

/// Failure reported by a text-input collaborator.
#[derive(Debug)]
pub enum TextInputError {
    /// The platform refused to start or continue a composition session.
    Unavailable(String),
    /// The field reported a selection outside its text.
    InvalidSelection { start: usize, end: usize, len: usize },
}

impl fmt::Display for TextInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextInputError::Unavailable(reason) => write!(f, "text input unavailable: {reason}"),
            TextInputError::InvalidSelection { start, end, len } => {
                write!(f, "selection {start}..{end} out of bounds for text of length {len}")
            }
        }
    }
}

impl Error for TextInputError {}

/// Errors latched by a [`crate::Context`] during a frame.
///
/// The first error of a frame wins; later ones are dropped.
#[derive(Debug)]
pub enum UiError {
    /// A stack was not empty when the frame ended.
    StackImbalance { stack: StackKind, depth: usize },
    /// A pop or query hit an empty stack, e.g. a widget declared outside any container.
    EmptyStack { stack: StackKind },
    /// A collaborator (text input, platform) failed.
    Collaborator(Box<dyn Error + 'static>),
    /// The client's declaration closure returned an error.
    Client(Box<dyn Error + 'static>),
}

impl UiError {
    pub fn client(err: impl Into<Box<dyn Error + 'static>>) -> Self {
        UiError::Client(err.into())
    }

    pub fn collaborator(err: impl Into<Box<dyn Error + 'static>>) -> Self {
        UiError::Collaborator(err.into())
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::StackImbalance { stack, depth } => {
                write!(f, "{stack} stack must be empty at frame end (depth {depth})")
            }
            UiError::EmptyStack { stack } => write!(f, "{stack} stack is empty"),
            UiError::Collaborator(err) => write!(f, "collaborator failed: {err}"),
            UiError::Client(err) => write!(f, "client error: {err}"),
        }
    }
}

impl Error for UiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            UiError::Collaborator(err) | UiError::Client(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<TextInputError> for UiError {
    fn from(err: TextInputError) -> Self {
        UiError::Collaborator(Box::new(err))
    }
}
