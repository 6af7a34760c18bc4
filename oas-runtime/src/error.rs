use thiserror::Error;

pub type Result<T> = std::result::Result<T, HydrationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HydrationError {
    /// The dispatcher has no factory for the requested type name.
    #[error("Undefined model class: {0}")]
    UndefinedModelClass(String),

    #[error("cannot create {class_name} from a non-object value")]
    NotAnObject { class_name: String },

    #[error("cannot create an array of {class_name} from a non-array value")]
    NotASequence { class_name: String },

    #[error("invalid hydration tag '{0}'")]
    InvalidTag(String),
}
