use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroundError {
    #[error("invalid location of interest {id}; document: {document}, cause: {cause}")]
    InvalidDocument {
        id: String,
        document: String,
        cause: String,
    },

    #[error("missing {field}")]
    MissingField { field: &'static str },

    #[error("geometry decode failed: {reason}")]
    GeometryDecode { reason: String },

    #[error("cannot convert unsupported location of interest variant: {variant}")]
    UnsupportedVariant { variant: String },

    #[error("unsupported property value for {name}")]
    UnsupportedPropertyValue { name: String },

    #[error("data store error: {message}")]
    DataStore { message: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GroundError>;
