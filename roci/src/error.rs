use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("roci: Connection error : {}", message)]
    Connection { message: String },
    #[error("roci: Request rejected : {}", message)]
    Rejected { message: String },
    #[error(
        "roci: Sample too short : {} index {} is out of range (len = {})",
        kind,
        index,
        len
    )]
    SampleTooShort {
        kind: &'static str,
        index: usize,
        len: usize,
    },
    #[error("roci: Invalid configuration : {}", message)]
    InvalidConfig { message: String },
    #[error("roci: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
