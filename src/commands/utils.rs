// src/commands/utils.rs
use crate::fs::FsError;

/// Short coreutils-style reason for a failed operation, used by the
/// commands when composing their diagnostics.
pub fn describe(err: &FsError) -> String {
    match err {
        FsError::NotFound { .. } => "No such file or directory".to_string(),
        FsError::AlreadyExists { .. } => "File exists".to_string(),
        FsError::IsDirectory { .. } => "Is a directory".to_string(),
        FsError::NotDirectory { .. } => "Not a directory".to_string(),
        FsError::NotEmpty { .. } => "Directory not empty".to_string(),
        FsError::RootImmutable { .. } => "Operation not permitted".to_string(),
        FsError::CyclicMove { .. } | FsError::InvalidArgument { .. } => {
            "Invalid argument".to_string()
        }
        FsError::Serialization { .. } => err.to_string(),
    }
}
