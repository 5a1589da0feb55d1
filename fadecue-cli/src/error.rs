// ============================================================================
// fadecue-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and exit codes
//
// Every fatal condition is a CoreError; the CLI only decides how it is shown
// and which status the process exits with.

use fadecue_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit status for a failed run.
///
/// Configuration problems (bad catalog, bad paths) exit with 2; probe and
/// output failures exit with 1.
pub fn exit_code(err: &CoreError) -> i32 {
    match err {
        CoreError::CatalogRead { .. } | CoreError::CatalogParse { .. } | CoreError::Config(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let catalog = CoreError::CatalogRead {
            path: PathBuf::from("videos.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let probe = CoreError::ProbeFailed {
            path: PathBuf::from("clip.mp4"),
            message: "exit status 1".to_string(),
        };

        assert_eq!(exit_code(&catalog), 2);
        assert_eq!(exit_code(&CoreError::Config("bad".to_string())), 2);
        assert_eq!(exit_code(&probe), 1);
    }
}
