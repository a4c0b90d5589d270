use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): run finished; findings only count under `--strict`
/// - `Failure` (1): `--strict` run that reported unused or untranslated keys
/// - `Error` (2): fatal error (unreadable catalog, missing source root, I/O)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
    Error = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
