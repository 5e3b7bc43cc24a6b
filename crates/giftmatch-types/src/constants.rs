//! System-wide constants for the GiftMatch exchange matcher.

/// Maximum number of shuffle-and-scan rounds before the draw engine gives up.
///
/// The draw is a bounded heuristic: exhausting this budget is treated as a
/// definitive failure for the run, not a proof that no assignment exists.
pub const MAX_DRAW_ATTEMPTS: u32 = 1000;

/// Length of a participant credential, in characters.
pub const CREDENTIAL_LEN: usize = 6;

/// Characters a credential is drawn from (decimal digits only).
pub const CREDENTIAL_CHARSET: &[u8] = b"0123456789";

/// Minimum number of participants required to run a draw.
pub const MIN_PARTICIPANTS: usize = 2;

/// Maximum number of participants per roster (anti-abuse bound).
pub const MAX_PARTICIPANTS: usize = 1_000;

/// File name of the per-event aggregate record written by the file store.
pub const MASTER_FILE_NAME: &str = "master.json";

/// File name of the per-event giver record map written by the file store.
pub const RECORDS_FILE_NAME: &str = "records.json";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "GiftMatch";
