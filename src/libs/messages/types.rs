/// Every user-facing message of the application.
///
/// Keeping the text behind one enum gives a single place for wording and
/// keeps the commands free of string literals. The `Display` impl in
/// [`super::display`] renders each variant.
#[derive(Debug, Clone)]
pub enum Message {
    // === INIT MESSAGES ===
    MakingDirectory(String),
    DirectoryFound(String),
    OnitInitialized,

    // === DAY FILE MESSAGES ===
    DayFileCreated(String),
    DayFileExists(String),
    DayFileNotFound(String),
    DayArgumentRequired,
    TodayNotSet,
    TodayNotFound(String),
    YesterdayNotSet,
    YesterdayNotFound(String),
    NoPreviousDayFile,

    // === LOG MESSAGES ===
    LogCopied,

    // === NOTE MESSAGES ===
    NoteTitleRequired,
    NoteCreated(String),
    NoteAlreadyExists(String),

    // === FOLDER MESSAGES ===
    UnknownFolder(String),

    // === QUERY MESSAGES ===
    NoDayFilesFound,
    QuerySaved(String),

    // === GIST MESSAGES ===
    GistUrlRequired,
    GistCreated(String),
    GistUrlCopied,
    GistCreateFailed(String),
    GistFetchFailed(String),
    GistEmptyPayload,
    GistWrittenToYesterday(String),
    GithubTokenMissing,
    TodayFileEmpty(String),

    // === CLIPBOARD MESSAGES ===
    ClipboardCommandFailed(String),
    ClipboardUnavailable,

    // === OPENER MESSAGES ===
    OpenCommandFailed(String),
}
