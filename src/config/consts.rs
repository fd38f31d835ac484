/// Directory holding one engine build per platform (`linux/`, `mac/`, `win/`)
pub const DEFAULT_LIBRARY_DIR: &str = "clib";
/// File name of the engine library inside a platform directory
pub const LIBRARY_FILE_NAME: &str = "libgnfinder.so";
/// Export called to find names
pub const FIND_NAMES_SYMBOL: &[u8] = b"FindNamesToJSON\0";
/// Optional export reporting the engine version
pub const VERSION_SYMBOL: &[u8] = b"GetVersion\0";
/// Default address of the remote engine
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8778";
/// Default per-call deadline in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Default connection deadline in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 5;
/// Answer of a healthy engine to a liveness probe
pub const PONG: &str = "pong";
