pub const TITLE: &str = "News Sentiment Analyzer";
pub const HINT: &str = "Enter a news article URL to analyze its sentiment";
pub const PROMPT: &str = "Enter news article URL > ";
pub const BUSY_TEXT: &str = "Analyzing...";
pub const SENTIMENT_CAPTION: &str = "Sentiment:";
pub const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const QUIT_COMMANDS: [&str; 2] = [":q", ":quit"];

/// Character grid the orb backdrop is drawn into.
pub const BACKDROP_COLUMNS: usize = 64;
pub const BACKDROP_ROWS: usize = 14;
/// Pixel viewport orb sizes are expressed against.
pub const VIEWPORT_WIDTH_PX: f32 = 1280.0;
pub const VIEWPORT_HEIGHT_PX: f32 = 720.0;
