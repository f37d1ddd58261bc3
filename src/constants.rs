/// Characters treated as word boundaries. Duplicates are tolerated; the
/// `SeparatorSet` built from this string deduplicates them.
pub const SEPARATORS: &str = " `~!@#$%^&*()-_=+{[}]|;:.,<>?/\t\u{8}\n\r\u{c}'\"\\";

/// Font size assigned to the least frequent selected word.
pub const MIN_FONT: u32 = 11;

/// Font size assigned to the most frequent selected word.
pub const MAX_FONT: u32 = 48;

pub const DEFAULT_STYLESHEET_URL: &str = "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";
