//! Program Image Loader.
//!
//! This module reads machine-code images from text. It performs:
//! 1. **Parsing:** One decimal word per line; the first integer token of each line is the word
//!    and anything after it is ignored, so assembler listings with trailing comments load as-is.
//! 2. **Validation:** A line that does not start with an integer fitting in a word is reported
//!    with its address. Images larger than the instruction store are rejected.
//! 3. **File loading:** Reads the image from disk with the path attached to any I/O error.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{LoadError, NUM_MEMORY, Word};

/// Parses the leading integer token of a line.
///
/// Leading whitespace is skipped; an optional sign is followed by one or more
/// decimal digits. Returns `None` if there is no such token or it overflows a word.
fn leading_word(line: &str) -> Option<Word> {
    let s = line.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Parses a program image from text.
///
/// Word `i` of the image is taken from line `i`. Blank lines at the end of the
/// text are ignored; a blank line followed by more words is a parse error.
///
/// # Arguments
///
/// * `text` - The image, one decimal word per line.
///
/// # Returns
///
/// The words in address order, `LoadError::Parse` naming the first bad address,
/// or `LoadError::TooLarge` if the image exceeds the instruction store.
///
/// # Examples
///
/// ```
/// use pipesim_core::sim::loader::parse_image;
///
/// let image = parse_image("8454151\n-1 data\n  25165824\n\n").unwrap();
/// assert_eq!(image, vec![8454151, -1, 25165824]);
/// ```
pub fn parse_image(text: &str) -> Result<Vec<Word>, LoadError> {
    let lines: Vec<&str> = text.lines().collect();
    let used = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |i| i + 1);

    if used > NUM_MEMORY {
        return Err(LoadError::TooLarge {
            len: used,
            capacity: NUM_MEMORY,
        });
    }

    lines[..used]
        .iter()
        .enumerate()
        .map(|(address, line)| {
            leading_word(line).ok_or_else(|| LoadError::Parse {
                address,
                text: (*line).to_string(),
            })
        })
        .collect()
}

/// Loads a program image from a file.
///
/// # Arguments
///
/// * `path` - Path to the machine-code file.
///
/// # Returns
///
/// The image words, or a `LoadError` if the file cannot be read or parsed.
pub fn load_image(path: &Path) -> Result<Vec<Word>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_image(&text)?;
    debug!(path = %path.display(), words = image.len(), "program image loaded");
    Ok(image)
}
