//! Across Lite `.puz` loading
//!
//! Layout reference: <https://code.google.com/archive/p/puz/wikis/FileFormat.wiki>
//!
//! ```text
//! 0x00  u16   global checksum
//! 0x02  [12]  "ACROSS&DOWN\0"
//! 0x0E  u16   CIB checksum (over 0x2C..0x34)
//! 0x18  [4]   version string, NUL padded
//! 0x2C  u8    width
//! 0x2D  u8    height
//! 0x2E  u16   number of clues
//! 0x32  u16   scrambled tag
//! 0x34        solution (w*h), player state (w*h), then NUL-terminated
//!             title, author, copyright, clues..., notes
//! ```

use super::{Puzzle, PuzzleError};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const MAGIC: &[u8; 12] = b"ACROSS&DOWN\0";
const HEADER_LEN: usize = 0x34;
const CIB_RANGE: std::ops::Range<usize> = 0x2C..0x34;

/// Load a puzzle from a file
///
/// Only the `.puz` format is supported.
///
/// # Errors
///
/// Returns `PuzzleError` if the extension is not `.puz`, the file cannot be
/// read, or its content is not a valid unscrambled puzzle.
///
/// # Examples
/// ```no_run
/// use puzterm::puzzle::loader::load_from_file;
///
/// let puzzle = load_from_file("puzzles/daily.puz").unwrap();
/// println!("{} ({}x{})", puzzle.title, puzzle.cols, puzzle.rows);
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleError> {
    let path = path.as_ref();
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) if ext.eq_ignore_ascii_case("puz") => {}
        other => return Err(PuzzleError::UnsupportedFormat(other.unwrap_or("").to_string())),
    }

    let bytes = fs::read(path)?;
    let puzzle = parse(&bytes)?;
    info!(
        path = %path.display(),
        title = %puzzle.title,
        rows = puzzle.rows,
        cols = puzzle.cols,
        clues = puzzle.clues.len(),
        "loaded puzzle"
    );
    Ok(puzzle)
}

/// Parse the bytes of a `.puz` file
///
/// Checksum mismatches are logged and recorded in
/// [`Puzzle::checksums_valid`] rather than rejected.
///
/// # Errors
///
/// Returns `PuzzleError` for a missing magic string, truncated data, zero
/// dimensions, scrambled solutions, or invalid grid characters.
pub fn parse(bytes: &[u8]) -> Result<Puzzle, PuzzleError> {
    if bytes.len() < HEADER_LEN {
        return Err(PuzzleError::Truncated("header"));
    }
    if &bytes[0x02..0x0E] != MAGIC {
        return Err(PuzzleError::BadMagic);
    }

    let global_checksum = read_u16(bytes, 0x00);
    let cib_checksum = read_u16(bytes, 0x0E);
    let version = decode_latin1(until_nul(&bytes[0x18..0x1C]));
    let cols = usize::from(bytes[0x2C]);
    let rows = usize::from(bytes[0x2D]);
    let num_clues = usize::from(read_u16(bytes, 0x2E));
    let scrambled_tag = read_u16(bytes, 0x32);

    if rows == 0 || cols == 0 {
        return Err(PuzzleError::InvalidDimensions { rows, cols });
    }
    if scrambled_tag != 0 {
        return Err(PuzzleError::Scrambled);
    }

    let cells = rows * cols;
    let solution_end = HEADER_LEN + cells;
    let state_end = solution_end + cells;
    if bytes.len() < state_end {
        return Err(PuzzleError::Truncated("grid"));
    }
    let solution_bytes = &bytes[HEADER_LEN..solution_end];
    let state_bytes = &bytes[solution_end..state_end];

    let mut strings = NulStrings::new(&bytes[state_end..]);
    let title = strings.next().ok_or(PuzzleError::Truncated("title"))?;
    let author = strings.next().ok_or(PuzzleError::Truncated("author"))?;
    let copyright = strings.next().ok_or(PuzzleError::Truncated("copyright"))?;
    let clues = (0..num_clues)
        .map(|_| strings.next().ok_or(PuzzleError::Truncated("clues")))
        .collect::<Result<Vec<_>, _>>()?;
    // Pre-1.3 files may end right after the last clue
    let notes = strings.next().unwrap_or_default();

    let mut checksums_valid = true;
    let computed_cib = checksum_region(&bytes[CIB_RANGE], 0);
    if computed_cib != cib_checksum {
        warn!(
            expected = cib_checksum,
            computed = computed_cib,
            "CIB checksum mismatch"
        );
        checksums_valid = false;
    }

    let computed_global = global_checksum_of(&Sections {
        cib: computed_cib,
        solution: solution_bytes,
        state: state_bytes,
        title,
        author,
        copyright,
        clues: &clues,
        notes,
        include_notes: version_at_least(&version, 1, 3),
    });
    if computed_global != global_checksum {
        warn!(
            expected = global_checksum,
            computed = computed_global,
            "global checksum mismatch"
        );
        checksums_valid = false;
    }

    debug!(%version, rows, cols, num_clues, "parsed .puz header");

    let mut puzzle = Puzzle::new(
        rows,
        cols,
        decode_latin1(solution_bytes),
        decode_latin1(state_bytes),
        clues.iter().map(|c| decode_latin1(c)).collect(),
    )?
    .with_metadata(
        decode_latin1(title),
        decode_latin1(author),
        decode_latin1(copyright),
    );
    puzzle.notes = decode_latin1(notes);
    puzzle.version = version;
    puzzle.checksums_valid = checksums_valid;
    Ok(puzzle)
}

/// The raw pieces of a file that feed the global checksum
struct Sections<'a> {
    cib: u16,
    solution: &'a [u8],
    state: &'a [u8],
    title: &'a [u8],
    author: &'a [u8],
    copyright: &'a [u8],
    clues: &'a [&'a [u8]],
    notes: &'a [u8],
    include_notes: bool,
}

fn global_checksum_of(sections: &Sections<'_>) -> u16 {
    let mut sum = sections.cib;
    sum = checksum_region(sections.solution, sum);
    sum = checksum_region(sections.state, sum);
    for text in [sections.title, sections.author, sections.copyright] {
        if !text.is_empty() {
            sum = checksum_region(text, sum);
            sum = checksum_region(&[0], sum);
        }
    }
    for clue in sections.clues {
        sum = checksum_region(clue, sum);
    }
    if sections.include_notes && !sections.notes.is_empty() {
        sum = checksum_region(sections.notes, sum);
        sum = checksum_region(&[0], sum);
    }
    sum
}

/// Across Lite rolling checksum: rotate right by one, then add the byte
fn checksum_region(data: &[u8], seed: u16) -> u16 {
    data.iter().fold(seed, |sum, &byte| {
        let rotated = if sum & 1 == 0 {
            sum >> 1
        } else {
            (sum >> 1) | 0x8000
        };
        rotated.wrapping_add(u16::from(byte))
    })
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    bytes
        .iter()
        .position(|&b| b == 0)
        .map_or(bytes, |end| &bytes[..end])
}

/// ISO-8859-1 maps every byte to the code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn version_at_least(version: &str, major: u32, minor: u32) -> bool {
    let mut parts = version.split('.').map(|p| p.trim().parse::<u32>().ok());
    match (parts.next().flatten(), parts.next().flatten()) {
        (Some(ma), Some(mi)) => (ma, mi) >= (major, minor),
        (Some(ma), None) => ma > major,
        _ => false,
    }
}

/// Iterator over NUL-terminated byte strings
struct NulStrings<'a> {
    rest: &'a [u8],
}

impl<'a> NulStrings<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }
}

impl<'a> Iterator for NulStrings<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.rest.iter().position(|&b| b == 0)?;
        let (text, rest) = self.rest.split_at(end);
        self.rest = &rest[1..];
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Serialize a puzzle the way Across Lite writes it, with valid checksums
    fn encode(puzzle: &Puzzle) -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_LEN];
        bytes[0x02..0x0E].copy_from_slice(MAGIC);
        bytes[0x18..0x1C].copy_from_slice(b"1.3\0");
        bytes[0x2C] = puzzle.cols as u8;
        bytes[0x2D] = puzzle.rows as u8;
        bytes[0x2E..0x30].copy_from_slice(&(puzzle.clues.len() as u16).to_le_bytes());
        bytes[0x30..0x32].copy_from_slice(&1u16.to_le_bytes());

        bytes.extend_from_slice(puzzle.solution.as_bytes());
        bytes.extend_from_slice(puzzle.state.as_bytes());
        for text in [&puzzle.title, &puzzle.author, &puzzle.copyright] {
            bytes.extend_from_slice(text.as_bytes());
            bytes.push(0);
        }
        for clue in &puzzle.clues {
            bytes.extend_from_slice(clue.as_bytes());
            bytes.push(0);
        }
        bytes.extend_from_slice(puzzle.notes.as_bytes());
        bytes.push(0);

        let cib = checksum_region(&bytes[CIB_RANGE], 0);
        let clue_bytes: Vec<&[u8]> = puzzle.clues.iter().map(String::as_bytes).collect();
        let global = global_checksum_of(&Sections {
            cib,
            solution: puzzle.solution.as_bytes(),
            state: puzzle.state.as_bytes(),
            title: puzzle.title.as_bytes(),
            author: puzzle.author.as_bytes(),
            copyright: puzzle.copyright.as_bytes(),
            clues: &clue_bytes,
            notes: puzzle.notes.as_bytes(),
            include_notes: true,
        });
        bytes[0x0E..0x10].copy_from_slice(&cib.to_le_bytes());
        bytes[0x00..0x02].copy_from_slice(&global.to_le_bytes());
        bytes
    }

    fn tiny_puzzle() -> Puzzle {
        // A B
        // C .
        let mut puzzle = Puzzle::new(
            2,
            2,
            "ABC.",
            "-B-.",
            vec!["1A".into(), "1D".into(), "2D".into(), "3A".into()],
        )
        .unwrap()
        .with_metadata("Tiny", "Tester", "(c) nobody");
        puzzle.notes = "Some notes".into();
        puzzle
    }

    #[test]
    fn checksum_region_known_values() {
        assert_eq!(checksum_region(&[], 0), 0);
        assert_eq!(checksum_region(&[1], 0), 1);
        // 1 rotates to 0x8000, plus 2
        assert_eq!(checksum_region(&[1, 2], 0), 0x8002);
    }

    #[test]
    fn parse_reads_header_grids_and_strings() {
        let original = tiny_puzzle();
        let parsed = parse(&encode(&original)).unwrap();

        assert_eq!(parsed.rows, 2);
        assert_eq!(parsed.cols, 2);
        assert_eq!(parsed.version, "1.3");
        assert_eq!(parsed.solution, original.solution);
        assert_eq!(parsed.state, "-B-.");
        assert_eq!(parsed.title, "Tiny");
        assert_eq!(parsed.author, "Tester");
        assert_eq!(parsed.copyright, "(c) nobody");
        assert_eq!(parsed.clues, original.clues);
        assert_eq!(parsed.notes, "Some notes");
        assert!(parsed.checksums_valid);
    }

    #[test]
    fn parse_flags_checksum_mismatch_without_failing() {
        let mut bytes = encode(&tiny_puzzle());
        bytes[0] ^= 0xFF;
        let parsed = parse(&bytes).unwrap();
        assert!(!parsed.checksums_valid);
    }

    #[test]
    fn parse_rejects_bad_magic() {
        let mut bytes = encode(&tiny_puzzle());
        bytes[0x02] = b'X';
        assert!(matches!(parse(&bytes), Err(PuzzleError::BadMagic)));
    }

    #[test]
    fn parse_rejects_short_header() {
        assert!(matches!(
            parse(&[0u8; 10]),
            Err(PuzzleError::Truncated("header"))
        ));
    }

    #[test]
    fn parse_rejects_truncated_clues() {
        let bytes = encode(&tiny_puzzle());
        // Cut inside the clue strings: header + grids + "Tiny\0Tester\0(c) nobody\0" + part of first clue
        let cut = HEADER_LEN + 8 + 5 + 7 + 11 + 1;
        assert!(matches!(
            parse(&bytes[..cut]),
            Err(PuzzleError::Truncated("clues"))
        ));
    }

    #[test]
    fn parse_rejects_scrambled() {
        let mut bytes = encode(&tiny_puzzle());
        bytes[0x32] = 4;
        assert!(matches!(parse(&bytes), Err(PuzzleError::Scrambled)));
    }

    #[test]
    fn parse_rejects_zero_dimensions() {
        let mut bytes = encode(&tiny_puzzle());
        bytes[0x2C] = 0;
        assert!(matches!(
            parse(&bytes),
            Err(PuzzleError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn parse_accepts_missing_notes() {
        let mut puzzle = tiny_puzzle();
        puzzle.notes.clear();
        let mut bytes = encode(&puzzle);
        // Drop the trailing NUL of the empty notes string
        bytes.pop();
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.notes, "");
        assert!(parsed.checksums_valid);
    }

    #[test]
    fn parse_decodes_latin1() {
        let mut puzzle = tiny_puzzle();
        puzzle.title = "Caf".into();
        let mut bytes = encode(&puzzle);
        // Replace the title terminator with 0xE9 and re-terminate
        let title_end = HEADER_LEN + 8 + 3;
        bytes.insert(title_end, 0xE9);
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.title, "Café");
    }

    #[test]
    fn load_from_file_rejects_other_extensions() {
        assert!(matches!(
            load_from_file("puzzle.ipuz"),
            Err(PuzzleError::UnsupportedFormat(ext)) if ext == "ipuz"
        ));
    }

    #[test]
    fn load_from_file_reads_puz() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.puz");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&encode(&tiny_puzzle())).unwrap();

        let puzzle = load_from_file(&path).unwrap();
        assert_eq!(puzzle.title, "Tiny");
        assert_eq!(puzzle.clues.len(), 4);
    }

    #[test]
    fn load_from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_from_file(dir.path().join("missing.puz")),
            Err(PuzzleError::Io(_))
        ));
    }

    #[test]
    fn version_comparison() {
        assert!(version_at_least("1.3", 1, 3));
        assert!(version_at_least("1.4", 1, 3));
        assert!(version_at_least("2.0", 1, 3));
        assert!(!version_at_least("1.2", 1, 3));
        assert!(!version_at_least("", 1, 3));
    }
}
