//! In-memory session state for a design workspace.
//!
//! All mutable state lives here and is passed by reference to the pure
//! service functions. Nothing in this struct is persisted; a session lasts
//! as long as the process.

use crate::models::{ColorMatch, Palette, PatternGrid, RgbColor, YarnRecord};

/// Default trope ring color before the user picks a trope.
const DEFAULT_TROPE_COLOR: RgbColor = RgbColor::new(0x66, 0x33, 0x99);

/// Grid dimensions and per-square color count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    /// Number of rows (1-20 in the UI).
    pub rows: usize,
    /// Number of columns (1-20 in the UI).
    pub columns: usize,
    /// Colors per square (1 to min(10, palette size)).
    pub colors_per_square: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
            colors_per_square: 4,
        }
    }
}

/// Book metadata for the book-inspired workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct BookInfo {
    /// Book title, used in the design sheet filename.
    pub title: String,
    /// Author, display only.
    pub author: String,
    /// Selected trope name, empty until chosen.
    pub trope: String,
    /// Outermost ring color. Set automatically when a trope is selected,
    /// adjustable afterwards.
    pub trope_color: RgbColor,
}

impl Default for BookInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            trope: String::new(),
            trope_color: DEFAULT_TROPE_COLOR,
        }
    }
}

/// Token identifying one extraction request.
///
/// Tokens are issued in increasing order; only the most recently issued
/// token may apply its result. This closes the stale-result race where a
/// slow extraction started earlier would otherwise overwrite the palette
/// produced by a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionToken(u64);

/// Everything a workspace session holds in memory.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Working palette the grid draws from.
    pub palette: Palette,
    /// Yarn stash, replaced wholesale on every successful parse.
    pub stash: Vec<YarnRecord>,
    /// Current color-to-yarn matches, sorted ascending by distance.
    pub matches: Vec<ColorMatch>,
    /// Book metadata for the book-inspired workflow.
    pub book: BookInfo,
    /// Grid dimensions and color count.
    pub grid_settings: GridSettings,
    /// The last generated grid, if any.
    pub grid: Option<PatternGrid>,
    /// Highest extraction token issued so far.
    latest_extraction: u64,
    /// Colors as the last extraction produced them, by extraction order.
    /// Lets an edited palette entry be reset to its original value.
    extraction_originals: Vec<RgbColor>,
}

impl SessionState {
    /// Creates a fresh session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new extraction request and returns its token.
    ///
    /// Any token issued earlier becomes stale immediately.
    pub fn begin_extraction(&mut self) -> ExtractionToken {
        self.latest_extraction += 1;
        ExtractionToken(self.latest_extraction)
    }

    /// Applies an extraction result if its token is still the latest.
    ///
    /// Returns `true` if the palette was replaced; `false` means the result
    /// was stale and has been discarded.
    pub fn accept_extraction(&mut self, token: ExtractionToken, colors: Vec<RgbColor>) -> bool {
        if token.0 != self.latest_extraction {
            log::debug!(
                "discarding stale extraction result (token {} < {})",
                token.0,
                self.latest_extraction
            );
            return false;
        }
        self.palette = Palette::from_colors(colors);
        self.extraction_originals = self.palette.colors().to_vec();
        true
    }

    /// The originally extracted color at a palette position, if that
    /// position came from the last extraction.
    #[must_use]
    pub fn original_color(&self, index: usize) -> Option<RgbColor> {
        self.extraction_originals.get(index).copied()
    }

    /// Replaces the stash wholesale and drops matches computed against the
    /// old stash.
    pub fn set_stash(&mut self, yarns: Vec<YarnRecord>) {
        self.stash = yarns;
        self.matches.clear();
    }

    /// Stores a freshly computed match list.
    pub fn set_matches(&mut self, matches: Vec<ColorMatch>) {
        self.matches = matches;
    }

    /// Replaces the yarn of one match with a stash entry chosen by the user.
    ///
    /// The match's distance field keeps its last automatically computed
    /// value. Fails if the index or yarn id does not exist.
    pub fn manual_rematch(&mut self, index: usize, yarn_id: &str) -> anyhow::Result<()> {
        let yarn = self
            .stash
            .iter()
            .find(|y| y.id == yarn_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No yarn with id '{yarn_id}' in the stash"))?;

        let entry = self
            .matches
            .get_mut(index)
            .ok_or_else(|| anyhow::anyhow!("No match at index {index}"))?;

        entry.override_yarn(yarn);
        Ok(())
    }

    /// Selects a trope, adopting its conventional color.
    pub fn select_trope(&mut self, name: impl Into<String>, color: RgbColor) {
        self.book.trope = name.into();
        self.book.trope_color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yarn(id: &str, r: u8) -> YarnRecord {
        let mut y = YarnRecord::new(id, format!("Yarn {id}"));
        y.color = RgbColor::new(r, 0, 0);
        y
    }

    #[test]
    fn test_latest_extraction_wins() {
        let mut session = SessionState::new();
        let stale = session.begin_extraction();
        let fresh = session.begin_extraction();

        // The newer request resolves first
        assert!(session.accept_extraction(fresh, vec![RgbColor::new(1, 1, 1)]));
        // The older one arrives late and is discarded
        assert!(!session.accept_extraction(stale, vec![RgbColor::new(9, 9, 9)]));

        assert_eq!(session.palette.colors(), &[RgbColor::new(1, 1, 1)]);
    }

    #[test]
    fn test_reissued_token_is_single_use_per_generation() {
        let mut session = SessionState::new();
        let token = session.begin_extraction();
        assert!(session.accept_extraction(token, vec![RgbColor::new(1, 1, 1)]));
        // Same token again is still the latest generation, so it applies;
        // issuing a new token invalidates it
        let newer = session.begin_extraction();
        assert!(!session.accept_extraction(token, vec![RgbColor::new(2, 2, 2)]));
        assert!(session.accept_extraction(newer, vec![RgbColor::new(3, 3, 3)]));
    }

    #[test]
    fn test_original_color_survives_edit() {
        let mut session = SessionState::new();
        let token = session.begin_extraction();
        session.accept_extraction(token, vec![RgbColor::new(10, 10, 10)]);

        // Edit the palette entry, then the original is still available
        session.palette.replace_at(0, RgbColor::new(99, 99, 99));
        assert_eq!(session.original_color(0), Some(RgbColor::new(10, 10, 10)));
        assert_eq!(session.original_color(1), None);
    }

    #[test]
    fn test_set_stash_clears_matches() {
        let mut session = SessionState::new();
        session.set_stash(vec![yarn("1", 200)]);
        session.set_matches(vec![ColorMatch::new(
            RgbColor::new(200, 0, 0),
            session.stash[0].clone(),
        )]);
        assert_eq!(session.matches.len(), 1);

        session.set_stash(vec![yarn("2", 100)]);
        assert!(session.matches.is_empty());
    }

    #[test]
    fn test_manual_rematch_keeps_distance() {
        let mut session = SessionState::new();
        session.set_stash(vec![yarn("1", 250), yarn("2", 10)]);
        session.set_matches(vec![ColorMatch::new(
            RgbColor::new(255, 0, 0),
            session.stash[0].clone(),
        )]);
        let before = session.matches[0].distance;

        session.manual_rematch(0, "2").unwrap();
        assert_eq!(session.matches[0].yarn.id, "2");
        assert_eq!(session.matches[0].distance, before);
    }

    #[test]
    fn test_manual_rematch_unknown_yarn() {
        let mut session = SessionState::new();
        session.set_stash(vec![yarn("1", 250)]);
        session.set_matches(vec![ColorMatch::new(
            RgbColor::new(255, 0, 0),
            session.stash[0].clone(),
        )]);

        assert!(session.manual_rematch(0, "missing").is_err());
        assert!(session.manual_rematch(5, "1").is_err());
    }

    #[test]
    fn test_select_trope() {
        let mut session = SessionState::new();
        assert_eq!(session.book.trope_color, RgbColor::new(0x66, 0x33, 0x99));

        session.select_trope("Slow Burn", RgbColor::new(0xb9, 0xe2, 0x67));
        assert_eq!(session.book.trope, "Slow Burn");
        assert_eq!(session.book.trope_color, RgbColor::new(0xb9, 0xe2, 0x67));
    }
}
