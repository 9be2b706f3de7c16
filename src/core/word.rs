//! Per-column word state
//!
//! A `PuzzleWord` tracks one column: the answer, which positions are revealed,
//! what the player has typed into the blanks, and the grading flags.

/// One column word of a puzzle
///
/// Position 0 is the key letter and is revealed from the moment the word is
/// created; it never becomes hidden again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleWord {
    pub(crate) word: String,
    pub(crate) revealed: Vec<bool>,
    pub(crate) user_input: Vec<Option<char>>,
    pub(crate) guessed: bool,
    pub(crate) correct: bool,
    pub(crate) auto_completed: bool,
    pub(crate) hints_used: usize,
    pub(crate) blanks_at_word_phase: usize,
}

impl PuzzleWord {
    /// Create a fresh column word with only the key letter revealed
    ///
    /// The answer must already be validated as lowercase ASCII; content
    /// validation happens in [`crate::core::PuzzleContent`].
    #[must_use]
    pub(crate) fn new(word: &str) -> Self {
        let len = word.len();
        let mut revealed = vec![false; len];
        revealed[0] = true;

        Self {
            word: word.to_string(),
            revealed,
            user_input: vec![None; len],
            guessed: false,
            correct: false,
            auto_completed: false,
            hints_used: 0,
            blanks_at_word_phase: 0,
        }
    }

    /// The answer word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of letters in the answer
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// True only for the degenerate empty word, which validation forbids
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// The answer letter at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.word.as_bytes()[position] as char
    }

    /// Reveal flags, one per position
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    /// Whether a single position is revealed
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.revealed[position]
    }

    /// The player's typed letters, one slot per position
    #[inline]
    #[must_use]
    pub fn user_input(&self) -> &[Option<char>] {
        &self.user_input
    }

    /// Whether the word has been graded
    #[inline]
    #[must_use]
    pub fn is_guessed(&self) -> bool {
        self.guessed
    }

    /// Whether grading found the word correct
    #[inline]
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// Whether every position was revealed during the letter phase
    #[inline]
    #[must_use]
    pub fn is_auto_completed(&self) -> bool {
        self.auto_completed
    }

    /// Hints spent on this word
    #[inline]
    #[must_use]
    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    /// Blank count frozen at the letters-to-words transition
    ///
    /// Later hint reveals do not reduce this value; it is the scoring
    /// authority for the blank multiplier.
    #[inline]
    #[must_use]
    pub fn blanks_at_word_phase(&self) -> usize {
        self.blanks_at_word_phase
    }

    /// Number of positions still unrevealed
    #[inline]
    #[must_use]
    pub fn unrevealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    /// Whether every position is revealed
    #[inline]
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    /// The letter shown to the player at a position, if any
    ///
    /// Revealed positions show the answer letter; unrevealed positions show
    /// whatever the player typed.
    #[must_use]
    pub fn visible_letter(&self, position: usize) -> Option<char> {
        if self.revealed[position] {
            Some(self.char_at(position))
        } else {
            self.user_input[position]
        }
    }

    /// Grade the typed input overlaid with the revealed letters
    ///
    /// Revealed positions always match by construction; every unrevealed
    /// position must carry the exact answer letter.
    #[must_use]
    pub(crate) fn filled_correctly(&self) -> bool {
        (0..self.len()).all(|i| self.visible_letter(i) == Some(self.char_at(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_word_reveals_only_key_letter() {
        let word = PuzzleWord::new("slam");
        assert_eq!(word.revealed(), &[true, false, false, false]);
        assert_eq!(word.user_input(), &[None, None, None, None]);
        assert!(!word.is_guessed());
        assert!(!word.is_correct());
        assert!(!word.is_auto_completed());
        assert_eq!(word.hints_used(), 0);
    }

    #[test]
    fn unrevealed_count_ignores_key_letter() {
        let word = PuzzleWord::new("teapot");
        assert_eq!(word.unrevealed_count(), 5);
        assert!(!word.is_fully_revealed());
    }

    #[test]
    fn visible_letter_prefers_revealed_answer() {
        let mut word = PuzzleWord::new("slam");
        word.revealed[2] = true;
        word.user_input[1] = Some('x');

        assert_eq!(word.visible_letter(0), Some('s'));
        assert_eq!(word.visible_letter(1), Some('x'));
        assert_eq!(word.visible_letter(2), Some('a'));
        assert_eq!(word.visible_letter(3), None);
    }

    #[test]
    fn filled_correctly_requires_every_blank() {
        let mut word = PuzzleWord::new("slam");
        word.user_input[1] = Some('l');
        word.user_input[2] = Some('a');
        assert!(!word.filled_correctly());

        word.user_input[3] = Some('m');
        assert!(word.filled_correctly());
    }

    #[test]
    fn filled_correctly_rejects_wrong_letter() {
        let mut word = PuzzleWord::new("slam");
        word.user_input[1] = Some('l');
        word.user_input[2] = Some('a');
        word.user_input[3] = Some('p');
        assert!(!word.filled_correctly());
    }

    #[test]
    fn fully_revealed_word_is_filled_correctly() {
        let mut word = PuzzleWord::new("slam");
        for flag in &mut word.revealed {
            *flag = true;
        }
        assert!(word.is_fully_revealed());
        assert!(word.filled_correctly());
    }
}
