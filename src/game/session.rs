//! A versus game: three lanes racing to the same secret
//!
//! Each round the human guesses first, then the language-model lane, then the
//! bot. Every lane is scored against the shared secret but only ever sees its
//! own feedback.

use super::lane::{Lane, LaneKind};
use super::secret::SecretSource;
use crate::config::GameConfig;
use crate::core::{GuessRecord, WORD_LENGTH, Word};
use crate::error::GameError;
use crate::guesser::{Guesser, GuesserRequest};
use crate::wordlists::Dictionary;
use log::{debug, info, trace, warn};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// First lane, in play order, to find the secret
    Won(LaneKind),
    /// The human used every guess without anyone solving it
    Exhausted,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Outcome of one full round
///
/// `None` means the lane sat the round out (no guesser configured, or it had
/// already finished).
#[derive(Debug)]
pub struct RoundReport {
    pub human: GuessRecord,
    pub llm: Option<Result<GuessRecord, GameError>>,
    pub bot: Option<Result<GuessRecord, GameError>>,
    pub status: GameStatus,
}

/// State for one game, owned by the caller
pub struct GameSession<'a, S: SecretSource> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    secret_source: S,
    secret: Word,
    human: Lane,
    llm: Lane,
    bot: Lane,
    status: GameStatus,
}

impl<'a, S: SecretSource> GameSession<'a, S> {
    /// Draw a secret and set up fresh lanes
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyAnswerSet` if there is no secret to draw.
    pub fn new(
        dictionary: &'a Dictionary,
        config: GameConfig,
        mut secret_source: S,
    ) -> Result<Self, GameError> {
        let answers = dictionary.answers();
        let secret = draw_secret(&mut secret_source, answers)?;

        Ok(Self {
            dictionary,
            config,
            secret_source,
            secret,
            human: Lane::new(LaneKind::Human, answers),
            llm: Lane::new(LaneKind::Llm, answers),
            bot: Lane::new(LaneKind::Bot, answers),
            status: GameStatus::InProgress,
        })
    }

    /// Discard the secret and every lane's history, then draw again
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyAnswerSet` if there is no secret to draw. The
    /// previous game is left untouched in that case.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let answers = self.dictionary.answers();
        self.secret = draw_secret(&mut self.secret_source, answers)?;
        for lane in [&mut self.human, &mut self.llm, &mut self.bot] {
            lane.reset(answers);
        }
        self.status = GameStatus::InProgress;
        Ok(())
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn lane(&self, kind: LaneKind) -> &Lane {
        match kind {
            LaneKind::Human => &self.human,
            LaneKind::Llm => &self.llm,
            LaneKind::Bot => &self.bot,
        }
    }

    /// The secret, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.status.is_over().then_some(&self.secret)
    }

    /// Check a human guess without touching any state
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidGuessLength` if the input is not 5 characters
    /// - `GameError::NotInAllowedSet` if it is not an allowed word
    pub fn validate_guess(&self, input: &str) -> Result<Word, GameError> {
        let input = input.trim();
        let length = input.chars().count();
        if length != WORD_LENGTH {
            return Err(GameError::InvalidGuessLength(length));
        }

        let rejected = || GameError::NotInAllowedSet(input.to_uppercase());
        if !self.dictionary.is_allowed(input) {
            return Err(rejected());
        }
        Word::new(input).map_err(|_| rejected())
    }

    /// Validate, score and record the human's guess
    ///
    /// # Errors
    ///
    /// Fails without mutating anything if the game is over, the human lane is
    /// finished, or the guess is invalid.
    pub fn submit_human_guess(&mut self, input: &str) -> Result<GuessRecord, GameError> {
        self.ensure_playable(LaneKind::Human)?;
        let word = self.validate_guess(input)?;

        let record = GuessRecord::scored(word, &self.secret);
        debug!("human guessed {} -> {}", record.word(), record.feedback());
        self.human.commit(record.clone(), None);
        Ok(record)
    }

    /// Ask the external guesser for the language-model lane's next guess
    ///
    /// The guesser's contract asks it not to repeat a guess; a repeat is
    /// still recorded like any other guess.
    ///
    /// # Errors
    ///
    /// Returns `GameError::ExternalGuesserFailure` if the guesser fails or
    /// returns something that is not a five-letter word. The lane is left
    /// exactly as it was. Returns `GameError::GameOver` once the game has
    /// ended.
    pub fn play_llm_turn(&mut self, guesser: &mut dyn Guesser) -> Result<GuessRecord, GameError> {
        self.ensure_playable(LaneKind::Llm)?;

        let request = GuesserRequest::from_history(self.llm.history());
        let reply = guesser
            .guess(&request)
            .inspect_err(|e| warn!("LLM turn failed: {e}"))?;
        let word = reply
            .word()
            .inspect_err(|e| warn!("LLM turn failed: {e}"))?;

        if !self.dictionary.is_allowed(word.text()) {
            warn!("LLM guessed {word}, which is not in the allowed list");
        }
        if self.llm.history().iter().any(|r| r.word() == &word) {
            warn!("LLM repeated an earlier guess: {word}");
        }

        let record = GuessRecord::scored(word, &self.secret);
        debug!("LLM guessed {} -> {}", record.word(), record.feedback());
        self.llm.commit(record.clone(), Some(reply.reason));
        Ok(record)
    }

    /// Let the bot make its next guess
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoCandidatesRemaining` if the bot's feedback rules
    /// out every answer word, or `GameError::GameOver` once the game has ended.
    pub fn play_bot_turn(&mut self) -> Result<GuessRecord, GameError> {
        self.ensure_playable(LaneKind::Bot)?;

        let guess = self.bot.filter().next_guess(&self.config)?;
        let record = GuessRecord::scored(guess.word, &self.secret);
        debug!(
            "bot guessed {} -> {} ({} candidates left)",
            record.word(),
            record.feedback(),
            self.bot.filter().count()
        );
        self.bot.commit(record.clone(), Some(guess.rationale));
        Ok(record)
    }

    /// Settle the game's status after the lanes have played
    pub fn finish_round(&mut self) -> GameStatus {
        if self.status.is_over() {
            return self.status;
        }

        if let Some(winner) = LaneKind::ALL
            .into_iter()
            .find(|&kind| self.lane(kind).is_solved())
        {
            info!("{winner} lane solved the puzzle");
            self.status = GameStatus::Won(winner);
        } else if self.human.is_finished(self.config.max_guesses) {
            info!("out of guesses, the secret was {}", self.secret);
            self.status = GameStatus::Exhausted;
        }
        self.status
    }

    /// Play one full round: human, then the language model, then the bot
    ///
    /// Failures in the later lanes are reported in the `RoundReport` and do
    /// not undo the human's guess.
    ///
    /// # Errors
    ///
    /// Returns the human's validation error, with nothing mutated.
    pub fn play_round(
        &mut self,
        input: &str,
        guesser: Option<&mut dyn Guesser>,
    ) -> Result<RoundReport, GameError> {
        let human = self.submit_human_guess(input)?;

        let llm = match guesser {
            Some(guesser) if self.is_active(LaneKind::Llm) => Some(self.play_llm_turn(guesser)),
            _ => None,
        };
        let bot = self
            .is_active(LaneKind::Bot)
            .then(|| self.play_bot_turn());

        let status = self.finish_round();
        Ok(RoundReport {
            human,
            llm,
            bot,
            status,
        })
    }

    /// Whether `kind` can still guess this game
    #[must_use]
    pub fn is_active(&self, kind: LaneKind) -> bool {
        !self.status.is_over() && !self.lane(kind).is_finished(self.config.max_guesses)
    }

    fn ensure_playable(&self, kind: LaneKind) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        self.ensure_active(kind)
    }

    fn ensure_active(&self, kind: LaneKind) -> Result<(), GameError> {
        if self.lane(kind).is_finished(self.config.max_guesses) {
            return Err(GameError::OutOfGuesses(kind));
        }
        Ok(())
    }
}

fn draw_secret<S: SecretSource>(source: &mut S, answers: &[Word]) -> Result<Word, GameError> {
    let secret = source.draw(answers).ok_or(GameError::EmptyAnswerSet)?;
    if !answers.contains(&secret) {
        warn!("secret {secret} is not in the answer list; the bot may run out of candidates");
    }
    info!("new game drawn from {} answers", answers.len());
    trace!("secret is {secret}");
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::game::FixedSecret;
    use crate::guesser::{GuesserError, ScriptedGuesser};
    use crate::solver::{FILTERED_RATIONALE, LAST_GUESS_RATIONALE};
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        let allowed = words_from_slice(&["slate", "crony", "zesty", "audio"]);
        let answers = words_from_slice(&["crane", "crate", "trace", "grace", "brace"]);
        Dictionary::new(&allowed, answers)
    }

    fn session<'a>(dictionary: &'a Dictionary, secret: &str) -> GameSession<'a, FixedSecret> {
        GameSession::new(
            dictionary,
            GameConfig::default(),
            FixedSecret(Word::new(secret).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn empty_answer_list_cannot_start() {
        let dictionary = Dictionary::new(&[], Vec::new());
        let result = GameSession::new(
            &dictionary,
            GameConfig::default(),
            FixedSecret(Word::new("crane").unwrap()),
        );
        assert!(matches!(result, Err(GameError::EmptyAnswerSet)));
    }

    #[test]
    fn human_guess_is_scored_against_secret() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");

        let record = game.submit_human_guess("crane").unwrap();
        assert_eq!(
            record.feedback(),
            &Feedback::score(&Word::new("crane").unwrap(), &Word::new("crate").unwrap())
        );
        assert_eq!(game.lane(LaneKind::Human).history().len(), 1);
        assert!(game.lane(LaneKind::Bot).history().is_empty());
    }

    #[test]
    fn wrong_length_is_rejected_without_mutation() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");

        assert!(matches!(
            game.submit_human_guess("cran"),
            Err(GameError::InvalidGuessLength(4))
        ));
        assert!(matches!(
            game.submit_human_guess("cranes"),
            Err(GameError::InvalidGuessLength(6))
        ));
        assert!(game.lane(LaneKind::Human).history().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected_without_mutation() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");

        match game.submit_human_guess("zzzzz") {
            Err(GameError::NotInAllowedSet(word)) => assert_eq!(word, "ZZZZZ"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            game.submit_human_guess("cr4ne"),
            Err(GameError::NotInAllowedSet(_))
        ));
        assert!(game.lane(LaneKind::Human).history().is_empty());
    }

    #[test]
    fn llm_guess_is_uppercased_and_recorded_with_reason() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");
        let mut guesser = ScriptedGuesser::new().with_reply("slate", "vowels first");

        let record = game.play_llm_turn(&mut guesser).unwrap();
        assert_eq!(record.word().text(), "SLATE");

        let lane = game.lane(LaneKind::Llm);
        assert_eq!(lane.history().len(), 1);
        assert_eq!(lane.rationales(), [Some("vowels first".to_string())]);
    }

    #[test]
    fn llm_sees_only_its_own_history() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");
        let mut guesser = ScriptedGuesser::new()
            .with_reply("slate", "")
            .with_reply("trace", "");

        game.play_round("crony", Some(&mut guesser)).unwrap();
        game.play_round("zesty", Some(&mut guesser)).unwrap();

        let requests = guesser.requests();
        assert!(requests[0].history.is_empty());
        assert_eq!(requests[1].history, ["SLATE"]);
        assert_eq!(requests[1].feedback.len(), 1);
    }

    #[test]
    fn failed_llm_turn_leaves_lane_untouched() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");
        let mut guesser = ScriptedGuesser::new()
            .with_reply("slate", "")
            .with_failure(GuesserError::Reported {
                error: "Bad response".to_string(),
                raw: serde_json::Value::Null,
            })
            .with_reply("toolong", "");

        game.play_llm_turn(&mut guesser).unwrap();
        let before = game.lane(LaneKind::Llm).filter().candidates().to_vec();

        assert!(matches!(
            game.play_llm_turn(&mut guesser),
            Err(GameError::ExternalGuesserFailure(GuesserError::Reported { .. }))
        ));
        assert!(matches!(
            game.play_llm_turn(&mut guesser),
            Err(GameError::ExternalGuesserFailure(GuesserError::InvalidGuess { .. }))
        ));

        let lane = game.lane(LaneKind::Llm);
        assert_eq!(lane.history().len(), 1);
        assert_eq!(lane.rationales().len(), 1);
        assert_eq!(lane.filter().candidates(), before.as_slice());
    }

    #[test]
    fn repeated_llm_guess_is_still_recorded() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");
        let mut guesser = ScriptedGuesser::new()
            .with_reply("slate", "")
            .with_reply("SLATE", "again");

        game.play_llm_turn(&mut guesser).unwrap();
        game.play_llm_turn(&mut guesser).unwrap();
        assert_eq!(game.lane(LaneKind::Llm).history().len(), 2);
    }

    #[test]
    fn bot_opens_then_follows_candidates() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "brace");

        let first = game.play_bot_turn().unwrap();
        assert_eq!(first.word(), &GameConfig::default().opener);

        let second = game.play_bot_turn().unwrap();
        let lane = game.lane(LaneKind::Bot);
        assert!(dictionary.answers().contains(second.word()));
        assert_eq!(lane.rationales()[1].as_deref(), Some(FILTERED_RATIONALE));
        assert!(lane.filter().candidates().contains(&Word::new("brace").unwrap()));
    }

    #[test]
    fn bot_always_solves_within_budget_when_secret_is_an_answer() {
        let dictionary = dictionary();
        for secret in dictionary.answers() {
            let mut game = session(&dictionary, secret.text());
            while game.is_active(LaneKind::Bot) {
                game.play_bot_turn().unwrap();
            }
            assert!(game.lane(LaneKind::Bot).is_solved(), "bot missed {secret}");
        }
    }

    #[test]
    fn bot_reports_last_guess() {
        let dictionary = dictionary();
        let config = GameConfig::default().with_max_guesses(2);
        let mut game = GameSession::new(
            &dictionary,
            config,
            FixedSecret(Word::new("brace").unwrap()),
        )
        .unwrap();

        game.play_bot_turn().unwrap();
        game.play_bot_turn().unwrap();
        assert_eq!(
            game.lane(LaneKind::Bot).rationales()[1].as_deref(),
            Some(LAST_GUESS_RATIONALE)
        );
        assert!(matches!(
            game.play_bot_turn(),
            Err(GameError::OutOfGuesses(LaneKind::Bot))
        ));
    }

    #[test]
    fn bot_with_secret_outside_answers_reports_no_candidates() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "zesty");

        game.play_bot_turn().unwrap();
        assert!(matches!(
            game.play_bot_turn(),
            Err(GameError::NoCandidatesRemaining)
        ));
        assert_eq!(game.lane(LaneKind::Bot).history().len(), 1);
    }

    #[test]
    fn human_win_ends_the_game() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");

        let report = game.play_round("CRATE", None).unwrap();
        assert!(report.human.is_solved());
        assert!(report.llm.is_none());
        assert!(report.bot.is_some());
        assert_eq!(report.status, GameStatus::Won(LaneKind::Human));
        assert_eq!(game.revealed_secret().unwrap().text(), "CRATE");

        assert!(matches!(
            game.submit_human_guess("crane"),
            Err(GameError::GameOver)
        ));
    }

    #[test]
    fn llm_still_plays_the_round_the_human_wins() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");
        let mut guesser = ScriptedGuesser::new().with_reply("crate", "");

        let report = game.play_round("crate", Some(&mut guesser)).unwrap();
        assert!(report.llm.unwrap().unwrap().is_solved());
        // Human plays first, so the human takes the win
        assert_eq!(report.status, GameStatus::Won(LaneKind::Human));
    }

    #[test]
    fn llm_failure_does_not_undo_human_guess() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");
        let mut guesser =
            ScriptedGuesser::new().with_failure(GuesserError::Malformed("nope".to_string()));

        let report = game.play_round("slate", Some(&mut guesser)).unwrap();
        assert!(matches!(
            report.llm,
            Some(Err(GameError::ExternalGuesserFailure(_)))
        ));
        assert_eq!(game.lane(LaneKind::Human).history().len(), 1);
        assert!(game.lane(LaneKind::Llm).history().is_empty());
        assert_eq!(report.status, GameStatus::InProgress);
    }

    #[test]
    fn opponents_cannot_play_after_game_over() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");
        game.play_round("crate", None).unwrap();
        let bot_turns = game.lane(LaneKind::Bot).history().len();

        let mut guesser = ScriptedGuesser::new().with_reply("crane", "");
        assert!(matches!(
            game.play_llm_turn(&mut guesser),
            Err(GameError::GameOver)
        ));
        assert!(matches!(game.play_bot_turn(), Err(GameError::GameOver)));

        assert!(guesser.requests().is_empty());
        assert!(game.lane(LaneKind::Llm).history().is_empty());
        assert_eq!(game.lane(LaneKind::Bot).history().len(), bot_turns);
    }

    #[test]
    fn exhausted_when_human_runs_out() {
        let dictionary = dictionary();
        let config = GameConfig::default()
            .with_max_guesses(1)
            .with_opener(Word::new("audio").unwrap());
        let mut game = GameSession::new(
            &dictionary,
            config,
            FixedSecret(Word::new("crate").unwrap()),
        )
        .unwrap();

        let report = game.play_round("slate", None).unwrap();
        assert_eq!(report.status, GameStatus::Exhausted);
        assert!(game.revealed_secret().is_some());
    }

    #[test]
    fn new_game_resets_lanes() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crate");
        game.play_round("crate", None).unwrap();
        assert!(game.status().is_over());

        game.new_game().unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.revealed_secret().is_none());
        for kind in LaneKind::ALL {
            assert!(game.lane(kind).history().is_empty());
            assert_eq!(game.lane(kind).filter().count(), dictionary.answers().len());
        }
    }
}
