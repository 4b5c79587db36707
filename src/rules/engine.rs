//! The match state machine.
//!
//! ```text
//! NotStarted --setup()--> InProgress --play_turn()*--> Finished(result)
//! ```
//!
//! `setup` deals from a seeded shuffle and places the opening tile. Each
//! `play_turn` resolves exactly one player's turn: play, draw until a play
//! appears, or pass once the boneyard is exhausted. A full round of passes
//! blocks the board and the lowest pip sum wins.
//!
//! ## Example
//!
//! ```
//! use domino_engine::core::MatchConfig;
//! use domino_engine::rules::MatchEngine;
//!
//! let config = MatchConfig::new(["Alice", "Bob"]).with_seed(7);
//! let mut engine = MatchEngine::new(config).unwrap();
//! engine.setup().unwrap();
//!
//! let result = engine.run().unwrap();
//! assert!(engine.is_finished());
//! assert!(engine.check_conservation().is_ok());
//! println!("{} wins by {}", engine.player_name(result.winner), result.reason);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::core::{deck, DominoError, GameRng, MatchConfig, Move, PlayerId, PlayerMap, Result, Side, Tile};
use crate::events::{EventRecord, MatchEvent};
use crate::policy::{FirstLegal, MovePolicy, TurnView};
use crate::zones::{Board, Boneyard, Hand, MoveList};

use super::result::{MatchResult, WinReason};
use super::start::find_starting_tile;

/// Lifecycle of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Created, not yet dealt.
    NotStarted,
    /// Dealt and opened; turns are being played.
    InProgress,
    /// Ended with a result.
    Finished(MatchResult),
}

impl MatchPhase {
    /// Short name used in errors and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MatchPhase::NotStarted => "not-started",
            MatchPhase::InProgress => "in-progress",
            MatchPhase::Finished(_) => "finished",
        }
    }
}

/// Where every tile is and whose turn it is.
///
/// Enough to resume a match that was interrupted between turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Hands in seat order.
    pub hands: PlayerMap<Hand>,
    /// Placed tiles.
    pub board: Board,
    /// Draw pile.
    pub boneyard: Boneyard,
    /// Seat on turn.
    pub current: PlayerId,
    /// Passes since the last play.
    pub consecutive_passes: usize,
}

/// What one call to [`MatchEngine::play_turn`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// A tile was attached to the board.
    Played {
        /// The tile in its placed orientation.
        tile: Tile,
        /// End it was attached to.
        side: Side,
    },
    /// No play was possible.
    Passed,
}

/// Summary of one resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Seat that took the turn.
    pub player: PlayerId,
    /// Tiles drawn from the boneyard during the turn.
    pub drawn: usize,
    /// Play or pass.
    pub action: TurnAction,
}

/// A single domino match.
///
/// Owns the board, boneyard, hands and turn pointer. Not internally
/// synchronized; drive one engine from one thread at a time.
pub struct MatchEngine<P = FirstLegal> {
    config: MatchConfig,
    names: PlayerMap<String>,
    hands: PlayerMap<Hand>,
    board: Board,
    boneyard: Boneyard,
    current: PlayerId,
    consecutive_passes: usize,
    turn_number: u32,
    phase: MatchPhase,
    events: Vector<EventRecord>,
    policy: P,
}

impl MatchEngine<FirstLegal> {
    /// Create a match that plays the first legal move every turn.
    pub fn new(config: MatchConfig) -> Result<Self> {
        Self::with_policy(config, FirstLegal)
    }
}

impl<P: MovePolicy> MatchEngine<P> {
    /// Create a match with a custom move policy.
    pub fn with_policy(config: MatchConfig, policy: P) -> Result<Self> {
        config.validate()?;
        let player_count = config.player_count();

        Ok(Self {
            names: PlayerMap::from_vec(config.player_names.clone()),
            hands: PlayerMap::with_default(player_count),
            board: Board::new(),
            boneyard: Boneyard::default(),
            current: PlayerId::new(0),
            consecutive_passes: 0,
            turn_number: 0,
            phase: MatchPhase::NotStarted,
            events: Vector::new(),
            policy,
            config,
        })
    }

    /// Continue a match from a saved position.
    ///
    /// The position must hold every tile of the configured deck exactly
    /// once and have a non-empty board.
    pub fn resume(config: MatchConfig, position: Position, policy: P) -> Result<Self> {
        config.validate()?;
        let player_count = config.player_count();

        if position.hands.player_count() != player_count {
            return Err(DominoError::config(format!(
                "position has {} hands for {player_count} players",
                position.hands.player_count()
            )));
        }
        if position.current.index() >= player_count {
            return Err(DominoError::config(format!(
                "{} is not seated in a {player_count}-player match",
                position.current
            )));
        }
        if position.consecutive_passes >= player_count {
            return Err(DominoError::config("position is already blocked"));
        }

        let board = Board::from_placed(position.board.iter())?;
        if board.is_empty() {
            return Err(DominoError::config("position has no opening tile"));
        }

        let all_tiles = position
            .hands
            .values()
            .flat_map(|hand| hand.tiles().iter().copied())
            .chain(board.iter())
            .chain(position.boneyard.tiles().iter().copied());
        deck::census(config.max_pip, all_tiles)?;

        if let Some((player, _)) = position.hands.iter().find(|(_, hand)| hand.is_empty()) {
            return Err(DominoError::config(format!("{player} has already emptied their hand")));
        }

        info!(
            players = player_count,
            board = board.len(),
            boneyard = position.boneyard.len(),
            current = %position.current,
            "resumed match"
        );

        Ok(Self {
            names: PlayerMap::from_vec(config.player_names.clone()),
            hands: position.hands,
            board,
            boneyard: position.boneyard,
            current: position.current,
            consecutive_passes: position.consecutive_passes,
            turn_number: 0,
            phase: MatchPhase::InProgress,
            events: Vector::new(),
            policy,
            config,
        })
    }

    // === Lifecycle ===

    /// Shuffle, deal round by round and place the opening tile.
    ///
    /// The seat holding the opening tile is on turn afterwards.
    #[instrument(skip(self), fields(seed = self.config.seed))]
    pub fn setup(&mut self) -> Result<()> {
        if self.phase != MatchPhase::NotStarted {
            return Err(self.invalid_state());
        }

        let mut tiles = deck::generate(self.config.max_pip);
        let mut rng = GameRng::new(self.config.seed).for_context("deal");
        deck::shuffle(&mut tiles, &mut rng);

        for _ in 0..self.config.hand_size {
            for player in PlayerId::all(self.player_count()) {
                if let Some(tile) = tiles.pop() {
                    self.hands[player].insert(tile)?;
                }
            }
        }
        self.boneyard = Boneyard::new(tiles);

        for player in PlayerId::all(self.player_count()) {
            let dealt = self.hands[player].len();
            self.emit(MatchEvent::Dealt {
                player,
                tiles: dealt,
            });
        }

        let (starter, tile) = match find_starting_tile(&self.hands) {
            Some((player, tile)) => {
                self.hands[player].remove(tile)?;
                (player, tile)
            }
            None => {
                let tile = self.boneyard.draw().ok_or(DominoError::EmptyBoard)?;
                (PlayerId::new(0), tile)
            }
        };

        self.board = Board::with_opening(tile);
        self.current = starter;
        self.phase = MatchPhase::InProgress;
        self.emit(MatchEvent::Opened {
            player: starter,
            tile,
        });

        info!(
            players = self.player_count(),
            boneyard = self.boneyard.len(),
            starter = %starter,
            opening = %tile,
            "match set up"
        );

        if self.hands[starter].is_empty() {
            self.finish(MatchResult::hand_emptied(starter, self.pip_sums()));
        }

        Ok(())
    }

    /// Resolve the current player's turn.
    ///
    /// If the turn fails (for example the policy picks a move that is not
    /// legal), hands, boneyard, turn counter and event log are left as they
    /// were before the call.
    #[instrument(skip(self), fields(turn = self.turn_number + 1, player = %self.current))]
    pub fn play_turn(&mut self) -> Result<TurnOutcome> {
        if self.phase != MatchPhase::InProgress {
            return Err(self.invalid_state());
        }

        let player = self.current;
        let saved_hand = self.hands[player].clone();
        let saved_boneyard = self.boneyard.clone();
        let saved_events = self.events.len();

        self.turn_number += 1;
        match self.resolve_turn(player) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                self.turn_number -= 1;
                self.hands[player] = saved_hand;
                self.boneyard = saved_boneyard;
                self.events.truncate(saved_events);
                Err(err)
            }
        }
    }

    fn resolve_turn(&mut self, player: PlayerId) -> Result<TurnOutcome> {
        let (left, right) = self.board.open_ends()?;

        let mut drawn = 0;
        let mut played = self.try_play(player, left, right, false)?;
        while played.is_none() {
            let Some(tile) = self.boneyard.draw() else {
                break;
            };
            self.hands[player].insert(tile)?;
            drawn += 1;
            trace!(%tile, left = self.boneyard.len(), "drew");
            self.emit(MatchEvent::Drew {
                player,
                tile,
                boneyard_left: self.boneyard.len(),
            });
            played = self.try_play(player, left, right, true)?;
        }

        let action = match played {
            Some((tile, side)) => TurnAction::Played { tile, side },
            None => {
                self.consecutive_passes += 1;
                debug!(consecutive = self.consecutive_passes, "passed");
                self.emit(MatchEvent::Passed {
                    player,
                    consecutive: self.consecutive_passes,
                });
                TurnAction::Passed
            }
        };

        if matches!(action, TurnAction::Played { .. }) && self.hands[player].is_empty() {
            self.finish(MatchResult::hand_emptied(player, self.pip_sums()));
        } else if self.consecutive_passes >= self.player_count() {
            self.finish(MatchResult::blocked(self.pip_sums()));
        } else {
            self.current = player.next(self.player_count());
        }

        Ok(TurnOutcome {
            player,
            drawn,
            action,
        })
    }

    /// Play turns until the match finishes.
    ///
    /// Sets the match up first if needed. Calling `run` on a finished match
    /// returns its result again.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<MatchResult> {
        if self.phase == MatchPhase::NotStarted {
            self.setup()?;
        }

        let limit = self.config.turn_limit();
        while self.phase == MatchPhase::InProgress {
            if self.turn_number as usize >= limit {
                return Err(DominoError::InvalidState {
                    phase: "in-progress past its turn limit",
                });
            }
            self.play_turn()?;
        }

        match &self.phase {
            MatchPhase::Finished(result) => Ok(result.clone()),
            _ => Err(self.invalid_state()),
        }
    }

    // === Queries ===

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> &MatchPhase {
        &self.phase
    }

    /// True once a result exists.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, MatchPhase::Finished(_))
    }

    /// The result, once finished.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        match &self.phase {
            MatchPhase::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.names.player_count()
    }

    /// Name of a seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    /// Seat on turn.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Passes since the last play.
    #[must_use]
    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    /// Turns resolved so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The boneyard.
    #[must_use]
    pub fn boneyard(&self) -> &Boneyard {
        &self.boneyard
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// All hands in seat order.
    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    /// Legal moves for the seat on turn. Only defined while in progress.
    pub fn legal_moves(&self) -> Result<MoveList> {
        if self.phase != MatchPhase::InProgress {
            return Err(self.invalid_state());
        }
        let (left, right) = self.board.open_ends()?;
        Ok(self.hands[self.current].legal_moves(left, right))
    }

    /// The move policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Full event log.
    #[must_use]
    pub fn events(&self) -> &Vector<EventRecord> {
        &self.events
    }

    /// Events recorded at or after `cursor`, for drivers polling the log.
    pub fn events_since(&self, cursor: usize) -> impl Iterator<Item = &EventRecord> + '_ {
        self.events.iter().skip(cursor)
    }

    /// Snapshot of tile locations and turn state.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            hands: self.hands.clone(),
            board: self.board.clone(),
            boneyard: self.boneyard.clone(),
            current: self.current,
            consecutive_passes: self.consecutive_passes,
        }
    }

    /// Check that hands, board and boneyard together hold the deck exactly
    /// once. Before setup everything is still in the undealt deck, so this
    /// trivially holds.
    pub fn check_conservation(&self) -> Result<()> {
        if self.phase == MatchPhase::NotStarted {
            return Ok(());
        }
        let all_tiles = self
            .hands
            .values()
            .flat_map(|hand| hand.tiles().iter().copied())
            .chain(self.board.iter())
            .chain(self.boneyard.tiles().iter().copied());
        deck::census(self.config.max_pip, all_tiles)
    }

    // === Internals ===

    /// Let the policy pick and apply a move if one exists.
    fn try_play(
        &mut self,
        player: PlayerId,
        left: u8,
        right: u8,
        after_draw: bool,
    ) -> Result<Option<(Tile, Side)>> {
        let hand = &self.hands[player];
        let moves = hand.legal_moves(left, right);
        if moves.is_empty() {
            return Ok(None);
        }

        let view = TurnView {
            player,
            hand,
            left,
            right,
            board_len: self.board.len(),
            boneyard_len: self.boneyard.len(),
        };
        let chosen: Move = self.policy.choose(&view, &moves);
        if !moves.contains(&chosen) {
            return Err(DominoError::IllegalMove {
                tile: chosen.tile,
                side: chosen.side,
                end: self.board.end(chosen.side)?,
            });
        }

        let placed = self.board.attach(chosen.tile, chosen.side)?;
        self.hands[player].remove(chosen.tile)?;
        self.consecutive_passes = 0;

        debug!(tile = %placed, side = %chosen.side, after_draw, policy = self.policy.name(), "played");
        self.emit(MatchEvent::Played {
            player,
            tile: placed,
            side: chosen.side,
            after_draw,
            board: self.board.snapshot(),
        });

        Ok(Some((placed, chosen.side)))
    }

    fn finish(&mut self, result: MatchResult) {
        info!(
            winner = %result.winner,
            name = %self.names[result.winner],
            reason = %result.reason,
            turns = self.turn_number,
            "match finished"
        );
        if result.reason == WinReason::BlockedLowestPipSum && result.tied_players().len() > 1 {
            debug!(tied = ?result.tied_players(), "blocked tie broken by seat order");
        }
        self.emit(MatchEvent::Finished {
            result: result.clone(),
        });
        self.phase = MatchPhase::Finished(result);
    }

    fn pip_sums(&self) -> PlayerMap<u32> {
        self.hands.map(Hand::pip_sum)
    }

    fn emit(&mut self, event: MatchEvent) {
        let sequence = self.events.len() as u32;
        self.events
            .push_back(EventRecord::new(self.turn_number, sequence, event));
    }

    fn invalid_state(&self) -> DominoError {
        DominoError::InvalidState {
            phase: self.phase.name(),
        }
    }
}
