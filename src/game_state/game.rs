//! The game state machine: turn order, selection, move commitment, status
//! transitions, and the promotion sub-flow.
//!
//! `Game` is the single writer of all mutable state. External collaborators
//! (renderers, input handlers) call the mutators below and read through the
//! accessors; they never touch the board directly. Play-path mutators fail
//! soft: malformed or out-of-turn input resolves to a deselection or a silent
//! no-op, never a panic or an error value.

use thiserror::Error;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{starting_board, PROMOTION_KINDS};
use crate::game_state::chess_types::{
    Color, GameSettings, GameStatus, MoveRecord, PendingPromotion, Piece, PieceKind, Position,
};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves};

/// Snapshot of the rules-visible state. Installed wholesale by the commit
/// step; never mutated field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub status: GameStatus,
}

/// Rejected board setups for [`Game::from_position`]. Setup is the one
/// fallible surface; once a game exists, play never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("no {0:?} king on the board")]
    MissingKing(Color),
    #[error("more than one {0:?} king on the board")]
    DuplicateKing(Color),
}

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    selected_position: Option<Position>,
    valid_moves: Vec<Position>,
    pending_promotion: Option<PendingPromotion>,
    history: Vec<MoveRecord>,
    settings: GameSettings,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a game from the variant's initial position.
    pub fn new() -> Self {
        Self::with_settings(GameSettings::default())
    }

    pub fn with_settings(settings: GameSettings) -> Self {
        Self {
            state: GameState {
                board: starting_board(),
                current_player: Color::White,
                status: GameStatus::Active,
            },
            selected_position: None,
            valid_moves: Vec::new(),
            pending_promotion: None,
            history: Vec::new(),
            settings,
        }
    }

    /// Start from an arbitrary board. Requires exactly one king per color;
    /// status is computed for `to_move`.
    pub fn from_position(
        board: Board,
        to_move: Color,
        settings: GameSettings,
    ) -> Result<Self, SetupError> {
        for color in [Color::White, Color::Black] {
            let kings = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(SetupError::MissingKing(color)),
                1 => {}
                _ => return Err(SetupError::DuplicateKing(color)),
            }
        }

        let status = compute_status(&board, to_move);
        Ok(Self {
            state: GameState {
                board,
                current_player: to_move,
                status,
            },
            selected_position: None,
            valid_moves: Vec::new(),
            pending_promotion: None,
            history: Vec::new(),
            settings,
        })
    }

    // --- Accessors ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.state.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn selected_position(&self) -> Option<Position> {
        self.selected_position
    }

    /// Highlighted legal targets for the current selection.
    #[inline]
    pub fn valid_moves(&self) -> &[Position] {
        &self.valid_moves
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    #[inline]
    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    /// Legal targets for the piece at `pos`, empty once the game is over or
    /// when `pos` does not hold the current player's piece.
    pub fn valid_moves_for(&self, pos: Position) -> Vec<Position> {
        if self.state.status.is_terminal() {
            return Vec::new();
        }
        legal_moves(&self.state.board, pos, self.state.current_player)
    }

    // --- Mutators ---

    /// Selection entry point for UI collaborators.
    ///
    /// An out-of-bounds position (the deselect sentinel) clears the selection,
    /// the highlights, and any pending promotion. While a promotion choice is
    /// pending, other selections are ignored so the handshake stays atomic.
    pub fn select_square(&mut self, pos: Position) {
        if !pos.in_bounds() {
            self.clear_selection();
            self.pending_promotion = None;
            return;
        }

        if self.pending_promotion.is_some() {
            return;
        }

        if let Some(selected) = self.selected_position {
            if self.valid_moves.contains(&pos) {
                let Some(piece) = self.state.board.piece_at(selected) else {
                    self.clear_selection();
                    return;
                };
                if piece.kind == PieceKind::Pawn && pos.level == piece.color.promotion_level() {
                    self.enter_promotion(selected, pos, piece);
                } else {
                    self.commit_move(selected, pos, None);
                }
                return;
            }
        }

        match self.state.board.piece_at(pos) {
            Some(piece) if piece.color == self.state.current_player => {
                self.selected_position = Some(pos);
                self.valid_moves = self.valid_moves_for(pos);
            }
            _ => self.clear_selection(),
        }
    }

    /// Commit `from -> to` directly. No-op unless the move is legal for the
    /// current player right now. A pawn move onto its promotion level through
    /// this entry promotes to the configured default piece.
    pub fn make_move(&mut self, from: Position, to: Position) {
        if self.state.status.is_terminal() || self.pending_promotion.is_some() {
            return;
        }
        let Some(piece) = self.state.board.piece_at(from) else {
            return;
        };
        if piece.color != self.state.current_player {
            return;
        }
        if !legal_moves(&self.state.board, from, piece.color).contains(&to) {
            return;
        }

        let promotion = (piece.kind == PieceKind::Pawn
            && to.level == piece.color.promotion_level())
        .then_some(self.settings.default_promotion_piece);
        self.commit_move(from, to, promotion);
    }

    /// Commit a promotion move with an explicit piece choice. No-op unless
    /// the move is a legal pawn move onto the promotion level and `kind` is a
    /// valid promotion piece.
    pub fn promote_pawn(&mut self, from: Position, to: Position, kind: PieceKind) {
        if self.state.status.is_terminal() || self.pending_promotion.is_some() {
            return;
        }
        if !PROMOTION_KINDS.contains(&kind) {
            return;
        }
        let Some(piece) = self.state.board.piece_at(from) else {
            return;
        };
        if piece.color != self.state.current_player
            || piece.kind != PieceKind::Pawn
            || to.level != piece.color.promotion_level()
        {
            return;
        }
        if !legal_moves(&self.state.board, from, piece.color).contains(&to) {
            return;
        }

        self.commit_move(from, to, Some(kind));
    }

    /// Resolve a pending promotion. No-op without a live pending promotion
    /// and selection, or with a kind outside the promotion set.
    pub fn handle_promotion_choice(&mut self, kind: PieceKind) {
        let (Some(pending), Some(selected)) = (self.pending_promotion, self.selected_position)
        else {
            return;
        };
        if !PROMOTION_KINDS.contains(&kind) {
            return;
        }
        self.commit_move(selected, pending.position, Some(kind));
    }

    /// Restore the initial game state, clearing history, selection, and any
    /// pending promotion. Settings are kept.
    pub fn reset(&mut self) {
        *self = Self::with_settings(self.settings);
    }

    // --- Internals ---

    fn clear_selection(&mut self) {
        self.selected_position = None;
        self.valid_moves.clear();
    }

    /// Promotion handoff: auto-promote commits immediately; otherwise the
    /// target stays highlighted as the sole valid move until the choice
    /// arrives.
    fn enter_promotion(&mut self, from: Position, target: Position, piece: Piece) {
        if self.settings.auto_promote {
            self.commit_move(from, target, Some(self.settings.default_promotion_piece));
            return;
        }
        self.pending_promotion = Some(PendingPromotion {
            position: target,
            color: piece.color,
        });
        self.valid_moves = vec![target];
    }

    /// The commit step: build and install a new board, recompute status,
    /// append history, flip the turn, drop selection state.
    fn commit_move(&mut self, from: Position, to: Position, promotion: Option<PieceKind>) {
        let Some(piece) = self.state.board.piece_at(from) else {
            return;
        };

        let (new_board, captured) = apply_move_to_board(&self.state.board, from, to, promotion);
        let next_player = self.state.current_player.opposite();

        // Capturing the king ends the game on the spot, bypassing the normal
        // terminal-state computation.
        let status = if matches!(captured, Some(p) if p.kind == PieceKind::King) {
            GameStatus::Checkmate
        } else {
            compute_status(&new_board, next_player)
        };

        self.history.push(MoveRecord {
            from,
            to,
            piece,
            captured,
            promotion,
        });
        self.state = GameState {
            board: new_board,
            current_player: next_player,
            status,
        };
        self.clear_selection();
        self.pending_promotion = None;
    }
}

/// Status for `to_move` on `board`: check/checkmate/stalemate/active from the
/// in-check and any-legal-move axes.
fn compute_status(board: &Board, to_move: Color) -> GameStatus {
    let in_check = is_king_in_check(board, to_move);
    let has_moves = has_any_legal_move(board, to_move);
    match (in_check, has_moves) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, kind: PieceKind, color: Color, level: i8, rank: i8, file: i8) {
        board.set(Position::new(level, rank, file), Some(Piece::new(kind, color)));
    }

    fn kings_only() -> Board {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 0, 0, 0);
        place(&mut board, PieceKind::King, Color::Black, 4, 4, 4);
        board
    }

    #[test]
    fn new_game_starts_active_with_white_to_move() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::Active);
        assert_eq!(game.current_player(), Color::White);
        assert!(game.history().is_empty());
        assert!(game.selected_position().is_none());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut game = Game::new();
        game.select_square(Position::new(1, 0, 0));
        game.select_square(Position::new(2, 0, 0));
        game.reset();
        let first = (game.board().clone(), game.current_player(), game.status());
        game.reset();
        let second = (game.board().clone(), game.current_player(), game.status());
        assert_eq!(first, second);
        assert_eq!(first.0, starting_board());
        assert!(game.history().is_empty());
    }

    #[test]
    fn selecting_an_own_piece_stores_its_legal_moves() {
        let mut game = Game::new();
        let pawn = Position::new(1, 0, 0);
        game.select_square(pawn);
        assert_eq!(game.selected_position(), Some(pawn));
        assert_eq!(game.valid_moves(), &[Position::new(2, 0, 0)]);
    }

    #[test]
    fn selecting_an_opponent_piece_or_empty_square_clears_selection() {
        let mut game = Game::new();
        game.select_square(Position::new(4, 0, 0));
        assert!(game.selected_position().is_none());

        game.select_square(Position::new(1, 0, 0));
        game.select_square(Position::new(2, 4, 4));
        assert!(game.selected_position().is_none());
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn reselecting_another_own_piece_recomputes_highlights() {
        let mut game = Game::new();
        game.select_square(Position::new(1, 0, 0));
        let knight = Position::new(0, 0, 1);
        game.select_square(knight);
        assert_eq!(game.selected_position(), Some(knight));
        assert!(!game.valid_moves().is_empty());
    }

    #[test]
    fn sentinel_clears_selection_from_any_state() {
        let mut game = Game::new();
        game.select_square(Position::new(1, 0, 0));
        game.select_square(Position::DESELECT);
        assert!(game.selected_position().is_none());
        assert!(game.valid_moves().is_empty());

        // Also from a clean state.
        game.select_square(Position::new(-1, -1, -1));
        assert!(game.selected_position().is_none());
    }

    #[test]
    fn selecting_a_legal_target_commits_the_move() {
        let mut game = Game::new();
        let from = Position::new(1, 0, 0);
        let to = Position::new(2, 0, 0);
        game.select_square(from);
        game.select_square(to);

        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].from, from);
        assert_eq!(game.history()[0].to, to);
        assert!(game.board().piece_at(from).is_none());
        assert_eq!(
            game.board().piece_at(to),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(game.selected_position().is_none());
    }

    #[test]
    fn make_move_rejects_illegal_and_out_of_turn_input() {
        let mut game = Game::new();
        let before = game.board().clone();

        // Black piece while white is to move.
        game.make_move(Position::new(3, 0, 0), Position::new(2, 0, 0));
        // Empty square.
        game.make_move(Position::new(2, 2, 2), Position::new(2, 2, 3));
        // White pawn to a non-legal target.
        game.make_move(Position::new(1, 0, 0), Position::new(3, 0, 0));

        assert_eq!(game.board(), &before);
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Color::White);
    }

    #[test]
    fn commits_never_mutate_previously_cloned_boards() {
        let mut game = Game::new();
        let snapshot = game.board().clone();
        game.make_move(Position::new(1, 0, 0), Position::new(2, 0, 0));
        assert_eq!(snapshot, starting_board());
        assert_ne!(game.board(), &snapshot);
    }

    #[test]
    fn king_capture_sets_checkmate_even_with_replies_available() {
        let mut board = kings_only();
        place(&mut board, PieceKind::Rook, Color::White, 0, 0, 1);
        place(&mut board, PieceKind::King, Color::Black, 0, 0, 4);
        // Extra black rook that would otherwise still have moves.
        place(&mut board, PieceKind::Rook, Color::Black, 3, 3, 3);
        // Remove the spare black king placed by kings_only.
        board.set(Position::new(4, 4, 4), None);

        let mut game =
            Game::from_position(board, Color::White, GameSettings::default()).expect("setup");
        game.make_move(Position::new(0, 0, 1), Position::new(0, 0, 4));

        assert_eq!(game.status(), GameStatus::Checkmate);
        let record = game.history().last().expect("one move");
        assert_eq!(record.captured.map(|p| p.kind), Some(PieceKind::King));
    }

    #[test]
    fn terminal_status_freezes_the_board() {
        let mut board = kings_only();
        place(&mut board, PieceKind::Rook, Color::White, 0, 0, 1);
        place(&mut board, PieceKind::King, Color::Black, 0, 0, 4);
        board.set(Position::new(4, 4, 4), None);

        let mut game =
            Game::from_position(board, Color::White, GameSettings::default()).expect("setup");
        game.make_move(Position::new(0, 0, 1), Position::new(0, 0, 4));
        assert_eq!(game.status(), GameStatus::Checkmate);

        let frozen = game.board().clone();
        let history_len = game.history().len();
        game.select_square(Position::new(3, 3, 3));
        assert!(game.valid_moves().is_empty());
        game.make_move(Position::new(3, 3, 3), Position::new(3, 3, 4));
        assert_eq!(game.board(), &frozen);
        assert_eq!(game.history().len(), history_len);
    }

    #[test]
    fn rook_net_delivers_checkmate_in_the_corner() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 0, 0, 0);
        place(&mut board, PieceKind::King, Color::Black, 4, 4, 4);
        place(&mut board, PieceKind::Rook, Color::White, 4, 2, 0);
        place(&mut board, PieceKind::Rook, Color::White, 4, 0, 3);
        place(&mut board, PieceKind::Rook, Color::White, 3, 0, 4);
        place(&mut board, PieceKind::Rook, Color::White, 3, 0, 3);

        let mut game =
            Game::from_position(board, Color::White, GameSettings::default()).expect("setup");
        game.make_move(Position::new(4, 2, 0), Position::new(4, 2, 4));

        assert_eq!(game.status(), GameStatus::Checkmate);
        assert!(!has_any_legal_move(game.board(), Color::Black));
        assert!(is_king_in_check(game.board(), Color::Black));
    }

    #[test]
    fn covered_corner_without_check_is_stalemate_not_checkmate() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::Black, 0, 0, 0);
        place(&mut board, PieceKind::King, Color::White, 4, 4, 4);
        place(&mut board, PieceKind::Rook, Color::White, 0, 4, 1);
        place(&mut board, PieceKind::Rook, Color::White, 1, 4, 0);
        place(&mut board, PieceKind::Rook, Color::White, 1, 4, 1);
        place(&mut board, PieceKind::Rook, Color::White, 2, 1, 4);

        let mut game =
            Game::from_position(board, Color::White, GameSettings::default()).expect("setup");
        game.make_move(Position::new(2, 1, 4), Position::new(0, 1, 4));

        assert_eq!(game.status(), GameStatus::Stalemate);
        assert!(!is_king_in_check(game.board(), Color::Black));
        assert!(!has_any_legal_move(game.board(), Color::Black));
    }

    fn promotion_setup(settings: GameSettings) -> Game {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 0, 0, 0);
        place(&mut board, PieceKind::King, Color::Black, 4, 0, 1);
        place(&mut board, PieceKind::Pawn, Color::White, 3, 2, 2);
        Game::from_position(board, Color::White, settings).expect("setup")
    }

    #[test]
    fn manual_promotion_defers_the_board_change_until_the_choice() {
        let mut game = promotion_setup(GameSettings::default());
        let from = Position::new(3, 2, 2);
        let to = Position::new(4, 2, 2);

        game.select_square(from);
        game.select_square(to);

        // Handshake entered: board untouched, pawn still on its square.
        assert_eq!(
            game.board().piece_at(from),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(game.board().piece_at(to).is_none());
        assert_eq!(
            game.pending_promotion(),
            Some(PendingPromotion {
                position: to,
                color: Color::White
            })
        );
        assert_eq!(game.valid_moves(), &[to]);
        assert_eq!(game.current_player(), Color::White);

        game.handle_promotion_choice(PieceKind::Queen);

        assert_eq!(
            game.board().piece_at(to),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert!(game.board().piece_at(from).is_none());
        assert_eq!(game.current_player(), Color::Black);
        assert!(game.pending_promotion().is_none());
        assert!(game.selected_position().is_none());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn selections_are_ignored_while_a_promotion_is_pending() {
        let mut game = promotion_setup(GameSettings::default());
        game.select_square(Position::new(3, 2, 2));
        game.select_square(Position::new(4, 2, 2));
        assert!(game.pending_promotion().is_some());

        game.select_square(Position::new(0, 0, 0));
        assert!(game.pending_promotion().is_some());
        assert_eq!(game.selected_position(), Some(Position::new(3, 2, 2)));
    }

    #[test]
    fn sentinel_cancels_a_pending_promotion() {
        let mut game = promotion_setup(GameSettings::default());
        game.select_square(Position::new(3, 2, 2));
        game.select_square(Position::new(4, 2, 2));

        game.select_square(Position::DESELECT);
        assert!(game.pending_promotion().is_none());
        assert!(game.selected_position().is_none());

        // With the handshake gone, the choice is a no-op.
        game.handle_promotion_choice(PieceKind::Queen);
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Color::White);
    }

    #[test]
    fn promotion_choice_without_pending_state_is_a_no_op() {
        let mut game = Game::new();
        game.handle_promotion_choice(PieceKind::Queen);
        assert!(game.history().is_empty());
        assert_eq!(game.board(), &starting_board());
    }

    #[test]
    fn invalid_promotion_kinds_are_rejected() {
        let mut game = promotion_setup(GameSettings::default());
        game.select_square(Position::new(3, 2, 2));
        game.select_square(Position::new(4, 2, 2));

        game.handle_promotion_choice(PieceKind::King);
        game.handle_promotion_choice(PieceKind::Pawn);
        assert!(game.pending_promotion().is_some());

        game.handle_promotion_choice(PieceKind::Unicorn);
        assert_eq!(
            game.board().piece_at(Position::new(4, 2, 2)),
            Some(Piece::new(PieceKind::Unicorn, Color::White))
        );
    }

    #[test]
    fn auto_promotion_commits_without_a_pending_state() {
        let settings = GameSettings {
            auto_promote: true,
            default_promotion_piece: PieceKind::Rook,
        };
        let mut game = promotion_setup(settings);
        game.select_square(Position::new(3, 2, 2));
        game.select_square(Position::new(4, 2, 2));

        assert!(game.pending_promotion().is_none());
        assert_eq!(
            game.board().piece_at(Position::new(4, 2, 2)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn promote_pawn_commits_directly_with_an_explicit_kind() {
        let mut game = promotion_setup(GameSettings::default());
        game.promote_pawn(
            Position::new(3, 2, 2),
            Position::new(4, 2, 2),
            PieceKind::Knight,
        );
        assert_eq!(
            game.board().piece_at(Position::new(4, 2, 2)),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
        assert_eq!(game.history()[0].promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn make_move_applies_the_default_piece_on_a_promotion_push() {
        let mut game = promotion_setup(GameSettings::default());
        game.make_move(Position::new(3, 2, 2), Position::new(4, 2, 2));
        assert_eq!(
            game.board().piece_at(Position::new(4, 2, 2)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn from_position_rejects_boards_without_exactly_one_king_per_color() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 0, 0, 0);
        assert_eq!(
            Game::from_position(board.clone(), Color::White, GameSettings::default()).unwrap_err(),
            SetupError::MissingKing(Color::Black)
        );

        place(&mut board, PieceKind::King, Color::Black, 4, 4, 4);
        place(&mut board, PieceKind::King, Color::White, 2, 2, 2);
        assert_eq!(
            Game::from_position(board, Color::White, GameSettings::default()).unwrap_err(),
            SetupError::DuplicateKing(Color::White)
        );
    }

    #[test]
    fn check_status_is_reported_for_the_player_to_move() {
        let mut board = kings_only();
        place(&mut board, PieceKind::Rook, Color::White, 0, 4, 4);
        // Rook on the black king's file line: black to move is in check.
        let game =
            Game::from_position(board, Color::Black, GameSettings::default()).expect("setup");
        assert_eq!(game.status(), GameStatus::Check);
    }
}
