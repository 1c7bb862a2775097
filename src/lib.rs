//! Crate root module declarations for the Raum Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, direction tables,
//! move generation, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
}

pub mod moves {
    pub mod directions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod legal_moves_unicorn;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod notation;
    pub mod render_game_state;
}
