//! Rent, bankruptcy and game-over tests.
//!
//! These tests verify that money is conserved by every transfer, that a
//! shortfall wipes the payer out and returns their properties to the bank,
//! and that the winner (or the lack of one) is reported correctly.

use real_estate_game::core::{GameError, PlayerId};
use real_estate_game::rules::{GameResult, RealEstateGame};

/// Rent 50 everywhere except space 10, which charges 300.
fn game_with_expensive_space() -> RealEstateGame {
    let mut rents = [50; 24];
    rents[9] = 300;

    let mut game = RealEstateGame::new();
    game.create_spaces(200, &rents).unwrap();
    game
}

fn total_money(game: &RealEstateGame) -> i64 {
    game.players().map(|p| p.balance()).sum()
}

/// Test that a player who cannot cover rent loses everything they own.
#[test]
fn test_bankruptcy_clears_ownership() {
    let mut game = game_with_expensive_space();
    game.create_player("A", 1000);
    game.create_player("B", 5000);

    for _ in 0..3 {
        game.move_player("A", 1).unwrap();
        assert!(game.buy_space("A").unwrap());
    }
    assert_eq!(game.spaces_owned_by("A").unwrap().as_slice(), &[1, 2, 3]);
    assert_eq!(game.player_balance("A").unwrap(), 250);

    game.move_player("B", 10).unwrap();
    assert!(game.buy_space("B").unwrap());
    assert_eq!(game.player_balance("B").unwrap(), 3500);

    // Rent 300 against a balance of 250: A pays everything.
    game.move_player("A", 7).unwrap();
    assert_eq!(game.player_position("A").unwrap(), 10);
    assert_eq!(game.player_balance("A").unwrap(), 0);
    assert_eq!(game.player_balance("B").unwrap(), 3750);
    assert!(game.is_bankrupt("A").unwrap());

    for index in 1..=3 {
        assert_eq!(game.space_owner(index).unwrap(), None);
    }
    assert!(game.spaces_owned_by("A").unwrap().is_empty());
    assert_eq!(game.space_owner(10).unwrap(), Some("B"));

    assert_eq!(game.check_game_over().unwrap(), Some("B".to_string()));
    assert_eq!(
        game.game_result(),
        Some(GameResult::Winner(PlayerId::new(1)))
    );
}

/// Test that released properties can be bought again.
#[test]
fn test_released_property_is_for_sale() {
    let mut game = game_with_expensive_space();
    game.create_player("A", 300);
    game.create_player("B", 5000);
    game.create_player("C", 5000);

    game.move_player("A", 1).unwrap();
    assert!(game.buy_space("A").unwrap());
    game.pay_rent("A", 500, "B").unwrap();
    assert_eq!(game.space_owner(1).unwrap(), None);

    game.move_player("C", 1).unwrap();
    assert_eq!(game.player_balance("C").unwrap(), 5000);
    assert!(game.buy_space("C").unwrap());
}

/// Test that a bankrupt player can no longer move.
#[test]
fn test_bankrupt_player_stays_put() {
    let mut game = game_with_expensive_space();
    game.create_player("A", 100);
    game.create_player("B", 1000);

    game.pay_rent("A", 100, "B").unwrap();
    assert_eq!(game.player_balance("A").unwrap(), 0);

    game.move_player("A", 6).unwrap();
    assert_eq!(game.player_position("A").unwrap(), 0);
    assert_eq!(game.player_balance("A").unwrap(), 0);
}

/// Test both branches of rent payment against the conservation law.
#[test]
fn test_rent_conserves_money() {
    let mut game = game_with_expensive_space();
    game.create_player("Payer", 400);
    game.create_player("Owner", 100);

    let before = total_money(&game);
    assert_eq!(game.pay_rent("Payer", 150, "Owner").unwrap(), 150);
    assert_eq!(total_money(&game), before);
    assert_eq!(game.player_balance("Payer").unwrap(), 250);

    // Balance equal to rent is not enough: everything goes.
    assert_eq!(game.pay_rent("Payer", 250, "Owner").unwrap(), 250);
    assert_eq!(total_money(&game), before);
    assert_eq!(game.player_balance("Payer").unwrap(), 0);
    assert_eq!(game.player_balance("Owner").unwrap(), 500);
}

/// Test that a shortfall pays the remaining balance, not the nominal rent.
#[test]
fn test_shortfall_pays_remaining_balance() {
    let mut game = game_with_expensive_space();
    game.create_player("Payer", 120);
    game.create_player("Owner", 10);

    assert_eq!(game.pay_rent("Payer", 1000, "Owner").unwrap(), 120);
    assert_eq!(game.player_balance("Owner").unwrap(), 130);
    assert_eq!(game.player_balance("Payer").unwrap(), 0);
}

/// Test that purchases move money out of the game and nothing else.
#[test]
fn test_purchase_accounting() {
    let mut game = game_with_expensive_space();
    game.create_player("A", 2000);
    game.create_player("B", 1000);

    game.move_player("A", 10).unwrap();
    let before = total_money(&game);
    assert!(game.buy_space("A").unwrap());
    assert_eq!(total_money(&game), before - 1500);
    assert_eq!(game.player_balance("A").unwrap(), 500);
    assert_eq!(game.player_balance("B").unwrap(), 1000);
}

/// Test that the game continues while two or more players have money.
#[test]
fn test_game_continues() {
    let mut game = game_with_expensive_space();
    game.create_player("A", 10);
    game.create_player("B", 10);
    game.create_player("C", 0);

    assert_eq!(game.check_game_over().unwrap(), None);
    assert_eq!(game.game_result(), None);
    assert_eq!(game.active_players(), vec!["A", "B"]);
}

/// Test that nobody having money is reported explicitly.
#[test]
fn test_no_active_players() {
    let mut game = game_with_expensive_space();
    game.create_player("A", 0);
    game.create_player("B", 0);

    assert_eq!(game.check_game_over(), Err(GameError::NoActivePlayers));
    assert_eq!(game.game_result(), Some(GameResult::Draw));
    assert!(game.active_players().is_empty());
}

/// Test that checking an empty game reports that nobody is playing.
#[test]
fn test_no_players_no_winner() {
    let mut game = game_with_expensive_space();
    assert_eq!(game.game_result(), None);
    assert_eq!(game.check_game_over(), Err(GameError::NoActivePlayers));
    assert!(game.history().is_empty());
}

/// Test that a solvent player cannot be declared bankrupt.
#[test]
fn test_bankrupt_player_requires_empty_balance() {
    let mut game = game_with_expensive_space();
    game.create_player("A", 5000);
    game.create_player("B", 5000);

    game.move_player("A", 3).unwrap();
    assert!(game.buy_space("A").unwrap());
    game.move_player("A", 4).unwrap();
    assert!(game.buy_space("A").unwrap());
    let events = game.history().len();

    let released = game.bankrupt_player("A").unwrap();
    assert!(released.is_empty());
    assert_eq!(game.history().len(), events);
    assert_eq!(game.spaces_owned_by("A").unwrap().as_slice(), &[3, 7]);
    assert!(!game.is_bankrupt("A").unwrap());

    game.pay_rent("A", 10_000, "B").unwrap();
    assert!(game.is_bankrupt("A").unwrap());
    assert_eq!(game.space_owner(3).unwrap(), None);
    assert_eq!(game.space_owner(7).unwrap(), None);
    assert!(game.bankrupt_player("A").unwrap().is_empty());
}

/// Test that rent without a board fails before any money moves.
#[test]
fn test_rent_without_board_changes_nothing() {
    let mut game = RealEstateGame::new();
    game.create_player("A", 100);
    game.create_player("B", 100);

    assert_eq!(
        game.pay_rent("A", 500, "B"),
        Err(GameError::BoardNotCreated)
    );
    assert_eq!(game.player_balance("A").unwrap(), 100);
    assert_eq!(game.player_balance("B").unwrap(), 100);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.game_result(), None);
}
