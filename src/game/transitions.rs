//! Pure state transitions.
//!
//! Each function takes the current table and acting player's snapshots
//! and returns the snapshots that would follow, or the first rule the
//! action breaks. Every precondition is checked before anything is
//! derived, and inputs are never modified, so a rejected action leaves
//! no trace. `Game` commits a successful `Outcome` to both histories.
//!
//! Checks run in a fixed order, which decides the error reported when
//! an action breaks several rules at once.

use crate::cards::{DevelopmentCard, Level};
use crate::core::{GameError, Gem, Result, RulesConfig};
use crate::nobles::Noble;
use crate::state::{GameState, PlayerState};

use super::action::Action;

/// Snapshots produced by a valid action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The table after the action.
    pub game: GameState,
    /// The acting player after the action.
    pub player: PlayerState,
    /// Noble that visited as a result of a purchase.
    pub noble: Option<Noble>,
}

/// Run `action` for `player` against `game`.
pub fn plan(
    config: &RulesConfig,
    game: &GameState,
    player: &PlayerState,
    action: &Action,
) -> Result<Outcome> {
    match action {
        Action::TakeThreeTokens(colors) => take_three_tokens(game, player, *colors),
        Action::TakeTwoTokens(gem) => take_two_tokens(config, game, player, *gem),
        Action::ReserveCard(card) => reserve_card(game, player, card),
        Action::ReserveHiddenCard(level) => reserve_hidden_card(game, player, *level),
        Action::PurchaseCard(card) => purchase_card(game, player, card),
        Action::PurchaseReservedCard(card) => purchase_reserved_card(game, player, card),
    }
}

/// Take one token each of three distinct, non-joker colors.
pub fn take_three_tokens(
    game: &GameState,
    player: &PlayerState,
    colors: [Gem; 3],
) -> Result<Outcome> {
    for (i, gem) in colors.iter().enumerate() {
        if colors[..i].contains(gem) {
            return Err(GameError::DuplicateColor(*gem));
        }
    }
    if colors.iter().any(|gem| gem.is_joker()) {
        return Err(GameError::JokerNotAllowed);
    }
    if let Some(&gem) = colors.iter().find(|&&gem| game.pool().is_empty_of(gem)) {
        return Err(GameError::PoolExhausted(gem));
    }
    player.tokens().ensure_space(3)?;

    let mut pool = *game.pool();
    let mut tokens = *player.tokens();
    for gem in colors {
        pool.remove(gem, 1)?;
        tokens.add(gem, 1);
    }

    Ok(Outcome {
        game: game.with_pool(pool),
        player: player.with_tokens(tokens),
        noble: None,
    })
}

/// Take two tokens of one color from a stack holding at least
/// `config.pair_take_min_stack`.
pub fn take_two_tokens(
    config: &RulesConfig,
    game: &GameState,
    player: &PlayerState,
    gem: Gem,
) -> Result<Outcome> {
    if gem.is_joker() {
        return Err(GameError::JokerNotAllowed);
    }
    let available = game.pool().count_of(gem);
    if available < config.pair_take_min_stack {
        return Err(GameError::StackTooLowForPairTake {
            gem,
            available,
            required: config.pair_take_min_stack,
        });
    }
    player.tokens().ensure_space(2)?;

    let mut pool = *game.pool();
    let mut tokens = *player.tokens();
    pool.remove(gem, 2)?;
    tokens.add(gem, 2);

    Ok(Outcome {
        game: game.with_pool(pool),
        player: player.with_tokens(tokens),
        noble: None,
    })
}

/// Reserve a face-up card.
pub fn reserve_card(
    game: &GameState,
    player: &PlayerState,
    card: &DevelopmentCard,
) -> Result<Outcome> {
    check_reserve_room(player)?;

    let mut deck = game.deck(card.level()).clone();
    let index = deck.find_facing(card).ok_or_else(|| card_not_found(card))?;
    let taken = deck.pop_by_index(index)?;

    finish_reserve(&game.with_deck(deck), player, taken)
}

/// Reserve the top face-down card of `level` without seeing it first.
pub fn reserve_hidden_card(
    game: &GameState,
    player: &PlayerState,
    level: Level,
) -> Result<Outcome> {
    check_reserve_room(player)?;

    let mut deck = game.deck(level).clone();
    let taken = deck.pop_hidden_top()?;

    finish_reserve(&game.with_deck(deck), player, taken)
}

/// Buy a face-up card, then check for a visiting noble.
pub fn purchase_card(
    game: &GameState,
    player: &PlayerState,
    card: &DevelopmentCard,
) -> Result<Outcome> {
    let mut deck = game.deck(card.level()).clone();
    let index = deck.find_facing(card).ok_or_else(|| card_not_found(card))?;
    player.tokens().spend_plan(card.cost(), &player.cards().discounts())?;

    let bought = deck.pop_by_index(index)?;
    finish_purchase(&game.with_deck(deck), player, bought)
}

/// Buy a card held in the player's reserve.
pub fn purchase_reserved_card(
    game: &GameState,
    player: &PlayerState,
    card: &DevelopmentCard,
) -> Result<Outcome> {
    if !player.reserve().contains(card) {
        return Err(card_not_found(card));
    }
    player.tokens().spend_plan(card.cost(), &player.cards().discounts())?;

    let mut reserve = player.reserve().clone();
    let bought = reserve.remove(card)?;
    finish_purchase(game, &player.with_reserve(reserve), bought)
}

/// Reserve is below its ceiling and there is room for the joker.
fn check_reserve_room(player: &PlayerState) -> Result<()> {
    player.reserve().ensure_space()?;
    player.tokens().ensure_space(1)
}

/// Move `card` into the reserve and hand over a joker if the pool has one.
fn finish_reserve(
    game: &GameState,
    player: &PlayerState,
    card: DevelopmentCard,
) -> Result<Outcome> {
    let mut reserve = player.reserve().clone();
    reserve.add(card)?;

    let mut pool = *game.pool();
    let mut tokens = *player.tokens();
    if !pool.is_empty_of(Gem::JOKER) {
        pool.remove(Gem::JOKER, 1)?;
        tokens.add(Gem::JOKER, 1);
    }

    Ok(Outcome {
        game: game.with_pool(pool),
        player: player.with_reserve(reserve).with_tokens(tokens),
        noble: None,
    })
}

/// Pay for `card`, return the tokens to the pool, add it to the
/// tableau, and award the first noble the new discounts attract.
fn finish_purchase(
    game: &GameState,
    player: &PlayerState,
    card: DevelopmentCard,
) -> Result<Outcome> {
    let mut tokens = *player.tokens();
    let plan = tokens.purchase(card.cost(), &player.cards().discounts())?;

    let mut pool = *game.pool();
    pool.add_all(plan.tokens());

    let mut cards = player.cards().clone();
    cards.add(card);

    let mut nobles = game.nobles().clone();
    let noble = match nobles.first_attracted(&cards.discounts()) {
        Some(index) => {
            let noble = nobles.pop_by_index(index)?;
            cards.claim_noble(noble.clone());
            Some(noble)
        }
        None => None,
    };

    Ok(Outcome {
        game: game.with_pool(pool).with_nobles(nobles),
        player: player.with_tokens(tokens).with_cards(cards),
        noble,
    })
}

fn card_not_found(card: &DevelopmentCard) -> GameError {
    GameError::CardNotFound {
        card: card.to_string(),
    }
}
