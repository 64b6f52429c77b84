//! Built-in rule list used when nothing usable is persisted.

use super::RuleList;

pub const DEFAULT_LIST_NAME: &str = "Default Rules";

/// Rules of the default list, aimed at the Advanced format.
pub const DEFAULT_RULES: &[&str] = &[
    "Shuffle your hand into your deck and then draw that many cards.",
    "Destroy all face-up fusion monsters.",
    "Draw a card from the bottom of your deck.",
    "Destroy all face up synchro monsters.",
    "Swap LP with your opponent.",
    "Shuffle your graveyard into your deck. Then mill the top 15 cards to the graveyard.",
    "Destroy all monsters with 5 or more levels.",
    "Banish all cards in your graveyard.",
    "Destroy all spell and trap cards your opponent controls.",
    "Banish all cards on the field.",
    "If you have less LP than your opponent, special summon one monster from your hand to the field, ignoring summoning conditions.",
    "Turn all monsters face-down; they may not change battle position.",
    "Skip your opponents' next turn.",
    "All monsters become normal monsters with no effects until the end of the turn.",
    "Destroy all face-up XYZ monsters.",
    "Swap the ATK and DEF of all monsters on your opponents' side of the field.",
    "Destroy all monsters with 4 or less levels.",
    "You may not special summon cards for the rest of the turn.",
    "You may only activate one card this turn.",
    "Destroy all monsters on the field.",
    "Draw cards up to the number of cards your opponent controls. At the end phase, banish your entire hand face down.",
    "Your opponent discards a random card from your hand.",
    "All players lose 1500 LP.",
    "Restore your LP back to 8000.",
    "Destroy all link monsters.",
    "Swap a monster with your opponent both of your choice.",
    "Draw two cards.",
    "You cannot attack unless you scream out 'Yu-Gi-Oh!'",
    "You cannot special summon cards from your extra deck for the rest of the turn.",
    "Lose half of your LP.",
    "Card drawn is to be put back at the bottom of the deck.",
    "Lose 500 LP for each spell and trap in the entire field.",
    "All players reveal the top card of their deck. You may play that card immediately, starting with the turn player. Otherwise, keep the card in your hand.",
    "For the rest of the turn, pay 100 LP for each card/effect you activate.",
    "You cannot activate spells or traps for the rest of the turn.",
    "Skip your main phase 1.",
    "Special summon any monster from either player's graveyard ignoring its summoning conditions.",
    "Special summon a token to your side of the field. This token mirror's a monster's ATK, DEF, LEVEL, and EFFECT, from either side of the field.",
    "Make one monster's effect NOT 'once per turn' from your side of the field.",
    "For each monster that attacks directly this turn, banish the top ten cards from your opponent's deck.",
    "Swap hands with your opponent. Send both hands to the graveyard at the end of the turn.",
    "If you control monsters of the same attribute, destroy all your opponent's monsters.",
    "All of your monsters can attack directly until the end of this turn.",
    "Double the ATK or DEF of all your monsters for the rest of the turn.",
];

/// A fresh copy of the default list. Every call mints a new id.
pub fn default_rule_list() -> RuleList {
    RuleList::new(
        DEFAULT_LIST_NAME,
        DEFAULT_RULES.iter().map(|rule| rule.to_string()).collect(),
    )
}
