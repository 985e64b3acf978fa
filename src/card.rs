//! Card types and wire codes.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Lowest rank in the deck (Six).
pub const MIN_RANK: u8 = 6;
/// Highest rank in the deck (Ace).
pub const MAX_RANK: u8 = 14;
/// Number of cards per deck.
pub const DECK_SIZE: usize = 36;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Spades, Self::Hearts, Self::Diamonds];

    /// Returns the single-letter code of the suit.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
        }
    }

    /// Looks up a suit by its single-letter code.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'C' => Some(Self::Clubs),
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            _ => None,
        }
    }

    /// Returns the full name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a full suit name such as `"Hearts"`.
impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or(CardError::InvalidCard)
    }
}

/// A playing card.
///
/// Ranks run from 6 to 14, where 11 to 14 are Jack, Queen, King and Ace.
/// The textual form is the wire code: rank token followed by the suit
/// letter, e.g. `"10D"`, `"AC"`, `"6H"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if the rank is outside 6..=14.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < MIN_RANK || rank > MAX_RANK {
            return Err(CardError::InvalidCard);
        }
        Ok(Self { suit, rank })
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns whether this card beats `attacker` given the trump suit.
    ///
    /// A card of the attacker's suit must be strictly higher. Otherwise only
    /// a trump can beat a non-trump attacker; trump against trump is decided
    /// by rank alone.
    #[must_use]
    pub fn can_defend(self, attacker: Self, trump: Suit) -> bool {
        if self.suit == attacker.suit {
            self.rank > attacker.rank
        } else {
            self.suit == trump
        }
    }

    const fn rank_token(self) -> &'static str {
        match self.rank {
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "A",
        }
    }
}

fn rank_from_token(token: &str) -> Option<u8> {
    match token {
        "J" => Some(11),
        "Q" => Some(12),
        "K" => Some(13),
        "A" => Some(14),
        _ => {
            if token.is_empty()
                || token.starts_with('0')
                || !token.bytes().all(|b| b.is_ascii_digit())
            {
                return None;
            }
            token
                .parse::<u8>()
                .ok()
                .filter(|rank| (MIN_RANK..=10).contains(rank))
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_token(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        let letter = chars.next_back().ok_or(CardError::InvalidCode)?;
        let suit = Suit::from_letter(letter).ok_or(CardError::InvalidCode)?;
        let rank = rank_from_token(chars.as_str()).ok_or(CardError::InvalidCode)?;
        Self::new(suit, rank).map_err(|_| CardError::InvalidCode)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = alloc::string::String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
