//! Lineup mini-language parser.
//!
//! Turns textual instance descriptions into structured [`Instance`],
//! [`Army`], and [`Monster`] values, consulting the quest database and
//! registering leveled heroes with the session roster.
//!
//! Grammar for one instance token:
//!
//! ```text
//! instance     := questRef | rawLineup
//! questRef     := "q" questNumber "-" tier          ; e.g. "q12-3"
//! rawLineup    := monsterToken ("," monsterToken)*
//! monsterToken := plainName | plainName ":" levelDigits
//! ```
//!
//! All failures are explicit [`Result`](skirmish_foundation::Result)
//! values carrying a parse-failure kind; the parser never partially
//! commits an instance and carries no state across attempts. Registering
//! leveled heroes with the [`HeroRoster`](skirmish_data::HeroRoster) is
//! its single external mutation.
//!
//! [`Instance`]: skirmish_foundation::Instance
//! [`Army`]: skirmish_foundation::Army
//! [`Monster`]: skirmish_foundation::Monster

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hero;
pub mod instance;
pub mod lineup;

pub use hero::parse_hero_spec;
pub use instance::{parse_instance, parse_instances};
pub use lineup::{parse_lineup, parse_lineup_token};
