//! Message definitions exchanged between client and server.
//!
//! Every message is a fixed, ordered list of fields. The order in
//! which [`Encode`](tessera_codec::Encode) writes them is the order
//! in which [`Decode`](tessera_codec::Decode) reads them back, and
//! that order is the only thing keeping both sides in agreement.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod actor_values;
pub use actor_values::{ActorValue, ActorValues};

mod assign_character;
pub use assign_character::AssignCharacterResponse;

mod game_id;
pub use game_id::GameId;

mod vector;
pub use vector::Vector3;
