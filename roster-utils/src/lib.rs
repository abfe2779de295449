/// Plain-text cards shared across views.
pub mod card;
/// Single source of truth for the console command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Shared pagination helpers: page window, navigation state, controls.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
/// Bordered text tables.
pub mod table;
