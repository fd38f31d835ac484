pub mod finder;

pub use finder::NameFinder;
