pub mod people;
pub mod publications;
