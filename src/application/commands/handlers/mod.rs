//! Command Handlers

mod pet_handlers;

pub use pet_handlers::{AddPetHandler, DeletePetHandler, UpdatePetHandler};
