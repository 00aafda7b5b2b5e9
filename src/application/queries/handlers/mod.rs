//! Query Handlers

mod pet_handlers;

pub use pet_handlers::{GetPetHandler, ListPetsByOwnerHandler, ListPetsHandler};
