use std::ops::Deref;

mod create;
mod delete;
mod update;

pub use create::RecipeInput;

#[derive(Clone)]
pub struct Command {
    state: kondate_shared::State,
}

impl Deref for Command {
    type Target = kondate_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: kondate_shared::State) -> Self {
        Self { state }
    }
}
