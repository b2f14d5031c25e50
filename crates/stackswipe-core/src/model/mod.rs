mod advice;
mod archetype;
mod recommendation;
mod technology;

pub use advice::*;
pub use archetype::*;
pub use recommendation::*;
pub use technology::*;

#[cfg(test)]
mod tests;
