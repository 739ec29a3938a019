mod common;
mod recommendation;
mod requirements;
