pub mod entrance;
pub mod floaty;
pub mod physics;
