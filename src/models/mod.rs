pub mod achievement;
pub mod card;
pub mod forms;
pub mod pack;

pub use achievement::*;
pub use card::*;
pub use forms::*;
pub use pack::*;
