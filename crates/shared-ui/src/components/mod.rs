pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
