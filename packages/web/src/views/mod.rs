mod home;
pub use home::Home;

mod sico;
pub use sico::Sico;
