mod home;
pub use home::Home;

mod apply;
pub use apply::Apply;
