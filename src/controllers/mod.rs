pub mod root;
pub mod song;
pub use root::RootController;
