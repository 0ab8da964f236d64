pub mod config;
pub mod fit;


pub use config::FitConfig;
pub use fit::{fit_modal_projection, FitResult, ModalFit};
