pub mod zeta_zeros;
pub mod modal;
pub mod objective;


pub use zeta_zeros::ZETA_ZERO_ORDINATES;
pub use modal::{ModalParams, ModalProjection};
pub use objective::{mean_squared_error, ProjectionObjective};
