pub mod primes;
pub mod sampling;


// 재수출
pub use primes::*;
pub use sampling::*;
