pub mod goal;
pub mod serve;
