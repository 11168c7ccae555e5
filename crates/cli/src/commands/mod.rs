pub mod generate;
pub mod optimize;

pub use generate::GenerateCommand;
pub use optimize::OptimizeCommand;
