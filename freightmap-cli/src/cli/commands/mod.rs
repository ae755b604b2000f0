pub mod columns;
pub mod process;

pub use columns::ColumnsCommands;
pub use process::ProcessCommands;
