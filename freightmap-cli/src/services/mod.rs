// Business logic services layer
//
// Services sit between the command handlers and the transfer core: they
// gather per-run inputs (like the field mapping) without touching files.

pub mod selection;
