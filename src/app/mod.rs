pub mod boards;
