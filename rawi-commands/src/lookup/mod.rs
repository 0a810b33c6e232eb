pub mod biography;
