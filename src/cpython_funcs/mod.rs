pub mod extension;
