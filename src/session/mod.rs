pub mod auto_close;

pub use auto_close::AutoClosePlugin;
