pub mod my_err;
pub mod img;
pub mod utils;
pub mod my_ui;
pub mod my_app;
