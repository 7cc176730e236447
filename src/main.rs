use std::{
    env,
    path::PathBuf,
    process,
    result
};

use image_histogram::my_app;
use image_histogram::my_err::{ErrorKind, MyError};

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err.get_message());
        process::exit(1);
    }
}

fn run() -> result::Result<(), MyError> {
    let mut args = env::args();
    let prog_name = args.next().unwrap_or_else(|| "image_histogram".to_string());

    let img_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            return Err(MyError::new(
                ErrorKind::InputMissing,
                format!("Использование: {} <путь к изображению>", prog_name),
            ));
        }
    };

    my_app::create_app(img_path)
}
