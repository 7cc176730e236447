use std::{
	error,
	fmt
};
use fltk::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	InputMissing,
	DecodeFailure,
	ResourceMissing,
	InvalidInput,
	DegenerateInput,
	Runtime,
}

#[derive(Debug, Clone)]
pub struct MyError {
	kind: ErrorKind,
	msg: String
}

impl fmt::Display for MyError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.msg)
	}
}

impl error::Error for MyError { }

impl MyError {
	pub fn new(kind: ErrorKind, msg: String) -> Self {
		MyError {
			kind,
			msg
		}
	}

	pub fn kind(&self) -> ErrorKind {
		self.kind
	}

	pub fn get_message(&self) -> String {
		self.msg.clone()
	}
}

impl From<std::io::Error> for MyError {
	fn from(err: std::io::Error) -> Self {
		MyError {
			kind: ErrorKind::Runtime,
			msg: err.to_string()
		}
	}
}

impl From<FltkError> for MyError {
	fn from(err: FltkError) -> Self {
		MyError {
			kind: ErrorKind::Runtime,
			msg: err.to_string()
		}
	}
}

impl From<image::ImageError> for MyError {
	fn from(err: image::ImageError) -> Self {
		MyError {
			kind: ErrorKind::Runtime,
			msg: err.to_string()
		}
	}
}
