use std::{ops::{Index, IndexMut}, path::PathBuf, result};
use fltk::{enums::ColorDepth, image::{self}, prelude::ImageExt};
use crate::my_err::{ErrorKind, MyError};

pub mod color_ops;
pub mod histogram;
mod pixel_pos;
mod img_layer;
mod matrix2d;
mod iterators;
mod img;

pub use pixel_pos::PixelPos;
pub use img_layer::{ImgChannel, ImgLayer};
pub use matrix2d::Matrix2D;
pub use iterators::PixelsIterator;
pub use img::Img;

pub const PIXEL_VALUES_COUNT: usize = 256_usize;
