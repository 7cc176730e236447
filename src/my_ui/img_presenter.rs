use fltk::{frame, prelude::{ImageExt, WidgetBase, WidgetExt}};
use crate::{img::Img, my_err::MyError};


pub struct MyImgPresenter {
    frame_img: frame::Frame,
}

impl MyImgPresenter {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        let mut frame_img = frame::Frame::default()
            .with_pos(x, y)
            .with_size(w, h);

        use fltk::enums::{Align, FrameType};

        frame_img.set_frame(FrameType::FlatBox);
        frame_img.set_align(Align::Center);

        MyImgPresenter { frame_img }
    }

    pub fn set_image(&mut self, img: &Img) -> Result<(), MyError> {
        // data to move into closure
        let mut drawable = img.get_drawable_copy()?;

        self.frame_img.draw(move |f| {
            drawable.draw(f.x(), f.y(), f.w(), f.h());
        });

        self.frame_img.redraw();

        Ok(())
    }
}
