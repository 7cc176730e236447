use fltk::{draw, enums::{Color, FrameType}, frame, prelude::{WidgetBase, WidgetExt}};
use crate::img::{histogram::Histogram, PIXEL_VALUES_COUNT};

// top margin leaves space for the button and classification labels
const BARS_TOP_MARGIN: i32 = 100;

pub struct MyHistView {
    frame_hist: frame::Frame,
}

impl MyHistView {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        let mut frame_hist = frame::Frame::default()
            .with_pos(x, y)
            .with_size(w, h);
        frame_hist.set_frame(FrameType::FlatBox);

        MyHistView { frame_hist }
    }

    pub fn set_hist(&mut self, hist: &Histogram) {
        // data to move into closure
        let counts = *hist.counts();
        let max_count = hist.max_count().max(1);

        self.frame_hist.draw(move |f| {
            draw::draw_rect_fill(f.x(), f.y(), f.w(), f.h(), Color::Black);

            draw::set_draw_color(Color::White);

            for (value, count) in counts.iter().enumerate() {
                let bar_h = (*count as i64 * (f.h() - BARS_TOP_MARGIN) as i64
                    / max_count as i64) as i32;

                let x = f.x() + value as i32 * f.w() / PIXEL_VALUES_COUNT as i32;
                let bottom = f.y() + f.h();

                draw::draw_line(x, bottom, x, bottom - bar_h);
            }
        });

        self.frame_hist.redraw();
    }
}
