use super::*;


pub struct PixelsIterator {
    top_left: PixelPos,
    bottom_right_excluded: PixelPos,
    cur_pos: PixelPos,
}

impl PixelsIterator {
    pub fn for_full_image(layer: &Matrix2D) -> Self {
        PixelsIterator {
            top_left: PixelPos::new(0, 0),
            bottom_right_excluded: PixelPos::new(layer.h(), layer.w()),
            cur_pos: PixelPos::new(0, 0),
        }
    }

    pub fn for_rect_area(top_left: PixelPos, bottom_right_excluded: PixelPos) -> Self {
        assert!(top_left.row < bottom_right_excluded.row);
        assert!(top_left.col < bottom_right_excluded.col);

        PixelsIterator {
            top_left,
            bottom_right_excluded,
            cur_pos: top_left,
        }
    }

    pub fn fits(&self, pos: PixelPos) -> bool {
        self.top_left.col <= pos.col && pos.col < self.bottom_right_excluded.col
            && self.top_left.row <= pos.row && pos.row < self.bottom_right_excluded.row
    }
}

impl Iterator for PixelsIterator {
    type Item = PixelPos;

    fn next(&mut self) -> Option<PixelPos> {
        let curr = self.cur_pos;

        self.cur_pos.col += 1;

        if self.cur_pos.col >= self.bottom_right_excluded.col {
            self.cur_pos.col = self.top_left.col;
            self.cur_pos.row += 1;
        }

        if self.fits(curr) {
            Some(curr)
        } else {
            None
        }
    }
}
