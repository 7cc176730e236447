use super::*;


#[derive(Clone)]
pub struct Img {
    width: usize,
    height: usize,
    layers: Vec<ImgLayer>,
    color_depth: ColorDepth
}

impl Img {
    pub fn new(width: usize, height: usize, layers: Vec<ImgLayer>, color_depth: ColorDepth) -> Self {
        assert!(layers.len() > 0);
        Img { width, height, layers, color_depth }
    }

    pub fn empty_with_size(width: usize, height: usize, color_depth: ColorDepth) -> Self {
        let mut layers = Vec::<ImgLayer>::new();

        match color_depth {
            ColorDepth::L8 => {
                layers.push(ImgLayer::new(
                    Matrix2D::empty_with_size(width, height),
                    ImgChannel::L));
            },
            ColorDepth::La8 => {
                layers.push(ImgLayer::new(
                    Matrix2D::empty_with_size(width, height),
                    ImgChannel::L));
                layers.push(ImgLayer::new(
                    Matrix2D::empty_with_size(width, height),
                    ImgChannel::A));
            },
            ColorDepth::Rgb8 => {
                layers.push(ImgLayer::new(
                    Matrix2D::empty_with_size(width, height),
                    ImgChannel::R));
                layers.push(ImgLayer::new(
                    Matrix2D::empty_with_size(width, height),
                    ImgChannel::G));
                layers.push(ImgLayer::new(
                    Matrix2D::empty_with_size(width, height),
                    ImgChannel::B));
            },
            ColorDepth::Rgba8 => {
                layers.push(ImgLayer::new(
                    Matrix2D::empty_with_size(width, height),
                    ImgChannel::R));
                layers.push(ImgLayer::new(
                    Matrix2D::empty_with_size(width, height),
                    ImgChannel::G));
                layers.push(ImgLayer::new(
                    Matrix2D::empty_with_size(width, height),
                    ImgChannel::B));
                layers.push(ImgLayer::new(
                    Matrix2D::empty_with_size(width, height),
                    ImgChannel::A));
            },
        }

        Img { width, height, layers, color_depth }
    }

    pub fn empty_size_of(other: &Img) -> Self {
        Self::empty_with_size(other.width, other.height, other.color_depth)
    }

    pub fn load_as_rgb(path: PathBuf) -> result::Result<Self, MyError> {
        let im = fltk::image::SharedImage::load(path)
            .map_err(|err| MyError::new(
                ErrorKind::DecodeFailure,
                format!("Не удалось загрузить изображение: {}", err)))?;

        if im.w() < 0 {
            return Err(MyError::new(
                ErrorKind::DecodeFailure,
                "Ширина загруженного изображения < 0".to_string()));
        }
        if im.h() < 0 {
            return Err(MyError::new(
                ErrorKind::DecodeFailure,
                "Высота загруженного изображения < 0".to_string()));
        }

        let width = im.w() as usize;
        let height = im.h() as usize;
        let color_depth = im.depth();
        let all_pixels: Vec<f64> = im.to_rgb_data().into_iter().map(|v| v as f64).collect();

        let layers_count = color_depth as u8 as usize;
        assert_eq!(all_pixels.len() % layers_count, 0);

        let mut img = Img::empty_with_size(width, height, color_depth);

        for pixel_num in 0..all_pixels.len() {
            let layer_num = pixel_num % layers_count;
            let layer_pixel_num = pixel_num / layers_count;
            img.layer_mut(layer_num).matrix_mut()[layer_pixel_num] = all_pixels[pixel_num];
        }

        Ok(img)
    }

    pub fn w(&self) -> usize { self.width }
    pub fn h(&self) -> usize { self.height }
    pub fn d(&self) -> usize { self.color_depth as u8 as usize }
    pub fn color_depth(&self) -> ColorDepth { self.color_depth }

    pub fn layers<'own>(&'own self) -> &'own Vec<ImgLayer> { &self.layers }
    pub fn layers_mut<'own>(&'own mut self) -> &'own mut Vec<ImgLayer> { &mut self.layers }
    pub fn layer_mut<'own>(&'own mut self, ind: usize) -> &'own mut ImgLayer { &mut self.layers[ind] }
    pub fn layer<'own>(&'own self, ind: usize) -> &'own ImgLayer { &self.layers[ind] }

    pub fn get_pixels_iter(&self) -> PixelsIterator {
        self.layer(0).matrix().get_pixels_iter()
    }

    pub fn get_drawable_copy(&self) -> result::Result<image::RgbImage, MyError> {
        let mut all_pixels = Vec::<u8>::with_capacity(self.w() * self.h() * self.d());

        let layer_length = self.w() * self.h();
        for pix_num in 0..layer_length {
            for layer in self.layers().iter() {
                all_pixels.push(layer[pix_num] as u8);
            }
        }

        let im_rgb = image::RgbImage::new(
            all_pixels.as_slice(),
            self.width as i32, self.height as i32, self.color_depth)?;

        Ok(im_rgb)
    }

    pub fn try_save(&self, path: &str) -> result::Result<(), MyError> {
        let (pixels, color_type): (Vec<u8>, ::image::ColorType) = match self.color_depth() {
            ColorDepth::L8 | ColorDepth::La8 => {
                let vals: Vec<u8> = self.layer(0).matrix().pixels()
                    .iter()
                    .map(|p| *p as u8)
                    .collect();

                (vals, ::image::ColorType::L8)
            },
            ColorDepth::Rgb8 | ColorDepth::Rgba8 => {
                let mut vals = Vec::<u8>::with_capacity(self.w() * self.h() * 3);

                let r = &self.layer(0).matrix().pixels();
                let g = &self.layer(1).matrix().pixels();
                let b = &self.layer(2).matrix().pixels();

                for pix_num in 0..self.w() * self.h() {
                    vals.push(r[pix_num] as u8);
                    vals.push(g[pix_num] as u8);
                    vals.push(b[pix_num] as u8);
                }

                assert_eq!(vals.len(), self.w() * self.h() * 3);

                (vals, ::image::ColorType::Rgb8)
            },
        };

        ::image::save_buffer(path, &pixels, self.w() as u32, self.h() as u32, color_type)?;

        Ok(())
    }
}
