use super::histogram::Histogram;
use super::*;


pub const RGB_2_GRAY_RED: f64 = 0.2125;
pub const RGB_2_GRAY_GREEN: f64 = 0.7154;
pub const RGB_2_GRAY_BLUE: f64 = 0.0721;

pub fn rgb_to_gray(img: &Img) -> Img {
    let mut grayed_layer = Matrix2D::empty_with_size(img.w(), img.h());

    match img.color_depth() {
        ColorDepth::L8 | ColorDepth::La8 => {
            let l_layer = img.layer(0);
            for pos in img.get_pixels_iter() {
                grayed_layer[pos] = l_layer[pos];
            }
        },
        ColorDepth::Rgb8 | ColorDepth::Rgba8 => {
            let layers = img.layers();

            for pos in img.get_pixels_iter() {
                let r = layers[0][pos];
                let g = layers[1][pos];
                let b = layers[2][pos];

                grayed_layer[pos] = (
                    r * RGB_2_GRAY_RED
                    + g * RGB_2_GRAY_GREEN
                    + b * RGB_2_GRAY_BLUE).round();
            }
        },
    }

    let mut new_layers = Vec::<ImgLayer>::with_capacity(3);
    new_layers.push(ImgLayer::new(grayed_layer.clone(), ImgChannel::R));
    new_layers.push(ImgLayer::new(grayed_layer.clone(), ImgChannel::G));
    new_layers.push(ImgLayer::new(grayed_layer, ImgChannel::B));

    Img::new(img.w(), img.h(), new_layers, ColorDepth::Rgb8)
}

pub fn equalize_hist(img: &Img) -> result::Result<Img, MyError> {
    let hist = Histogram::count_layer(img.layer(0).matrix())?;

    let lut = match build_equalize_lut(&hist) {
        Ok(lut) => lut,
        // single-intensity image is returned as is
        Err(err) if err.kind() == ErrorKind::DegenerateInput => return Ok(img.clone()),
        Err(err) => return Err(err),
    };

    let mut img_res = Img::empty_size_of(img);

    for (layer_num, layer) in img.layers().iter().enumerate() {
        let res_layer = img_res.layer_mut(layer_num);

        if layer.channel() == ImgChannel::A {
            for pos in layer.matrix().get_pixels_iter() {
                res_layer[pos] = layer[pos];
            }
            continue;
        }

        for pos in layer.matrix().get_pixels_iter() {
            let pix_value = layer[pos] as u8 as usize;
            res_layer[pos] = lut[pix_value];
        }
    }

    Ok(img_res)
}

fn build_equalize_lut(hist: &Histogram) -> result::Result<[f64; PIXEL_VALUES_COUNT], MyError> {
    let cdf = hist.cdf();
    let total = hist.total();

    let cdf_min = cdf.iter().copied().find(|&bin| bin > 0).unwrap_or(total);

    if cdf_min == total {
        return Err(MyError::new(
            ErrorKind::DegenerateInput,
            "Все пиксели имеют одно значение, эквализация не меняет изображение".to_string()));
    }

    let denominator = (total - cdf_min) as f64;

    let mut lut = [0_f64; PIXEL_VALUES_COUNT];
    for (lut_value, bin) in lut.iter_mut().zip(cdf.iter()) {
        let scaled = (*bin as f64 - cdf_min as f64) / denominator * 255.0;
        *lut_value = scaled.round().max(0.0).min(255.0);
    }

    Ok(lut)
}


#[cfg(test)]
mod tests {
    use fltk::enums::ColorDepth;

    use super::{equalize_hist, rgb_to_gray};
    use crate::img::{histogram::Histogram, Img, ImgChannel, ImgLayer, Matrix2D};

    fn rgb_img_with_values(w: usize, h: usize, r: &[f64], g: &[f64], b: &[f64]) -> Img {
        let fill = |values: &[f64], channel: ImgChannel| {
            assert_eq!(values.len(), w * h);
            let mut mat = Matrix2D::empty_with_size(w, h);
            for (pix_num, value) in values.iter().enumerate() {
                mat[pix_num] = *value;
            }
            ImgLayer::new(mat, channel)
        };

        let layers = vec![
            fill(r, ImgChannel::R),
            fill(g, ImgChannel::G),
            fill(b, ImgChannel::B),
        ];

        Img::new(w, h, layers, ColorDepth::Rgb8)
    }

    fn gray_img_with_values(w: usize, h: usize, values: &[f64]) -> Img {
        rgb_img_with_values(w, h, values, values, values)
    }

    fn layer_values(img: &Img, layer_num: usize) -> Vec<f64> {
        img.layer(layer_num).matrix().pixels().clone()
    }

    #[test]
    fn gray_channels_are_equal() {
        let img = rgb_img_with_values(2, 2,
            &[10.0, 0.0, 255.0, 77.0],
            &[200.0, 0.0, 255.0, 144.0],
            &[30.0, 0.0, 255.0, 12.0]);

        let gray = rgb_to_gray(&img);

        assert_eq!(gray.d(), 3);
        assert_eq!(layer_values(&gray, 0), layer_values(&gray, 1));
        assert_eq!(layer_values(&gray, 1), layer_values(&gray, 2));
    }

    #[test]
    fn gray_values_follow_luminance_formula() {
        let img = rgb_img_with_values(1, 1, &[10.0], &[200.0], &[30.0]);

        let gray = rgb_to_gray(&img);

        // 0.2125 * 10 + 0.7154 * 200 + 0.0721 * 30 = 147.368 -> 147
        assert_eq!(gray.layer(0)[0_usize], 147.0);
    }

    #[test]
    fn gray_rounds_half_away_from_zero() {
        // 0.2125 * 2 + 0.7154 * 0 + 0.0721 * 100 = 7.635 -> 8
        let img = rgb_img_with_values(1, 1, &[2.0], &[0.0], &[100.0]);

        let gray = rgb_to_gray(&img);

        assert_eq!(gray.layer(0)[0_usize], 8.0);
    }

    #[test]
    fn gray_does_not_touch_the_input() {
        let img = rgb_img_with_values(1, 2, &[10.0, 20.0], &[30.0, 40.0], &[50.0, 60.0]);
        let before = layer_values(&img, 0);

        let _gray = rgb_to_gray(&img);

        assert_eq!(layer_values(&img, 0), before);
    }

    #[test]
    fn equalize_of_bimodal_extremes_changes_nothing() {
        let img = gray_img_with_values(2, 2, &[0.0, 0.0, 255.0, 255.0]);

        let res = equalize_hist(&img).unwrap();

        assert_eq!(layer_values(&res, 0), vec![0.0, 0.0, 255.0, 255.0]);
        assert_eq!(layer_values(&res, 1), vec![0.0, 0.0, 255.0, 255.0]);
        assert_eq!(layer_values(&res, 2), vec![0.0, 0.0, 255.0, 255.0]);
    }

    #[test]
    fn equalize_stretches_narrow_range() {
        let img = gray_img_with_values(2, 2, &[100.0, 100.0, 101.0, 102.0]);

        let res = equalize_hist(&img).unwrap();

        // cdf = [2, 3, 4], cdf_min = 2, total = 4
        assert_eq!(layer_values(&res, 0), vec![0.0, 0.0, 128.0, 255.0]);
    }

    #[test]
    fn equalize_of_flat_image_returns_copy() {
        let img = gray_img_with_values(2, 2, &[128.0, 128.0, 128.0, 128.0]);

        let res = equalize_hist(&img).unwrap();

        assert_eq!(layer_values(&res, 0), vec![128.0, 128.0, 128.0, 128.0]);
    }

    #[test]
    fn equalize_of_single_pixel_returns_copy() {
        let img = gray_img_with_values(1, 1, &[200.0]);

        let res = equalize_hist(&img).unwrap();

        assert_eq!(layer_values(&res, 0), vec![200.0]);
    }

    #[test]
    fn equalize_does_not_touch_the_input() {
        let img = gray_img_with_values(2, 2, &[10.0, 60.0, 110.0, 160.0]);
        let before = layer_values(&img, 0);

        let _res = equalize_hist(&img).unwrap();

        assert_eq!(layer_values(&img, 0), before);
    }

    #[test]
    fn repeated_equalize_does_not_shrink_spread() {
        let img = gray_img_with_values(2, 2, &[10.0, 60.0, 110.0, 160.0]);

        let once = equalize_hist(&img).unwrap();
        let twice = equalize_hist(&once).unwrap();

        let spread = |img: &Img| {
            Histogram::count_layer(img.layer(0).matrix())
                .unwrap()
                .statistics()
                .std_dev
        };

        assert!(spread(&twice) >= spread(&once));
    }
}
